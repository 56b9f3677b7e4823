use serde::{Deserialize, Serialize};

/// A keyword phrase with its evidence weight. Immutable once loaded.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DomainKeyword {
    pub term: String,
    pub weight: u32,
}

/// A supported interview domain and its weighted keyword list.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DomainProfile {
    pub name: String,
    pub keywords: Vec<DomainKeyword>,
}

impl DomainProfile {
    pub fn new(name: impl Into<String>, keywords: Vec<DomainKeyword>) -> Self {
        Self {
            name: name.into(),
            keywords,
        }
    }

    /// The built-in domain table. Loaded once at process start; not mutated
    /// at runtime.
    pub fn builtin() -> Vec<DomainProfile> {
        vec![
            DomainProfile::new(
                "Artificial Intelligence",
                vec![
                    kw("ai", 3),
                    kw("artificial intelligence", 5),
                    kw("machine learning", 4),
                    kw("ml", 3),
                    kw("deep learning", 4),
                    kw("neural network", 4),
                    kw("nlp", 3),
                    kw("natural language processing", 4),
                    kw("tensorflow", 4),
                    kw("pytorch", 4),
                    kw("data science", 4),
                    kw("data analysis", 4),
                ],
            ),
            DomainProfile::new(
                "Chartered Accountant",
                vec![
                    kw("ca", 3),
                    kw("chartered accountant", 5),
                    kw("accountant", 4),
                    kw("accounting", 4),
                    kw("audit", 4),
                    kw("finance", 3),
                    kw("taxation", 4),
                    kw("financial", 3),
                    kw("balance sheet", 4),
                    kw("ledger", 3),
                    kw("tax", 3),
                    kw("icai", 5),
                ],
            ),
            DomainProfile::new(
                "Sales Executive",
                vec![
                    kw("sales", 5),
                    kw("marketing", 3),
                    kw("business development", 4),
                    kw("account manager", 4),
                    kw("client", 2),
                    kw("customer", 2),
                    kw("revenue", 3),
                    kw("target", 3),
                    kw("quota", 4),
                    kw("conversion", 3),
                ],
            ),
            DomainProfile::new(
                "Data analytics",
                vec![
                    kw("analytics", 5),
                    kw("data analysis", 5),
                    kw("visualization", 4),
                    kw("tableau", 4),
                    kw("power bi", 4),
                    kw("sql", 3),
                    kw("excel", 2),
                    kw("reporting", 3),
                    kw("dashboard", 3),
                    kw("metrics", 3),
                ],
            ),
            DomainProfile::new(
                "Web Development",
                vec![
                    kw("web", 2),
                    kw("frontend", 4),
                    kw("backend", 4),
                    kw("fullstack", 5),
                    kw("html", 3),
                    kw("css", 3),
                    kw("javascript", 4),
                    kw("react", 4),
                    kw("angular", 4),
                    kw("node", 4),
                    kw("responsive", 3),
                    kw("api", 3),
                ],
            ),
            DomainProfile::new(
                "Data Science",
                vec![
                    kw("data science", 5),
                    kw("statistics", 3),
                    kw("python", 3),
                    kw("r", 3),
                    kw("machine learning", 4),
                    kw("predictive", 3),
                    kw("modeling", 3),
                    kw("pandas", 4),
                    kw("scikit-learn", 4),
                    kw("data mining", 4),
                ],
            ),
            DomainProfile::new(
                "Cybersecurity",
                vec![
                    kw("security", 3),
                    kw("cyber", 4),
                    kw("penetration testing", 5),
                    kw("ethical hacking", 5),
                    kw("network security", 4),
                    kw("firewall", 3),
                    kw("encryption", 3),
                    kw("vulnerability", 4),
                    kw("threat", 3),
                    kw("authentication", 3),
                    kw("infosec", 4),
                ],
            ),
        ]
    }
}

/// Domain names offered by the intake UI, in table order.
pub fn supported_domains(profiles: &[DomainProfile]) -> Vec<&str> {
    profiles.iter().map(|p| p.name.as_str()).collect()
}

fn kw(term: &str, weight: u32) -> DomainKeyword {
    DomainKeyword {
        term: term.to_string(),
        weight,
    }
}
