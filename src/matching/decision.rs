use std::cmp::Ordering;
use std::collections::BTreeMap;

use log::info;
use serde::{Deserialize, Serialize};

use super::config::MatchConfig;
use super::scoring::ScoreResult;

/// Why a declared domain was rejected. Callers phrase user guidance
/// differently for the two cases, so they must stay distinguishable.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub enum RejectionReason {
    /// No resume text, no scores, or the declared domain is unknown.
    InsufficientData,
    /// The resume scored too low for the declared domain, or clearly better
    /// for another one.
    DomainMismatch,
}

/// Outcome of validating the declared domain against the score table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchDecision {
    pub accepted: bool,
    pub best_domain: Option<String>,
    /// Up to `suggestion_count` alternatives, best first. Empty on
    /// acceptance and on insufficient data.
    pub suggested_domains: Vec<String>,
    pub reason: Option<RejectionReason>,
}

impl MatchDecision {
    fn insufficient_data() -> Self {
        Self {
            accepted: false,
            best_domain: None,
            suggested_domains: Vec::new(),
            reason: Some(RejectionReason::InsufficientData),
        }
    }
}

/// Validate the candidate's declared domain against the score table.
///
/// Pure and idempotent. The best domain is the one with the strictly highest
/// normalized score; since the table iterates lexicographically, ties go to
/// the lexicographically-first name. Acceptance requires the declared domain
/// to clear the minimum score and either be the best match or reach
/// `relative_threshold` of the best score.
pub fn decide(
    declared_domain: &str,
    scores: &BTreeMap<String, ScoreResult>,
    config: &MatchConfig,
) -> MatchDecision {
    if declared_domain.is_empty() || scores.is_empty() {
        return MatchDecision::insufficient_data();
    }
    let Some(declared) = scores.get(declared_domain) else {
        return MatchDecision::insufficient_data();
    };

    let mut best_domain: Option<&str> = None;
    let mut highest_score = 0.0_f64;
    for (name, result) in scores {
        if result.normalized_score > highest_score {
            highest_score = result.normalized_score;
            best_domain = Some(name.as_str());
        }
    }

    let accepted = declared.normalized_score >= config.minimum_score
        && (best_domain == Some(declared_domain)
            || declared.normalized_score >= highest_score * config.relative_threshold);

    if accepted {
        return MatchDecision {
            accepted: true,
            best_domain: best_domain.map(str::to_string),
            suggested_domains: Vec::new(),
            reason: None,
        };
    }

    let suggested_domains = top_domains(scores, config.suggestion_count);
    info!(
        "declared domain '{}' rejected (score {:.1} vs best {:.1}); suggesting {:?}",
        declared_domain, declared.normalized_score, highest_score, suggested_domains
    );

    MatchDecision {
        accepted: false,
        best_domain: best_domain.map(str::to_string),
        suggested_domains,
        reason: Some(RejectionReason::DomainMismatch),
    }
}

/// Top domains by normalized score, descending; equal scores keep
/// lexicographic order by name.
fn top_domains(scores: &BTreeMap<String, ScoreResult>, count: usize) -> Vec<String> {
    let mut ranked: Vec<(&String, &ScoreResult)> = scores.iter().collect();
    ranked.sort_by(|a, b| {
        b.1.normalized_score
            .partial_cmp(&a.1.normalized_score)
            .unwrap_or(Ordering::Equal)
            .then_with(|| a.0.cmp(b.0))
    });
    ranked
        .into_iter()
        .take(count)
        .map(|(name, _)| name.clone())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn score(raw: u32, coverage: f64, normalized: f64) -> ScoreResult {
        ScoreResult {
            raw_score: raw,
            coverage,
            normalized_score: normalized,
        }
    }

    fn table(entries: &[(&str, f64)]) -> BTreeMap<String, ScoreResult> {
        entries
            .iter()
            .map(|(name, normalized)| (name.to_string(), score(0, 0.5, *normalized)))
            .collect()
    }

    #[test]
    fn empty_inputs_reject_as_insufficient_data() {
        let config = MatchConfig::default();

        let decision = decide("", &BTreeMap::new(), &config);
        assert!(!decision.accepted);
        assert!(decision.suggested_domains.is_empty());
        assert_eq!(decision.reason, Some(RejectionReason::InsufficientData));

        let decision = decide("Data Science", &BTreeMap::new(), &config);
        assert_eq!(decision.reason, Some(RejectionReason::InsufficientData));
    }

    #[test]
    fn unknown_declared_domain_rejects_as_insufficient_data() {
        let scores = table(&[("Data Science", 40.0)]);
        let decision = decide("Basket Weaving", &scores, &MatchConfig::default());
        assert!(!decision.accepted);
        assert!(decision.suggested_domains.is_empty());
        assert_eq!(decision.reason, Some(RejectionReason::InsufficientData));
    }

    #[test]
    fn declared_domain_that_is_the_unique_best_is_accepted() {
        let scores = table(&[("A", 40.0), ("B", 10.0)]);
        let decision = decide("A", &scores, &MatchConfig::default());
        assert!(decision.accepted);
        assert_eq!(decision.best_domain.as_deref(), Some("A"));
        assert!(decision.suggested_domains.is_empty());
        assert_eq!(decision.reason, None);
    }

    #[test]
    fn declared_domain_below_relative_threshold_is_rejected_with_suggestions() {
        // B at 20 against best A at 40: 20 < 40 * 0.6.
        let scores = table(&[("A", 40.0), ("B", 20.0), ("C", 8.0)]);
        let decision = decide("B", &scores, &MatchConfig::default());
        assert!(!decision.accepted);
        assert_eq!(decision.reason, Some(RejectionReason::DomainMismatch));
        assert_eq!(decision.best_domain.as_deref(), Some("A"));
        assert_eq!(decision.suggested_domains, vec!["A", "B"]);
    }

    #[test]
    fn declared_domain_within_relative_threshold_is_accepted() {
        // 30 >= 40 * 0.6; close enough to the best match.
        let scores = table(&[("A", 40.0), ("B", 30.0)]);
        let decision = decide("B", &scores, &MatchConfig::default());
        assert!(decision.accepted);
        assert_eq!(decision.best_domain.as_deref(), Some("A"));
    }

    #[test]
    fn declared_domain_below_minimum_score_is_rejected_even_when_best() {
        let scores = table(&[("A", 4.0), ("B", 1.0)]);
        let decision = decide("A", &scores, &MatchConfig::default());
        assert!(!decision.accepted);
        assert_eq!(decision.reason, Some(RejectionReason::DomainMismatch));
    }

    #[test]
    fn tie_break_is_lexicographic() {
        let scores = table(&[("B", 40.0), ("A", 40.0), ("C", 5.0)]);
        let decision = decide("C", &scores, &MatchConfig::default());
        assert_eq!(decision.best_domain.as_deref(), Some("A"));
        assert_eq!(decision.suggested_domains, vec!["A", "B"]);
    }

    #[test]
    fn decision_is_idempotent() {
        let scores = table(&[("A", 40.0), ("B", 20.0)]);
        let config = MatchConfig::default();
        assert_eq!(decide("B", &scores, &config), decide("B", &scores, &config));
    }
}
