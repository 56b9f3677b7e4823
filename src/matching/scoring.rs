use std::collections::BTreeMap;

use log::debug;
use regex::RegexBuilder;
use serde::{Deserialize, Serialize};

use super::config::MatchConfig;
use super::profiles::DomainProfile;

/// Per-domain score triple. Recomputed whenever the resume text changes;
/// never persisted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreResult {
    pub raw_score: u32,
    /// Fraction of the domain's keyword list found in the text, in [0, 1].
    pub coverage: f64,
    /// Raw score scaled by the coverage blend; the value compared across
    /// domains.
    pub normalized_score: f64,
}

/// Score resume text against every domain profile.
///
/// Keywords match whole words only, case-insensitively; each keyword's
/// contribution is capped at `weight * occurrence_cap`. Empty text yields an
/// empty mapping rather than an error. Pure and deterministic: the returned
/// `BTreeMap` iterates lexicographically by domain name, which fixes the
/// tie-break order downstream.
pub fn score_domains(
    resume_text: &str,
    profiles: &[DomainProfile],
    config: &MatchConfig,
) -> BTreeMap<String, ScoreResult> {
    let mut scores = BTreeMap::new();
    if resume_text.trim().is_empty() {
        return scores;
    }

    let text = resume_text.to_lowercase();

    for profile in profiles {
        let mut raw_score: u32 = 0;
        let mut matched_keywords: usize = 0;

        for keyword in &profile.keywords {
            let occurrences = count_occurrences(&text, &keyword.term);
            if occurrences > 0 {
                raw_score += keyword.weight * occurrences.min(config.occurrence_cap);
                matched_keywords += 1;
            }
        }

        let coverage = if profile.keywords.is_empty() {
            0.0
        } else {
            matched_keywords as f64 / profile.keywords.len() as f64
        };
        let normalized_score =
            raw_score as f64 * (config.coverage_floor + config.coverage_gain * coverage);

        debug!(
            "domain '{}': raw={} coverage={:.2} normalized={:.1}",
            profile.name, raw_score, coverage, normalized_score
        );

        scores.insert(
            profile.name.clone(),
            ScoreResult {
                raw_score,
                coverage,
                normalized_score,
            },
        );
    }

    scores
}

/// Count whole-word occurrences of a keyword phrase. Word-boundary anchored
/// so "ai" never matches inside "maintain".
fn count_occurrences(text: &str, term: &str) -> u32 {
    let pattern = format!(r"\b{}\b", regex::escape(term));
    match RegexBuilder::new(&pattern).case_insensitive(true).build() {
        Ok(re) => re.find_iter(text).count() as u32,
        // An unbuildable pattern counts as no matches; scoring stays total.
        Err(_) => 0,
    }
}
