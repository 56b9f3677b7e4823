/// Thresholds for resume scoring and domain-match validation.
#[derive(Debug, Clone)]
pub struct MatchConfig {
    /// Minimum normalized score the declared domain needs to be credible at all
    pub minimum_score: f64,

    /// Declared domain must reach this fraction of the best domain's score
    /// when it is not itself the best match
    pub relative_threshold: f64,

    /// Occurrences of a single keyword counted toward the raw score, so
    /// keyword stuffing cannot dominate
    pub occurrence_cap: u32,

    /// Coverage blend: normalized = raw * (coverage_floor + coverage_gain * coverage)
    pub coverage_floor: f64,
    pub coverage_gain: f64,

    /// Alternative domains suggested on rejection
    pub suggestion_count: usize,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            minimum_score: 5.0,
            relative_threshold: 0.6,
            occurrence_cap: 3,
            coverage_floor: 0.7,
            coverage_gain: 0.3,
            suggestion_count: 2,
        }
    }
}
