use serde::{Deserialize, Serialize};

/// A 2-D landmark point in normalized image coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Euclidean distance between two points.
pub fn distance(a: Point, b: Point) -> f64 {
    ((a.x - b.x).powi(2) + (a.y - b.y).powi(2)).sqrt()
}

/// Denominators below this magnitude are treated as degenerate.
const MIN_DENOMINATOR: f64 = 1e-9;

/// Ratio of numerator to denominator, or `None` when the denominator is
/// degenerate (collapsed eye geometry must read as a bad frame, not a fault).
pub fn safe_ratio(numerator: f64, denominator: f64) -> Option<f64> {
    if denominator.abs() < MIN_DENOMINATOR {
        None
    } else {
        Some(numerator / denominator)
    }
}
