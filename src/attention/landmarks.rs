use crate::geometry::{distance, safe_ratio, Point};

use super::config::AttentionConfig;

// Index mapping for the MediaPipe FaceMesh model with iris refinement
// enabled. This is a versioned external contract: a different detector (or
// the same detector without refined landmarks) needs its own table, validated
// at integration time.
pub const LEFT_EYE_OUTER_CORNER: usize = 33;
pub const LEFT_EYE_INNER_CORNER: usize = 133;
pub const LEFT_EYE_UPPER_LID: usize = 159;
pub const LEFT_EYE_LOWER_LID: usize = 145;
pub const RIGHT_EYE_INNER_CORNER: usize = 263;
pub const RIGHT_EYE_OUTER_CORNER: usize = 362;
pub const RIGHT_EYE_UPPER_LID: usize = 386;
pub const RIGHT_EYE_LOWER_LID: usize = 374;
pub const LEFT_IRIS_CENTER: usize = 468;
pub const RIGHT_IRIS_CENTER: usize = 473;

/// Landmarks produced per frame by the detector when iris refinement is on.
pub const LANDMARK_COUNT: usize = 478;

/// One camera frame's worth of detector output. Consumed and discarded;
/// never retained across frames.
#[derive(Debug, Clone)]
pub struct LandmarkFrame {
    points: Vec<Point>,
}

impl LandmarkFrame {
    pub fn new(points: Vec<Point>) -> Self {
        Self { points }
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    fn get(&self, index: usize) -> Option<Point> {
        self.points.get(index).copied()
    }
}

/// Per-frame input to the attention state machine: either a detected face
/// with its landmarks, or an explicit no-face signal.
#[derive(Debug, Clone)]
pub enum FrameObservation {
    Face(LandmarkFrame),
    NoFace,
}

/// Both irises sit roughly centered between their eye corners. The ratio is
/// mirrored for the right eye so both read 0.5 when looking dead ahead.
/// Malformed frames (missing indices, collapsed corners) fail the gate.
pub(crate) fn gaze_centered(frame: &LandmarkFrame, config: &AttentionConfig) -> bool {
    let Some(left_iris) = frame.get(LEFT_IRIS_CENTER) else {
        return false;
    };
    let Some(right_iris) = frame.get(RIGHT_IRIS_CENTER) else {
        return false;
    };
    let Some(left_outer) = frame.get(LEFT_EYE_OUTER_CORNER) else {
        return false;
    };
    let Some(left_inner) = frame.get(LEFT_EYE_INNER_CORNER) else {
        return false;
    };
    let Some(right_inner) = frame.get(RIGHT_EYE_INNER_CORNER) else {
        return false;
    };
    let Some(right_outer) = frame.get(RIGHT_EYE_OUTER_CORNER) else {
        return false;
    };

    let Some(left_ratio) = safe_ratio(left_iris.x - left_outer.x, left_inner.x - left_outer.x)
    else {
        return false;
    };
    let Some(right_ratio) = safe_ratio(right_inner.x - right_iris.x, right_inner.x - right_outer.x)
    else {
        return false;
    };

    let centered =
        |ratio: f64| ratio > config.gaze_center_min && ratio < config.gaze_center_max;
    centered(left_ratio) && centered(right_ratio)
}

/// Both eyes are open: eyelid gap over corner width exceeds the minimum
/// eye aspect ratio for each eye.
pub(crate) fn eyes_open(frame: &LandmarkFrame, config: &AttentionConfig) -> bool {
    let Some(left_ear) = eye_aspect_ratio(
        frame,
        LEFT_EYE_UPPER_LID,
        LEFT_EYE_LOWER_LID,
        LEFT_EYE_OUTER_CORNER,
        LEFT_EYE_INNER_CORNER,
    ) else {
        return false;
    };
    let Some(right_ear) = eye_aspect_ratio(
        frame,
        RIGHT_EYE_UPPER_LID,
        RIGHT_EYE_LOWER_LID,
        RIGHT_EYE_OUTER_CORNER,
        RIGHT_EYE_INNER_CORNER,
    ) else {
        return false;
    };

    left_ear > config.min_eye_aspect_ratio && right_ear > config.min_eye_aspect_ratio
}

fn eye_aspect_ratio(
    frame: &LandmarkFrame,
    upper_lid: usize,
    lower_lid: usize,
    outer_corner: usize,
    inner_corner: usize,
) -> Option<f64> {
    let upper = frame.get(upper_lid)?;
    let lower = frame.get(lower_lid)?;
    let outer = frame.get(outer_corner)?;
    let inner = frame.get(inner_corner)?;

    safe_ratio(distance(upper, lower), distance(outer, inner))
}

/// Combined per-frame judgment: good iff gaze is centered and both eyes are
/// open.
pub(crate) fn frame_is_good(frame: &LandmarkFrame, config: &AttentionConfig) -> bool {
    gaze_centered(frame, config) && eyes_open(frame, config)
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;

    fn attentive_points() -> Vec<Point> {
        let mut points = vec![Point::new(0.0, 0.0); LANDMARK_COUNT];

        // Left eye: corners 0.1 apart, iris dead center, lids 0.03 apart
        // (EAR 0.3).
        points[LEFT_EYE_OUTER_CORNER] = Point::new(0.30, 0.50);
        points[LEFT_EYE_INNER_CORNER] = Point::new(0.40, 0.50);
        points[LEFT_IRIS_CENTER] = Point::new(0.35, 0.50);
        points[LEFT_EYE_UPPER_LID] = Point::new(0.35, 0.485);
        points[LEFT_EYE_LOWER_LID] = Point::new(0.35, 0.515);

        // Right eye mirrored across the face midline.
        points[RIGHT_EYE_INNER_CORNER] = Point::new(0.60, 0.50);
        points[RIGHT_EYE_OUTER_CORNER] = Point::new(0.70, 0.50);
        points[RIGHT_IRIS_CENTER] = Point::new(0.65, 0.50);
        points[RIGHT_EYE_UPPER_LID] = Point::new(0.65, 0.485);
        points[RIGHT_EYE_LOWER_LID] = Point::new(0.65, 0.515);

        points
    }

    /// Frame with centered gaze and open eyes at every relevant index.
    pub(crate) fn attentive_frame() -> LandmarkFrame {
        LandmarkFrame::new(attentive_points())
    }

    fn with_point(mut frame_points: Vec<Point>, index: usize, point: Point) -> LandmarkFrame {
        frame_points[index] = point;
        LandmarkFrame::new(frame_points)
    }

    #[test]
    fn attentive_frame_passes_both_gates() {
        let config = AttentionConfig::default();
        let frame = attentive_frame();
        assert!(gaze_centered(&frame, &config));
        assert!(eyes_open(&frame, &config));
        assert!(frame_is_good(&frame, &config));
    }

    #[test]
    fn off_center_iris_fails_gaze_gate() {
        let config = AttentionConfig::default();
        // Iris ratio 0.2: well outside the centered band.
        let frame = with_point(attentive_points(), LEFT_IRIS_CENTER, Point::new(0.32, 0.50));
        assert!(!gaze_centered(&frame, &config));
        assert!(!frame_is_good(&frame, &config));
    }

    #[test]
    fn closed_eyes_fail_open_gate() {
        let config = AttentionConfig::default();
        let mut frame_points = attentive_points();
        frame_points[LEFT_EYE_UPPER_LID] = Point::new(0.35, 0.50);
        frame_points[LEFT_EYE_LOWER_LID] = Point::new(0.35, 0.50);
        let frame = LandmarkFrame::new(frame_points);
        assert!(!eyes_open(&frame, &config));
        assert!(!frame_is_good(&frame, &config));
    }

    #[test]
    fn collapsed_eye_corners_are_a_bad_frame_not_a_fault() {
        let config = AttentionConfig::default();
        let mut frame_points = attentive_points();
        // Zero-width eye: corner distance degenerates to zero.
        frame_points[LEFT_EYE_INNER_CORNER] = frame_points[LEFT_EYE_OUTER_CORNER];
        let frame = LandmarkFrame::new(frame_points);
        assert!(!frame_is_good(&frame, &config));
    }

    #[test]
    fn truncated_frame_is_a_bad_frame() {
        let config = AttentionConfig::default();
        // Shorter than the iris indices: every gate fails cleanly.
        let frame = LandmarkFrame::new(vec![Point::new(0.5, 0.5); 100]);
        assert!(!frame_is_good(&frame, &config));
    }
}
