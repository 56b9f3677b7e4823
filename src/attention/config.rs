/// Tunable thresholds for the attention state machine.
#[derive(Debug, Clone)]
pub struct AttentionConfig {
    /// Consecutive bad frames before flagging LookingAway (~3s at 10 fps)
    pub bad_frame_threshold: u32,

    /// Consecutive good frames before recovering to Focused; lower than the
    /// bad threshold so transient blinks recover quickly
    pub good_frame_threshold: u32,

    /// Iris position band within the eye corners that counts as centered gaze
    pub gaze_center_min: f64,
    pub gaze_center_max: f64,

    /// Minimum eye aspect ratio for an eye to count as open
    pub min_eye_aspect_ratio: f64,
}

impl Default for AttentionConfig {
    fn default() -> Self {
        Self {
            bad_frame_threshold: 30,
            good_frame_threshold: 15,
            gaze_center_min: 0.4,
            gaze_center_max: 0.6,
            min_eye_aspect_ratio: 0.25,
        }
    }
}
