use log::info;
use serde::{Deserialize, Serialize};

use super::config::AttentionConfig;
use super::landmarks::{frame_is_good, FrameObservation};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub enum AttentionStatus {
    Focused,
    LookingAway,
}

impl Default for AttentionStatus {
    fn default() -> Self {
        AttentionStatus::Focused
    }
}

/// Emitted when the machine crosses a hysteresis threshold. Never emitted
/// redundantly: a 31st consecutive bad frame does not re-fire `LookedAway`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AttentionTransition {
    LookedAway,
    Refocused,
}

/// Debounced judgment of whether the candidate is looking at the camera.
///
/// Every observed frame advances exactly one of the two counters and resets
/// the other; the asymmetric thresholds (enter slow, leave fast) suppress
/// flapping from blinks and detector noise while still recovering quickly
/// once the candidate looks back.
#[derive(Debug, Clone)]
pub struct AttentionMonitor {
    config: AttentionConfig,
    consecutive_bad_frames: u32,
    consecutive_good_frames: u32,
    status: AttentionStatus,
}

impl AttentionMonitor {
    pub fn new(config: AttentionConfig) -> Self {
        Self {
            config,
            consecutive_bad_frames: 0,
            consecutive_good_frames: 0,
            status: AttentionStatus::Focused,
        }
    }

    pub fn status(&self) -> AttentionStatus {
        self.status
    }

    pub fn looking_away(&self) -> bool {
        self.status == AttentionStatus::LookingAway
    }

    pub fn consecutive_bad_frames(&self) -> u32 {
        self.consecutive_bad_frames
    }

    pub fn consecutive_good_frames(&self) -> u32 {
        self.consecutive_good_frames
    }

    /// Advance the machine by one frame. No face counts as a bad frame
    /// unconditionally; a detected face is judged by the gaze and eyes-open
    /// gates. Returns a transition only when the state actually changes.
    pub fn observe(&mut self, observation: &FrameObservation) -> Option<AttentionTransition> {
        let good = match observation {
            FrameObservation::NoFace => false,
            FrameObservation::Face(frame) => frame_is_good(frame, &self.config),
        };

        if good {
            self.consecutive_good_frames = self.consecutive_good_frames.saturating_add(1);
            self.consecutive_bad_frames = 0;
        } else {
            self.consecutive_bad_frames = self.consecutive_bad_frames.saturating_add(1);
            self.consecutive_good_frames = 0;
        }

        if self.consecutive_bad_frames >= self.config.bad_frame_threshold
            && self.status == AttentionStatus::Focused
        {
            self.status = AttentionStatus::LookingAway;
            info!(
                "attention lost after {} consecutive bad frames",
                self.consecutive_bad_frames
            );
            return Some(AttentionTransition::LookedAway);
        }

        if self.consecutive_good_frames >= self.config.good_frame_threshold
            && self.status == AttentionStatus::LookingAway
        {
            self.status = AttentionStatus::Focused;
            info!(
                "attention regained after {} consecutive good frames",
                self.consecutive_good_frames
            );
            return Some(AttentionTransition::Refocused);
        }

        None
    }

    /// User-acknowledged override: force both counters to zero and the
    /// status back to Focused regardless of recent frame history.
    pub fn dismiss(&mut self) {
        self.consecutive_bad_frames = 0;
        self.consecutive_good_frames = 0;
        self.status = AttentionStatus::Focused;
    }
}
