pub mod controller;

use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

use crate::attention::{
    AttentionConfig, AttentionMonitor, AttentionStatus, AttentionTransition, FrameObservation,
};
use crate::visibility::VisibilityMonitor;

pub use controller::{MonitorController, MonitorEvent, MonitorInput};

/// Monitoring state for one candidate session. Each session gets its own
/// arena so concurrent sessions never share counters; everything here is
/// discarded at session end.
#[derive(Debug, Clone)]
pub struct ProctorSession {
    id: String,
    started_at: DateTime<Utc>,
    attention: AttentionMonitor,
    visibility: VisibilityMonitor,
}

/// Point-in-time view consumed by the presentation layer to drive UI gating
/// and warnings.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionSnapshot {
    pub session_id: String,
    pub started_at: DateTime<Utc>,
    pub attention_status: AttentionStatus,
    pub looking_away: bool,
    pub left_tab: bool,
    pub consecutive_bad_frames: u32,
    pub consecutive_good_frames: u32,
}

impl ProctorSession {
    pub fn new(config: AttentionConfig) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            started_at: Utc::now(),
            attention: AttentionMonitor::new(config),
            visibility: VisibilityMonitor::new(),
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn started_at(&self) -> DateTime<Utc> {
        self.started_at
    }

    /// Feed one frame observation through the attention state machine.
    pub fn observe_frame(&mut self, observation: &FrameObservation) -> Option<AttentionTransition> {
        self.attention.observe(observation)
    }

    /// Feed a page-visibility transition. Returns true when the left-tab
    /// flag newly latches.
    pub fn record_visibility(&mut self, hidden: bool) -> bool {
        self.visibility.record_visibility(hidden)
    }

    /// Candidate acknowledged the look-away warning.
    pub fn dismiss_look_away_warning(&mut self) {
        self.attention.dismiss();
    }

    /// Candidate acknowledged the tab-switch warning.
    pub fn dismiss_tab_switch_warning(&mut self) {
        self.visibility.dismiss();
    }

    pub fn snapshot(&self) -> SessionSnapshot {
        SessionSnapshot {
            session_id: self.id.clone(),
            started_at: self.started_at,
            attention_status: self.attention.status(),
            looking_away: self.attention.looking_away(),
            left_tab: self.visibility.left_tab_at_least_once(),
            consecutive_bad_frames: self.attention.consecutive_bad_frames(),
            consecutive_good_frames: self.attention.consecutive_good_frames(),
        }
    }
}

impl Default for ProctorSession {
    fn default() -> Self {
        Self::new(AttentionConfig::default())
    }
}
