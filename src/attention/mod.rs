pub mod config;
pub mod landmarks;
pub mod state;

pub use config::AttentionConfig;
pub use landmarks::{FrameObservation, LandmarkFrame, LANDMARK_COUNT};
pub use state::{AttentionMonitor, AttentionStatus, AttentionTransition};
