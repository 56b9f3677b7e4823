//! Decision engines for an interview-practice tool: a resume/domain
//! relevance scorer that gates session entry, and an attention & integrity
//! monitor that watches facial-landmark frames and page-visibility events
//! during a live session.
//!
//! Both engines operate on noisy, untrusted input and tolerate it by design
//! (capped keyword weights, coverage normalization, hysteresis) instead of
//! naive boolean checks. The host owns frame delivery, PDF extraction, and
//! all UI; this crate owns only the judgment calls.

pub mod attention;
pub mod geometry;
pub mod matching;
pub mod session;
pub mod visibility;

pub use attention::{
    AttentionConfig, AttentionMonitor, AttentionStatus, AttentionTransition, FrameObservation,
    LandmarkFrame,
};
pub use geometry::Point;
pub use matching::{
    decide, score_domains, supported_domains, DomainKeyword, DomainProfile, MatchConfig,
    MatchDecision, RejectionReason, ScoreResult,
};
pub use session::{
    MonitorController, MonitorEvent, MonitorInput, ProctorSession, SessionSnapshot,
};
pub use visibility::VisibilityMonitor;
