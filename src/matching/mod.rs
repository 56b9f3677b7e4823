pub mod config;
pub mod decision;
pub mod profiles;
pub mod scoring;

pub use config::MatchConfig;
pub use decision::{decide, MatchDecision, RejectionReason};
pub use profiles::{supported_domains, DomainKeyword, DomainProfile};
pub use scoring::{score_domains, ScoreResult};
