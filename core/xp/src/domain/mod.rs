//! xp 固有のドメイン型（型と不変条件）

pub mod command;
pub mod config;
pub mod course;
pub mod credentials;
pub mod error;
pub mod language;
pub mod outcome;
pub mod session;
pub mod strategy;

pub use command::XpCommand;
pub use config::{ApiSettings, DelayWindow, PacePreset, RewardTargets, RunConfig};
pub use course::{extract_skill_id, CourseTree, SkillId};
pub use credentials::{AuthToken, Credentials, UserId};
pub use error::{InitializationError, RewardRejectionError, SessionCreationError};
pub use language::LanguagePair;
pub use outcome::{IterationOutcome, RunSummary};
pub use session::{
    CompletionSubmission, CreatedSession, PathLevelSpecifics, RewardResult, RewardTarget,
    SessionId, SessionRequest, SyntheticTelemetry,
};
pub use strategy::{resolve_strategy, SessionStrategy, StrategyPreference};
