//! Shared domain primitives.
//!
//! Value objects used across the sprint engine: strongly-typed
//! identifiers, timestamps, error types, and the fixed stage sequence.

mod errors;
mod ids;
mod stage;
mod timestamp;

pub use errors::{DomainError, ErrorCode};
pub use ids::{FrameworkId, SessionId};
pub use stage::SprintStage;
pub use timestamp::Timestamp;
