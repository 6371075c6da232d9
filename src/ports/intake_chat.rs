//! Intake Chat Port - Interface for the streaming chat collaborator.
//!
//! During problem intake an external service streams back a guided
//! response to the raw problem text. The engine only consumes the
//! message parts; stream completion is what triggers stage completion.

use async_trait::async_trait;
use futures::Stream;
use serde::{Deserialize, Serialize};
use std::pin::Pin;

use crate::domain::foundation::SessionId;

/// Errors from the chat collaborator.
#[derive(Debug, thiserror::Error)]
pub enum ChatError {
    #[error("Chat service returned status {status}: {body}")]
    ServiceError { status: u16, body: String },

    #[error("Chat stream interrupted: {0}")]
    StreamInterrupted(String),

    #[error("Failed to reach chat service: {0}")]
    Transport(String),
}

/// Which phase of the sprint the chat call belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum IntakePhase {
    ProblemIntake,
    DiagnosticInterview,
}

/// One streamed fragment of the chat response.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MessagePart {
    pub content: String,
}

/// Boxed stream of message parts.
pub type MessageStream = Pin<Box<dyn Stream<Item = Result<MessagePart, ChatError>> + Send>>;

/// Port for the streaming intake collaborator.
#[async_trait]
pub trait IntakeChat: Send + Sync {
    /// Starts a streamed response to the problem text. Parts arrive in
    /// order; the stream ending without error means completion.
    async fn stream_intake(
        &self,
        problem_text: &str,
        session_id: SessionId,
        phase: IntakePhase,
    ) -> Result<MessageStream, ChatError>;
}
