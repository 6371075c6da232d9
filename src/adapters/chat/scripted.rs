//! Scripted intake chat.
//!
//! Streams a canned sequence of message parts. Used by tests and the
//! demo binary in place of the real streaming collaborator.

use async_trait::async_trait;
use futures::stream;

use crate::domain::foundation::SessionId;
use crate::ports::{ChatError, IntakeChat, IntakePhase, MessagePart, MessageStream};

/// Chat collaborator that replays a fixed script.
#[derive(Debug, Clone)]
pub struct ScriptedIntakeChat {
    parts: Vec<String>,
}

impl ScriptedIntakeChat {
    /// Creates a chat that streams the given parts in order.
    pub fn new(parts: Vec<String>) -> Self {
        Self { parts }
    }

    /// A short default acknowledgement script.
    pub fn with_default_script() -> Self {
        Self::new(vec![
            "Thanks for laying that out. ".to_string(),
            "Let's make this concrete with a few diagnostic questions ".to_string(),
            "before classifying the decision.".to_string(),
        ])
    }
}

#[async_trait]
impl IntakeChat for ScriptedIntakeChat {
    async fn stream_intake(
        &self,
        _problem_text: &str,
        _session_id: SessionId,
        _phase: IntakePhase,
    ) -> Result<MessageStream, ChatError> {
        let parts: Vec<Result<MessagePart, ChatError>> = self
            .parts
            .iter()
            .map(|content| Ok(MessagePart { content: content.clone() }))
            .collect();
        Ok(Box::pin(stream::iter(parts)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::StreamExt;

    #[tokio::test]
    async fn streams_parts_in_order() {
        let chat = ScriptedIntakeChat::new(vec!["a".to_string(), "b".to_string()]);
        let mut stream = chat
            .stream_intake("problem", SessionId::new(), IntakePhase::ProblemIntake)
            .await
            .unwrap();

        let mut collected = String::new();
        while let Some(part) = stream.next().await {
            collected.push_str(&part.unwrap().content);
        }
        assert_eq!(collected, "ab");
    }

    #[tokio::test]
    async fn empty_script_completes_immediately() {
        let chat = ScriptedIntakeChat::new(vec![]);
        let mut stream = chat
            .stream_intake("problem", SessionId::new(), IntakePhase::ProblemIntake)
            .await
            .unwrap();
        assert!(stream.next().await.is_none());
    }
}
