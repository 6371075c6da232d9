//! Flat serializable form of the engine state.

use serde::{Deserialize, Serialize};

use crate::domain::artifacts::{CommitmentMemo, ProblemBrief};
use crate::domain::classification::DecisionType;
use crate::domain::diagnostic::DiagnosticResponses;
use crate::domain::foundation::{SessionId, SprintStage, Timestamp};
use crate::domain::framework::Framework;

/// Everything durable about a sprint, as one flat record.
///
/// The persistence contract is round-trip fidelity: save then restore
/// reproduces an equivalent engine. Transient collaborator state
/// (recommendation results, intake transcript) is deliberately absent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SprintSnapshot {
    pub session_id: SessionId,
    pub created_at: Timestamp,
    pub completed: bool,
    pub current_stage: SprintStage,
    pub completed_stages: Vec<SprintStage>,
    #[serde(default)]
    pub skipped_stages: Vec<SprintStage>,
    pub problem_input: Option<String>,
    pub responses: DiagnosticResponses,
    pub decision_type: Option<DecisionType>,
    pub problem_brief: Option<ProblemBrief>,
    pub selected_frameworks: Vec<Framework>,
    pub commitment_memo: Option<CommitmentMemo>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::diagnostic::AnswerValue;

    fn sample() -> SprintSnapshot {
        let mut responses = DiagnosticResponses::new();
        responses.insert("timeframe", AnswerValue::from("This week"));
        SprintSnapshot {
            session_id: SessionId::new(),
            created_at: Timestamp::now(),
            completed: false,
            current_stage: SprintStage::DiagnosticInterview,
            completed_stages: vec![SprintStage::ProblemIntake],
            skipped_stages: vec![],
            problem_input: Some("Should we pivot?".to_string()),
            responses,
            decision_type: Some(DecisionType::Type2),
            problem_brief: None,
            selected_frameworks: vec![],
            commitment_memo: None,
        }
    }

    #[test]
    fn json_round_trip_preserves_all_fields() {
        let snapshot = sample();
        let json = serde_json::to_string(&snapshot).unwrap();
        let back: SprintSnapshot = serde_json::from_str(&json).unwrap();
        assert_eq!(back, snapshot);
    }

    #[test]
    fn stages_serialize_as_kebab_case_strings() {
        let json = serde_json::to_string(&sample()).unwrap();
        assert!(json.contains("\"diagnostic-interview\""));
        assert!(json.contains("\"problem-intake\""));
        assert!(json.contains("\"type-2\""));
    }

    #[test]
    fn skipped_stages_default_when_absent() {
        // Older persisted snapshots predate the skipped set.
        let mut value = serde_json::to_value(sample()).unwrap();
        value.as_object_mut().unwrap().remove("skipped_stages");
        let back: SprintSnapshot = serde_json::from_value(value).unwrap();
        assert!(back.skipped_stages.is_empty());
    }
}
