//! Typed registry of the fixed diagnostic interview questions.
//!
//! The interview asks a fixed set of questions keyed by stable string
//! ids. Downstream logic (factor extraction, brief generation) refers to
//! answers through the `keys` constants rather than bare literals.

use serde::{Deserialize, Serialize};

/// Well-known question ids.
pub mod keys {
    pub const REVERSIBILITY: &str = "reversibility";
    pub const CONSEQUENCES: &str = "consequences";
    pub const INFORMATION_QUALITY: &str = "information-quality";
    pub const TIMEFRAME: &str = "timeframe";
    pub const STAKEHOLDERS: &str = "stakeholders";
    pub const CONTEXT: &str = "context";
    pub const STAKES: &str = "stakes";
    pub const CONSTRAINTS: &str = "constraints";
}

/// The kind of answer a question expects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AnswerKind {
    Text,
    Number,
    Flag,
    List,
}

/// One entry in the interview question registry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Question {
    pub id: &'static str,
    pub prompt: &'static str,
    pub kind: AnswerKind,
}

const QUESTIONS: &[Question] = &[
    Question {
        id: keys::REVERSIBILITY,
        prompt: "How easily could this decision be reversed later?",
        kind: AnswerKind::Text,
    },
    Question {
        id: keys::CONSEQUENCES,
        prompt: "How severe are the consequences if this goes wrong?",
        kind: AnswerKind::Text,
    },
    Question {
        id: keys::INFORMATION_QUALITY,
        prompt: "On a scale of 1-10, how good is the information you have?",
        kind: AnswerKind::Number,
    },
    Question {
        id: keys::TIMEFRAME,
        prompt: "When does this decision need to be made?",
        kind: AnswerKind::Text,
    },
    Question {
        id: keys::STAKEHOLDERS,
        prompt: "Who is affected by this decision?",
        kind: AnswerKind::List,
    },
    Question {
        id: keys::CONTEXT,
        prompt: "What background should someone know to understand this decision?",
        kind: AnswerKind::Text,
    },
    Question {
        id: keys::STAKES,
        prompt: "What is really at stake here?",
        kind: AnswerKind::Text,
    },
    Question {
        id: keys::CONSTRAINTS,
        prompt: "What constraints limit your options?",
        kind: AnswerKind::Text,
    },
];

/// Returns all interview questions in presentation order.
pub fn questions() -> &'static [Question] {
    QUESTIONS
}

/// Looks up a question by id.
pub fn question(id: &str) -> Option<&'static Question> {
    QUESTIONS.iter().find(|q| q.id == id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn registry_has_unique_ids() {
        let mut ids: Vec<&str> = questions().iter().map(|q| q.id).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), questions().len());
    }

    #[test]
    fn lookup_by_id_finds_question() {
        let q = question(keys::TIMEFRAME).unwrap();
        assert_eq!(q.kind, AnswerKind::Text);
        assert!(q.prompt.contains("decision"));
    }

    #[test]
    fn lookup_unknown_id_returns_none() {
        assert!(question("no-such-question").is_none());
    }

    #[test]
    fn classification_inputs_are_registered() {
        for id in [
            keys::REVERSIBILITY,
            keys::CONSEQUENCES,
            keys::INFORMATION_QUALITY,
            keys::TIMEFRAME,
        ] {
            assert!(question(id).is_some(), "missing question: {}", id);
        }
    }

    #[test]
    fn information_quality_expects_a_number() {
        assert_eq!(
            question(keys::INFORMATION_QUALITY).unwrap().kind,
            AnswerKind::Number
        );
    }
}
