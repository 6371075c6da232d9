//! Diagnostic answer values and the response map.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// One diagnostic answer.
///
/// Answers arrive from the interview surface as free-form values; the
/// tagged variant lets factor extraction pattern-match exhaustively
/// instead of probing runtime types.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AnswerValue {
    Text(String),
    Number(f64),
    Flag(bool),
    List(Vec<String>),
}

impl AnswerValue {
    /// Returns the answer as text, if it is textual.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            AnswerValue::Text(s) => Some(s),
            _ => None,
        }
    }

    /// Returns the answer as a number, if it is numeric.
    pub fn as_number(&self) -> Option<f64> {
        match self {
            AnswerValue::Number(n) => Some(*n),
            _ => None,
        }
    }

    /// Returns a count carried by the answer: a rounded number, or the
    /// length of a list. Used for the stakeholder-count threshold.
    pub fn count_hint(&self) -> Option<usize> {
        match self {
            AnswerValue::Number(n) if *n >= 0.0 => Some(n.round() as usize),
            AnswerValue::List(items) => Some(items.len()),
            _ => None,
        }
    }

    /// Renders the answer as narrative text for artifact generation.
    pub fn to_narrative(&self) -> String {
        match self {
            AnswerValue::Text(s) => s.clone(),
            AnswerValue::Number(n) => n.to_string(),
            AnswerValue::Flag(b) => if *b { "Yes" } else { "No" }.to_string(),
            AnswerValue::List(items) => items.join(", "),
        }
    }
}

impl From<&str> for AnswerValue {
    fn from(s: &str) -> Self {
        AnswerValue::Text(s.to_string())
    }
}

impl From<f64> for AnswerValue {
    fn from(n: f64) -> Self {
        AnswerValue::Number(n)
    }
}

/// The diagnostic response map: question id → answer.
///
/// Keys are unique, ordering carries no meaning, and mutation is a
/// single-key upsert. Cleared wholesale only by a full session reset.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DiagnosticResponses(HashMap<String, AnswerValue>);

impl DiagnosticResponses {
    /// Creates an empty response map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts or overwrites the answer for one question.
    pub fn insert(&mut self, question_id: impl Into<String>, answer: AnswerValue) {
        self.0.insert(question_id.into(), answer);
    }

    /// Returns the answer for a question, if present.
    pub fn get(&self, question_id: &str) -> Option<&AnswerValue> {
        self.0.get(question_id)
    }

    /// Returns the textual answer for a question, if present and textual.
    pub fn text(&self, question_id: &str) -> Option<&str> {
        self.get(question_id).and_then(AnswerValue::as_text)
    }

    /// Returns true if no answers have been recorded.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns the number of answered questions.
    pub fn len(&self) -> usize {
        self.0.len()
    }
}
