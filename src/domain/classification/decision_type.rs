//! The binary decision type.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Classification of a decision's risk profile.
///
/// Type 1 decisions are reversible; speed beats analysis. Type 2
/// decisions are irreversible or high-consequence; deliberation wins.
/// The computed type is advisory: a user override becomes authoritative
/// until diagnostics are re-run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DecisionType {
    #[serde(rename = "type-1")]
    Type1,
    #[serde(rename = "type-2")]
    Type2,
}

impl DecisionType {
    /// Returns the display name.
    pub fn display_name(&self) -> &'static str {
        match self {
            DecisionType::Type1 => "Type 1 (reversible)",
            DecisionType::Type2 => "Type 2 (irreversible)",
        }
    }

    /// One-sentence rationale used in generated documents.
    pub fn rationale(&self) -> &'static str {
        match self {
            DecisionType::Type1 => {
                "This is a reversible decision, so favor speed over exhaustive analysis."
            }
            DecisionType::Type2 => {
                "This is an irreversible or high-consequence decision, so favor deliberation."
            }
        }
    }
}

impl fmt::Display for DecisionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}
