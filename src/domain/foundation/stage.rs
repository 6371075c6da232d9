//! SprintStage enum representing the 7 stages of a decision sprint.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The fixed, totally ordered stage sequence of a sprint.
///
/// "Current stage" is always exactly one of these; completion status is
/// tracked separately and independently of the pointer.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "kebab-case")]
pub enum SprintStage {
    ProblemIntake,
    DiagnosticInterview,
    DecisionClassification,
    ProblemBrief,
    FrameworkSelection,
    FrameworkApplication,
    CommitmentMemo,
}

impl SprintStage {
    /// Returns all stages in canonical order.
    pub fn all() -> &'static [SprintStage] {
        &[
            SprintStage::ProblemIntake,
            SprintStage::DiagnosticInterview,
            SprintStage::DecisionClassification,
            SprintStage::ProblemBrief,
            SprintStage::FrameworkSelection,
            SprintStage::FrameworkApplication,
            SprintStage::CommitmentMemo,
        ]
    }

    /// Returns the first stage in the sequence.
    pub fn first() -> SprintStage {
        SprintStage::ProblemIntake
    }

    /// Returns the 0-based index of this stage in the canonical order.
    pub fn order_index(&self) -> usize {
        Self::all()
            .iter()
            .position(|s| s == self)
            .expect("SprintStage must be in all() array")
    }

    /// Returns the next stage in order, if any.
    pub fn next(&self) -> Option<SprintStage> {
        let idx = self.order_index();
        Self::all().get(idx + 1).copied()
    }

    /// Returns the previous stage in order, if any.
    pub fn previous(&self) -> Option<SprintStage> {
        let idx = self.order_index();
        if idx == 0 {
            None
        } else {
            Self::all().get(idx - 1).copied()
        }
    }

    /// Returns true if this stage comes before another in order.
    pub fn is_before(&self, other: &SprintStage) -> bool {
        self.order_index() < other.order_index()
    }

    /// Returns the display name.
    pub fn display_name(&self) -> &'static str {
        match self {
            SprintStage::ProblemIntake => "Problem Intake",
            SprintStage::DiagnosticInterview => "Diagnostic Interview",
            SprintStage::DecisionClassification => "Decision Classification",
            SprintStage::ProblemBrief => "Problem Brief",
            SprintStage::FrameworkSelection => "Framework Selection",
            SprintStage::FrameworkApplication => "Framework Application",
            SprintStage::CommitmentMemo => "Commitment Memo",
        }
    }
}

impl fmt::Display for SprintStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}
