//! Problem brief artifact and its generator.

use serde::{Deserialize, Serialize};

use crate::domain::classification::{DecisionType, Timeframe};
use crate::domain::diagnostic::{keys, DiagnosticResponses};

/// How soon the decision needs movement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Urgency {
    Low,
    Medium,
    High,
}

/// How tangled the decision is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Complexity {
    Low,
    Medium,
    High,
}

/// Structured summary of the problem, generated once from intake text and
/// diagnostic answers. Never regenerated while present; the user edits or
/// confirms it in place.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProblemBrief {
    pub summary: String,
    pub context: String,
    pub stakes: String,
    pub constraints: String,
    pub decision_type: DecisionType,
    pub urgency: Urgency,
    pub complexity: Complexity,
    pub confirmed: bool,
}

const NO_SUMMARY: &str = "The problem was not described during intake.";
const NO_CONTEXT: &str = "Context information was not provided during the diagnostic interview.";
const NO_STAKES: &str = "Stakes were not identified during the diagnostic interview.";
const NO_CONSTRAINTS: &str = "Constraints were not identified during the diagnostic interview.";

/// Generates a brief from the intake text, diagnostic answers, and the
/// (possibly overridden) decision type.
pub fn generate_problem_brief(
    problem_text: &str,
    responses: &DiagnosticResponses,
    decision_type: DecisionType,
) -> ProblemBrief {
    let summary = match problem_text.trim() {
        "" => NO_SUMMARY.to_string(),
        text => text.to_string(),
    };

    ProblemBrief {
        summary,
        context: narrative(
            responses,
            &[keys::CONTEXT, keys::TIMEFRAME, keys::STAKEHOLDERS],
            NO_CONTEXT,
        ),
        stakes: narrative(responses, &[keys::STAKES, keys::CONSEQUENCES], NO_STAKES),
        constraints: narrative(
            responses,
            &[keys::CONSTRAINTS, keys::REVERSIBILITY],
            NO_CONSTRAINTS,
        ),
        decision_type,
        urgency: derive_urgency(responses),
        complexity: derive_complexity(responses),
        confirmed: false,
    }
}

/// Joins the present answers for `fields` with ". ", or returns the
/// placeholder when all are absent.
fn narrative(responses: &DiagnosticResponses, fields: &[&str], placeholder: &str) -> String {
    let parts: Vec<String> = fields
        .iter()
        .filter_map(|field| responses.get(field))
        .map(|answer| answer.to_narrative())
        .filter(|text| !text.trim().is_empty())
        .collect();

    if parts.is_empty() {
        placeholder.to_string()
    } else {
        parts.join(". ")
    }
}

/// Timeframe keyword → urgency: immediate/short are high, medium is
/// medium, anything else is low.
fn derive_urgency(responses: &DiagnosticResponses) -> Urgency {
    let factors = crate::domain::classification::DecisionFactors::from_responses(responses);
    match factors.timeframe {
        Timeframe::Immediate | Timeframe::Short => Urgency::High,
        Timeframe::Medium => Urgency::Medium,
        Timeframe::Long => Urgency::Low,
    }
}

/// Stakeholder count + information quality → complexity.
fn derive_complexity(responses: &DiagnosticResponses) -> Complexity {
    let stakeholders = responses
        .get(keys::STAKEHOLDERS)
        .and_then(|a| a.count_hint())
        .unwrap_or(0);
    let quality = crate::domain::classification::DecisionFactors::from_responses(responses)
        .information_quality;

    if stakeholders > 5 || quality < 4 {
        Complexity::High
    } else if stakeholders > 2 || quality < 7 {
        Complexity::Medium
    } else {
        Complexity::Low
    }
}
