//! Commitment memo artifact, its generator, and the edit merge.

use serde::{Deserialize, Serialize};

use super::{ProblemBrief, Urgency};
use crate::domain::foundation::Timestamp;
use crate::domain::framework::Framework;

/// Hard cap on generated key insights.
pub const MAX_KEY_INSIGHTS: usize = 5;

/// A small, time-boxed experiment to de-risk the decision.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MicroBet {
    pub description: String,
    pub timeframe: String,
    pub success_metrics: Vec<String>,
}

/// The single first action that sets everything else in motion.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FirstDomino {
    pub action: String,
    pub deadline: Timestamp,
    pub responsible: String,
}

/// The final commitment document for a sprint.
///
/// Generated once a confirmed brief and selected frameworks exist;
/// regenerated only while absent so user edits survive navigation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CommitmentMemo {
    pub problem_statement: String,
    pub chosen_frameworks: Vec<String>,
    pub key_insights: Vec<String>,
    pub micro_bet: MicroBet,
    pub first_domino: FirstDomino,
    pub contingency_plans: Vec<String>,
    pub review_date: Timestamp,
}

/// Partial edit to a micro-bet; `None` fields keep their current value.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MicroBetEdit {
    pub description: Option<String>,
    pub timeframe: Option<String>,
    pub success_metrics: Option<Vec<String>>,
}

/// Partial edit to a first domino; `None` fields keep their current value.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FirstDominoEdit {
    pub action: Option<String>,
    pub deadline: Option<Timestamp>,
    pub responsible: Option<String>,
}

/// User edit to a memo. Scalar and list fields replace wholesale; the
/// nested objects merge field by field.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MemoEdit {
    pub problem_statement: Option<String>,
    pub chosen_frameworks: Option<Vec<String>>,
    pub key_insights: Option<Vec<String>>,
    pub micro_bet: Option<MicroBetEdit>,
    pub first_domino: Option<FirstDominoEdit>,
    pub contingency_plans: Option<Vec<String>>,
    pub review_date: Option<Timestamp>,
}

impl CommitmentMemo {
    /// Applies a user edit. Once edited, the generator is never invoked
    /// again for this memo within the session; the caller enforces that.
    pub fn apply_edit(&mut self, edit: MemoEdit) {
        if let Some(v) = edit.problem_statement {
            self.problem_statement = v;
        }
        if let Some(v) = edit.chosen_frameworks {
            self.chosen_frameworks = v;
        }
        if let Some(v) = edit.key_insights {
            self.key_insights = v;
        }
        if let Some(bet) = edit.micro_bet {
            if let Some(v) = bet.description {
                self.micro_bet.description = v;
            }
            if let Some(v) = bet.timeframe {
                self.micro_bet.timeframe = v;
            }
            if let Some(v) = bet.success_metrics {
                self.micro_bet.success_metrics = v;
            }
        }
        if let Some(domino) = edit.first_domino {
            if let Some(v) = domino.action {
                self.first_domino.action = v;
            }
            if let Some(v) = domino.deadline {
                self.first_domino.deadline = v;
            }
            if let Some(v) = domino.responsible {
                self.first_domino.responsible = v;
            }
        }
        if let Some(v) = edit.contingency_plans {
            self.contingency_plans = v;
        }
        if let Some(v) = edit.review_date {
            self.review_date = v;
        }
    }
}

/// Generates the commitment memo from the brief and the selected
/// frameworks. Total: with zero frameworks the list fields are simply
/// shorter, never null.
pub fn generate_commitment_memo(
    brief: &ProblemBrief,
    frameworks: &[Framework],
    now: Timestamp,
) -> CommitmentMemo {
    let problem_statement = format!("{} At stake: {}", end_sentence(&brief.summary), brief.stakes);

    let chosen_frameworks: Vec<String> = frameworks.iter().map(|f| f.title.clone()).collect();

    let mut key_insights = Vec::with_capacity(MAX_KEY_INSIGHTS);
    key_insights.push(framework_count_sentence(frameworks.len()));
    key_insights.push(brief.decision_type.rationale().to_string());
    for framework in frameworks {
        if key_insights.len() >= MAX_KEY_INSIGHTS {
            break;
        }
        key_insights.push(framework_takeaway(framework));
    }

    let (bet_timeframe, review_days) = match brief.urgency {
        Urgency::High => ("1 week", 7),
        Urgency::Medium => ("2 weeks", 14),
        Urgency::Low => ("1 month", 30),
    };

    let first_action = match frameworks.first() {
        Some(f) => format!(
            "Block a working session to apply {} to the problem brief.",
            f.title
        ),
        None => "Review the problem brief and pick the first concrete step.".to_string(),
    };

    CommitmentMemo {
        problem_statement,
        chosen_frameworks,
        key_insights,
        micro_bet: MicroBet {
            description:
                "Run a small, time-boxed test of the leading option before committing fully."
                    .to_string(),
            timeframe: bet_timeframe.to_string(),
            success_metrics: vec![
                "A clear go/no-go signal within the timeframe".to_string(),
                "New information that confirms or challenges the brief".to_string(),
            ],
        },
        first_domino: FirstDomino {
            action: first_action,
            deadline: now.plus_days(1),
            responsible: "Decision owner".to_string(),
        },
        contingency_plans: vec![
            "If the micro-bet fails, revisit the problem brief and re-run the diagnostic interview."
                .to_string(),
            "If new information materially changes the stakes, reclassify the decision before proceeding."
                .to_string(),
        ],
        review_date: now.plus_days(review_days),
    }
}

fn framework_count_sentence(count: usize) -> String {
    match count {
        0 => "No frameworks were selected; the commitment rests on the brief alone.".to_string(),
        1 => "1 framework was applied to structure this decision.".to_string(),
        n => format!("{} frameworks were applied to structure this decision.", n),
    }
}

fn framework_takeaway(framework: &Framework) -> String {
    if framework.key_takeaway.trim().is_empty() {
        format!("{} offers a lens on this decision.", framework.title)
    } else {
        format!("{}: {}", framework.title, framework.key_takeaway)
    }
}

fn end_sentence(text: &str) -> String {
    let trimmed = text.trim_end();
    if trimmed.ends_with(['.', '!', '?']) {
        trimmed.to_string()
    } else {
        format!("{}.", trimmed)
    }
}
