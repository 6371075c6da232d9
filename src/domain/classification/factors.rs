//! Decision factors derived from diagnostic answers.
//!
//! Each factor is extracted by substring-matching the raw answer text
//! against a fixed vocabulary. The tables are order-sensitive: the first
//! matching rule wins and everything else falls through to the final arm.

use serde::{Deserialize, Serialize};

use crate::domain::diagnostic::{keys, DiagnosticResponses};

/// How easily the decision can be undone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Reversibility {
    High,
    Medium,
    Low,
}

/// How severe the downside is if the decision goes wrong.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Consequences {
    Low,
    Medium,
    High,
}

/// How soon the decision must be made.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Timeframe {
    Immediate,
    Short,
    Medium,
    Long,
}

/// Default information quality when the interview did not record one.
pub const DEFAULT_INFORMATION_QUALITY: u8 = 5;

/// Pure projection of the diagnostic answers, never persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DecisionFactors {
    pub reversibility: Reversibility,
    pub consequences: Consequences,
    /// 1..=10; asserted by the interview, only clamped here.
    pub information_quality: u8,
    pub timeframe: Timeframe,
}

impl DecisionFactors {
    /// Extracts factors from the raw diagnostic answers.
    ///
    /// Missing or non-matching answers take the final arm of each table,
    /// except information quality which defaults to
    /// [`DEFAULT_INFORMATION_QUALITY`].
    pub fn from_responses(responses: &DiagnosticResponses) -> Self {
        Self {
            reversibility: extract_reversibility(responses.text(keys::REVERSIBILITY)),
            consequences: extract_consequences(responses.text(keys::CONSEQUENCES)),
            information_quality: extract_information_quality(responses),
            timeframe: extract_timeframe(responses.text(keys::TIMEFRAME)),
        }
    }
}

fn extract_reversibility(answer: Option<&str>) -> Reversibility {
    match answer {
        Some(text) if text.contains("Very easy") => Reversibility::High,
        Some(text) if text.contains("Somewhat") => Reversibility::Medium,
        _ => Reversibility::Low,
    }
}

fn extract_consequences(answer: Option<&str>) -> Consequences {
    match answer {
        Some(text) if text.contains("Minor") || text.contains("Moderate") => Consequences::Low,
        Some(text) if text.contains("Significant") => Consequences::Medium,
        _ => Consequences::High,
    }
}

fn extract_information_quality(responses: &DiagnosticResponses) -> u8 {
    responses
        .get(keys::INFORMATION_QUALITY)
        .and_then(|answer| answer.as_number())
        .map(|n| (n.round() as i64).clamp(1, 10) as u8)
        .unwrap_or(DEFAULT_INFORMATION_QUALITY)
}

fn extract_timeframe(answer: Option<&str>) -> Timeframe {
    match answer {
        Some(text) if text.contains("Immediately") => Timeframe::Immediate,
        Some(text) if text.contains("This week") => Timeframe::Short,
        Some(text) if text.contains("This month") => Timeframe::Medium,
        _ => Timeframe::Long,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::diagnostic::AnswerValue;

    fn responses(pairs: &[(&str, AnswerValue)]) -> DiagnosticResponses {
        let mut r = DiagnosticResponses::new();
        for (k, v) in pairs {
            r.insert(*k, v.clone());
        }
        r
    }

    #[test]
    fn reversibility_vocabulary() {
        let cases = [
            ("Very easy - we can change course anytime", Reversibility::High),
            ("Somewhat difficult - switching has real costs", Reversibility::Medium),
            ("Effectively impossible to undo", Reversibility::Low),
        ];
        for (text, expected) in cases {
            assert_eq!(extract_reversibility(Some(text)), expected, "{}", text);
        }
    }

    #[test]
    fn missing_reversibility_falls_through_to_low() {
        assert_eq!(extract_reversibility(None), Reversibility::Low);
    }

    #[test]
    fn consequences_vocabulary() {
        assert_eq!(
            extract_consequences(Some("Minor inconvenience at most")),
            Consequences::Low
        );
        assert_eq!(
            extract_consequences(Some("Moderate setback")),
            Consequences::Low
        );
        assert_eq!(
            extract_consequences(Some("Significant damage to the roadmap")),
            Consequences::Medium
        );
        assert_eq!(
            extract_consequences(Some("Company-ending")),
            Consequences::High
        );
        assert_eq!(extract_consequences(None), Consequences::High);
    }

    #[test]
    fn timeframe_vocabulary() {
        assert_eq!(extract_timeframe(Some("Immediately")), Timeframe::Immediate);
        assert_eq!(extract_timeframe(Some("This week")), Timeframe::Short);
        assert_eq!(extract_timeframe(Some("This month")), Timeframe::Medium);
        assert_eq!(extract_timeframe(Some("This quarter")), Timeframe::Long);
        assert_eq!(extract_timeframe(None), Timeframe::Long);
    }

    #[test]
    fn information_quality_passthrough_and_default() {
        let r = responses(&[(keys::INFORMATION_QUALITY, AnswerValue::Number(7.0))]);
        assert_eq!(DecisionFactors::from_responses(&r).information_quality, 7);

        let empty = DiagnosticResponses::new();
        assert_eq!(
            DecisionFactors::from_responses(&empty).information_quality,
            DEFAULT_INFORMATION_QUALITY
        );
    }

    #[test]
    fn information_quality_is_clamped() {
        let r = responses(&[(keys::INFORMATION_QUALITY, AnswerValue::Number(42.0))]);
        assert_eq!(DecisionFactors::from_responses(&r).information_quality, 10);

        let r = responses(&[(keys::INFORMATION_QUALITY, AnswerValue::Number(0.0))]);
        assert_eq!(DecisionFactors::from_responses(&r).information_quality, 1);
    }

    #[test]
    fn extraction_uses_only_known_keys() {
        let r = responses(&[
            (keys::REVERSIBILITY, AnswerValue::from("Very easy to undo")),
            (keys::CONSEQUENCES, AnswerValue::from("Minor")),
            (keys::TIMEFRAME, AnswerValue::from("This week")),
            ("unrelated", AnswerValue::from("Immediately Significant")),
        ]);
        let factors = DecisionFactors::from_responses(&r);
        assert_eq!(factors.reversibility, Reversibility::High);
        assert_eq!(factors.consequences, Consequences::Low);
        assert_eq!(factors.timeframe, Timeframe::Short);
    }
}
