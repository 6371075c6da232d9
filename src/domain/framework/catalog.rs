//! Framework catalog record.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::FrameworkId;

/// One item from the external framework catalog.
///
/// Returned by the recommendation collaborator, ranked most relevant
/// first. The engine never mutates these; selection is set membership
/// keyed by `id`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Framework {
    pub id: FrameworkId,
    pub title: String,
    /// Catalog content type, e.g. "mental-model" or "framework".
    pub content_type: String,
    pub category: String,
    /// Short descriptive summary.
    #[serde(default)]
    pub summary: String,
    /// One-line takeaway surfaced in the commitment memo.
    #[serde(default)]
    pub key_takeaway: String,
    /// Targeting metadata from catalog enrichment.
    #[serde(default)]
    pub target_persona: Vec<String>,
    #[serde(default)]
    pub startup_phase: Vec<String>,
    #[serde(default)]
    pub problem_category: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_with_missing_optional_fields() {
        let json = r#"{
            "id": "second-order-thinking",
            "title": "Second-Order Thinking",
            "content_type": "mental-model",
            "category": "thinking"
        }"#;
        let fw: Framework = serde_json::from_str(json).unwrap();
        assert_eq!(fw.id.as_str(), "second-order-thinking");
        assert!(fw.summary.is_empty());
        assert!(fw.target_persona.is_empty());
    }

    #[test]
    fn roundtrips_full_record() {
        let fw = Framework {
            id: FrameworkId::new("inversion".to_string()).unwrap(),
            title: "Inversion".to_string(),
            content_type: "mental-model".to_string(),
            category: "thinking".to_string(),
            summary: "Approach the problem backwards.".to_string(),
            key_takeaway: "Ask what would guarantee failure.".to_string(),
            target_persona: vec!["founder".to_string()],
            startup_phase: vec!["early".to_string()],
            problem_category: vec!["strategy".to_string()],
        };
        let json = serde_json::to_string(&fw).unwrap();
        let back: Framework = serde_json::from_str(&json).unwrap();
        assert_eq!(back, fw);
    }
}
