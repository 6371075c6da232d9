//! Recommendation query construction.
//!
//! Builds the semantic-search query and content filters from a confirmed
//! problem brief. The external service does the ranking; this module only
//! decides what to ask for.

use once_cell::sync::Lazy;

use crate::domain::artifacts::ProblemBrief;
use crate::domain::classification::DecisionType;

/// Upper bound on query text sent to the search service.
pub const MAX_QUERY_LENGTH: usize = 500;

/// Keyword table for problem-category detection. First column is the
/// category id the catalog uses; the rest are trigger substrings.
static CATEGORY_KEYWORDS: Lazy<Vec<(&'static str, Vec<&'static str>)>> = Lazy::new(|| {
    vec![
        ("hiring", vec!["hire", "hiring", "recruit", "candidate"]),
        ("fundraising", vec!["fundrais", "investor", "funding", "raise"]),
        ("product", vec!["product", "feature", "launch", "roadmap"]),
        ("growth", vec!["growth", "acquisition", "retention", "churn"]),
        ("pricing", vec!["pricing", "price", "monetiz"]),
        ("team", vec!["team", "co-founder", "cofounder", "culture"]),
        ("strategy", vec!["strategy", "pivot", "market", "compet"]),
    ]
});

/// The semantic part of a recommendation request, derived from the brief.
/// Persona, phase, language, limit and threshold defaults come from
/// configuration and are attached by the caller.
#[derive(Debug, Clone, PartialEq)]
pub struct RecommendationQuery {
    /// Bounded free-text query for the ranking service.
    pub query: String,
    /// Content-type preference driven by the decision type.
    pub content_type: Vec<String>,
    /// Keyword-derived problem categories; empty means "no filter".
    pub problem_category: Vec<String>,
}

/// Builds the query from a brief and its decision type.
///
/// The query text is the concatenation of summary, context, and stakes,
/// truncated to [`MAX_QUERY_LENGTH`] on a character boundary.
pub fn build_recommendation_query(brief: &ProblemBrief) -> RecommendationQuery {
    let mut query = format!("{} {} {}", brief.summary, brief.context, brief.stakes);
    if query.len() > MAX_QUERY_LENGTH {
        let cut = (0..=MAX_QUERY_LENGTH)
            .rev()
            .find(|i| query.is_char_boundary(*i))
            .unwrap_or(0);
        query.truncate(cut);
    }

    let content_type = match brief.decision_type {
        // Reversible decisions get quick mental models; irreversible ones
        // get full structured frameworks.
        DecisionType::Type1 => vec!["mental-model".to_string()],
        DecisionType::Type2 => vec!["framework".to_string(), "mental-model".to_string()],
    };

    RecommendationQuery {
        problem_category: detect_problem_categories(&query),
        query,
        content_type,
    }
}

/// Scans text for category trigger keywords, preserving table order.
pub fn detect_problem_categories(text: &str) -> Vec<String> {
    let lowered = text.to_lowercase();
    CATEGORY_KEYWORDS
        .iter()
        .filter(|(_, triggers)| triggers.iter().any(|t| lowered.contains(t)))
        .map(|(category, _)| category.to_string())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::artifacts::{Complexity, Urgency};

    fn brief(summary: &str, context: &str, stakes: &str, decision_type: DecisionType) -> ProblemBrief {
        ProblemBrief {
            summary: summary.to_string(),
            context: context.to_string(),
            stakes: stakes.to_string(),
            constraints: String::new(),
            decision_type,
            urgency: Urgency::Medium,
            complexity: Complexity::Medium,
            confirmed: true,
        }
    }

    #[test]
    fn query_concatenates_summary_context_stakes() {
        let b = brief("Should we pivot?", "B2B SaaS, 18 months in.", "Runway.", DecisionType::Type2);
        let q = build_recommendation_query(&b);
        assert_eq!(q.query, "Should we pivot? B2B SaaS, 18 months in. Runway.");
    }

    #[test]
    fn query_is_truncated_to_bound() {
        let long = "x".repeat(MAX_QUERY_LENGTH * 2);
        let b = brief(&long, "", "", DecisionType::Type1);
        let q = build_recommendation_query(&b);
        assert!(q.query.len() <= MAX_QUERY_LENGTH);
    }

    #[test]
    fn truncation_respects_char_boundaries() {
        let long = "é".repeat(MAX_QUERY_LENGTH); // 2 bytes each
        let b = brief(&long, "", "", DecisionType::Type1);
        let q = build_recommendation_query(&b);
        assert!(q.query.len() <= MAX_QUERY_LENGTH);
        // Must not panic and must still be valid UTF-8 (it is, by type).
        assert!(q.query.chars().all(|c| c == 'é'));
    }

    #[test]
    fn content_type_follows_decision_type() {
        let t1 = build_recommendation_query(&brief("a", "b", "c", DecisionType::Type1));
        assert_eq!(t1.content_type, vec!["mental-model"]);

        let t2 = build_recommendation_query(&brief("a", "b", "c", DecisionType::Type2));
        assert_eq!(t2.content_type, vec!["framework", "mental-model"]);
    }

    #[test]
    fn categories_detected_from_keywords() {
        let cats = detect_problem_categories("Should we HIRE a VP of sales before the raise?");
        assert_eq!(cats, vec!["hiring".to_string(), "fundraising".to_string()]);
    }

    #[test]
    fn no_keywords_means_no_filter() {
        assert!(detect_problem_categories("completely unrelated text").is_empty());
    }
}
