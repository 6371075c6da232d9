//! Static-catalog recommender.
//!
//! Serves a fixed set of frameworks, filtered by the request's content
//! types and problem categories. Used by tests and the demo binary; the
//! scoring is a crude keyword overlap, stable for identical requests so
//! re-querying stays idempotent.

use async_trait::async_trait;

use crate::domain::foundation::FrameworkId;
use crate::domain::framework::Framework;
use crate::ports::{FrameworkRecommender, RecommendationError, RecommendationRequest};

/// Recommender backed by an in-process catalog.
#[derive(Debug, Clone)]
pub struct StaticRecommender {
    catalog: Vec<Framework>,
}

impl StaticRecommender {
    /// Creates a recommender over the given catalog.
    pub fn new(catalog: Vec<Framework>) -> Self {
        Self { catalog }
    }

    /// A small built-in catalog of well-known mental models.
    pub fn with_default_catalog() -> Self {
        fn entry(
            id: &str,
            title: &str,
            content_type: &str,
            category: &str,
            takeaway: &str,
            categories: &[&str],
        ) -> Framework {
            Framework {
                id: FrameworkId::new(id.to_string()).expect("static catalog ids are non-empty"),
                title: title.to_string(),
                content_type: content_type.to_string(),
                category: category.to_string(),
                summary: String::new(),
                key_takeaway: takeaway.to_string(),
                target_persona: vec!["founder".to_string()],
                startup_phase: vec!["early".to_string()],
                problem_category: categories.iter().map(|c| c.to_string()).collect(),
            }
        }

        Self::new(vec![
            entry(
                "inversion",
                "Inversion",
                "mental-model",
                "thinking",
                "Ask what would guarantee failure, then avoid it.",
                &["strategy", "product"],
            ),
            entry(
                "second-order-thinking",
                "Second-Order Thinking",
                "mental-model",
                "thinking",
                "Consider the consequences of the consequences.",
                &["strategy", "growth"],
            ),
            entry(
                "10-10-10",
                "10/10/10",
                "mental-model",
                "time",
                "How will you feel in 10 minutes, 10 months, 10 years?",
                &["team", "hiring"],
            ),
            entry(
                "eisenhower-matrix",
                "Eisenhower Matrix",
                "framework",
                "prioritization",
                "Separate urgent from important before acting.",
                &["product", "strategy"],
            ),
            entry(
                "pre-mortem",
                "Pre-Mortem",
                "framework",
                "risk",
                "Assume the decision failed and write the story of why.",
                &["strategy", "fundraising", "hiring"],
            ),
        ])
    }

    fn score(&self, framework: &Framework, request: &RecommendationRequest) -> usize {
        let mut score = 0;
        if let Some(categories) = &request.filters.problem_category {
            score += framework
                .problem_category
                .iter()
                .filter(|c| categories.contains(c))
                .count()
                * 2;
        }
        let query = request.query.to_lowercase();
        if query.contains(&framework.title.to_lowercase()) {
            score += 1;
        }
        score
    }
}

#[async_trait]
impl FrameworkRecommender for StaticRecommender {
    async fn recommend(
        &self,
        request: &RecommendationRequest,
    ) -> Result<Vec<Framework>, RecommendationError> {
        let mut matches: Vec<(usize, &Framework)> = self
            .catalog
            .iter()
            .filter(|f| {
                request
                    .filters
                    .content_type
                    .as_ref()
                    .is_none_or(|types| types.contains(&f.content_type))
            })
            .map(|f| (self.score(f, request), f))
            .collect();

        // Stable sort keeps catalog order among equal scores.
        matches.sort_by(|a, b| b.0.cmp(&a.0));

        Ok(matches
            .into_iter()
            .take(request.limit as usize)
            .map(|(_, f)| f.clone())
            .collect())
    }
}
