//! Framework Recommender Port - Interface to the external semantic
//! search and ranking service.
//!
//! The core never implements search or ranking; it builds a request from
//! the confirmed brief and consumes an ordered list of frameworks,
//! most relevant first. Re-querying is idempotent, empty results are
//! legal, and failures are isolated to an error string in engine state.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::domain::framework::Framework;

/// Errors from the recommendation service.
#[derive(Debug, thiserror::Error)]
pub enum RecommendationError {
    #[error("Recommendation service returned status {status}: {body}")]
    ServiceError { status: u16, body: String },

    #[error("Malformed recommendation response: {0}")]
    MalformedResponse(String),

    #[error("Failed to reach recommendation service: {0}")]
    Transport(String),
}

/// Content filters attached to a recommendation request.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RecommendationFilters {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content_type: Option<Vec<String>>,
    pub target_persona: Vec<String>,
    pub startup_phase: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub problem_category: Option<Vec<String>>,
    pub language: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub super_model: Option<bool>,
}

/// One recommendation request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecommendationRequest {
    pub query: String,
    pub filters: RecommendationFilters,
    pub limit: u32,
    pub threshold: f32,
}

/// Port for the external recommendation service.
#[async_trait]
pub trait FrameworkRecommender: Send + Sync {
    /// Returns candidate frameworks ordered most relevant first. An empty
    /// list is a valid answer.
    async fn recommend(
        &self,
        request: &RecommendationRequest,
    ) -> Result<Vec<Framework>, RecommendationError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_serializes_with_optional_filters_omitted() {
        let request = RecommendationRequest {
            query: "pivot".to_string(),
            filters: RecommendationFilters {
                content_type: None,
                target_persona: vec!["founder".to_string()],
                startup_phase: vec!["early".to_string()],
                problem_category: None,
                language: "en".to_string(),
                super_model: None,
            },
            limit: 10,
            threshold: 0.3,
        };
        let json = serde_json::to_string(&request).unwrap();
        assert!(!json.contains("content_type"));
        assert!(!json.contains("super_model"));
        assert!(json.contains("\"target_persona\":[\"founder\"]"));
    }

    #[test]
    fn service_error_renders_status_and_body() {
        let err = RecommendationError::ServiceError {
            status: 503,
            body: "overloaded".to_string(),
        };
        assert!(err.to_string().contains("503"));
        assert!(err.to_string().contains("overloaded"));
    }
}
