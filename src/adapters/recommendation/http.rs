//! HTTP adapter for the recommendation service.
//!
//! Posts the request as JSON and expects back an ordered array of
//! framework records, most relevant first. Any non-2xx status or
//! malformed payload becomes a `RecommendationError`; the caller turns
//! that into an error string in engine state, never a crash.

use async_trait::async_trait;
use secrecy::{ExposeSecret, SecretString};
use std::time::Duration;

use crate::domain::framework::Framework;
use crate::ports::{FrameworkRecommender, RecommendationError, RecommendationRequest};

/// Client for the external semantic-search service.
pub struct HttpRecommender {
    client: reqwest::Client,
    endpoint: String,
    api_key: Option<SecretString>,
}

impl HttpRecommender {
    /// Creates a client for the given endpoint.
    pub fn new(
        endpoint: impl Into<String>,
        api_key: Option<SecretString>,
        timeout: Duration,
    ) -> Result<Self, RecommendationError> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| RecommendationError::Transport(e.to_string()))?;
        Ok(Self {
            client,
            endpoint: endpoint.into(),
            api_key,
        })
    }
}

#[async_trait]
impl FrameworkRecommender for HttpRecommender {
    async fn recommend(
        &self,
        request: &RecommendationRequest,
    ) -> Result<Vec<Framework>, RecommendationError> {
        let mut builder = self.client.post(&self.endpoint).json(request);
        if let Some(key) = &self.api_key {
            builder = builder.bearer_auth(key.expose_secret());
        }

        let response = builder
            .send()
            .await
            .map_err(|e| RecommendationError::Transport(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            tracing::error!(status = status.as_u16(), "recommendation service error");
            return Err(RecommendationError::ServiceError {
                status: status.as_u16(),
                body,
            });
        }

        response
            .json::<Vec<Framework>>()
            .await
            .map_err(|e| RecommendationError::MalformedResponse(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builds_with_and_without_api_key() {
        let with_key = HttpRecommender::new(
            "https://search.example/api/recommend",
            Some(SecretString::new("k".to_string())),
            Duration::from_secs(10),
        );
        assert!(with_key.is_ok());

        let without_key = HttpRecommender::new(
            "https://search.example/api/recommend",
            None,
            Duration::from_secs(10),
        );
        assert!(without_key.is_ok());
    }
}
