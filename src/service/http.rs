use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, Response};
use serde::de::DeserializeOwned;
use tracing::{debug, info};

use crate::config::Settings;
use crate::models::{Answer, Question, RecommendationResult};
use crate::protocol::{accept_recommendation, QuestionsResponse, RecommendRequest};

use super::{AssessmentService, ServiceError};

/// [`AssessmentService`] over HTTP/JSON.
#[derive(Debug, Clone)]
pub struct HttpAssessmentService {
    http: Client,
    base_url: String,
}

impl HttpAssessmentService {
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self, ServiceError> {
        let http = Client::builder().timeout(timeout).build()?;
        Ok(Self::with_client(http, base_url))
    }

    pub fn with_client(http: Client, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { http, base_url }
    }

    pub fn from_settings(settings: &Settings) -> Result<Self, ServiceError> {
        Self::new(settings.api_base_url.clone(), settings.request_timeout())
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path)
    }
}

async fn decode<T: DeserializeOwned>(response: Response) -> Result<T, ServiceError> {
    let status = response.status();
    if !status.is_success() {
        return Err(ServiceError::Status(status));
    }
    let body = response.bytes().await?;
    Ok(serde_json::from_slice(&body)?)
}

#[async_trait]
impl AssessmentService for HttpAssessmentService {
    async fn fetch_questions(&self) -> Result<Vec<Question>, ServiceError> {
        let response = self.http.get(self.url("questions")).send().await?;
        let envelope: QuestionsResponse = decode(response).await?;
        let questions = envelope.into_questions()?;
        info!(count = questions.len(), "fetched questions");
        Ok(questions)
    }

    async fn check_health(&self) -> Result<(), ServiceError> {
        let status = self.http.get(self.url("health")).send().await?.status();
        debug!(%status, "health check");
        if status.is_success() {
            Ok(())
        } else {
            Err(ServiceError::Status(status))
        }
    }

    async fn recommend(&self, answers: &[Answer]) -> Result<RecommendationResult, ServiceError> {
        let response = self
            .http
            .post(self.url("recommend"))
            .json(&RecommendRequest::new(answers))
            .send()
            .await?;
        let result = accept_recommendation(decode(response).await?)?;
        info!(
            answers = answers.len(),
            dominant = %result.dominant_type,
            recommendations = result.recommendations.len(),
            "received recommendations"
        );
        Ok(result)
    }
}
