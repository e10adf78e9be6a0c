//! Access to the remote assessment service.
//!
//! The controller never talks HTTP itself; it goes through
//! [`AssessmentService`] so tests can substitute a scripted backend.

mod http;

use async_trait::async_trait;
use reqwest::StatusCode;
use thiserror::Error;

use crate::models::{Answer, Question, RecommendationResult};
use crate::protocol::ShapeError;

pub use http::HttpAssessmentService;

#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("service answered with status {0}")]
    Status(StatusCode),
    #[error("malformed response body: {0}")]
    Decode(#[from] serde_json::Error),
    #[error("unexpected response: {0}")]
    Shape(#[from] ShapeError),
}

#[async_trait]
pub trait AssessmentService: Send + Sync {
    /// Retrieves the ordered question list.
    async fn fetch_questions(&self) -> Result<Vec<Question>, ServiceError>;

    /// Succeeds when the service is reachable.
    async fn check_health(&self) -> Result<(), ServiceError>;

    /// Submits the complete ledger and returns the service's result.
    async fn recommend(&self, answers: &[Answer]) -> Result<RecommendationResult, ServiceError>;
}
