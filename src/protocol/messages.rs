//! Request and response bodies for the assessment service.
//!
//! All bodies are JSON over HTTP.

use serde::{Deserialize, Serialize};

use crate::models::{Answer, Question, RecommendationResult};

/// Body of `GET /questions`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuestionsResponse {
    #[serde(default)]
    pub success: Option<bool>,
    #[serde(default)]
    pub questions: Option<Vec<Question>>,
}

/// Body of `POST /recommend`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecommendRequest {
    pub answers: Vec<Answer>,
}

/// A decoded body that does not carry what the client needs.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ShapeError {
    #[error("response has no success flag")]
    MissingSuccess,
    #[error("service reported failure")]
    Rejected,
    #[error("response has no `{0}` field")]
    MissingField(&'static str),
}

impl QuestionsResponse {
    /// Returns the question list if the envelope passes the shape check.
    ///
    /// Order and duplicates are kept exactly as delivered.
    pub fn into_questions(self) -> Result<Vec<Question>, ShapeError> {
        match self.success {
            None => Err(ShapeError::MissingSuccess),
            Some(false) => Err(ShapeError::Rejected),
            Some(true) => self.questions.ok_or(ShapeError::MissingField("questions")),
        }
    }
}

impl RecommendRequest {
    pub fn new(answers: &[Answer]) -> Self {
        Self {
            answers: answers.to_vec(),
        }
    }
}

/// Checks a decoded recommendation body.
pub(crate) fn accept_recommendation(
    result: RecommendationResult,
) -> Result<RecommendationResult, ShapeError> {
    if result.success {
        Ok(result)
    } else {
        Err(ShapeError::Rejected)
    }
}
