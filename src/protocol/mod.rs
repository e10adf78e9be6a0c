//! Wire envelopes exchanged with the assessment service.

mod messages;

pub use messages::{QuestionsResponse, RecommendRequest, ShapeError};
pub(crate) use messages::accept_recommendation;
