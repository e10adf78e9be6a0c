mod answer;
mod question;
mod recommendation;

pub use answer::{Answer, AnswerLedger};
pub use question::{Choice, Question};
pub use recommendation::{
    display_percent, Assessment, DimensionScore, MajorRecommendation, RecommendationResult,
    ResultSource,
};

/// Which screen of the assessment flow is showing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Screen {
    #[default]
    Start,
    Question,
    Loading,
    Results,
}

/// Position of a question relative to the one being answered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepState {
    Done,
    Current,
    Pending,
}
