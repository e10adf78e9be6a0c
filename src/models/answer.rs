use serde::{Deserialize, Serialize};

/// Score recorded for one answered question.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Answer {
    pub question_id: i64,
    pub score: i32,
}

impl Answer {
    pub fn new(question_id: i64, score: i32) -> Self {
        Self { question_id, score }
    }
}

/// Answers in the order they were given.
///
/// Answering only moves forward one question at a time and `back` drops the
/// newest entry, so position `i` always holds the answer to question `i`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AnswerLedger {
    entries: Vec<Answer>,
}

impl AnswerLedger {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, answer: Answer) {
        self.entries.push(answer);
    }

    /// Removes the most recent answer.
    pub fn undo(&mut self) -> Option<Answer> {
        self.entries.pop()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn as_slice(&self) -> &[Answer] {
        &self.entries
    }

    pub fn to_vec(&self) -> Vec<Answer> {
        self.entries.clone()
    }
}
