//! Immutable question store.

use std::collections::HashSet;

use thiserror::Error;

use crate::models::Question;

/// Reasons a question list cannot back a running server.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum StoreError {
    #[error("question set must contain at least one question")]
    Empty,
    #[error("question {id} has no options")]
    NoOptions { id: u32 },
    #[error("question {id} marks option {correct} correct but only has {options} options")]
    CorrectOutOfRange { id: u32, correct: usize, options: usize },
    #[error("question id {id} is used more than once")]
    DuplicateId { id: u32 },
}

/// Ordered, read-only sequence of questions loaded once at startup.
///
/// Never mutated after construction, so shared references need no locking.
#[derive(Debug, Clone)]
pub struct QuestionStore {
    questions: Vec<Question>,
}

impl QuestionStore {
    /// Validate and wrap a question list.
    pub fn new(questions: Vec<Question>) -> Result<Self, StoreError> {
        if questions.is_empty() {
            return Err(StoreError::Empty);
        }

        let mut seen = HashSet::new();
        for question in &questions {
            if question.options.is_empty() {
                return Err(StoreError::NoOptions { id: question.id });
            }
            if question.correct_index >= question.option_count() {
                return Err(StoreError::CorrectOutOfRange {
                    id: question.id,
                    correct: question.correct_index,
                    options: question.option_count(),
                });
            }
            if !seen.insert(question.id) {
                return Err(StoreError::DuplicateId { id: question.id });
            }
        }

        Ok(Self { questions })
    }

    /// The questions in load order. Never empty.
    pub fn list(&self) -> &[Question] {
        &self.questions
    }
}
