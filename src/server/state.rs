//! State shared by all request handlers, and the scoring path.

use std::sync::Arc;

use crate::models::{Question, ScoreResult, Submission};

use super::aggregator::Aggregator;
use super::store::QuestionStore;

/// Count answers matching the question at the same position.
///
/// Answers beyond the last question are ignored; questions without an
/// answer count as incorrect.
pub fn score_answers(questions: &[Question], answers: &[i64]) -> usize {
    answers
        .iter()
        .zip(questions.iter())
        .filter(|(answer, question)| question.is_correct(**answer))
        .count()
}

/// Handler state. Cloning shares the same store and aggregate.
#[derive(Debug, Clone)]
pub struct ServerState {
    store: Arc<QuestionStore>,
    aggregator: Arc<Aggregator>,
}

impl ServerState {
    /// Create state with fresh, zeroed totals.
    pub fn new(store: QuestionStore) -> Self {
        Self {
            store: Arc::new(store),
            aggregator: Arc::new(Aggregator::new()),
        }
    }

    pub fn questions(&self) -> &[Question] {
        self.store.list()
    }

    pub fn aggregator(&self) -> &Aggregator {
        &self.aggregator
    }

    /// Score a decoded submission and fold it into the running totals.
    pub fn handle(&self, submission: &Submission) -> ScoreResult {
        let questions = self.store.list();
        let correct = score_answers(questions, &submission.answers);
        let comparison_percent = self.aggregator.record_and_compare(correct, questions.len());

        ScoreResult {
            correct,
            total: questions.len(),
            comparison_percent,
        }
    }
}
