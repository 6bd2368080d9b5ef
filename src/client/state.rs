//! Client interaction state.

use crate::models::Question;

/// Where the interactive loop currently is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InteractionState {
    /// Question `i` needs to be shown.
    Presenting(usize),
    /// Question `i` is on screen, waiting for a choice.
    AwaitingInput(usize),
    /// The last choice for question `i` was rejected; show it again.
    Retrying(usize),
    /// Every question has an answer.
    Submitting,
    /// The result has been received.
    Done,
}

/// Parse a 1-based menu choice into a 0-based option index.
pub fn parse_choice(token: &str, option_count: usize) -> Option<usize> {
    let choice: usize = token.trim().parse().ok()?;
    (1..=option_count).contains(&choice).then(|| choice - 1)
}

/// Answers collected so far, plus the cursor over the question list.
///
/// The cursor only moves forward on a valid choice.
#[derive(Debug)]
pub struct QuizSession<'a> {
    questions: &'a [Question],
    answers: Vec<i64>,
    state: InteractionState,
}

impl<'a> QuizSession<'a> {
    pub fn new(questions: &'a [Question]) -> Self {
        let state = if questions.is_empty() {
            InteractionState::Submitting
        } else {
            InteractionState::Presenting(0)
        };

        Self {
            questions,
            answers: vec![0; questions.len()],
            state,
        }
    }

    pub fn state(&self) -> InteractionState {
        self.state
    }

    pub fn answers(&self) -> &[i64] {
        &self.answers
    }

    /// The question under the cursor, if one is being asked.
    pub fn current_question(&self) -> Option<&'a Question> {
        match self.state {
            InteractionState::Presenting(i)
            | InteractionState::AwaitingInput(i)
            | InteractionState::Retrying(i) => self.questions.get(i),
            InteractionState::Submitting | InteractionState::Done => None,
        }
    }

    /// Mark the current question as shown.
    pub fn presented(&mut self) {
        if let InteractionState::Presenting(i) | InteractionState::Retrying(i) = self.state {
            self.state = InteractionState::AwaitingInput(i);
        }
    }

    /// Offer one input token for the current question.
    ///
    /// Returns false if the token was rejected and the question must be
    /// asked again.
    pub fn answer(&mut self, token: &str) -> bool {
        let InteractionState::AwaitingInput(i) = self.state else {
            return false;
        };
        let Some(question) = self.questions.get(i) else {
            return false;
        };

        match parse_choice(token, question.option_count()) {
            Some(index) => {
                self.answers[i] = index as i64;
                self.state = if i + 1 < self.questions.len() {
                    InteractionState::Presenting(i + 1)
                } else {
                    InteractionState::Submitting
                };
                true
            }
            None => {
                self.state = InteractionState::Retrying(i);
                false
            }
        }
    }

    /// Mark the submission as answered.
    pub fn finish(&mut self) {
        if self.state == InteractionState::Submitting {
            self.state = InteractionState::Done;
        }
    }
}
