use serde::{Deserialize, Serialize};

/// A multiple-choice question.
///
/// `correct` is the 0-based index into `options`. It is sent to clients as-is.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    pub id: u32,
    pub text: String,
    pub options: Vec<String>,
    #[serde(rename = "correct")]
    pub correct_index: usize,
}

impl Question {
    pub fn new(id: u32, text: &str, options: &[&str], correct_index: usize) -> Self {
        Self {
            id,
            text: text.to_string(),
            options: options.iter().map(|o| o.to_string()).collect(),
            correct_index,
        }
    }

    pub fn option_count(&self) -> usize {
        self.options.len()
    }

    /// True if `answer` selects the correct option.
    pub fn is_correct(&self, answer: i64) -> bool {
        usize::try_from(answer).is_ok_and(|a| a == self.correct_index)
    }
}
