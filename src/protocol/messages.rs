//! Paths, constants and error payloads of the quiz HTTP API.
//!
//! Request and response bodies are JSON. `GET /questions` returns an array of
//! [`Question`](crate::models::Question); `POST /submit` takes a
//! [`Submission`](crate::models::Submission) and returns a
//! [`ScoreResult`](crate::models::ScoreResult), read back by clients as a
//! [`SubmitResponse`].

use serde::{Deserialize, Serialize};

/// Route serving the question list.
pub const QUESTIONS_PATH: &str = "/questions";

/// Route accepting answer submissions.
pub const SUBMIT_PATH: &str = "/submit";

/// Default server port.
pub const DEFAULT_PORT: u16 = 8080;

/// Base URL the client talks to.
pub const DEFAULT_SERVER_URL: &str = "http://localhost:8080";

/// Message returned with a 400 for undecodable submissions.
pub const INVALID_SUBMISSION: &str = "Invalid submission";

/// Body of every non-2xx response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
        }
    }
}

/// Result of `POST /submit` as the client reads it.
///
/// `comparison` keeps the server's formatting, e.g. `"60.00"`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubmitResponse {
    pub correct: usize,
    pub total: usize,
    pub comparison: String,
}
