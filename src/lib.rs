//! # quiz-api
//!
//! A multiple-choice quiz served over HTTP, with a terminal client.
//!
//! The server hands out a fixed question list, scores submitted answers by
//! position and reports how the whole population of quizzers has done so far.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use quiz_api::server::{self, ServerConfig};
//! use quiz_api::QuizError;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), QuizError> {
//!     // Serve the built-in questions on port 8080
//!     server::run(ServerConfig::default()).await
//! }
//! ```

pub mod client;
mod data;
mod models;
pub mod protocol;
pub mod server;

use std::io;

use thiserror::Error;

pub use data::{default_questions, load_questions_from_json, LoadError};
pub use models::{Percentage, Question, ScoreResult, Submission};
pub use server::StoreError;

/// Error type for server startup.
#[derive(Debug, Error)]
pub enum QuizError {
    /// Error loading questions from file.
    #[error("Failed to load questions: {0}")]
    Load(#[from] LoadError),
    /// The question set cannot be served.
    #[error("Invalid question set: {0}")]
    Store(#[from] StoreError),
    /// IO error while binding or serving.
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
}
