//! Quiz client module.
//!
//! Fetches questions over HTTP, prompts for answers line by line and
//! submits them.

mod client;
mod input;
mod state;
mod ui;

pub use client::{collect_answers, get_questions, run, ClientError, QuizClient};
pub use input::TokenReader;
pub use state::{parse_choice, InteractionState, QuizSession};
