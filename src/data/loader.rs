use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::models::Question;

/// Errors raised while reading a question file.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to parse {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// The built-in question set served when no file is given.
pub fn default_questions() -> Vec<Question> {
    vec![
        Question::new(
            1,
            "What is the capital of France?",
            &["Berlin", "Madrid", "Paris", "Rome"],
            2,
        ),
        Question::new(2, "What is 2 + 2?", &["3", "4", "5", "6"], 1),
        Question::new(
            3,
            "What is the color of the sky?",
            &["Green", "Blue", "Red", "Yellow"],
            1,
        ),
        Question::new(
            4,
            "Which planet is closest to the Sun?",
            &["Earth", "Mars", "Mercury", "Venus"],
            2,
        ),
        Question::new(
            5,
            "What is the boiling point of water?",
            &["50°C", "100°C", "75°C", "200°C"],
            1,
        ),
    ]
}

/// Read a JSON array of questions from `path`.
///
/// Content is not validated here; `QuestionStore::new` does that.
pub fn load_questions_from_json<P: AsRef<Path>>(path: P) -> Result<Vec<Question>, LoadError> {
    let path = path.as_ref();

    let json_content = fs::read_to_string(path).map_err(|source| LoadError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    serde_json::from_str(&json_content).map_err(|source| LoadError::Parse {
        path: path.to_path_buf(),
        source,
    })
}
