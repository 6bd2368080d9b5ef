//! HTTP client and the `get-questions` flow.

use std::io::{self, BufRead, Write};
use std::time::Duration;

use reqwest::StatusCode;
use thiserror::Error;
use tracing::debug;

use crate::models::{Question, Submission};
use crate::protocol::{ErrorResponse, SubmitResponse, QUESTIONS_PATH, SUBMIT_PATH};

use super::input::TokenReader;
use super::state::{InteractionState, QuizSession};
use super::ui;

const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Client errors. Each one ends the current command.
#[derive(Debug, Error)]
pub enum ClientError {
    #[error("Error creating client: {0}")]
    Build(#[source] reqwest::Error),

    #[error("Error fetching questions: {0}")]
    Fetch(#[source] reqwest::Error),

    #[error("Error decoding questions: {0}")]
    DecodeQuestions(#[source] reqwest::Error),

    #[error("Error submitting answers: {0}")]
    Submit(#[source] reqwest::Error),

    #[error("Error decoding result: {0}")]
    DecodeResult(#[source] reqwest::Error),

    #[error("Server returned {status}: {message}")]
    Status { status: StatusCode, message: String },

    #[error("Error reading answer: input closed")]
    InputClosed,

    #[error("IO error: {0}")]
    Io(#[from] io::Error),
}

/// Thin wrapper over the quiz HTTP API.
pub struct QuizClient {
    http_client: reqwest::Client,
    base_url: String,
}

impl QuizClient {
    pub fn new(base_url: &str) -> Result<Self, ClientError> {
        let http_client = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(ClientError::Build)?;

        Ok(Self {
            http_client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// GET /questions
    pub async fn fetch_questions(&self) -> Result<Vec<Question>, ClientError> {
        let url = format!("{}{}", self.base_url, QUESTIONS_PATH);
        debug!(url = %url, "Fetching questions");

        let response = self
            .http_client
            .get(&url)
            .send()
            .await
            .map_err(ClientError::Fetch)?;
        let response = check_status(response).await?;

        response.json().await.map_err(ClientError::DecodeQuestions)
    }

    /// POST /submit
    pub async fn submit_answers(&self, answers: &[i64]) -> Result<SubmitResponse, ClientError> {
        let url = format!("{}{}", self.base_url, SUBMIT_PATH);
        debug!(url = %url, answers = answers.len(), "Submitting answers");

        let response = self
            .http_client
            .post(&url)
            .json(&Submission::new(answers.to_vec()))
            .send()
            .await
            .map_err(ClientError::Submit)?;
        let response = check_status(response).await?;

        response.json().await.map_err(ClientError::DecodeResult)
    }
}

async fn check_status(response: reqwest::Response) -> Result<reqwest::Response, ClientError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let text = response.text().await.unwrap_or_default();
    let message = serde_json::from_str::<ErrorResponse>(&text)
        .map(|e| e.error)
        .unwrap_or(text);
    Err(ClientError::Status { status, message })
}

/// Ask every question until each has a valid choice.
///
/// Leaves the session in `Submitting`.
pub fn collect_answers<R: BufRead, W: Write>(
    session: &mut QuizSession<'_>,
    tokens: &mut TokenReader<R>,
    out: &mut W,
) -> Result<(), ClientError> {
    loop {
        match session.state() {
            InteractionState::Presenting(_) | InteractionState::Retrying(_) => {
                if let Some(question) = session.current_question() {
                    ui::render_question(out, question)?;
                }
                session.presented();
            }
            InteractionState::AwaitingInput(_) => {
                if let Some(question) = session.current_question() {
                    ui::render_prompt(out, question)?;
                }
                let token = tokens.next_token()?.ok_or(ClientError::InputClosed)?;
                if !session.answer(&token) {
                    ui::render_invalid(out)?;
                }
            }
            InteractionState::Submitting | InteractionState::Done => return Ok(()),
        }
    }
}

/// Fetch the questions, ask them, submit the answers and show the result.
pub async fn get_questions<R: BufRead, W: Write>(
    client: &QuizClient,
    input: R,
    out: &mut W,
) -> Result<SubmitResponse, ClientError> {
    let questions = client.fetch_questions().await?;

    ui::render_header(out)?;
    let mut session = QuizSession::new(&questions);
    let mut tokens = TokenReader::new(input);
    collect_answers(&mut session, &mut tokens, out)?;

    let result = client.submit_answers(session.answers()).await?;
    session.finish();

    ui::render_result(out, &result)?;
    Ok(result)
}

/// Run `get-questions` against `base_url`, printing any error to `out`.
///
/// Errors never escape; the command simply stops.
pub async fn run<R: BufRead, W: Write>(base_url: &str, input: R, out: &mut W) {
    let outcome = match QuizClient::new(base_url) {
        Ok(client) => get_questions(&client, input, out).await.map(|_| ()),
        Err(e) => Err(e),
    };

    if let Err(e) = outcome {
        let _ = writeln!(out, "{}", e);
    }
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use super::*;

    fn questions() -> Vec<Question> {
        vec![
            Question::new(1, "First", &["a", "b", "c"], 2),
            Question::new(2, "Second", &["a", "b"], 1),
        ]
    }

    #[test]
    fn test_collect_answers_with_retries() {
        let questions = questions();
        let mut session = QuizSession::new(&questions);
        let mut tokens = TokenReader::new(Cursor::new("7\nthree\n3\n0 2\n"));
        let mut out = Vec::new();

        collect_answers(&mut session, &mut tokens, &mut out).unwrap();

        assert_eq!(session.state(), InteractionState::Submitting);
        assert_eq!(session.answers(), &[2, 1]);

        let text = String::from_utf8(out).unwrap();
        assert_eq!(text.matches("Invalid input. Please try again.").count(), 3);
        assert_eq!(text.matches("1. First").count(), 3);
        assert_eq!(text.matches("2. Second").count(), 2);
    }

    #[test]
    fn test_collect_answers_input_closed() {
        let questions = questions();
        let mut session = QuizSession::new(&questions);
        let mut tokens = TokenReader::new(Cursor::new("1\n"));
        let mut out = Vec::new();

        let err = collect_answers(&mut session, &mut tokens, &mut out).unwrap_err();
        assert!(matches!(err, ClientError::InputClosed));
        assert_eq!(session.state(), InteractionState::AwaitingInput(1));
    }

    #[test]
    fn test_base_url_trailing_slash() {
        let client = QuizClient::new("http://localhost:8080/").unwrap();
        assert_eq!(client.base_url(), "http://localhost:8080");
    }
}
