//! HTTP routes.

use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use thiserror::Error;
use tower_http::trace::TraceLayer;
use tracing::{debug, warn};

use crate::models::{Question, ScoreResult, Submission};
use crate::protocol::{ErrorResponse, INVALID_SUBMISSION, QUESTIONS_PATH, SUBMIT_PATH};

use super::state::ServerState;

/// Build the application router.
pub fn build_router(state: ServerState) -> Router {
    Router::new()
        .route(QUESTIONS_PATH, get(get_questions))
        .route(SUBMIT_PATH, post(submit_answers))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// GET /questions
async fn get_questions(State(state): State<ServerState>) -> Json<Vec<Question>> {
    Json(state.questions().to_vec())
}

/// POST /submit
///
/// Undecodable bodies are rejected before the aggregate is touched.
async fn submit_answers(
    State(state): State<ServerState>,
    payload: Result<Json<Submission>, JsonRejection>,
) -> Result<Json<ScoreResult>, SubmitError> {
    let Json(submission) = payload?;
    let result = state.handle(&submission);

    debug!(
        correct = result.correct,
        total = result.total,
        comparison = %result.comparison_percent,
        "Scored submission"
    );

    Ok(Json(result))
}

/// Submission errors
#[derive(Debug, Error)]
pub enum SubmitError {
    #[error("invalid submission: {0}")]
    InvalidSubmission(String),
}

impl From<JsonRejection> for SubmitError {
    fn from(rejection: JsonRejection) -> Self {
        SubmitError::InvalidSubmission(rejection.body_text())
    }
}

impl IntoResponse for SubmitError {
    fn into_response(self) -> Response {
        warn!("Rejected submission: {}", self);

        let (status, message) = match self {
            SubmitError::InvalidSubmission(_) => (StatusCode::BAD_REQUEST, INVALID_SUBMISSION),
        };

        (status, Json(ErrorResponse::new(message))).into_response()
    }
}
