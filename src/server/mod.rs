//! Quiz server module.
//!
//! Serves the question list and scores submissions over HTTP.

mod aggregator;
mod routes;
mod server;
mod state;
mod store;

pub use aggregator::{AggregateState, Aggregator};
pub use routes::{build_router, SubmitError};
pub use server::{run, ServerConfig};
pub use state::{score_answers, ServerState};
pub use store::{QuestionStore, StoreError};
