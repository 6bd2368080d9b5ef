//! HTTP server startup and shutdown.

use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::path::PathBuf;

use tokio::net::TcpListener;
use tokio::signal;
use tracing::{info, warn};

use crate::data::{default_questions, load_questions_from_json};
use crate::protocol::DEFAULT_PORT;
use crate::QuizError;

use super::routes::build_router;
use super::state::ServerState;
use super::store::QuestionStore;

/// Server settings, filled in from the command line.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub bind: IpAddr,
    pub port: u16,
    /// JSON question file. The built-in set is used when absent.
    pub questions: Option<PathBuf>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind: IpAddr::V4(Ipv4Addr::UNSPECIFIED),
            port: DEFAULT_PORT,
            questions: None,
        }
    }
}

impl ServerConfig {
    pub fn addr(&self) -> SocketAddr {
        SocketAddr::new(self.bind, self.port)
    }

    /// Load and validate the question set. Fails on an empty set.
    pub fn load_store(&self) -> Result<QuestionStore, QuizError> {
        let questions = match &self.questions {
            Some(path) => {
                info!("Loading questions from {}", path.display());
                load_questions_from_json(path)?
            }
            None => default_questions(),
        };

        Ok(QuestionStore::new(questions)?)
    }
}

/// Run the quiz server until Ctrl+C or SIGTERM.
pub async fn run(config: ServerConfig) -> Result<(), QuizError> {
    let store = config.load_store()?;
    info!("Loaded {} questions", store.list().len());

    let app = build_router(ServerState::new(store));

    let addr = config.addr();
    let listener = TcpListener::bind(addr).await?;
    info!("Server is running on http://{}", listener.local_addr()?);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server shutdown complete");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            warn!("Failed to listen for Ctrl+C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(e) => {
                warn!("Failed to listen for SIGTERM: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => info!("Received Ctrl+C, shutting down"),
        _ = terminate => info!("Received terminate signal, shutting down"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = ServerConfig::default();
        assert_eq!(config.addr().port(), 8080);
        assert!(config.questions.is_none());
        assert_eq!(config.load_store().unwrap().list().len(), 5);
    }

    #[test]
    fn test_missing_question_file_fails_startup() {
        let config = ServerConfig {
            questions: Some(PathBuf::from("/no/such/questions.json")),
            ..ServerConfig::default()
        };
        assert!(matches!(config.load_store(), Err(QuizError::Load(_))));
    }

    #[test]
    fn test_empty_question_file_fails_startup() {
        let path = std::env::temp_dir().join(format!("quiz-api-empty-{}.json", std::process::id()));
        std::fs::write(&path, "[]").unwrap();
        let config = ServerConfig {
            questions: Some(path.clone()),
            ..ServerConfig::default()
        };
        let result = config.load_store();
        std::fs::remove_file(&path).unwrap();

        assert!(matches!(result, Err(QuizError::Store(_))));
    }
}
