use std::net::IpAddr;
use std::path::PathBuf;

use clap::Parser;
use quiz_api::protocol::DEFAULT_PORT;
use quiz_api::server::{self, ServerConfig};
use tracing::error;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(version, about = "Quiz HTTP server", long_about = None)]
struct Args {
    /// Port to listen on
    #[arg(short, long, default_value_t = DEFAULT_PORT)]
    port: u16,

    /// Address to bind
    #[arg(short, long, default_value = "0.0.0.0")]
    bind: IpAddr,

    /// JSON file to load the questions from (built-in set if omitted)
    #[arg(short, long)]
    questions: Option<PathBuf>,
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let args = Args::parse();
    let config = ServerConfig {
        bind: args.bind,
        port: args.port,
        questions: args.questions,
    };

    if let Err(e) = server::run(config).await {
        error!("Error running server: {}", e);
        std::process::exit(1);
    }
}
