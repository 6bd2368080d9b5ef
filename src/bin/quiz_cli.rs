use std::io;

use clap::{Parser, Subcommand};
use quiz_api::client;
use quiz_api::protocol::DEFAULT_SERVER_URL;

#[derive(Parser, Debug)]
#[command(name = "quiz-cli", version, about = "Take the quiz from your terminal", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Fetch quiz questions, answer them and see your score
    GetQuestions,
}

#[tokio::main]
async fn main() {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            let _ = e.print();
            std::process::exit(if e.use_stderr() { 1 } else { 0 });
        }
    };

    match cli.command {
        Command::GetQuestions => {
            let stdin = io::stdin();
            let mut stdout = io::stdout();
            client::run(DEFAULT_SERVER_URL, stdin.lock(), &mut stdout).await;
        }
    }
}
