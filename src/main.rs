//! `tasktrail` command-line entry point.

use clap::{Parser, Subcommand};
use tasktrail::{config::ServiceConfig, server, telemetry};

#[derive(Parser, Debug)]
#[command(name = "tasktrail")]
#[command(author, version, about = "Task activity tracking service with an audit trail", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug, Clone, Copy, PartialEq, Eq)]
enum Command {
    /// Run the HTTP server (default).
    Serve,
    /// Apply database migrations and exit.
    Migrate,
}

#[tokio::main]
async fn main() -> Result<(), server::StartupError> {
    let cli = Cli::parse();
    let config = ServiceConfig::from_env()?;
    telemetry::init_tracing(config.log_format)?;

    match cli.command.unwrap_or(Command::Serve) {
        Command::Serve => server::serve(&config).await,
        Command::Migrate => server::migrate(&config).await,
    }
}
