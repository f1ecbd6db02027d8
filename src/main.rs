// Client Service — Application Entry Point
//
// Parses CLI arguments, initializes structured logging and dispatches to the
// command handler. Log output never includes passwords or credentials.

use clap::Parser;
use tracing_subscriber::EnvFilter;

use client_service::cli::{execute, Cli};

fn main() {
    // RUST_LOG=client_service=debug for verbose output.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("client_service=info")),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    if let Err(e) = execute(cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
