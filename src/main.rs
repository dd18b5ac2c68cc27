//! lgtm: inspect per-project approval policy for the LGTM review bot.
//!
//! This is the main entry point for the `lgtm` CLI. It installs logging,
//! parses arguments, dispatches to the command handler, and maps errors to
//! exit codes.

mod cli;
mod commands;

use cli::Cli;
use lgtm::exit_codes;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
    init_logging();

    let cli = Cli::parse_args();

    match commands::dispatch(cli.command) {
        Ok(()) => ExitCode::from(exit_codes::SUCCESS as u8),
        Err(err) => {
            // Print user-actionable error message to stderr
            eprintln!("Error: {}", err);

            ExitCode::from(err.exit_code() as u8)
        }
    }
}

/// Log to stderr, filtered by `RUST_LOG` (default: warn).
fn init_logging() {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .init();
}
