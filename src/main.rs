//! `qr-term` entry point.

use std::io::{self, IsTerminal, Read};
use std::process::ExitCode;

use clap::Parser;
use tracing::warn;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use qr_term::cli::Cli;

fn main() -> ExitCode {
    // Logs go to stderr so stdout stays clean for piping.
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(io::stderr),
        )
        .init();

    let cli = Cli::parse();

    let mut stdout = io::stdout().lock();
    match cli.run(read_stdin, &mut stdout) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e:#}");
            ExitCode::FAILURE
        }
    }
}

/// Reads piped input. Returns `None` when stdin is a terminal.
fn read_stdin() -> Option<String> {
    let stdin = io::stdin();
    if stdin.is_terminal() {
        return None;
    }
    let mut buf = String::new();
    match stdin.lock().read_to_string(&mut buf) {
        Ok(_) => Some(buf),
        Err(e) => {
            warn!("failed to read stdin: {e}");
            None
        }
    }
}
