use clap::Parser;
use miette::{IntoDiagnostic, Result};
use paymenu::interfaces::console::session::MenuSession;
use std::io;
use tracing::Level;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// Interactive menu that simulates credit card and PayPal payments.
///
/// Nothing is charged, stored, or validated. Set RUST_LOG to see diagnostics
/// on standard error.
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {}

fn main() -> Result<()> {
    Cli::parse();

    // Logs go to stderr so stdout carries only the menu transcript
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(io::stderr))
        .with(
            EnvFilter::builder()
                .with_default_directive(Level::WARN.into())
                .from_env_lossy(),
        )
        .init();

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut session = MenuSession::new(stdin.lock(), stdout.lock());
    session.run().into_diagnostic()?;

    Ok(())
}
