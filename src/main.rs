//! mail2hash CLI
//!
//! Prints the mail2web viewer link for a mail file.

use anyhow::Result;
use clap::Parser;
use mail2hash::cli::{generate, Cli};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Parse command line arguments
    let cli = Cli::parse();

    // Initialize logging on stderr, stdout carries only the link
    let default_level = if cli.verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .init();

    generate::execute(&cli)
}
