//! `blocks`: a guided tour of closures, iterators and block-style APIs.
//!
//! ```bash
//! blocks list                 # lessons in tour order
//! blocks show sum-odds        # one lesson
//! blocks tour                 # everything, banner first
//! blocks sum-by 1 4 7 --style explicit --transform cube
//! blocks --json tour          # {"ok": true, "data": [...]}
//! ```

mod cli;
mod commands;
mod domain;
mod services;

use anyhow::Result;
use clap::Parser;
use cli::Cli;
use commands::{handle_playground_commands, handle_tour_commands};
use services::config::ConfigLoader;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let config = ConfigLoader::new()
        .with_explicit_file(cli.config.clone())
        .load()?;

    if handle_tour_commands(&cli, &config)? {
        return Ok(());
    }
    if handle_playground_commands(&cli, &config)? {
        return Ok(());
    }

    anyhow::bail!("unhandled command: {:?}", cli.command)
}

/// Stdout carries lesson output, so logs go to stderr. `RUST_LOG` wins over `-v`.
fn init_logging(verbose: bool) {
    let level = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
