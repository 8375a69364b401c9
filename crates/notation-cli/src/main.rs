//! Move notation filter
//!
//! Reads one JSON move bundle per line on stdin and writes the notation of
//! each move on stdout. Diagnostics go to stderr.

mod config;
mod error;

use std::io::{self, BufRead, Write};

use notation_core::{MoveInput, Notator};
use tracing::level_filters::LevelFilter;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use crate::config::NotationConfig;

/// `RUST_LOG` directives, falling back to `info` when none are given.
fn log_filter(directives: &str) -> EnvFilter {
    EnvFilter::builder()
        .with_default_directive(LevelFilter::INFO.into())
        .parse_lossy(directives)
}

fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(log_filter(&std::env::var("RUST_LOG").unwrap_or_default()))
        .init();

    // Load .env file for local dev
    let _ = dotenvy::dotenv();

    let config = NotationConfig::load()?;
    let notator = Notator::new(config.variant);

    let stdin = io::stdin();
    let mut out = io::stdout().lock();
    let mut moves = 0u64;
    let mut fallbacks = 0u64;

    for line in stdin.lock().lines() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        moves += 1;

        let input: MoveInput = match serde_json::from_str(&line) {
            Ok(input) => input,
            Err(e) => {
                warn!(line = moves, error = %e, "Skipping unreadable move bundle");
                fallbacks += 1;
                writeln!(out)?;
                continue;
            }
        };

        let notation = match notator.notate(&input) {
            Ok(notation) => notation,
            Err(e) => {
                warn!(line = moves, uci = %input.uci, error = %e, "Showing raw coordinate move");
                fallbacks += 1;
                input.uci
            }
        };
        writeln!(out, "{notation}")?;
    }

    out.flush()?;
    info!(moves, fallbacks, "Done");
    Ok(())
}
