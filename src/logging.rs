use eyre::{eyre, Result};
use std::io;
use tracing::Level;

/// Diagnostics go to stderr; stdout carries only the ranking.
pub fn setup_logging(level: Level) -> Result<()> {
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(io::stderr)
        .try_init()
        .map_err(|e| eyre!("Failed to install tracing subscriber: {e}"))
}
