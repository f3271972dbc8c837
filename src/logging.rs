//! Tracing setup.
//!
//! The game owns the terminal, so logs only go to a file. Without a log path
//! no subscriber is installed and every event is discarded.

use std::fs::OpenOptions;
use std::path::Path;
use std::sync::Mutex;

use anyhow::{Context, Result};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

const DEFAULT_FILTER: &str = "neon_snake=info,neon_snake_engine=info,neon_snake_wallet=info";

pub fn init(log_path: Option<&Path>) -> Result<()> {
    let Some(path) = log_path else {
        return Ok(());
    };

    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("opening log file {}", path.display()))?;

    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| DEFAULT_FILTER.into()))
        .with(
            tracing_subscriber::fmt::layer()
                .with_ansi(false)
                .with_writer(Mutex::new(file)),
        )
        .try_init()
        .context("installing tracing subscriber")?;
    Ok(())
}
