//! Glimpse - image viewer state host
//!
//! Headless entry point: restores saved state, initializes the
//! orchestrator and routes command-line paths through `open`.

mod app;
mod host;

use anyhow::Result;
use std::path::PathBuf;

fn main() -> Result<()> {
    let loaded = app_core::AppConfig::load();
    let config = loaded.as_ref().cloned().unwrap_or_default();

    // Initialize logging and panic hook before anything can fail quietly
    app_log::init(&config.general.log_level)?;

    if let Err(e) = &loaded {
        tracing::warn!("Failed to load configuration, using defaults: {:#}", e);
    }

    if let Err(e) = app_log::cleanup_old_logs(config.general.log_retention_days) {
        tracing::warn!("Failed to cleanup old logs: {}", e);
    }

    tracing::info!("Glimpse starting...");

    let paths: Vec<PathBuf> = std::env::args_os().skip(1).map(PathBuf::from).collect();
    app::run(&config, &paths)
}
