//! Application wiring

use crate::host;
use anyhow::Result;
use app_core::{rehydrate, AppConfig, JsonFileStorage, Orchestrator, PersistedState, ViewMode};
use std::path::PathBuf;

/// Build the orchestrator from saved state and handle one open request
pub fn run(config: &AppConfig, paths: &[PathBuf]) -> Result<()> {
    let app = start(config, paths);

    let state = app.state();
    if let Some(message) = &state.message {
        eprintln!("{}", message);
    }
    match app.view_mode() {
        ViewMode::Explorer => println!("explorer: {}", state.directory.display()),
        ViewMode::Viewer => println!("viewer: {} file(s)", paths.len()),
    }

    tracing::info!("Glimpse finished");
    Ok(())
}

fn start(config: &AppConfig, paths: &[PathBuf]) -> Orchestrator {
    let storage_path = config
        .storage
        .state_file
        .clone()
        .unwrap_or_else(JsonFileStorage::default_path);
    let mut storage = JsonFileStorage::new(storage_path);
    let (persisted, load_error) = match rehydrate(&mut storage) {
        Ok(persisted) => (persisted, None),
        Err(e) => (PersistedState::default(), Some(e)),
    };

    let mut app = Orchestrator::new(persisted, host::collaborators(), Box::new(storage))
        .with_platform(config.platform_policy());
    if let Some(e) = load_error {
        app.show_message(e.user_message());
    }

    app.initialize();
    if !paths.is_empty() {
        app.open(paths);
    }
    app.after_render();
    app
}
