//! Glimpse core domain logic
//!
//! This crate contains:
//! - The root orchestrator (view/window mode, open routing, focus)
//! - Settings, bookmark and rating stores
//! - Versioned migration and the persisted state record
//! - Collaborator traits for the explorer, viewer, window and router
//! - Configuration
//! - Error types

pub mod state;
pub mod settings;
pub mod bookmark;
pub mod rating;
pub mod capability;
pub mod navigation;
pub mod scheduler;
pub mod platform;
pub mod command;
pub mod migration;
pub mod persist;
pub mod config;
pub mod error;
pub mod orchestrator;

#[cfg(test)]
pub(crate) mod testing;

pub use state::{AppState, ViewMode, WindowMode, PRODUCT_NAME};
pub use settings::{SettingsState, DEFAULT_EXTENSIONS};
pub use bookmark::BookmarkState;
pub use rating::RatingState;
pub use capability::{
    Explorer, Viewer, FileProbe, FsProbe, FileInfo, WindowChrome, UiSurface, Selector,
};
pub use navigation::{Navigator, MemoryNavigator, Route};
pub use scheduler::{Scheduler, NextTick, Immediate, UiTask, UiAction};
pub use platform::PlatformPolicy;
pub use command::Action;
pub use persist::{
    PersistedState, StateStorage, JsonFileStorage, MemoryStorage, rehydrate,
};
pub use config::{AppConfig, GeneralConfig, WindowConfig, StorageConfig};
pub use error::AppError;
pub use orchestrator::{Orchestrator, Collaborators};
