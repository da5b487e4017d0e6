//! Persisted subset of application state

use crate::bookmark::BookmarkState;
use crate::error::AppError;
use crate::rating::RatingState;
use crate::settings::SettingsState;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::cell::RefCell;
use std::path::{Path, PathBuf};
use std::rc::Rc;

/// The record written to storage after every persisted mutation.
///
/// Title, message, full-screen and viewing flags are not part of it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PersistedState {
    /// Schema marker; records from before the marker read as 0
    pub version: u32,
    pub directory: PathBuf,
    pub bookmark: BookmarkState,
    pub rating: RatingState,
    pub settings: SettingsState,
}

impl Default for PersistedState {
    fn default() -> Self {
        Self {
            version: 0,
            directory: app_fs::home_dir(),
            bookmark: BookmarkState::default(),
            rating: RatingState::default(),
            settings: SettingsState::default(),
        }
    }
}

impl PersistedState {
    pub fn to_json(&self) -> Result<String, AppError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn from_json(json: &str) -> Result<Self, AppError> {
        Ok(serde_json::from_str(json)?)
    }
}

/// Where the persisted record lives
pub trait StateStorage {
    /// `Ok(None)` when nothing was saved yet
    fn load(&self) -> Result<Option<PersistedState>, AppError>;
    fn save(&mut self, state: &PersistedState) -> Result<(), AppError>;

    /// Keep an unreadable record out of the way of the next save.
    /// Returns where it was moved, if anywhere.
    fn set_aside(&mut self) -> Result<Option<PathBuf>, AppError> {
        Ok(None)
    }
}

/// Load the saved record.
///
/// `Ok` carries defaults when nothing was saved yet. On `Err` the unreadable
/// record has been set aside and the caller starts from defaults.
pub fn rehydrate(storage: &mut dyn StateStorage) -> Result<PersistedState, AppError> {
    match storage.load() {
        Ok(Some(state)) => {
            tracing::info!(version = state.version, "State rehydrated");
            Ok(state)
        }
        Ok(None) => {
            tracing::info!("No saved state, using defaults");
            Ok(PersistedState::default())
        }
        Err(e) => {
            match storage.set_aside() {
                Ok(Some(moved)) => {
                    tracing::warn!("Saved state unreadable, kept as {:?}: {}", moved, e)
                }
                Ok(None) => tracing::warn!("Failed to load saved state: {}", e),
                Err(aside) => tracing::error!("Failed to load saved state: {} ({})", e, aside),
            }
            Err(e)
        }
    }
}

/// JSON file on disk
#[derive(Debug, Clone)]
pub struct JsonFileStorage {
    path: PathBuf,
}

impl JsonFileStorage {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Default location under the platform data directory
    pub fn default_path() -> PathBuf {
        ProjectDirs::from("com", "Glimpse", "Glimpse")
            .map(|dirs| dirs.data_dir().join("state.json"))
            .unwrap_or_else(|| PathBuf::from("./state.json"))
    }
}

impl StateStorage for JsonFileStorage {
    fn load(&self) -> Result<Option<PersistedState>, AppError> {
        if !self.path.exists() {
            return Ok(None);
        }
        let content = std::fs::read_to_string(&self.path)?;
        PersistedState::from_json(&content).map(Some)
    }

    fn save(&mut self, state: &PersistedState) -> Result<(), AppError> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        // Write then rename so a crash never leaves half a record
        let tmp = self.path.with_extension("json.tmp");
        std::fs::write(&tmp, state.to_json()?)?;
        std::fs::rename(&tmp, &self.path)?;

        tracing::trace!("State saved to {:?}", self.path);
        Ok(())
    }

    fn set_aside(&mut self) -> Result<Option<PathBuf>, AppError> {
        if !self.path.exists() {
            return Ok(None);
        }
        let bad = self.path.with_extension("json.bad");
        std::fs::rename(&self.path, &bad)
            .map_err(|e| AppError::Storage(format!("cannot move {:?}: {}", self.path, e)))?;
        Ok(Some(bad))
    }
}

/// In-memory storage. Clones share the same slot.
#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
    slot: Rc<RefCell<Option<String>>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Raw serialized record, if any was saved
    pub fn raw(&self) -> Option<String> {
        self.slot.borrow().clone()
    }
}

impl StateStorage for MemoryStorage {
    fn load(&self) -> Result<Option<PersistedState>, AppError> {
        self.slot
            .borrow()
            .as_deref()
            .map(PersistedState::from_json)
            .transpose()
    }

    fn save(&mut self, state: &PersistedState) -> Result<(), AppError> {
        *self.slot.borrow_mut() = Some(state.to_json()?);
        Ok(())
    }
}
