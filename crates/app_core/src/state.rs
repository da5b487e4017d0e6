//! Top-level application state

use std::path::{Path, PathBuf};

/// Window title used when none is given
pub const PRODUCT_NAME: &str = "Glimpse";

/// Which screen has the user's attention
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewMode {
    Explorer,
    Viewer,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WindowMode {
    Windowed,
    FullScreen,
}

/// Root state owned by the orchestrator.
///
/// Only `directory` survives a restart; the rest is rebuilt on every launch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppState {
    /// Window title
    pub title: String,

    /// Last transient notification
    pub message: Option<String>,

    /// Is the window currently full-screen?
    pub full_screen: bool,

    /// Is the content viewer active?
    pub viewing: bool,

    /// Current browsing root
    pub directory: PathBuf,
}

impl AppState {
    pub fn new(directory: PathBuf) -> Self {
        Self {
            title: PRODUCT_NAME.to_string(),
            message: None,
            full_screen: false,
            viewing: false,
            directory,
        }
    }

    pub fn set_title(&mut self, title: impl Into<String>) {
        self.title = title.into();
    }

    pub fn set_message(&mut self, message: Option<String>) {
        self.message = message;
    }

    pub fn set_full_screen(&mut self, full_screen: bool) {
        self.full_screen = full_screen;
    }

    pub fn set_viewing(&mut self, viewing: bool) {
        self.viewing = viewing;
    }

    pub fn set_directory(&mut self, directory: &Path) {
        self.directory = directory.to_path_buf();
    }

    pub fn view_mode(&self) -> ViewMode {
        if self.viewing {
            ViewMode::Viewer
        } else {
            ViewMode::Explorer
        }
    }

    pub fn window_mode(&self) -> WindowMode {
        if self.full_screen {
            WindowMode::FullScreen
        } else {
            WindowMode::Windowed
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(app_fs::home_dir())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_modes() {
        let state = AppState::new(PathBuf::from("/home/u"));
        assert_eq!(state.title, PRODUCT_NAME);
        assert_eq!(state.message, None);
        assert_eq!(state.view_mode(), ViewMode::Explorer);
        assert_eq!(state.window_mode(), WindowMode::Windowed);
    }

    #[test]
    fn test_message_last_write_wins() {
        let mut state = AppState::new(PathBuf::from("/"));
        state.set_message(Some("first".into()));
        state.set_message(Some("second".into()));
        assert_eq!(state.message.as_deref(), Some("second"));
    }
}
