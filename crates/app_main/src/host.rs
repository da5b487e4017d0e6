//! Headless collaborators
//!
//! Stand-ins for the explorer and viewer screens when no window is shown.
//! They keep just enough state to answer the orchestrator's questions.

use app_core::{
    Collaborators, Explorer, FsProbe, MemoryNavigator, Route, Selector, UiSurface, Viewer,
    WindowChrome,
};
use std::path::{Path, PathBuf};

#[derive(Debug, Default)]
pub struct HeadlessExplorer {
    directory: Option<PathBuf>,
}

impl Explorer for HeadlessExplorer {
    fn initialize(&mut self, directory: &Path) {
        tracing::info!(?directory, "Explorer ready");
        self.directory = Some(directory.to_path_buf());
    }

    fn change_directory(&mut self, dirpath: &Path) -> bool {
        let info = app_fs::probe(dirpath);
        if !info.directory {
            tracing::warn!("Not a directory: {:?}", dirpath);
            return false;
        }
        tracing::info!(from = ?self.directory, to = ?info.path, "Explorer changed directory");
        self.directory = Some(info.path);
        true
    }
}

#[derive(Debug, Default)]
pub struct HeadlessViewer {
    files: Vec<PathBuf>,
}

impl Viewer for HeadlessViewer {
    fn load_files(&mut self, filepaths: &[PathBuf]) {
        self.files = filepaths.to_vec();
        tracing::info!(count = self.files.len(), "Viewer loaded files");
    }

    // Loading completes inside load_files
    fn is_loading(&self) -> bool {
        false
    }
}

/// Window chrome that only logs
#[derive(Debug, Default)]
pub struct HeadlessWindow;

impl WindowChrome for HeadlessWindow {
    fn set_full_screen(&mut self, full_screen: bool) {
        tracing::debug!(full_screen, "Window full-screen");
    }

    fn set_menu_bar_visible(&mut self, visible: bool) {
        tracing::debug!(visible, "Menu bar");
    }

    fn set_title(&mut self, title: &str) {
        tracing::debug!(title, "Window title");
    }
}

/// Nothing is rendered, so every deferred target is absent
#[derive(Debug, Default)]
pub struct HeadlessSurface;

impl UiSurface for HeadlessSurface {
    fn focus(&mut self, target: Selector) -> bool {
        tracing::trace!(%target, "focus without surface");
        false
    }

    fn select(&mut self, target: Selector) -> bool {
        tracing::trace!(%target, "select without surface");
        false
    }
}

pub fn collaborators() -> Collaborators {
    Collaborators {
        explorer: Box::new(HeadlessExplorer::default()),
        viewer: Box::new(HeadlessViewer::default()),
        probe: Box::new(FsProbe),
        chrome: Box::new(HeadlessWindow),
        navigator: Box::new(MemoryNavigator::new(Route::Explorer)),
        surface: Box::new(HeadlessSurface),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_explorer_refuses_files() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("a.png");
        std::fs::write(&file, b"x").unwrap();

        let mut explorer = HeadlessExplorer::default();
        assert!(explorer.change_directory(dir.path()));
        assert!(!explorer.change_directory(&file));
        assert_eq!(explorer.directory.as_deref(), Some(dir.path()));
    }
}
