//! Collaborators the orchestrator drives but does not own the internals of

use std::fmt;
use std::path::{Path, PathBuf};

pub use app_fs::FileInfo;

/// Directory listing module
pub trait Explorer {
    /// Build the listing for the starting directory
    fn initialize(&mut self, directory: &Path);

    /// Switch the browsed directory. Returns false if the explorer refused it.
    fn change_directory(&mut self, dirpath: &Path) -> bool;
}

/// Content viewer module
pub trait Viewer {
    fn load_files(&mut self, filepaths: &[PathBuf]);

    /// Is a load still in flight?
    fn is_loading(&self) -> bool;
}

/// Answers "is this path a directory"
pub trait FileProbe {
    fn probe(&self, path: &Path) -> FileInfo;
}

/// Probe backed by the real file system
#[derive(Debug, Default, Clone, Copy)]
pub struct FsProbe;

impl FileProbe for FsProbe {
    fn probe(&self, path: &Path) -> FileInfo {
        app_fs::probe(path)
    }
}

/// Window decorations
pub trait WindowChrome {
    fn set_full_screen(&mut self, full_screen: bool);
    fn set_menu_bar_visible(&mut self, visible: bool);
    fn set_title(&mut self, title: &str);
}

/// Named UI targets for deferred focus/select
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Selector {
    DirectoryInput,
    QueryInput,
    ExplorerTable,
}

impl Selector {
    pub fn name(&self) -> &'static str {
        match self {
            Selector::DirectoryInput => "directory-input",
            Selector::QueryInput => "query-input",
            Selector::ExplorerTable => "explorer-table",
        }
    }
}

impl fmt::Display for Selector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Rendered UI that can take focus or text selection.
///
/// Both return false when the target is not currently rendered.
pub trait UiSurface {
    fn focus(&mut self, target: Selector) -> bool;
    fn select(&mut self, target: Selector) -> bool;
}
