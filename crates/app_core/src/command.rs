//! Inbound actions from the UI layer

use crate::capability::Selector;
use crate::navigation::Route;
use std::collections::BTreeSet;
use std::path::PathBuf;

/// Everything the UI can ask the orchestrator to do
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    // Lifecycle
    Initialize,
    Migrate,

    // Navigation
    Open(Vec<PathBuf>),
    OpenDirectory(PathBuf),
    ChangeRoute(Route),

    // View
    ShowViewer(Vec<PathBuf>),
    DismissViewer,
    EnterFullScreen,
    LeaveFullScreen,
    WindowFullScreenChanged(bool),

    // UI
    Focus(Selector),
    Select(Selector),
    ChangeTitle(Option<String>),
    ShowMessage(String),

    // Settings
    SetDarkTheme(bool),
    SetFullScreen(bool),
    SetRecursive(bool),
    SetImageStretched(bool),
    SetExtensions(BTreeSet<String>),

    // Metadata
    SetBookmarks(Vec<String>),
    SetRating { filepath: String, rating: i32 },
}

impl Action {
    pub const APP_INITIALIZE: &'static str = "app.initialize";
    pub const APP_MIGRATE: &'static str = "app.migrate";

    pub const NAV_OPEN: &'static str = "nav.open";
    pub const NAV_OPEN_DIRECTORY: &'static str = "nav.open_directory";
    pub const NAV_CHANGE_ROUTE: &'static str = "nav.change_route";

    pub const VIEW_SHOW_VIEWER: &'static str = "view.show_viewer";
    pub const VIEW_DISMISS_VIEWER: &'static str = "view.dismiss_viewer";
    pub const VIEW_ENTER_FULLSCREEN: &'static str = "view.enter_fullscreen";
    pub const VIEW_LEAVE_FULLSCREEN: &'static str = "view.leave_fullscreen";
    pub const VIEW_FULLSCREEN_CHANGED: &'static str = "view.fullscreen_changed";

    pub const UI_FOCUS: &'static str = "ui.focus";
    pub const UI_SELECT: &'static str = "ui.select";
    pub const UI_CHANGE_TITLE: &'static str = "ui.change_title";
    pub const UI_SHOW_MESSAGE: &'static str = "ui.show_message";

    pub const SETTINGS_DARK_THEME: &'static str = "settings.set_dark_theme";
    pub const SETTINGS_FULLSCREEN: &'static str = "settings.set_fullscreen";
    pub const SETTINGS_RECURSIVE: &'static str = "settings.set_recursive";
    pub const SETTINGS_IMAGE_STRETCHED: &'static str = "settings.set_image_stretched";
    pub const SETTINGS_EXTENSIONS: &'static str = "settings.set_extensions";

    pub const META_SET_BOOKMARKS: &'static str = "meta.set_bookmarks";
    pub const META_SET_RATING: &'static str = "meta.set_rating";

    /// Stable dotted id, used for logging and key bindings
    pub fn id(&self) -> &'static str {
        match self {
            Action::Initialize => Self::APP_INITIALIZE,
            Action::Migrate => Self::APP_MIGRATE,
            Action::Open(_) => Self::NAV_OPEN,
            Action::OpenDirectory(_) => Self::NAV_OPEN_DIRECTORY,
            Action::ChangeRoute(_) => Self::NAV_CHANGE_ROUTE,
            Action::ShowViewer(_) => Self::VIEW_SHOW_VIEWER,
            Action::DismissViewer => Self::VIEW_DISMISS_VIEWER,
            Action::EnterFullScreen => Self::VIEW_ENTER_FULLSCREEN,
            Action::LeaveFullScreen => Self::VIEW_LEAVE_FULLSCREEN,
            Action::WindowFullScreenChanged(_) => Self::VIEW_FULLSCREEN_CHANGED,
            Action::Focus(_) => Self::UI_FOCUS,
            Action::Select(_) => Self::UI_SELECT,
            Action::ChangeTitle(_) => Self::UI_CHANGE_TITLE,
            Action::ShowMessage(_) => Self::UI_SHOW_MESSAGE,
            Action::SetDarkTheme(_) => Self::SETTINGS_DARK_THEME,
            Action::SetFullScreen(_) => Self::SETTINGS_FULLSCREEN,
            Action::SetRecursive(_) => Self::SETTINGS_RECURSIVE,
            Action::SetImageStretched(_) => Self::SETTINGS_IMAGE_STRETCHED,
            Action::SetExtensions(_) => Self::SETTINGS_EXTENSIONS,
            Action::SetBookmarks(_) => Self::META_SET_BOOKMARKS,
            Action::SetRating { .. } => Self::META_SET_RATING,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ids_are_namespaced() {
        let actions = [
            Action::Initialize,
            Action::Open(vec![PathBuf::from("a")]),
            Action::DismissViewer,
            Action::Focus(Selector::ExplorerTable),
            Action::SetExtensions(BTreeSet::new()),
            Action::SetRating { filepath: "a".into(), rating: 1 },
        ];
        for action in &actions {
            let (group, name) = action.id().split_once('.').unwrap();
            assert!(!group.is_empty() && !name.is_empty());
        }
    }
}
