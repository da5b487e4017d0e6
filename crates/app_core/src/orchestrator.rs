//! Root orchestrator
//!
//! Owns the top-level [`AppState`] and the three persisted stores, and
//! drives the explorer, viewer, window chrome and router through the
//! traits in [`crate::capability`] and [`crate::navigation`].
//!
//! Every mutation of the persisted subset (directory, bookmarks, ratings,
//! settings) is followed by a write to the [`StateStorage`]. Write failures
//! are logged and never reach the caller.

use crate::bookmark::BookmarkState;
use crate::capability::{Explorer, FileProbe, Selector, UiSurface, Viewer, WindowChrome};
use crate::command::Action;
use crate::migration;
use crate::navigation::{Navigator, Route};
use crate::persist::{PersistedState, StateStorage};
use crate::platform::PlatformPolicy;
use crate::rating::RatingState;
use crate::scheduler::{NextTick, Scheduler, UiAction, UiTask};
use crate::settings::SettingsState;
use crate::state::{AppState, ViewMode, WindowMode, PRODUCT_NAME};
use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

/// External modules the orchestrator dispatches into
pub struct Collaborators {
    pub explorer: Box<dyn Explorer>,
    pub viewer: Box<dyn Viewer>,
    pub probe: Box<dyn FileProbe>,
    pub chrome: Box<dyn WindowChrome>,
    pub navigator: Box<dyn Navigator>,
    pub surface: Box<dyn UiSurface>,
}

pub struct Orchestrator {
    state: AppState,
    settings: SettingsState,
    bookmark: BookmarkState,
    rating: RatingState,
    /// Schema version of the persisted record
    version: u32,
    initialized: bool,

    host: Collaborators,
    storage: Box<dyn StateStorage>,
    scheduler: Box<dyn Scheduler>,
    platform: PlatformPolicy,
}

impl Orchestrator {
    /// Build from a rehydrated record. Transient state starts at defaults.
    pub fn new(
        persisted: PersistedState,
        host: Collaborators,
        storage: Box<dyn StateStorage>,
    ) -> Self {
        let PersistedState {
            version,
            directory,
            bookmark,
            rating,
            settings,
        } = persisted;

        Self {
            state: AppState::new(directory),
            settings,
            bookmark,
            rating,
            version,
            initialized: false,
            host,
            storage,
            scheduler: Box::new(NextTick::new()),
            platform: PlatformPolicy::current(),
        }
    }

    pub fn with_scheduler(mut self, scheduler: Box<dyn Scheduler>) -> Self {
        self.scheduler = scheduler;
        self
    }

    pub fn with_platform(mut self, platform: PlatformPolicy) -> Self {
        self.platform = platform;
        self
    }

    // ===== Read access =====

    pub fn state(&self) -> &AppState {
        &self.state
    }

    pub fn settings(&self) -> &SettingsState {
        &self.settings
    }

    pub fn bookmark(&self) -> &BookmarkState {
        &self.bookmark
    }

    pub fn rating(&self) -> &RatingState {
        &self.rating
    }

    pub fn view_mode(&self) -> ViewMode {
        self.state.view_mode()
    }

    pub fn window_mode(&self) -> WindowMode {
        self.state.window_mode()
    }

    /// Should the UI draw its own title bar?
    pub fn title_bar(&self) -> bool {
        self.platform.title_bar(self.state.full_screen)
    }

    pub fn is_available_file(&self, filepath: &Path) -> bool {
        self.settings.is_available_file(filepath)
    }

    /// The record that would be written to storage right now
    pub fn snapshot(&self) -> PersistedState {
        PersistedState {
            version: self.version,
            directory: self.state.directory.clone(),
            bookmark: self.bookmark.clone(),
            rating: self.rating.clone(),
            settings: self.settings.clone(),
        }
    }

    // ===== Lifecycle =====

    /// Run pending migrations and build the explorer listing. Once per launch.
    pub fn initialize(&mut self) {
        if self.initialized {
            tracing::debug!("Already initialized, ignoring");
            return;
        }

        let version = migration::run_pending(self.version, &mut self.bookmark, &mut self.rating);
        if version != self.version {
            tracing::info!(from = self.version, to = version, "Schema migrated");
            self.version = version;
            self.persist();
        }

        self.host.explorer.initialize(&self.state.directory);
        self.initialized = true;
        tracing::info!(directory = ?self.state.directory, "Orchestrator initialized");
    }

    /// Move legacy bookmarks into ratings. Safe to repeat.
    pub fn migrate(&mut self) {
        if self.bookmark.is_empty() {
            return;
        }
        tracing::info!(count = self.bookmark.bookmarks().len(), "Migrating bookmarks to ratings");
        migration::bookmarks_to_ratings(&mut self.bookmark, &mut self.rating);
        self.persist();
    }

    // ===== Navigation =====

    /// Route an open request: a single directory goes to the explorer,
    /// anything else goes to the viewer.
    pub fn open(&mut self, filepaths: &[PathBuf]) {
        let Some(first) = filepaths.first() else {
            tracing::warn!("Open requested with no paths");
            return;
        };

        let file = self.host.probe.probe(first);
        if filepaths.len() == 1 && file.directory {
            self.open_directory(&file.path);
        } else {
            self.show_viewer(filepaths);
        }
    }

    pub fn open_directory(&mut self, dirpath: &Path) {
        tracing::debug!(?dirpath, "Opening directory");
        if self.host.explorer.change_directory(dirpath) {
            self.set_directory(dirpath);
        }
        self.change_route(Route::Explorer);
    }

    pub fn change_route(&mut self, route: Route) {
        self.host.navigator.navigate(route);
    }

    // ===== View =====

    pub fn show_viewer(&mut self, filepaths: &[PathBuf]) {
        tracing::debug!(count = filepaths.len(), "Showing viewer");
        self.host.viewer.load_files(filepaths);
        self.state.set_viewing(true);
        if self.settings.full_screen {
            self.enter_full_screen();
        }
    }

    pub fn dismiss_viewer(&mut self) {
        if self.host.viewer.is_loading() {
            tracing::debug!("Viewer is loading, dismiss ignored");
            return;
        }
        if self.platform.leave_full_screen_on_dismiss(self.settings.full_screen) {
            self.leave_full_screen();
        }
        self.state.set_viewing(false);
        if self.host.navigator.current() == Some(Route::Explorer) {
            self.focus(Selector::ExplorerTable);
        }
    }

    pub fn enter_full_screen(&mut self) {
        self.host.chrome.set_full_screen(true);
        self.host.chrome.set_menu_bar_visible(false);
        self.state.set_full_screen(true);
    }

    pub fn leave_full_screen(&mut self) {
        self.host.chrome.set_full_screen(false);
        self.host.chrome.set_menu_bar_visible(true);
        self.state.set_full_screen(false);
    }

    /// The window changed full-screen state on its own (OS controls)
    pub fn window_full_screen_changed(&mut self, full_screen: bool) {
        self.state.set_full_screen(full_screen);
    }

    // ===== UI =====

    pub fn focus(&mut self, target: Selector) {
        self.schedule(UiTask::focus(target));
    }

    pub fn select(&mut self, target: Selector) {
        self.schedule(UiTask::select(target));
    }

    /// Run deferred UI tasks. Call once the render pass has finished.
    pub fn after_render(&mut self) -> usize {
        let due = self.scheduler.take_due();
        let count = due.len();
        for task in due {
            self.apply(task);
        }
        count
    }

    pub fn change_title(&mut self, title: Option<&str>) {
        let title = title.unwrap_or(PRODUCT_NAME);
        self.host.chrome.set_title(title);
        self.state.set_title(title);
    }

    pub fn show_message(&mut self, message: impl Into<String>) {
        self.state.set_message(Some(message.into()));
    }

    // ===== Persisted mutations =====

    pub fn set_directory(&mut self, directory: &Path) {
        self.state.set_directory(directory);
        self.persist();
    }

    pub fn set_dark_theme(&mut self, dark_theme: bool) {
        self.commit_settings(|s| s.set_dark_theme(dark_theme));
    }

    pub fn set_full_screen(&mut self, full_screen: bool) {
        self.commit_settings(|s| s.set_full_screen(full_screen));
    }

    pub fn set_recursive(&mut self, recursive: bool) {
        self.commit_settings(|s| s.set_recursive(recursive));
    }

    pub fn set_image_stretched(&mut self, image_stretched: bool) {
        self.commit_settings(|s| s.set_image_stretched(image_stretched));
    }

    pub fn set_extensions(&mut self, extensions: BTreeSet<String>) {
        self.commit_settings(|s| s.set_extensions(extensions));
    }

    pub fn set_bookmarks(&mut self, bookmarks: Vec<String>) {
        self.bookmark.set_bookmarks(bookmarks);
        self.persist();
    }

    pub fn set_rating(&mut self, filepath: impl Into<String>, rating: i32) {
        self.rating.set_rating(filepath, rating);
        self.persist();
    }

    // ===== Dispatch =====

    pub fn dispatch(&mut self, action: Action) {
        tracing::debug!(action = action.id(), "Dispatch");
        match action {
            Action::Initialize => self.initialize(),
            Action::Migrate => self.migrate(),
            Action::Open(paths) => self.open(&paths),
            Action::OpenDirectory(dirpath) => self.open_directory(&dirpath),
            Action::ChangeRoute(route) => self.change_route(route),
            Action::ShowViewer(paths) => self.show_viewer(&paths),
            Action::DismissViewer => self.dismiss_viewer(),
            Action::EnterFullScreen => self.enter_full_screen(),
            Action::LeaveFullScreen => self.leave_full_screen(),
            Action::WindowFullScreenChanged(full_screen) => {
                self.window_full_screen_changed(full_screen)
            }
            Action::Focus(target) => self.focus(target),
            Action::Select(target) => self.select(target),
            Action::ChangeTitle(title) => self.change_title(title.as_deref()),
            Action::ShowMessage(message) => self.show_message(message),
            Action::SetDarkTheme(v) => self.set_dark_theme(v),
            Action::SetFullScreen(v) => self.set_full_screen(v),
            Action::SetRecursive(v) => self.set_recursive(v),
            Action::SetImageStretched(v) => self.set_image_stretched(v),
            Action::SetExtensions(v) => self.set_extensions(v),
            Action::SetBookmarks(v) => self.set_bookmarks(v),
            Action::SetRating { filepath, rating } => self.set_rating(filepath, rating),
        }
    }

    // ===== Internals =====

    fn commit_settings(&mut self, mutate: impl FnOnce(&mut SettingsState)) {
        mutate(&mut self.settings);
        self.persist();
    }

    fn schedule(&mut self, task: UiTask) {
        if let Some(task) = self.scheduler.defer(task) {
            self.apply(task);
        }
    }

    fn apply(&mut self, task: UiTask) {
        let found = match task.action {
            UiAction::Focus => self.host.surface.focus(task.target),
            UiAction::Select => self.host.surface.select(task.target),
        };
        if !found {
            tracing::trace!(selector = %task.target, "UI target not rendered, skipped");
        }
    }

    /// Fire-and-forget write of the persisted subset
    fn persist(&mut self) {
        if let Err(e) = self.storage.save(&self.snapshot()) {
            tracing::warn!("Failed to persist state: {}", e);
        }
    }
}
