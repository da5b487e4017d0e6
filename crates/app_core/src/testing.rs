//! Recording fakes for orchestrator tests

use crate::capability::{Explorer, FileInfo, FileProbe, Selector, UiSurface, Viewer, WindowChrome};
use crate::error::AppError;
use crate::navigation::{Navigator, Route};
use crate::orchestrator::Collaborators;
use crate::persist::{PersistedState, StateStorage};
use std::cell::RefCell;
use std::collections::HashSet;
use std::path::{Path, PathBuf};
use std::rc::Rc;

/// Outbound call seen by the fake host
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Call {
    ExplorerInit(PathBuf),
    ChangeDirectory(PathBuf),
    LoadFiles(Vec<PathBuf>),
    FullScreen(bool),
    MenuBar(bool),
    Title(String),
    Navigate(Route),
    Focus(Selector),
    Select(Selector),
}

#[derive(Debug, Default)]
struct HostState {
    calls: Vec<Call>,
    directories: HashSet<PathBuf>,
    rendered: HashSet<Selector>,
    route: Option<Route>,
    loading: bool,
    refuse_directories: bool,
}

/// Shared handle behind every fake collaborator
#[derive(Debug, Clone, Default)]
pub struct FakeHost(Rc<RefCell<HostState>>);

impl FakeHost {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn collaborators(&self) -> Collaborators {
        Collaborators {
            explorer: Box::new(self.clone()),
            viewer: Box::new(self.clone()),
            probe: Box::new(self.clone()),
            chrome: Box::new(self.clone()),
            navigator: Box::new(self.clone()),
            surface: Box::new(self.clone()),
        }
    }

    pub fn calls(&self) -> Vec<Call> {
        self.0.borrow().calls.clone()
    }

    pub fn clear_calls(&self) {
        self.0.borrow_mut().calls.clear();
    }

    pub fn add_directory(&self, path: &str) {
        self.0.borrow_mut().directories.insert(PathBuf::from(path));
    }

    pub fn render(&self, target: Selector) {
        self.0.borrow_mut().rendered.insert(target);
    }

    pub fn set_route(&self, route: Route) {
        self.0.borrow_mut().route = Some(route);
    }

    pub fn route(&self) -> Option<Route> {
        self.0.borrow().route
    }

    pub fn set_loading(&self, loading: bool) {
        self.0.borrow_mut().loading = loading;
    }

    pub fn refuse_directories(&self) {
        self.0.borrow_mut().refuse_directories = true;
    }

    fn record(&self, call: Call) {
        self.0.borrow_mut().calls.push(call);
    }
}

impl Explorer for FakeHost {
    fn initialize(&mut self, directory: &Path) {
        self.record(Call::ExplorerInit(directory.to_path_buf()));
    }

    fn change_directory(&mut self, dirpath: &Path) -> bool {
        self.record(Call::ChangeDirectory(dirpath.to_path_buf()));
        !self.0.borrow().refuse_directories
    }
}

impl Viewer for FakeHost {
    fn load_files(&mut self, filepaths: &[PathBuf]) {
        self.record(Call::LoadFiles(filepaths.to_vec()));
    }

    fn is_loading(&self) -> bool {
        self.0.borrow().loading
    }
}

impl FileProbe for FakeHost {
    fn probe(&self, path: &Path) -> FileInfo {
        FileInfo {
            path: path.to_path_buf(),
            directory: self.0.borrow().directories.contains(path),
        }
    }
}

impl WindowChrome for FakeHost {
    fn set_full_screen(&mut self, full_screen: bool) {
        self.record(Call::FullScreen(full_screen));
    }

    fn set_menu_bar_visible(&mut self, visible: bool) {
        self.record(Call::MenuBar(visible));
    }

    fn set_title(&mut self, title: &str) {
        self.record(Call::Title(title.to_string()));
    }
}

impl Navigator for FakeHost {
    fn navigate(&mut self, route: Route) {
        self.record(Call::Navigate(route));
        self.0.borrow_mut().route = Some(route);
    }

    fn current(&self) -> Option<Route> {
        self.route()
    }
}

impl UiSurface for FakeHost {
    fn focus(&mut self, target: Selector) -> bool {
        let found = self.0.borrow().rendered.contains(&target);
        if found {
            self.record(Call::Focus(target));
        }
        found
    }

    fn select(&mut self, target: Selector) -> bool {
        let found = self.0.borrow().rendered.contains(&target);
        if found {
            self.record(Call::Select(target));
        }
        found
    }
}

/// Storage whose writes always fail
pub struct FailingStorage;

impl StateStorage for FailingStorage {
    fn load(&self) -> Result<Option<PersistedState>, AppError> {
        Ok(None)
    }

    fn save(&mut self, _state: &PersistedState) -> Result<(), AppError> {
        Err(AppError::Storage("read-only volume".into()))
    }
}
