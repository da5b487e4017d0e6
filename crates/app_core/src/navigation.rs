//! Screen routes and the navigation capability

use std::fmt;

/// Named screens the router can show
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Route {
    Explorer,
    Rating,
    Settings,
}

impl Route {
    pub fn name(&self) -> &'static str {
        match self {
            Route::Explorer => "explorer",
            Route::Rating => "rating",
            Route::Settings => "settings",
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Router owned by the UI layer
pub trait Navigator {
    fn navigate(&mut self, route: Route);

    /// Active route, if the router has settled on one
    fn current(&self) -> Option<Route>;
}

/// Router that only remembers where it was last sent
#[derive(Debug, Default)]
pub struct MemoryNavigator {
    current: Option<Route>,
}

impl MemoryNavigator {
    pub fn new(initial: Route) -> Self {
        Self {
            current: Some(initial),
        }
    }
}

impl Navigator for MemoryNavigator {
    fn navigate(&mut self, route: Route) {
        tracing::debug!(%route, "Navigate");
        self.current = Some(route);
    }

    fn current(&self) -> Option<Route> {
        self.current
    }
}
