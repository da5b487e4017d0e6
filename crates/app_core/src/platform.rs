//! Platform conventions for full-screen handling

/// Describes how the host platform treats full-screen windows.
///
/// On macOS the window keeps a native title bar and full-screen is a
/// user-controlled window state. Elsewhere the viewer is full-screen by
/// convention, so leaving the viewer also leaves full-screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlatformPolicy {
    pub native_title_bar: bool,
}

impl PlatformPolicy {
    pub fn current() -> Self {
        Self {
            native_title_bar: cfg!(target_os = "macos"),
        }
    }

    pub fn with_native_title_bar(native_title_bar: bool) -> Self {
        Self { native_title_bar }
    }

    /// Should the UI draw its own title bar?
    pub fn title_bar(&self, full_screen: bool) -> bool {
        self.native_title_bar && !full_screen
    }

    /// Does dismissing the viewer leave full-screen?
    pub fn leave_full_screen_on_dismiss(&self, full_screen_preference: bool) -> bool {
        full_screen_preference || !self.native_title_bar
    }
}

impl Default for PlatformPolicy {
    fn default() -> Self {
        Self::current()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_title_bar() {
        let mac = PlatformPolicy::with_native_title_bar(true);
        assert!(mac.title_bar(false));
        assert!(!mac.title_bar(true));

        let other = PlatformPolicy::with_native_title_bar(false);
        assert!(!other.title_bar(false));
    }

    #[test]
    fn test_leave_on_dismiss() {
        let mac = PlatformPolicy::with_native_title_bar(true);
        assert!(!mac.leave_full_screen_on_dismiss(false));
        assert!(mac.leave_full_screen_on_dismiss(true));

        let other = PlatformPolicy::with_native_title_bar(false);
        assert!(other.leave_full_screen_on_dismiss(false));
    }
}
