//! User preferences

use serde::{Deserialize, Deserializer, Serialize};
use std::collections::BTreeSet;
use std::path::Path;

/// Extensions eligible for viewing on a fresh install
pub const DEFAULT_EXTENSIONS: [&str; 6] = ["JPEG", "JPG", "PNG", "GIF", "WEBP", "BMP"];

/// Settings store state
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SettingsState {
    pub dark_theme: bool,
    /// Preference: open the viewer full-screen
    pub full_screen: bool,
    pub recursive: bool,
    pub image_stretched: bool,
    /// Extensions without the leading dot. Empty means nothing is viewable.
    #[serde(deserialize_with = "extensions_or_default")]
    pub extensions: BTreeSet<String>,
}

impl Default for SettingsState {
    fn default() -> Self {
        Self {
            dark_theme: false,
            full_screen: false,
            recursive: false,
            image_stretched: false,
            extensions: default_extensions(),
        }
    }
}

pub fn default_extensions() -> BTreeSet<String> {
    DEFAULT_EXTENSIONS.iter().map(|ext| ext.to_string()).collect()
}

// `null` is read as the default set; the field is never absent in memory
fn extensions_or_default<'de, D>(deserializer: D) -> Result<BTreeSet<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<BTreeSet<String>>::deserialize(deserializer)?.unwrap_or_else(default_extensions))
}

impl SettingsState {
    pub fn set_dark_theme(&mut self, dark_theme: bool) {
        self.dark_theme = dark_theme;
    }

    pub fn set_full_screen(&mut self, full_screen: bool) {
        self.full_screen = full_screen;
    }

    pub fn set_recursive(&mut self, recursive: bool) {
        self.recursive = recursive;
    }

    pub fn set_image_stretched(&mut self, image_stretched: bool) {
        self.image_stretched = image_stretched;
    }

    pub fn set_extensions(&mut self, extensions: BTreeSet<String>) {
        self.extensions = extensions;
    }

    /// Is this file eligible for the viewer?
    pub fn is_available_file<P: AsRef<Path>>(&self, filepath: P) -> bool {
        match app_fs::extension_upper(filepath) {
            Some(ext) => self.extensions.iter().any(|e| e.to_uppercase() == ext),
            None => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn with_extensions(exts: &[&str]) -> SettingsState {
        let mut settings = SettingsState::default();
        settings.set_extensions(exts.iter().map(|e| e.to_string()).collect());
        settings
    }

    #[test]
    fn test_defaults() {
        let settings = SettingsState::default();
        assert!(!settings.dark_theme);
        assert!(!settings.full_screen);
        assert_eq!(settings.extensions.len(), 6);
        assert!(settings.is_available_file("photo.webp"));
    }

    #[test]
    fn test_is_available_file() {
        let settings = with_extensions(&["PNG", "JPG"]);
        assert!(settings.is_available_file("x.png"));
        assert!(settings.is_available_file("x.PNG"));
        assert!(!settings.is_available_file("x"));
        assert!(!settings.is_available_file("x.gif"));
    }

    #[test]
    fn test_lowercase_extension_setting() {
        let settings = with_extensions(&["png"]);
        assert!(settings.is_available_file("/pics/X.Png"));
    }

    #[test]
    fn test_empty_extensions_rejects_all() {
        let settings = with_extensions(&[]);
        assert!(!settings.is_available_file("x.png"));
    }

    #[test]
    fn test_dotfile_has_no_extension() {
        let settings = with_extensions(&["BASHRC"]);
        assert!(!settings.is_available_file(".bashrc"));
    }

    #[test]
    fn test_mutations_replace_fields() {
        let mut settings = SettingsState::default();
        settings.set_dark_theme(true);
        settings.set_full_screen(true);
        settings.set_recursive(true);
        settings.set_image_stretched(true);
        assert!(settings.dark_theme && settings.full_screen);
        assert!(settings.recursive && settings.image_stretched);
    }

    #[test]
    fn test_null_extensions_use_defaults() {
        let settings: SettingsState = serde_json::from_str(r#"{"extensions":null}"#).unwrap();
        assert_eq!(settings.extensions, default_extensions());

        let settings: SettingsState = serde_json::from_str(r#"{"extensions":[]}"#).unwrap();
        assert!(settings.extensions.is_empty());
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let settings: SettingsState = serde_json::from_str(r#"{"darkTheme":true}"#).unwrap();
        assert!(settings.dark_theme);
        assert_eq!(settings.extensions, default_extensions());
    }
}
