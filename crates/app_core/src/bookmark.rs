//! Legacy bookmarks. Emptied by the bookmark→rating migration.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BookmarkState {
    pub bookmarks: Vec<String>,
}

impl BookmarkState {
    pub fn set_bookmarks(&mut self, bookmarks: Vec<String>) {
        self.bookmarks = bookmarks;
    }

    pub fn bookmarks(&self) -> &[String] {
        &self.bookmarks
    }

    pub fn is_empty(&self) -> bool {
        self.bookmarks.is_empty()
    }
}
