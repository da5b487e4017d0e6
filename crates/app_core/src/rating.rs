//! Per-file ratings

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RatingState {
    pub ratings: BTreeMap<String, i32>,
}

impl RatingState {
    /// Insert or overwrite the rating for one file
    pub fn set_rating(&mut self, filepath: impl Into<String>, rating: i32) {
        self.ratings.insert(filepath.into(), rating);
    }

    pub fn rating(&self, filepath: &str) -> Option<i32> {
        self.ratings.get(filepath).copied()
    }

    pub fn ratings(&self) -> &BTreeMap<String, i32> {
        &self.ratings
    }
}
