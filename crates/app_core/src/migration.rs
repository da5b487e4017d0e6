//! Versioned migrations of persisted data
//!
//! Each step runs once, when the stored schema version is below the
//! step's version. Steps stay idempotent on their own so running one on
//! already-migrated data changes nothing.

use crate::bookmark::BookmarkState;
use crate::rating::RatingState;

/// Schema version written by this build
pub const CURRENT_VERSION: u32 = 1;

/// Rating given to every former bookmark
pub const BOOKMARK_RATING: i32 = 1;

struct Migration {
    version: u32,
    name: &'static str,
    apply: fn(&mut BookmarkState, &mut RatingState),
}

const MIGRATIONS: &[Migration] = &[Migration {
    version: 1,
    name: "bookmarks_to_ratings",
    apply: bookmarks_to_ratings,
}];

/// Turn every bookmark into a rating of 1, then drop the bookmarks.
///
/// Existing ratings for bookmarked paths are overwritten.
pub fn bookmarks_to_ratings(bookmark: &mut BookmarkState, rating: &mut RatingState) {
    for filepath in bookmark.bookmarks() {
        rating.set_rating(filepath.clone(), BOOKMARK_RATING);
    }
    bookmark.set_bookmarks(Vec::new());
}

/// Apply every step above `from`. Returns the version to store.
pub fn run_pending(from: u32, bookmark: &mut BookmarkState, rating: &mut RatingState) -> u32 {
    if from > CURRENT_VERSION {
        tracing::warn!(
            "Stored schema version {} is newer than {}, skipping migrations",
            from,
            CURRENT_VERSION
        );
        return from;
    }

    for migration in MIGRATIONS.iter().filter(|m| m.version > from) {
        tracing::info!(
            version = migration.version,
            "Running migration {}",
            migration.name
        );
        (migration.apply)(bookmark, rating);
    }

    CURRENT_VERSION
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bookmarks(paths: &[&str]) -> BookmarkState {
        let mut state = BookmarkState::default();
        state.set_bookmarks(paths.iter().map(|p| p.to_string()).collect());
        state
    }

    #[test]
    fn test_bookmarks_become_ratings() {
        let mut bookmark = bookmarks(&["a.png", "b.png"]);
        let mut rating = RatingState::default();

        bookmarks_to_ratings(&mut bookmark, &mut rating);

        assert!(bookmark.is_empty());
        assert_eq!(rating.rating("a.png"), Some(1));
        assert_eq!(rating.rating("b.png"), Some(1));
        assert_eq!(rating.ratings().len(), 2);
    }

    #[test]
    fn test_overwrites_existing_rating() {
        let mut bookmark = bookmarks(&["a.png"]);
        let mut rating = RatingState::default();
        rating.set_rating("a.png", 5);
        rating.set_rating("c.png", 4);

        bookmarks_to_ratings(&mut bookmark, &mut rating);

        assert_eq!(rating.rating("a.png"), Some(1));
        assert_eq!(rating.rating("c.png"), Some(4));
    }

    #[test]
    fn test_idempotent() {
        let mut bookmark = bookmarks(&["a.png", "b.png"]);
        let mut rating = RatingState::default();

        bookmarks_to_ratings(&mut bookmark, &mut rating);
        let once = rating.clone();
        bookmarks_to_ratings(&mut bookmark, &mut rating);

        assert_eq!(rating, once);
        assert!(bookmark.is_empty());
    }

    #[test]
    fn test_run_pending_gated_by_version() {
        let mut bookmark = bookmarks(&["a.png"]);
        let mut rating = RatingState::default();

        // Already at the current version: leave data alone
        assert_eq!(run_pending(CURRENT_VERSION, &mut bookmark, &mut rating), CURRENT_VERSION);
        assert_eq!(bookmark.bookmarks().len(), 1);
        assert!(rating.ratings().is_empty());

        assert_eq!(run_pending(0, &mut bookmark, &mut rating), CURRENT_VERSION);
        assert!(bookmark.is_empty());
        assert_eq!(rating.rating("a.png"), Some(1));
    }

    #[test]
    fn test_run_pending_newer_schema() {
        let mut bookmark = bookmarks(&["a.png"]);
        let mut rating = RatingState::default();

        assert_eq!(run_pending(7, &mut bookmark, &mut rating), 7);
        assert_eq!(bookmark.bookmarks().len(), 1);
    }
}
