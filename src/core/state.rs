//! # Application State
//!
//! Everything the screen shows, in one place. No terminal types here;
//! presentation state (scroll offset, cursor) lives in the `tui` module.
//!
//! ```text
//! App
//! ├── chapters: Vec<Chapter>          // list, in API order
//! ├── is_loading: bool                // chapter list in flight
//! ├── selection: Selection            // Collapsed | Expanded(n)
//! ├── detail: Option<ChapterDetail>   // only ever for the expanded chapter
//! ├── pending_detail: Option<u32>     // detail fetch in flight
//! ├── detail_request: u64             // id of the newest detail fetch
//! ├── status_message: String          // title bar text
//! ├── reader_name: String             // header greeting
//! └── last_read: LastRead             // header card
//! ```
//!
//! State changes only happen through `update(state, action)` in action.rs.

use crate::api::{Chapter, ChapterDetail};
use crate::core::config::ResolvedConfig;

/// Which chapter, if any, is expanded in place.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Selection {
    #[default]
    Collapsed,
    Expanded(u32),
}

impl Selection {
    pub fn is_expanded(self, number: u32) -> bool {
        self == Selection::Expanded(number)
    }
}

/// Position shown on the "Last Read" card.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LastRead {
    pub chapter: u32,
    pub ayah: u32,
}

impl Default for LastRead {
    fn default() -> Self {
        Self {
            chapter: 1,
            ayah: 1,
        }
    }
}

pub struct App {
    pub chapters: Vec<Chapter>,
    pub is_loading: bool,
    pub selection: Selection,
    pub detail: Option<ChapterDetail>,
    pub pending_detail: Option<u32>,
    /// Bumped for every detail fetch; results carry the id they were started with.
    pub detail_request: u64,
    pub status_message: String,
    pub reader_name: String,
    pub last_read: LastRead,
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}

impl App {
    pub fn new() -> Self {
        Self {
            chapters: Vec::new(),
            is_loading: true,
            selection: Selection::Collapsed,
            detail: None,
            pending_detail: None,
            detail_request: 0,
            status_message: String::from("Loading..."),
            reader_name: String::new(),
            last_read: LastRead::default(),
        }
    }

    pub fn from_config(config: &ResolvedConfig) -> Self {
        Self {
            reader_name: config.reader_name.clone(),
            last_read: config.last_read,
            ..Self::new()
        }
    }

    pub fn chapter(&self, number: u32) -> Option<&Chapter> {
        self.chapters.iter().find(|c| c.number == number)
    }

    /// Detail for `number`, only if that chapter is the expanded one.
    pub fn detail_for(&self, number: u32) -> Option<&ChapterDetail> {
        if !self.selection.is_expanded(number) {
            return None;
        }
        self.detail.as_ref().filter(|d| d.number == number)
    }

    /// Name shown on the "Last Read" card. Falls back to Al-Fatihah while the
    /// list is empty or if the configured chapter is not in it.
    pub fn last_read_name(&self) -> &str {
        self.chapter(self.last_read.chapter)
            .map(|c| c.english_name.as_str())
            .unwrap_or("Al-Fatihah")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{detail, loaded_app};

    #[test]
    fn test_app_new_defaults() {
        let app = App::new();
        assert!(app.is_loading);
        assert!(app.chapters.is_empty());
        assert_eq!(app.selection, Selection::Collapsed);
        assert!(app.detail.is_none());
        assert_eq!(app.status_message, "Loading...");
    }

    #[test]
    fn test_detail_for_requires_matching_selection() {
        let mut app = loaded_app();
        app.selection = Selection::Expanded(2);
        app.detail = Some(detail(2, "Al-Baqara", "Medinan", "Alif. Lam. Mim."));

        assert!(app.detail_for(2).is_some());
        assert!(app.detail_for(1).is_none());

        app.selection = Selection::Collapsed;
        assert!(app.detail_for(2).is_none());
    }

    #[test]
    fn test_last_read_name() {
        let mut app = loaded_app();
        app.last_read = LastRead {
            chapter: 2,
            ayah: 5,
        };
        assert_eq!(app.last_read_name(), "Al-Baqara");

        app.last_read.chapter = 114;
        assert_eq!(app.last_read_name(), "Al-Fatihah");
    }

    #[test]
    fn test_selection_helpers() {
        assert!(!Selection::Collapsed.is_expanded(3));
        assert!(Selection::Expanded(3).is_expanded(3));
        assert!(!Selection::Expanded(3).is_expanded(4));
    }
}
