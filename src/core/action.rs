//! # Actions
//!
//! Everything that can happen on the screen becomes an `Action`.
//! User presses Enter on a row? That's `Action::Select(number)`.
//! A detail fetch comes back? That's `Action::DetailFetched { .. }`.
//!
//! The `update()` function takes the current state and an action, mutates the
//! state, and returns an `Effect` describing any I/O the adapter should start.
//! No side effects here beyond logging.
//!
//! ```text
//! State + Action  →  update()  →  New State + Effect
//! ```
//!
//! Detail fetches are tagged with the chapter number and a request id. Only
//! the newest request may clear the pending state or fill the panel, so a slow
//! response for an old selection can never overwrite the current one, even
//! when both were for the same chapter.

use log::{debug, error, info, warn};

use crate::api::{Chapter, ChapterDetail};
use crate::core::loader::LoadOrigin;
use crate::core::state::{App, Selection};

#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    /// Chapter list is available.
    ChaptersLoaded {
        chapters: Vec<Chapter>,
        origin: LoadOrigin,
    },
    /// Chapter list could not be loaded from cache or network.
    ChaptersFailed(String),
    /// User activated a row.
    Select(u32),
    /// A detail fetch started for `chapter` finished.
    DetailFetched {
        chapter: u32,
        request: u64,
        detail: ChapterDetail,
    },
    /// A detail fetch started for `chapter` failed.
    DetailFailed {
        chapter: u32,
        request: u64,
        error: String,
    },
    Quit,
}

impl Action {
    /// Short description for the event-loop log. Details can hold a whole
    /// chapter of text, so `{:?}` is too noisy.
    pub fn summary(&self) -> String {
        match self {
            Action::ChaptersLoaded { chapters, origin } => {
                format!("ChaptersLoaded({} from {:?})", chapters.len(), origin)
            }
            Action::ChaptersFailed(_) => "ChaptersFailed".to_string(),
            Action::Select(n) => format!("Select({n})"),
            Action::DetailFetched {
                chapter,
                request,
                detail,
            } => format!(
                "DetailFetched({chapter}, #{request}, {} ayahs)",
                detail.ayahs.len()
            ),
            Action::DetailFailed { chapter, .. } => format!("DetailFailed({chapter})"),
            Action::Quit => "Quit".to_string(),
        }
    }
}

/// I/O the adapter should perform after an update.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    None,
    /// Fetch `chapter` and report back tagged with `request`.
    FetchDetail { chapter: u32, request: u64 },
    Quit,
}

pub fn update(app: &mut App, action: Action) -> Effect {
    match action {
        Action::ChaptersLoaded { chapters, origin } => {
            info!("{} chapters loaded ({:?})", chapters.len(), origin);
            app.status_message = match origin {
                LoadOrigin::Cache => format!("{} surahs (cached)", chapters.len()),
                LoadOrigin::Network => format!("{} surahs", chapters.len()),
            };
            app.chapters = chapters;
            app.is_loading = false;
            Effect::None
        }
        Action::ChaptersFailed(err) => {
            error!("Chapter list load failed: {}", err);
            app.chapters.clear();
            app.is_loading = false;
            app.status_message.clear();
            Effect::None
        }
        Action::Select(number) => select(app, number),
        Action::DetailFetched {
            chapter,
            request,
            detail,
        } => {
            if request != app.detail_request {
                debug!(
                    "Dropping detail for chapter {} from superseded request #{}",
                    chapter, request
                );
                return Effect::None;
            }
            app.pending_detail = None;
            if !app.selection.is_expanded(chapter) {
                debug!(
                    "Dropping detail for chapter {} (selection is {:?})",
                    chapter, app.selection
                );
                return Effect::None;
            }
            if detail.number != chapter {
                warn!(
                    "Dropping detail numbered {} for requested chapter {}",
                    detail.number, chapter
                );
                return Effect::None;
            }
            app.detail = Some(detail);
            Effect::None
        }
        Action::DetailFailed {
            chapter,
            request,
            error,
        } => {
            error!(
                "Detail fetch #{} for chapter {} failed: {}",
                request, chapter, error
            );
            if request == app.detail_request {
                app.pending_detail = None;
            }
            Effect::None
        }
        Action::Quit => Effect::Quit,
    }
}

fn select(app: &mut App, number: u32) -> Effect {
    if app.chapter(number).is_none() {
        warn!("Ignoring selection of unknown chapter {}", number);
        return Effect::None;
    }

    if app.selection.is_expanded(number) {
        app.selection = Selection::Collapsed;
        app.detail = None;
        app.pending_detail = None;
        return Effect::None;
    }

    app.detail_request += 1;
    app.selection = Selection::Expanded(number);
    app.detail = None;
    app.pending_detail = Some(number);
    Effect::FetchDetail {
        chapter: number,
        request: app.detail_request,
    }
}
