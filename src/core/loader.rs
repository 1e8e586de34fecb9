//! # Loaders
//!
//! The two I/O paths the screen has:
//!
//! ```text
//! load_chapters:         store.get("surahs") ──hit──► Cache
//!                              │ miss
//!                              ▼
//!                        source.chapter_list() ──► store.set("surahs") ──► Network
//!
//! fetch_chapter_detail:  Corpus  → source.translation_corpus() → find(number)
//!                        Chapter → source.chapter_translation(number)
//! ```
//!
//! Both return `Result`. Deciding what a failure means for the UI is the
//! reducer's job, not ours.

use log::{info, warn};

use crate::api::{Chapter, ChapterDetail, DetailStrategy, FetchError, QuranSource};
use crate::core::store::{CHAPTERS_KEY, KeyValueStore};

/// Where a chapter list came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadOrigin {
    Cache,
    Network,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ChapterLoad {
    pub chapters: Vec<Chapter>,
    pub origin: LoadOrigin,
}

/// Cache-then-network load of the chapter list.
///
/// A cached snapshot is used as-is, however old it is. An unreadable or
/// unparseable snapshot counts as a miss. A failed write after a successful
/// fetch is logged and the fetched list is still returned.
pub async fn load_chapters(
    store: &dyn KeyValueStore,
    source: &dyn QuranSource,
) -> Result<ChapterLoad, FetchError> {
    match store.get(CHAPTERS_KEY) {
        Ok(Some(raw)) => match serde_json::from_str::<Vec<Chapter>>(&raw) {
            Ok(chapters) => {
                info!("Loaded {} chapters from cache", chapters.len());
                return Ok(ChapterLoad {
                    chapters,
                    origin: LoadOrigin::Cache,
                });
            }
            Err(e) => warn!("Cached chapter list is unreadable, refetching: {}", e),
        },
        Ok(None) => info!("No cached chapter list"),
        Err(e) => warn!("Failed to read chapter cache, refetching: {}", e),
    }

    let chapters = source.chapter_list().await?;
    info!("Fetched {} chapters from {}", chapters.len(), source.name());

    match serde_json::to_string(&chapters) {
        Ok(raw) => {
            if let Err(e) = store.set(CHAPTERS_KEY, &raw) {
                warn!("Failed to persist chapter list: {}", e);
            }
        }
        Err(e) => warn!("Failed to serialize chapter list: {}", e),
    }

    Ok(ChapterLoad {
        chapters,
        origin: LoadOrigin::Network,
    })
}

/// Fetch one chapter's detail. Nothing is cached between calls.
pub async fn fetch_chapter_detail(
    source: &dyn QuranSource,
    number: u32,
    strategy: DetailStrategy,
) -> Result<ChapterDetail, FetchError> {
    let detail = match strategy {
        DetailStrategy::Corpus => source
            .translation_corpus()
            .await?
            .into_chapter(number)
            .ok_or(FetchError::NotFound(number))?,
        DetailStrategy::Chapter => {
            let detail = source.chapter_translation(number).await?;
            if detail.number != number {
                warn!(
                    "Asked for chapter {} but {} answered with {}",
                    number,
                    source.name(),
                    detail.number
                );
                return Err(FetchError::NotFound(number));
            }
            detail
        }
    };
    info!(
        "Fetched detail for chapter {} ({} ayahs, strategy={})",
        number,
        detail.ayahs.len(),
        strategy.label()
    );
    Ok(detail)
}
