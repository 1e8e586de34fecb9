//! Test utilities shared across the crate.
//!
//! This module is only compiled during tests (`#[cfg(test)]`).

use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;

use crate::api::{Ayah, Chapter, ChapterDetail, Corpus, FetchError, QuranSource};
use crate::core::state::App;

/// A `QuranSource` that answers from canned data and counts its calls.
///
/// With no chapters configured `chapter_list` fails; with no corpus
/// configured both detail calls fail. Both failures are `Network`.
#[derive(Default)]
pub struct ScriptedSource {
    chapters: Option<Vec<Chapter>>,
    corpus: Option<Corpus>,
    chapter_override: Option<ChapterDetail>,
    list_calls: AtomicUsize,
    corpus_calls: AtomicUsize,
    chapter_calls: AtomicUsize,
}

impl ScriptedSource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_chapters(mut self, chapters: Vec<Chapter>) -> Self {
        self.chapters = Some(chapters);
        self
    }

    pub fn with_corpus(mut self, corpus: Corpus) -> Self {
        self.corpus = Some(corpus);
        self
    }

    /// Make `chapter_translation` answer with this detail no matter what was asked.
    pub fn answering_chapter_with(mut self, detail: ChapterDetail) -> Self {
        self.chapter_override = Some(detail);
        self
    }

    pub fn failing_list(mut self) -> Self {
        self.chapters = None;
        self
    }

    pub fn list_calls(&self) -> usize {
        self.list_calls.load(Ordering::SeqCst)
    }

    pub fn corpus_calls(&self) -> usize {
        self.corpus_calls.load(Ordering::SeqCst)
    }

    pub fn chapter_calls(&self) -> usize {
        self.chapter_calls.load(Ordering::SeqCst)
    }
}

fn offline() -> FetchError {
    FetchError::Network("scripted source offline".into())
}

#[async_trait]
impl QuranSource for ScriptedSource {
    fn name(&self) -> &str {
        "scripted"
    }

    async fn chapter_list(&self) -> Result<Vec<Chapter>, FetchError> {
        self.list_calls.fetch_add(1, Ordering::SeqCst);
        self.chapters.clone().ok_or_else(offline)
    }

    async fn translation_corpus(&self) -> Result<Corpus, FetchError> {
        self.corpus_calls.fetch_add(1, Ordering::SeqCst);
        self.corpus.clone().ok_or_else(offline)
    }

    async fn chapter_translation(&self, number: u32) -> Result<ChapterDetail, FetchError> {
        self.chapter_calls.fetch_add(1, Ordering::SeqCst);
        if let Some(detail) = &self.chapter_override {
            return Ok(detail.clone());
        }
        let corpus = self.corpus.clone().ok_or_else(offline)?;
        corpus.into_chapter(number).ok_or(FetchError::NotFound(number))
    }
}

pub fn fatihah() -> Chapter {
    Chapter {
        number: 1,
        english_name: "Al-Fatihah".into(),
        name: "الفاتحة".into(),
        ayahs: 7,
        english_name_translation: None,
        revelation_type: None,
    }
}

pub fn sample_chapters() -> Vec<Chapter> {
    vec![
        fatihah(),
        Chapter {
            number: 2,
            english_name: "Al-Baqara".into(),
            name: "البقرة".into(),
            ayahs: 286,
            english_name_translation: Some("The Cow".into()),
            revelation_type: Some("Medinan".into()),
        },
        Chapter {
            number: 3,
            english_name: "Aal-i-Imraan".into(),
            name: "آل عمران".into(),
            ayahs: 200,
            english_name_translation: Some("The Family of Imraan".into()),
            revelation_type: Some("Medinan".into()),
        },
    ]
}

pub fn detail(
    number: u32,
    english_name: &str,
    revelation: &str,
    first_ayah: &str,
) -> ChapterDetail {
    ChapterDetail {
        number,
        english_name: english_name.into(),
        name: format!("سورة {number}"),
        revelation_type: revelation.into(),
        number_of_ayahs: 7,
        ayahs: vec![Ayah {
            text: first_ayah.into(),
            number: Some(1),
            number_in_surah: Some(1),
        }],
    }
}

/// Details for chapters 1 and 2 only.
pub fn sample_corpus() -> Corpus {
    Corpus {
        surahs: vec![
            detail(
                1,
                "Al-Faatiha",
                "Meccan",
                "In the name of God, The Most Gracious, The Dispenser of Grace:",
            ),
            detail(2, "Al-Baqara", "Medinan", "Alif. Lam. Mim."),
        ],
    }
}

/// Creates an App that has finished loading `sample_chapters()`.
pub fn loaded_app() -> App {
    let mut app = App::new();
    app.chapters = sample_chapters();
    app.is_loading = false;
    app
}
