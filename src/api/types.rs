//! Wire types for the alquran.cloud API.
//!
//! Field names follow the API's camelCase. The chapter list is also what gets
//! written to the local cache, so `Chapter` has to round-trip through
//! `serde_json` without losing anything the screen needs.

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// One row of the surah list.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Chapter {
    pub number: u32,
    pub english_name: String,
    /// Native-script name.
    pub name: String,
    /// Verse count. The list endpoint calls this `numberOfAyahs`; cached
    /// snapshots store it as `ayahs`.
    #[serde(alias = "numberOfAyahs")]
    pub ayahs: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub english_name_translation: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub revelation_type: Option<String>,
}

impl Chapter {
    /// The list row label, e.g. `Al-Fatihah (7 Verses)`.
    pub fn label(&self) -> String {
        format!("{} ({} Verses)", self.english_name, self.ayahs)
    }
}

/// A single verse. Only `text` is guaranteed; the numbering fields are
/// present in every edition we've seen but not relied upon.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Ayah {
    pub text: String,
    #[serde(default)]
    pub number: Option<u32>,
    #[serde(default)]
    pub number_in_surah: Option<u32>,
}

/// Full record for one chapter within a translation edition.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ChapterDetail {
    pub number: u32,
    pub english_name: String,
    pub name: String,
    pub revelation_type: String,
    pub number_of_ayahs: u32,
    #[serde(default)]
    pub ayahs: Vec<Ayah>,
}

impl ChapterDetail {
    /// Translated text of the first verse, which is all the panel shows.
    pub fn first_translation(&self) -> Option<&str> {
        self.ayahs.first().map(|a| a.text.as_str())
    }
}

/// The `data` payload of the full-corpus endpoint.
#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct Corpus {
    pub surahs: Vec<ChapterDetail>,
}

impl Corpus {
    /// Takes the chapter numbered `number` out of the corpus.
    pub fn into_chapter(self, number: u32) -> Option<ChapterDetail> {
        self.surahs.into_iter().find(|s| s.number == number)
    }
}

/// Every response body is wrapped as `{ "code": 200, "status": "OK", "data": ... }`.
#[derive(Deserialize, Debug)]
pub struct Envelope<T> {
    pub data: T,
}

/// How the detail panel gets its data.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum DetailStrategy {
    /// Download the whole translation and pick the chapter out of it.
    #[default]
    Corpus,
    /// Ask the API for the one chapter.
    Chapter,
}

impl DetailStrategy {
    pub fn label(self) -> &'static str {
        match self {
            DetailStrategy::Corpus => "corpus",
            DetailStrategy::Chapter => "chapter",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_chapter_parses_list_endpoint_shape() {
        let json = r#"{
            "number": 2,
            "name": "سُورَةُ البَقَرَةِ",
            "englishName": "Al-Baqara",
            "englishNameTranslation": "The Cow",
            "numberOfAyahs": 286,
            "revelationType": "Medinan"
        }"#;
        let chapter: Chapter = serde_json::from_str(json).unwrap();
        assert_eq!(chapter.number, 2);
        assert_eq!(chapter.ayahs, 286);
        assert_eq!(chapter.english_name_translation.as_deref(), Some("The Cow"));
        assert_eq!(chapter.revelation_type.as_deref(), Some("Medinan"));
    }

    #[test]
    fn test_chapter_parses_cached_shape() {
        let json = r#"{"number":1,"englishName":"Al-Fatihah","name":"الفاتحة","ayahs":7}"#;
        let chapter: Chapter = serde_json::from_str(json).unwrap();
        assert_eq!(chapter.english_name, "Al-Fatihah");
        assert_eq!(chapter.ayahs, 7);
        assert!(chapter.revelation_type.is_none());
    }

    #[test]
    fn test_chapter_serializes_without_absent_optionals() {
        let chapter = Chapter {
            number: 1,
            english_name: "Al-Fatihah".into(),
            name: "الفاتحة".into(),
            ayahs: 7,
            english_name_translation: None,
            revelation_type: None,
        };
        let json = serde_json::to_string(&chapter).unwrap();
        assert_eq!(
            json,
            r#"{"number":1,"englishName":"Al-Fatihah","name":"الفاتحة","ayahs":7}"#
        );
    }

    #[test]
    fn test_chapter_label() {
        let chapter: Chapter = serde_json::from_str(
            r#"{"number":1,"englishName":"Al-Fatihah","name":"الفاتحة","ayahs":7}"#,
        )
        .unwrap();
        assert_eq!(chapter.label(), "Al-Fatihah (7 Verses)");
    }

    #[test]
    fn test_corpus_envelope_and_into_chapter() {
        let json = r#"{
            "code": 200,
            "status": "OK",
            "data": {
                "surahs": [
                    {"number": 1, "name": "الفاتحة", "englishName": "Al-Faatiha",
                     "revelationType": "Meccan", "numberOfAyahs": 7,
                     "ayahs": [{"number": 1, "numberInSurah": 1, "text": "In the name of God"}]},
                    {"number": 112, "name": "الإخلاص", "englishName": "Al-Ikhlaas",
                     "revelationType": "Meccan", "numberOfAyahs": 4,
                     "ayahs": [{"text": "Say: He is the One God"}]}
                ],
                "edition": {"identifier": "en.asad"}
            }
        }"#;
        let envelope: Envelope<Corpus> = serde_json::from_str(json).unwrap();
        let corpus = envelope.data;
        assert_eq!(corpus.surahs.len(), 2);

        assert!(corpus.clone().into_chapter(3).is_none());
        let ikhlas = corpus.clone().into_chapter(112).unwrap();
        assert_eq!(ikhlas.first_translation(), Some("Say: He is the One God"));
        assert_eq!(corpus.into_chapter(1).map(|d| d.number_of_ayahs), Some(7));
    }

    #[test]
    fn test_first_translation_empty_ayahs() {
        let json = r#"{"number":1,"name":"الفاتحة","englishName":"Al-Faatiha",
                       "revelationType":"Meccan","numberOfAyahs":7}"#;
        let detail: ChapterDetail = serde_json::from_str(json).unwrap();
        assert!(detail.ayahs.is_empty());
        assert_eq!(detail.first_translation(), None);
    }

    #[test]
    fn test_detail_strategy_parses_lowercase() {
        #[derive(Deserialize)]
        struct Wrapper {
            strategy: DetailStrategy,
        }
        let w: Wrapper = toml::from_str(r#"strategy = "chapter""#).unwrap();
        assert_eq!(w.strategy, DetailStrategy::Chapter);
        assert_eq!(DetailStrategy::default(), DetailStrategy::Corpus);
    }
}
