use std::fmt;

use async_trait::async_trait;

use super::types::{Chapter, ChapterDetail, Corpus};

/// Errors that can occur while talking to the Quran API.
/// Nothing retries on these; they are logged and the screen shows less data.
#[derive(Debug)]
pub enum FetchError {
    /// Connection-level failure (DNS, refused, reset).
    Network(String),
    /// The request exceeded the configured timeout.
    Timeout,
    /// The API answered with a non-success status.
    Api { status: u16, message: String },
    /// The body was not the JSON shape we expected.
    Decode(String),
    /// The requested chapter was not in the response.
    NotFound(u32),
}

impl fmt::Display for FetchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FetchError::Network(msg) => write!(f, "network error: {msg}"),
            FetchError::Timeout => write!(f, "request timed out"),
            FetchError::Api { status, message } => {
                write!(f, "API error (HTTP {status}): {message}")
            }
            FetchError::Decode(msg) => write!(f, "decode error: {msg}"),
            FetchError::NotFound(number) => write!(f, "chapter {number} not found in response"),
        }
    }
}

impl std::error::Error for FetchError {}

/// Everything the screen needs from the remote side.
///
/// The HTTP implementation lives in [`super::client`]; tests plug in a
/// scripted implementation so no real network is involved.
#[async_trait]
pub trait QuranSource: Send + Sync {
    /// Returns the name of the source, for logging.
    fn name(&self) -> &str;

    /// The ordered list of all chapters.
    async fn chapter_list(&self) -> Result<Vec<Chapter>, FetchError>;

    /// The whole translation edition, every chapter with every verse.
    async fn translation_corpus(&self) -> Result<Corpus, FetchError>;

    /// A single chapter of the translation edition.
    async fn chapter_translation(&self, number: u32) -> Result<ChapterDetail, FetchError>;
}
