//! HTTP implementation of [`QuranSource`] backed by `reqwest`.

use std::time::Duration;

use async_trait::async_trait;
use log::{debug, info, warn};
use serde::de::DeserializeOwned;

use super::source::{FetchError, QuranSource};
use super::types::{Chapter, ChapterDetail, Corpus, Envelope};

pub const DEFAULT_BASE_URL: &str = "https://api.alquran.cloud/v1";
pub const DEFAULT_EDITION: &str = "en.asad";
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// alquran.cloud client.
pub struct HttpQuranSource {
    base_url: String,
    edition: String,
    client: reqwest::Client,
}

impl HttpQuranSource {
    pub fn new(base_url: String, edition: String, timeout: Duration) -> Self {
        let client = match reqwest::Client::builder().timeout(timeout).build() {
            Ok(client) => client,
            Err(e) => {
                warn!(
                    "Failed to build HTTP client with timeout, using defaults: {}",
                    e
                );
                reqwest::Client::new()
            }
        };
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            edition,
            client,
        }
    }

    pub fn chapter_list_url(&self) -> String {
        format!("{}/surah", self.base_url)
    }

    pub fn corpus_url(&self) -> String {
        format!("{}/quran/{}", self.base_url, self.edition)
    }

    pub fn chapter_url(&self, number: u32) -> String {
        format!("{}/surah/{}/{}", self.base_url, number, self.edition)
    }

    /// GET `url` and decode the `data` field of the response envelope.
    async fn get_data<T: DeserializeOwned>(&self, url: &str) -> Result<T, FetchError> {
        debug!("GET {}", url);
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(map_reqwest_error)?;

        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            warn!("GET {} returned HTTP {}", url, status.as_u16());
            return Err(FetchError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let body = response.text().await.map_err(map_reqwest_error)?;
        info!("GET {} ok ({} bytes)", url, body.len());
        let envelope: Envelope<T> =
            serde_json::from_str(&body).map_err(|e| FetchError::Decode(e.to_string()))?;
        Ok(envelope.data)
    }
}

fn map_reqwest_error(e: reqwest::Error) -> FetchError {
    if e.is_timeout() {
        FetchError::Timeout
    } else if e.is_decode() {
        FetchError::Decode(e.to_string())
    } else {
        FetchError::Network(e.to_string())
    }
}

#[async_trait]
impl QuranSource for HttpQuranSource {
    fn name(&self) -> &str {
        "alquran.cloud"
    }

    async fn chapter_list(&self) -> Result<Vec<Chapter>, FetchError> {
        self.get_data(&self.chapter_list_url()).await
    }

    async fn translation_corpus(&self) -> Result<Corpus, FetchError> {
        self.get_data(&self.corpus_url()).await
    }

    async fn chapter_translation(&self, number: u32) -> Result<ChapterDetail, FetchError> {
        self.get_data(&self.chapter_url(number)).await
    }
}
