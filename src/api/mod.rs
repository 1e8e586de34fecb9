pub mod client;
pub mod source;
pub mod types;

pub use client::HttpQuranSource;
pub use source::{FetchError, QuranSource};
pub use types::{Ayah, Chapter, ChapterDetail, Corpus, DetailStrategy};
