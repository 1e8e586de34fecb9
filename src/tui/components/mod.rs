//! # TUI Components
//!
//! All UI components for the surah browser.
//!
//! ## Component Architecture
//!
//! ### Stateless Components (Props-Based Rendering)
//!
//! Display components that receive all data as parameters:
//! - `TitleBar`: top status bar
//! - `Header`: greeting and the "Last Read" card
//! - `ChapterRow`: one list entry (badge, label, native name)
//! - `DetailPanel`: inline details for the expanded row
//!
//! ### Stateful Components (Event-Driven)
//!
//! - `ChapterList`: scrollable list with cursor, hover, and layout caching
//!
//! Each component file holds its state types, event types, rendering, event
//! handling and tests.
//!
//! ## Module Structure
//!
//! ```text
//! components/
//! ├── mod.rs           (this file)
//! ├── title_bar.rs     (Top status bar)
//! ├── header.rs        (Greeting + last read card)
//! ├── chapter_row.rs   (Single list entry)
//! ├── detail_panel.rs  (Expanded row details)
//! └── chapter_list.rs  (Scrollable list container)
//! ```

pub mod chapter_list;
pub mod chapter_row;
pub mod detail_panel;
mod header;
mod title_bar;

pub use chapter_list::{ChapterList, ChapterListState, ListEvent};
pub use header::Header;
pub use title_bar::TitleBar;
