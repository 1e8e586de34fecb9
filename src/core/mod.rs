//! # Core Application Logic
//!
//! The surah screen's business logic. It knows nothing about any specific UI
//! technology.
//!
//! ```text
//!                    ┌─────────────────────────┐
//!                    │         CORE            │
//!                    │  (this module)          │
//!                    │                         │
//!                    │  • State (app data)     │
//!                    │  • Action (events)      │
//!                    │  • update() (reducer)   │
//!                    │  • loaders (async I/O)  │
//!                    └───────────┬─────────────┘
//!                                │
//!            ┌───────────────────┼───────────────────┐
//!            ▼                   ▼                   ▼
//!     ┌────────────┐      ┌────────────┐      ┌────────────┐
//!     │    TUI     │      │ QuranSource│      │ KeyValue   │
//!     │  Adapter   │      │ (reqwest)  │      │ Store      │
//!     │ (ratatui)  │      │            │      │ (files)    │
//!     └────────────┘      └────────────┘      └────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`state`]: The `App` struct, all screen state in one place
//! - [`action`]: The `Action` enum and the `update()` reducer
//! - [`loader`]: Cache-then-network chapter list, detail fetcher
//! - [`store`]: Key-value storage backends
//! - [`config`]: Settings file and override resolution

pub mod action;
pub mod config;
pub mod loader;
pub mod state;
pub mod store;
