//! # TUI Adapter
//!
//! The ratatui-specific layer. Handles terminal I/O, renders the UI,
//! and translates keyboard and mouse events into core::Action values.
//!
//! This is the only module that knows about ratatui and crossterm.
//!
//! ## Background Work
//!
//! Network and cache I/O never runs on the event loop. Each load is a tokio
//! task that reports back by sending an `Action` over an mpsc channel; the
//! loop drains the channel between input batches and feeds every action
//! through `update`.
//!
//! ## Redraw Strategy
//!
//! Redraws happen only after input, a resize, or a background action. While
//! the chapter list is loading the loop polls more often so the result shows
//! up promptly.

mod component;
mod components;
mod event;
mod ui;

use log::{debug, info, warn};
use std::io::stdout;
use std::sync::{Arc, mpsc};
use std::time::Duration;

use crossterm::cursor::{Hide, Show};
use crossterm::event::{DisableMouseCapture, EnableMouseCapture};
use crossterm::execute;
use ratatui::layout::Rect;

use crate::api::{DetailStrategy, HttpQuranSource, QuranSource};
use crate::core::action::{Action, Effect, update};
use crate::core::config::ResolvedConfig;
use crate::core::loader::{fetch_chapter_detail, load_chapters};
use crate::core::state::App;
use crate::core::store::{FileStore, KeyValueStore, MemoryStore};
use crate::tui::component::EventHandler;
use crate::tui::components::{ChapterListState, ListEvent};
use crate::tui::event::{TuiEvent, poll_event_immediate, poll_event_timeout};

/// TUI-specific presentation state (not part of core business logic)
pub struct TuiState {
    pub chapter_list: ChapterListState,
}

impl Default for TuiState {
    fn default() -> Self {
        Self::new()
    }
}

impl TuiState {
    pub fn new() -> Self {
        Self {
            chapter_list: ChapterListState::new(),
        }
    }
}

struct TerminalModeGuard;

impl TerminalModeGuard {
    fn new() -> std::io::Result<Self> {
        execute!(stdout(), EnableMouseCapture, Hide)?;
        info!("Terminal modes enabled (mouse, hidden cursor)");
        Ok(Self)
    }
}

impl Drop for TerminalModeGuard {
    fn drop(&mut self) {
        let _ = execute!(stdout(), DisableMouseCapture, Show);
    }
}

/// Open the on-disk cache, or fall back to a throwaway in-memory store when
/// caching is disabled or the directory can't be created.
pub fn build_store(config: &ResolvedConfig) -> Arc<dyn KeyValueStore> {
    match &config.cache_dir {
        Some(dir) => match FileStore::open(dir) {
            Ok(store) => {
                info!("Using chapter cache at {}", store.dir().display());
                Arc::new(store)
            }
            Err(e) => {
                warn!(
                    "Cache directory {} unusable ({}), caching in memory",
                    dir.display(),
                    e
                );
                Arc::new(MemoryStore::new())
            }
        },
        None => {
            info!("Chapter cache disabled");
            Arc::new(MemoryStore::new())
        }
    }
}

pub fn build_source(config: &ResolvedConfig) -> Arc<dyn QuranSource> {
    Arc::new(HttpQuranSource::new(
        config.base_url.clone(),
        config.edition.clone(),
        config.timeout,
    ))
}

pub fn run(config: ResolvedConfig) -> std::io::Result<()> {
    let source = build_source(&config);
    let store = build_store(&config);
    let strategy = config.detail_strategy;
    let mut app = App::from_config(&config);
    let mut tui = TuiState::new();

    let mut terminal = ratatui::init();
    let _terminal_mode_guard = TerminalModeGuard::new();

    // Channel for actions from background tasks
    let (tx, rx) = mpsc::channel();

    spawn_chapter_load(store, source.clone(), tx.clone());

    let mut needs_redraw = true; // Force first frame

    'main: loop {
        if needs_redraw {
            terminal.draw(|f| ui::draw_ui(f, &app, &mut tui))?;
            needs_redraw = false;
        }

        let timeout = if app.is_loading || app.pending_detail.is_some() {
            Duration::from_millis(50)
        } else {
            Duration::from_millis(500)
        };
        let first_event = poll_event_timeout(timeout);
        if first_event.is_some() {
            needs_redraw = true;
        }

        // Process first event + drain ALL pending events before next draw
        let mut actions = Vec::new();
        for event in first_event
            .into_iter()
            .chain(std::iter::from_fn(poll_event_immediate))
        {
            match event {
                TuiEvent::Resize => {}
                TuiEvent::Quit | TuiEvent::ForceQuit => actions.push(Action::Quit),
                TuiEvent::MouseMove(_col, row) => {
                    let frame_area = terminal.get_frame().area();
                    tui.chapter_list.hovered = hit_row(frame_area, &tui, row);
                }
                TuiEvent::MouseClick(_col, row) => {
                    let frame_area = terminal.get_frame().area();
                    if let Some(idx) = hit_row(frame_area, &tui, row) {
                        tui.chapter_list.move_cursor_to(idx);
                        if let Some(chapter) = app.chapters.get(idx) {
                            actions.push(Action::Select(chapter.number));
                        }
                    }
                }
                _ => {
                    if let Some(ListEvent::Activate(idx)) = tui.chapter_list.handle_event(&event)
                        && let Some(chapter) = app.chapters.get(idx)
                    {
                        actions.push(Action::Select(chapter.number));
                    }
                }
            }
        }

        // Handle background task actions
        while let Ok(action) = rx.try_recv() {
            needs_redraw = true;
            actions.push(action);
        }

        for action in actions {
            debug!("Event loop received: {}", action.summary());
            match update(&mut app, action) {
                Effect::Quit => break 'main,
                Effect::FetchDetail { chapter, request } => {
                    spawn_detail_fetch(source.clone(), chapter, request, strategy, tx.clone());
                }
                Effect::None => {}
            }
        }
    }

    ratatui::restore();
    Ok(())
}

fn hit_row(frame_area: Rect, tui: &TuiState, row: u16) -> Option<usize> {
    let scroll_offset = tui.chapter_list.scroll_state.offset().y;
    ui::hit_test_row(row, frame_area, scroll_offset, &tui.chapter_list.layout)
}

fn spawn_chapter_load(
    store: Arc<dyn KeyValueStore>,
    source: Arc<dyn QuranSource>,
    tx: mpsc::Sender<Action>,
) {
    info!("Spawning chapter list load");
    tokio::spawn(async move {
        let action = match load_chapters(store.as_ref(), source.as_ref()).await {
            Ok(load) => Action::ChaptersLoaded {
                chapters: load.chapters,
                origin: load.origin,
            },
            Err(e) => Action::ChaptersFailed(e.to_string()),
        };
        if tx.send(action).is_err() {
            warn!("Failed to send chapter list result: receiver dropped");
        }
    });
}

fn spawn_detail_fetch(
    source: Arc<dyn QuranSource>,
    number: u32,
    request: u64,
    strategy: DetailStrategy,
    tx: mpsc::Sender<Action>,
) {
    info!(
        "Spawning detail fetch #{} for chapter {} (strategy={})",
        request,
        number,
        strategy.label()
    );
    tokio::spawn(async move {
        let action = match fetch_chapter_detail(source.as_ref(), number, strategy).await {
            Ok(detail) => Action::DetailFetched {
                chapter: number,
                request,
                detail,
            },
            Err(e) => Action::DetailFailed {
                chapter: number,
                request,
                error: e.to_string(),
            },
        };
        if tx.send(action).is_err() {
            warn!(
                "Failed to send detail for chapter {}: receiver dropped",
                number
            );
        }
    });
}
