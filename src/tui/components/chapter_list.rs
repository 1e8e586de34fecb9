//! # ChapterList Component
//!
//! Scrollable surah list with the expanded row's detail panel inline.
//!
//! ## Responsibilities
//!
//! - Lay out rows (fixed height) plus the one optional panel (wrapped height)
//! - Keep the keyboard cursor on screen
//! - Hit testing for mouse hover and clicks
//!
//! ## Architecture
//!
//! `ChapterList` is a transient component (created each frame) that wraps
//! `&'a mut ChapterListState` (persistent state) and `&'a App` (props).
//! Heights are recomputed every frame; the cache exists so hit testing and
//! cursor scrolling between frames use the same numbers the last draw used.

use ratatui::Frame;
use ratatui::layout::{Alignment, Position, Rect, Size};
use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::Paragraph;
use tui_scrollview::{ScrollView, ScrollViewState, ScrollbarVisibility};

use crate::core::state::App;
use crate::tui::component::{Component, EventHandler};
use crate::tui::components::chapter_row::{ChapterRow, ROW_HEIGHT};
use crate::tui::components::detail_panel::DetailPanel;
use crate::tui::event::TuiEvent;

/// Height of the "Loading..." line under a row whose detail is in flight.
const PENDING_HEIGHT: u16 = 1;

/// Layout and scroll state for the chapter list.
/// Must be persisted in the parent TuiState.
pub struct ChapterListState {
    /// Scroll offset and view state
    pub scroll_state: ScrollViewState,
    /// Cached layout measurements from the last render
    pub layout: LayoutCache,
    /// Keyboard cursor (index into the chapter list)
    pub cursor: usize,
    /// Row under the mouse pointer
    pub hovered: Option<usize>,
    /// Last known viewport height (for scroll clamping between frames)
    pub viewport_height: u16,
    /// Number of rows at the last render
    pub item_count: usize,
    /// Cursor moved since the last render; scroll it into view
    follow_cursor: bool,
    /// Index and height of the expanded row at the last render
    expanded_height: Option<(usize, u16)>,
}

impl Default for ChapterListState {
    fn default() -> Self {
        Self::new()
    }
}

impl ChapterListState {
    pub fn new() -> Self {
        Self {
            scroll_state: ScrollViewState::default(),
            layout: LayoutCache::new(),
            cursor: 0,
            hovered: None,
            viewport_height: 0,
            item_count: 0,
            follow_cursor: false,
            expanded_height: None,
        }
    }

    /// Clamp scroll offset so it never exceeds the content bounds.
    pub fn clamp_scroll(&mut self) {
        let max_y = self.layout.total().saturating_sub(self.viewport_height);
        let current = self.scroll_state.offset();
        if current.y > max_y {
            self.scroll_state.set_offset(Position {
                x: current.x,
                y: max_y,
            });
        }
    }

    /// Scroll the viewport so the cursor row is fully visible.
    pub fn scroll_to_cursor(&mut self) {
        self.scroll_to_item(self.cursor);
    }

    /// Scroll the viewport so row `idx` (with anything shown under it) is
    /// fully visible. If it is taller than the viewport, align its top edge.
    pub fn scroll_to_item(&mut self, idx: usize) {
        if idx >= self.layout.prefix_heights.len() {
            return;
        }

        let item_top = self.layout.item_top(idx);
        let item_bottom = self.layout.prefix_heights[idx];
        let offset_y = self.scroll_state.offset().y;

        if item_top < offset_y {
            self.scroll_state.set_offset(Position { x: 0, y: item_top });
        } else if item_bottom > offset_y + self.viewport_height {
            let item_height = item_bottom - item_top;
            let new_y = if item_height > self.viewport_height {
                item_top
            } else {
                item_bottom.saturating_sub(self.viewport_height)
            };
            self.scroll_state.set_offset(Position { x: 0, y: new_y });
        }
    }

    /// Put the cursor on `idx` and scroll it into view on the next render.
    pub fn move_cursor_to(&mut self, idx: usize) {
        if self.item_count == 0 {
            return;
        }
        self.cursor = idx.min(self.item_count - 1);
        self.follow_cursor = true;
    }

    /// Whether content continues below the viewport.
    pub fn has_more_below(&self) -> bool {
        let offset = self.scroll_state.offset().y;
        self.layout.total() > offset.saturating_add(self.viewport_height)
    }
}

/// Events emitted by the chapter list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListEvent {
    /// Toggle the row at this index.
    Activate(usize),
}

/// Scrollable surah list component.
/// Created fresh each frame with references to state and data.
pub struct ChapterList<'a> {
    pub state: &'a mut ChapterListState,
    pub app: &'a App,
}

impl<'a> ChapterList<'a> {
    pub fn new(state: &'a mut ChapterListState, app: &'a App) -> Self {
        Self { state, app }
    }

    /// Height of row `index` including whatever is shown under it.
    fn item_height(app: &App, index: usize, content_width: u16) -> u16 {
        let chapter = &app.chapters[index];
        if let Some(detail) = app.detail_for(chapter.number) {
            ROW_HEIGHT + DetailPanel::calculate_height(detail, content_width)
        } else if app.selection.is_expanded(chapter.number)
            && app.pending_detail == Some(chapter.number)
        {
            ROW_HEIGHT + PENDING_HEIGHT
        } else {
            ROW_HEIGHT
        }
    }
}

impl<'a> Component for ChapterList<'a> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        if self.app.is_loading {
            let loading = Paragraph::new("Loading...")
                .style(Style::default().fg(Color::Gray))
                .alignment(Alignment::Center);
            frame.render_widget(loading, area);
            return;
        }

        let content_width = area.width.saturating_sub(1); // -1 for scrollbar safe area
        let num_items = self.app.chapters.len();

        // 1. Measure
        let layout = &mut self.state.layout;
        layout.heights.clear();
        layout
            .heights
            .extend((0..num_items).map(|i| Self::item_height(self.app, i, content_width)));
        layout.rebuild_prefix_heights();
        let total_height = layout.total();

        self.state.item_count = num_items;
        if num_items > 0 && self.state.cursor >= num_items {
            self.state.cursor = num_items - 1;
        }

        // A row that just expanded, or whose panel just arrived, is revealed
        let expanded_height = self
            .app
            .chapters
            .iter()
            .position(|c| self.app.selection.is_expanded(c.number))
            .map(|i| (i, self.state.layout.heights[i]));
        let reveal = match expanded_height {
            Some((idx, _)) if expanded_height != self.state.expanded_height => Some(idx),
            _ => None,
        };
        self.state.expanded_height = expanded_height;

        // 2. Scroll
        self.state.viewport_height = area.height;
        if self.state.follow_cursor {
            self.state.scroll_to_cursor();
            self.state.follow_cursor = false;
        }
        if let Some(idx) = reveal {
            self.state.scroll_to_item(idx);
        }
        self.state.clamp_scroll();

        let scroll_offset = self.state.scroll_state.offset().y;
        let visible_range = self.state.layout.visible_range(scroll_offset, area.height);

        // 3. Render visible rows into a ScrollView
        let mut scroll_view = ScrollView::new(Size::new(content_width, total_height))
            .vertical_scrollbar_visibility(ScrollbarVisibility::Automatic)
            .horizontal_scrollbar_visibility(ScrollbarVisibility::Never);

        for i in visible_range {
            let chapter = &self.app.chapters[i];
            let y = self.state.layout.item_top(i);
            let is_expanded = self.app.selection.is_expanded(chapter.number);

            let row = ChapterRow::new(
                chapter,
                self.state.cursor == i,
                self.state.hovered == Some(i),
                is_expanded,
            );
            scroll_view.render_widget(row, Rect::new(0, y, content_width, ROW_HEIGHT));

            let below = y + ROW_HEIGHT;
            let extra = self.state.layout.heights[i].saturating_sub(ROW_HEIGHT);
            if extra == 0 {
                continue;
            }
            let extra_rect = Rect::new(0, below, content_width, extra);
            if let Some(detail) = self.app.detail_for(chapter.number) {
                scroll_view.render_widget(DetailPanel::new(detail), extra_rect);
            } else {
                let pending = Paragraph::new("   Loading...").style(
                    Style::default()
                        .fg(Color::DarkGray)
                        .add_modifier(Modifier::ITALIC),
                );
                scroll_view.render_widget(pending, extra_rect);
            }
        }

        frame.render_stateful_widget(scroll_view, area, &mut self.state.scroll_state);
    }
}

/// `EventHandler` lives on `ChapterListState` because `ChapterList` is
/// recreated each frame and can't hold the cursor.
impl EventHandler for ChapterListState {
    type Event = ListEvent;

    fn handle_event(&mut self, event: &TuiEvent) -> Option<Self::Event> {
        match event {
            TuiEvent::CursorUp => {
                self.move_cursor_to(self.cursor.saturating_sub(1));
                None
            }
            TuiEvent::CursorDown => {
                self.move_cursor_to(self.cursor + 1);
                None
            }
            TuiEvent::CursorHome => {
                self.move_cursor_to(0);
                None
            }
            TuiEvent::CursorEnd => {
                self.move_cursor_to(self.item_count.saturating_sub(1));
                None
            }
            TuiEvent::ScrollUp => {
                self.scroll_state.scroll_up();
                None
            }
            TuiEvent::ScrollDown => {
                self.scroll_state.scroll_down();
                self.clamp_scroll();
                None
            }
            TuiEvent::ScrollPageUp => {
                self.scroll_state.scroll_page_up();
                None
            }
            TuiEvent::ScrollPageDown => {
                self.scroll_state.scroll_page_down();
                self.clamp_scroll();
                None
            }
            TuiEvent::Toggle if self.item_count > 0 => Some(ListEvent::Activate(self.cursor)),
            _ => None,
        }
    }
}

/// Cached layout measurements
#[derive(Default)]
pub struct LayoutCache {
    pub heights: Vec<u16>,
    pub prefix_heights: Vec<u16>,
}

impl LayoutCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn rebuild_prefix_heights(&mut self) {
        self.prefix_heights = self
            .heights
            .iter()
            .scan(0u16, |acc, &h| {
                *acc = acc.saturating_add(h);
                Some(*acc)
            })
            .collect();
    }

    pub fn total(&self) -> u16 {
        self.prefix_heights.last().copied().unwrap_or(0)
    }

    /// Content y where item `idx` starts.
    pub fn item_top(&self, idx: usize) -> u16 {
        if idx == 0 {
            0
        } else {
            self.prefix_heights.get(idx - 1).copied().unwrap_or(0)
        }
    }

    /// Item index covering content row `content_y`, if any. Used for mouse hit testing.
    pub fn item_at(&self, content_y: u16) -> Option<usize> {
        let idx = self.prefix_heights.partition_point(|&end| end <= content_y);
        (idx < self.prefix_heights.len()).then_some(idx)
    }

    /// Items overlapping the viewport, plus half a viewport either side.
    pub fn visible_range(
        &self,
        scroll_offset: u16,
        viewport_height: u16,
    ) -> std::ops::Range<usize> {
        let buffer = viewport_height / 2;
        let buffered_start = scroll_offset.saturating_sub(buffer);
        let buffered_end = scroll_offset
            .saturating_add(viewport_height)
            .saturating_add(buffer);

        let start = self
            .prefix_heights
            .partition_point(|&end| end <= buffered_start);
        let end = self
            .prefix_heights
            .partition_point(|&end| end < buffered_end)
            .saturating_add(1)
            .min(self.prefix_heights.len());

        start..end
    }
}
