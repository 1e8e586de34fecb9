//! # TitleBar Component
//!
//! Top status bar. Purely presentational: it receives all data as props and
//! has no internal state.
//!
//! The title text changes based on state:
//!
//! 1. **More below**: `"Surahs | 114 surahs | ↓ More"`
//! 2. **Status message**: `"Surahs | 114 surahs (cached)"`
//! 3. **Default**: `"Surahs"`

use crate::tui::component::Component;
use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::Span;

pub struct TitleBar {
    /// Status message (e.g., "Loading...", "Fetching Al-Baqara...")
    pub status_message: String,
    /// Whether there are rows below the current scroll position
    pub has_more_below: bool,
}

impl TitleBar {
    pub fn new(status_message: String, has_more_below: bool) -> Self {
        Self {
            status_message,
            has_more_below,
        }
    }

    pub fn text(&self) -> String {
        let mut text = String::from("Surahs");
        if !self.status_message.is_empty() {
            text.push_str(" | ");
            text.push_str(&self.status_message);
        }
        if self.has_more_below {
            text.push_str(" | ↓ More");
        }
        text
    }
}

impl Component for TitleBar {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let span = Span::styled(self.text(), Style::default().add_modifier(Modifier::BOLD));
        frame.render_widget(span, area);
    }
}
