//! # ChapterRow Component
//!
//! One entry in the surah list:
//!
//! ```text
//! ┌───┐
//! │ 1 │ Al-Fatihah (7 Verses)
//! └───┘                                   الفاتحة
//! ────────────────────────────────────────────────
//! ```
//!
//! Stateless: the parent `ChapterList` passes cursor/hover/expanded flags.

use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Paragraph, Widget};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use crate::api::Chapter;

/// Accent color used for badges and native-script names.
pub const ACCENT: Color = Color::Rgb(0x7b, 0x42, 0xf5);

/// Badge line, native-name line, divider.
pub const ROW_HEIGHT: u16 = 3;

/// Width of the number badge including its trailing gap.
const BADGE_WIDTH: u16 = 6;

pub struct ChapterRow<'a> {
    pub chapter: &'a Chapter,
    pub is_cursor: bool,
    pub is_hovered: bool,
    pub is_expanded: bool,
}

impl<'a> ChapterRow<'a> {
    pub fn new(chapter: &'a Chapter, is_cursor: bool, is_hovered: bool, is_expanded: bool) -> Self {
        Self {
            chapter,
            is_cursor,
            is_hovered,
            is_expanded,
        }
    }
}

/// Cut `text` to at most `max_width` display columns, adding "…" when cut.
pub fn truncate_to_width(text: &str, max_width: usize) -> String {
    if text.width() <= max_width {
        return text.to_string();
    }
    if max_width == 0 {
        return String::new();
    }
    let budget = max_width - 1; // room for the ellipsis
    let mut used = 0;
    let mut out = String::new();
    for c in text.chars() {
        let w = c.width().unwrap_or(0);
        if used + w > budget {
            break;
        }
        used += w;
        out.push(c);
    }
    out.push('…');
    out
}

impl<'a> Widget for ChapterRow<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.height == 0 || area.width == 0 {
            return;
        }

        let base = if self.is_cursor {
            Style::default().bg(Color::DarkGray)
        } else if self.is_hovered {
            Style::default().add_modifier(Modifier::BOLD)
        } else {
            Style::default()
        };
        buf.set_style(
            Rect::new(area.x, area.y, area.width, area.height.min(2)),
            base,
        );

        let badge_style = Style::default()
            .fg(Color::White)
            .bg(ACCENT)
            .add_modifier(Modifier::BOLD);
        let marker = if self.is_expanded { "▾" } else { " " };

        let label_width = area.width.saturating_sub(BADGE_WIDTH) as usize;
        let label = truncate_to_width(&self.chapter.label(), label_width);

        let top = Line::from(vec![
            Span::styled(format!(" {:>3} ", self.chapter.number), badge_style),
            Span::styled(marker, base.fg(ACCENT)),
            Span::styled(label, base.fg(Color::White)),
        ]);
        Paragraph::new(top).render(Rect::new(area.x, area.y, area.width, 1), buf);

        if area.height >= 2 {
            let native = truncate_to_width(&self.chapter.name, label_width);
            let bottom = Line::from(Span::styled(native, base.fg(ACCENT))).right_aligned();
            Paragraph::new(bottom).render(Rect::new(area.x, area.y + 1, area.width, 1), buf);
        }

        if area.height >= 3 {
            let rule = "─".repeat(area.width as usize);
            Paragraph::new(Span::styled(rule, Style::default().fg(Color::DarkGray)))
                .render(Rect::new(area.x, area.y + 2, area.width, 1), buf);
        }
    }
}
