//! # DetailPanel Component
//!
//! The inline panel shown under an expanded row. It shows the names,
//! revelation type, verse count, and the *first* verse's translation only,
//! even though the whole chapter was fetched.

use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Padding, Paragraph, Widget, Wrap};

use crate::api::ChapterDetail;
use crate::tui::components::chapter_row::ACCENT;

/// Horizontal padding (per side) between the border and text content.
const CONTENT_PAD_H: u16 = 1;
/// Total horizontal space consumed by borders (1 left + 1 right), padding, and the indent.
const HORIZONTAL_OVERHEAD: u16 = 2 + CONTENT_PAD_H * 2 + INDENT;
/// Total vertical space consumed by borders (1 top + 1 bottom).
const VERTICAL_OVERHEAD: u16 = 2;
/// Panel is indented under the badge column.
const INDENT: u16 = 2;

pub struct DetailPanel<'a> {
    pub detail: &'a ChapterDetail,
}

impl<'a> DetailPanel<'a> {
    pub fn new(detail: &'a ChapterDetail) -> Self {
        Self { detail }
    }

    fn lines(detail: &ChapterDetail) -> Vec<String> {
        let translation = detail.first_translation().unwrap_or("unavailable");
        vec![
            format!("Surah: {} ({})", detail.english_name, detail.name),
            format!("Revelation: {}", detail.revelation_type),
            format!("Total Verses: {}", detail.number_of_ayahs),
            format!("Translation: {}", translation),
        ]
    }

    /// Predict the rendered height at `width` without rendering.
    ///
    /// The wrapping options must match `Paragraph` with `Wrap { trim: true }`
    /// so the list can lay out rows before drawing them.
    pub fn calculate_height(detail: &ChapterDetail, width: u16) -> u16 {
        let content_width = width.saturating_sub(HORIZONTAL_OVERHEAD);
        if content_width == 0 {
            return 1;
        }
        let options = textwrap::Options::new(content_width as usize)
            .break_words(true)
            .word_separator(textwrap::WordSeparator::AsciiSpace)
            .word_splitter(textwrap::WordSplitter::NoHyphenation)
            .wrap_algorithm(textwrap::WrapAlgorithm::FirstFit);
        let content_lines: usize = Self::lines(detail)
            .iter()
            .map(|line| textwrap::wrap(line, &options).len().max(1))
            .sum();
        content_lines as u16 + VERTICAL_OVERHEAD
    }
}

impl<'a> Widget for DetailPanel<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let area = Rect {
            x: area.x + INDENT.min(area.width),
            width: area.width.saturating_sub(INDENT),
            ..area
        };
        let border_style = Style::default().fg(ACCENT).add_modifier(Modifier::DIM);
        let block = Block::bordered()
            .border_type(BorderType::Rounded)
            .border_style(border_style)
            .padding(Padding::horizontal(CONTENT_PAD_H));

        let inner = block.inner(area);
        block.render(area, buf);

        let text: Vec<Line> = Self::lines(self.detail)
            .into_iter()
            .map(|line| Line::from(Span::styled(line, Style::default().fg(Color::Gray))))
            .collect();
        Paragraph::new(text)
            .wrap(Wrap { trim: true })
            .render(inner, buf);
    }
}
