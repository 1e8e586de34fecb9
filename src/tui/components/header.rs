//! # Header Component
//!
//! Greeting plus the "Last Read" card above the list.

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Padding, Paragraph};

use crate::tui::component::Component;
use crate::tui::components::chapter_row::ACCENT;

pub struct Header<'a> {
    pub reader_name: &'a str,
    pub last_read_name: &'a str,
    pub last_read_ayah: u32,
}

impl<'a> Header<'a> {
    /// Greeting, reader name, and a bordered three-line card.
    pub const HEIGHT: u16 = 7;

    pub fn new(reader_name: &'a str, last_read_name: &'a str, last_read_ayah: u32) -> Self {
        Self {
            reader_name,
            last_read_name,
            last_read_ayah,
        }
    }
}

impl<'a> Component for Header<'a> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let [greeting_area, card_area] =
            Layout::vertical([Constraint::Length(2), Constraint::Min(0)]).areas(area);

        let mut greeting = vec![Line::from(Span::styled(
            "Assalamualaikum",
            Style::default().fg(ACCENT),
        ))];
        if !self.reader_name.is_empty() {
            greeting.push(Line::from(Span::styled(
                self.reader_name,
                Style::default().add_modifier(Modifier::BOLD),
            )));
        }
        frame.render_widget(Paragraph::new(greeting), greeting_area);

        let card = Paragraph::new(vec![
            Line::from(Span::styled("Last Read", Style::default().fg(ACCENT))),
            Line::from(Span::styled(
                self.last_read_name,
                Style::default().add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(
                format!("Ayah No: {}", self.last_read_ayah),
                Style::default().fg(Color::Gray),
            )),
        ])
        .block(
            Block::bordered()
                .border_type(BorderType::Rounded)
                .border_style(Style::default().fg(ACCENT).add_modifier(Modifier::DIM))
                .padding(Padding::horizontal(1)),
        );
        frame.render_widget(card, card_area);
    }
}
