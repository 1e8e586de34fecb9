use crate::core::state::App;
use crate::tui::TuiState;
use crate::tui::component::Component;
use crate::tui::components::chapter_list::LayoutCache;
use crate::tui::components::{ChapterList, Header, TitleBar};

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Style};
use ratatui::text::Span;

const HELP_TEXT: &str = "↑/↓ move · Enter expand · q quit";

/// Title bar, header, list, help line. Shared by drawing and hit testing.
fn screen_layout(area: Rect) -> [Rect; 4] {
    use Constraint::{Length, Min};
    Layout::vertical([Length(1), Length(Header::HEIGHT), Min(0), Length(1)]).areas(area)
}

pub fn draw_ui(frame: &mut Frame, app: &App, tui: &mut TuiState) {
    let [title_area, header_area, list_area, help_area] = screen_layout(frame.area());

    Header::new(&app.reader_name, app.last_read_name(), app.last_read.ayah)
        .render(frame, header_area);

    // The list goes first so the title bar sees this frame's scroll state
    ChapterList::new(&mut tui.chapter_list, app).render(frame, list_area);

    let has_more_below = !app.is_loading && tui.chapter_list.has_more_below();
    TitleBar::new(app.status_message.clone(), has_more_below).render(frame, title_area);

    frame.render_widget(
        Span::styled(HELP_TEXT, Style::default().fg(Color::DarkGray)),
        help_area,
    );
}

/// Hit test: given a screen Y coordinate, find which row (if any) is at that position
pub fn hit_test_row(
    screen_y: u16,
    frame_area: Rect,
    scroll_offset_y: u16,
    layout: &LayoutCache,
) -> Option<usize> {
    let [_, _, list_area, _] = screen_layout(frame_area);

    if screen_y < list_area.y || screen_y >= list_area.y + list_area.height {
        return None;
    }

    let content_y = (screen_y - list_area.y).saturating_add(scroll_offset_y);
    layout.item_at(content_y)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::loaded_app;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    fn draw(app: &App, tui: &mut TuiState, width: u16, height: u16) -> String {
        let backend = TestBackend::new(width, height);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal.draw(|f| draw_ui(f, app, tui)).unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect()
    }

    #[test]
    fn test_draw_ui_while_loading() {
        let app = App::new();
        let mut tui = TuiState::new();
        let text = draw(&app, &mut tui, 60, 24);
        assert!(text.contains("Assalamualaikum"));
        assert!(text.contains("Loading..."));
        assert!(!text.contains("Verses"));
    }

    #[test]
    fn test_draw_ui_loaded_list() {
        let mut app = loaded_app();
        app.status_message = "3 surahs".to_string();
        let mut tui = TuiState::new();
        let text = draw(&app, &mut tui, 60, 24);
        assert!(text.contains("Surahs | 3 surahs"));
        assert!(text.contains("Al-Fatihah (7 Verses)"));
        assert!(text.contains("Al-Baqara (286 Verses)"));
        assert!(text.contains("Last Read"));
    }

    #[test]
    fn test_more_indicator_when_list_overflows() {
        let app = loaded_app();
        let mut tui = TuiState::new();
        // 1 + 7 + 1 chrome rows leaves 5 rows for 9 rows of content
        let text = draw(&app, &mut tui, 60, 14);
        assert!(text.contains("↓ More"));
    }

    #[test]
    fn test_hit_test_row() {
        let frame = Rect::new(0, 0, 80, 24);
        let list_top = 1 + Header::HEIGHT;
        let mut layout = LayoutCache::new();
        layout.heights = vec![3, 3, 3];
        layout.rebuild_prefix_heights();

        assert_eq!(hit_test_row(0, frame, 0, &layout), None); // title bar
        assert_eq!(hit_test_row(list_top, frame, 0, &layout), Some(0));
        assert_eq!(hit_test_row(list_top + 3, frame, 0, &layout), Some(1));
        assert_eq!(hit_test_row(list_top, frame, 6, &layout), Some(2));
        assert_eq!(hit_test_row(list_top + 10, frame, 0, &layout), None); // below content
        assert_eq!(hit_test_row(23, frame, 0, &layout), None); // help line
    }
}
