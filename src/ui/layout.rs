//! Layout components (header, status bar)

use crate::app::App;
use crate::client::ApiClientTrait;
use crate::state::View;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Create the main layout: header line, content, with the bottom line
/// reserved for the status bar
pub fn create_layout(area: Rect) -> (Rect, Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Header
            Constraint::Min(0),    // Content
            Constraint::Length(1), // Status bar
        ])
        .split(area);

    (chunks[0], chunks[1])
}

/// Draw the header with the app title and view tabs
pub fn draw_header<C: ApiClientTrait>(frame: &mut Frame, area: Rect, app: &App<C>) {
    let tab_style = |active: bool| {
        if active {
            Style::default().fg(Color::Cyan)
        } else {
            Style::default().fg(Color::DarkGray)
        }
    };

    let line = Line::from(vec![
        Span::styled(" HotelHelper ", Style::default().fg(Color::White)),
        Span::styled(
            " Register ",
            tab_style(matches!(app.state.current_view, View::Register)),
        ),
        Span::styled(
            " Search ",
            tab_style(matches!(app.state.current_view, View::Search)),
        ),
    ]);

    frame.render_widget(Paragraph::new(line), area);
}

/// Draw the status bar on the bottom line
pub fn draw_status_bar<C: ApiClientTrait>(frame: &mut Frame, app: &App<C>) {
    let area = frame.area();
    let status_area = Rect::new(area.x, area.y + area.height.saturating_sub(1), area.width, 1);

    let hints = match app.state.current_view {
        View::Register => "Tab: next field | Enter: submit | Ctrl+C: quit",
        View::Search => {
            "Tab: next row | Space: toggle/select | Enter: search | Ctrl+T: map/list | Ctrl+N/P: marker | Ctrl+C: quit"
        }
    };

    let line = if let Some(message) = &app.state.status_message {
        Line::from(Span::styled(
            message.as_str(),
            Style::default().fg(Color::Yellow),
        ))
    } else {
        Line::from(Span::styled(hints, Style::default().fg(Color::DarkGray)))
    };

    frame.render_widget(Paragraph::new(line), status_area);
}
