//! Form rendering for the register and search views

use super::results;
use crate::app::App;
use crate::client::ApiClientTrait;
use crate::gate::registration::FieldIndicator;
use crate::state::{FormField, SearchForm, CATEGORIES, RADIUS_OPTIONS};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Draw a single-line input field
fn draw_field(frame: &mut Frame, area: Rect, field: &FormField, is_active: bool) {
    let style = if is_active {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::DarkGray)
    };

    let display_value = field.display_value();
    let cursor = if is_active { "▌" } else { "" };

    let content = Paragraph::new(Line::from(vec![
        Span::styled(display_value, style),
        Span::styled(cursor, Style::default().fg(Color::Cyan)),
    ]));

    let block = Block::default()
        .title(format!(" {} ", field.label))
        .borders(Borders::ALL)
        .border_style(style);

    frame.render_widget(content.block(block), area);
}

/// Draw a field's indicator region: errors in red, the neutral marker in green.
/// An empty region (no attempt yet) renders nothing.
fn draw_indicator(frame: &mut Frame, area: Rect, indicator: Option<&FieldIndicator>) {
    let Some(indicator) = indicator else {
        return;
    };

    let (message, color) = match indicator {
        FieldIndicator::Error(msg) => (*msg, Color::Red),
        FieldIndicator::Ok => (indicator.message(), Color::Green),
    };

    frame.render_widget(
        Paragraph::new(Span::styled(message, Style::default().fg(color))),
        area,
    );
}

/// Draw the registration form with per-field indicator regions
pub fn draw_register<C: ApiClientTrait>(frame: &mut Frame, area: Rect, app: &App<C>) {
    let form = &app.state.register_form;

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Username input
            Constraint::Length(1), // Username indicator
            Constraint::Length(3), // Password input
            Constraint::Length(1), // Password indicator
            Constraint::Min(0),
        ])
        .split(area);

    draw_field(frame, chunks[0], &form.username, form.active_row_index == 0);
    draw_indicator(frame, chunks[1], app.state.username_indicator.as_ref());
    draw_field(frame, chunks[2], &form.password, form.active_row_index == 1);
    draw_indicator(frame, chunks[3], app.state.password_indicator.as_ref());
}

/// Draw the category toggle row
fn draw_categories(frame: &mut Frame, area: Rect, app_form: &SearchForm) {
    let is_active = app_form.is_category_row_active();
    let mut spans = Vec::new();

    for (i, (_, name)) in CATEGORIES.iter().enumerate() {
        let mark = if app_form.category_selected[i] {
            "[x]"
        } else {
            "[ ]"
        };
        let style = if is_active && i == app_form.category_cursor {
            Style::default().fg(Color::Cyan)
        } else if app_form.category_selected[i] {
            Style::default().fg(Color::White)
        } else {
            Style::default().fg(Color::DarkGray)
        };
        spans.push(Span::styled(format!("{mark} {name}  "), style));
    }

    let border_style = if is_active {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::DarkGray)
    };

    let block = Block::default()
        .title(" Categories ")
        .borders(Borders::ALL)
        .border_style(border_style);

    frame.render_widget(Paragraph::new(Line::from(spans)).block(block), area);
}

/// Draw the radius radio row
fn draw_radius(frame: &mut Frame, area: Rect, app_form: &SearchForm) {
    let is_active = app_form.is_radius_row_active();
    let mut spans = Vec::new();

    for (i, value) in RADIUS_OPTIONS.iter().enumerate() {
        let mark = if app_form.radius.selected == Some(i) {
            "(•)"
        } else {
            "( )"
        };
        let style = if is_active && i == app_form.radius.cursor {
            Style::default().fg(Color::Cyan)
        } else if app_form.radius.selected == Some(i) {
            Style::default().fg(Color::White)
        } else {
            Style::default().fg(Color::DarkGray)
        };
        spans.push(Span::styled(format!("{mark} {value}m  "), style));
    }

    let border_style = if is_active {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::DarkGray)
    };

    let block = Block::default()
        .title(" Radius ")
        .borders(Borders::ALL)
        .border_style(border_style);

    frame.render_widget(Paragraph::new(Line::from(spans)).block(block), area);
}

/// Draw the search form, the error-message line, and the results region
pub fn draw_search<C: ApiClientTrait>(frame: &mut Frame, area: Rect, app: &App<C>) {
    let form = &app.state.search_form;

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Search input
            Constraint::Length(3), // Categories
            Constraint::Length(3), // Radius
            Constraint::Length(1), // Error message
            Constraint::Min(0),    // Results region
        ])
        .split(area);

    draw_field(frame, chunks[0], &form.search, form.is_text_row_active());
    draw_categories(frame, chunks[1], form);
    draw_radius(frame, chunks[2], form);

    if let Some(message) = &app.state.error_message {
        frame.render_widget(
            Paragraph::new(Span::styled(
                message.as_str(),
                Style::default().fg(Color::Red),
            )),
            chunks[3],
        );
    }

    if app.state.search_pending {
        frame.render_widget(Paragraph::new("Searching…"), chunks[4]);
    } else if let Some(view) = &app.state.results {
        results::draw(frame, chunks[4], view);
    }
}
