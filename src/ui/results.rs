//! Results region rendering: marker map and list variants

use crate::state::{ResultsMode, ResultsView};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{
        canvas::{Canvas, Points},
        Block, Borders, List, ListItem, Paragraph,
    },
    Frame,
};

/// Attribution displayed on the map variant
pub const MAP_ATTRIBUTION: &str = "© OpenStreetMap contributors";

/// Draw the results container in its current mode. An empty result set still
/// renders the (empty) container.
pub fn draw(frame: &mut Frame, area: Rect, view: &ResultsView) {
    match view.mode {
        ResultsMode::Map => draw_map(frame, area, view),
        ResultsMode::List => draw_list(frame, area, view),
    }
}

/// Pad a degenerate bounding box so a single marker still gets a usable view
fn padded_bounds(min: f64, max: f64) -> [f64; 2] {
    let span = max - min;
    if span < f64::EPSILON {
        [min - 0.01, max + 0.01]
    } else {
        [min - span * 0.1, max + span * 0.1]
    }
}

fn draw_map(frame: &mut Frame, area: Rect, view: &ResultsView) {
    let block = Block::default()
        .title(format!(" Results ({}) — Map ", view.results.len()))
        .title_bottom(Line::from(Span::styled(
            MAP_ATTRIBUTION,
            Style::default().fg(Color::DarkGray),
        )))
        .borders(Borders::ALL);

    let Some((sw, ne)) = view.marker_bounds() else {
        // Empty container: the block is present, nothing is plotted
        frame.render_widget(block, area);
        return;
    };

    let x_bounds = padded_bounds(sw.longitude, ne.longitude);
    let y_bounds = padded_bounds(sw.latitude, ne.latitude);

    let coords: Vec<(f64, f64)> = view
        .results
        .iter()
        .map(|r| (r.geocodes.main.longitude, r.geocodes.main.latitude))
        .collect();
    let selected = view.selected_result().map(|r| r.geocodes.main);

    let canvas = Canvas::default()
        .block(block)
        .x_bounds(x_bounds)
        .y_bounds(y_bounds)
        .paint(move |ctx| {
            ctx.draw(&Points {
                coords: &coords,
                color: Color::Red,
            });
            // Same glyph for every marker; the selected one is recolored
            for &(x, y) in &coords {
                ctx.print(x, y, Span::styled("▼", Style::default().fg(Color::Red)));
            }
            if let Some(c) = selected {
                ctx.print(
                    c.longitude,
                    c.latitude,
                    Span::styled("▼", Style::default().fg(Color::Yellow)),
                );
            }
        });

    frame.render_widget(canvas, area);

    // Popup line for the selected marker: place name and formatted address
    if let Some(result) = view.selected_result() {
        if area.width <= 2 || area.height <= 2 {
            return;
        }
        let popup_area = Rect::new(area.x + 1, area.y + 1, area.width.saturating_sub(2), 1);
        let popup = Line::from(vec![
            Span::styled(
                result.name.as_str(),
                Style::default().add_modifier(Modifier::BOLD),
            ),
            Span::raw(" — "),
            Span::raw(result.location.formatted_address.as_str()),
        ]);
        frame.render_widget(Paragraph::new(popup), popup_area);
    }
}

fn draw_list(frame: &mut Frame, area: Rect, view: &ResultsView) {
    let items: Vec<ListItem> = view
        .results
        .iter()
        .enumerate()
        .map(|(i, result)| {
            let style = if i == view.selected {
                Style::default().fg(Color::Cyan)
            } else {
                Style::default()
            };
            ListItem::new(Line::from(vec![
                Span::styled(result.name.as_str(), style.add_modifier(Modifier::BOLD)),
                Span::styled(" — ", style),
                Span::styled(result.location.formatted_address.as_str(), style),
            ]))
        })
        .collect();

    let block = Block::default()
        .title(format!(" Results ({}) — List ", view.results.len()))
        .borders(Borders::ALL);

    frame.render_widget(List::new(items).block(block), area);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_padded_bounds_expand_single_point() {
        let bounds = padded_bounds(51.6, 51.6);
        assert!(bounds[0] < 51.6);
        assert!(bounds[1] > 51.6);
    }

    #[test]
    fn test_padded_bounds_keep_span_ordering() {
        let bounds = padded_bounds(-0.02, 0.01);
        assert!(bounds[0] < -0.02);
        assert!(bounds[1] > 0.01);
    }
}
