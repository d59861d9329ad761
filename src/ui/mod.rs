//! UI module for rendering the TUI

mod forms;
mod layout;
mod results;

use crate::app::App;
use crate::client::ApiClientTrait;
use crate::state::View;
use ratatui::Frame;

/// Main draw function
pub fn draw<C: ApiClientTrait>(frame: &mut Frame, app: &App<C>) {
    let area = frame.area();

    let (header_area, main_area) = layout::create_layout(area);

    layout::draw_header(frame, header_area, app);

    // Draw main content based on current view
    match &app.state.current_view {
        View::Register => forms::draw_register(frame, main_area, app),
        View::Search => forms::draw_search(frame, main_area, app),
    }

    // Draw status bar
    layout::draw_status_bar(frame, app);
}
