//! UI module for rendering the TUI

mod catalog;
mod components;
mod forms;
mod generator;
mod layout;
mod widgets;

use crate::app::App;
use crate::state::View;
use ratatui::{layout::Rect, Frame};

/// Main draw function
pub fn draw(frame: &mut Frame, app: &App) {
    let (header_area, main_area) = layout::create_layout(frame.area());

    layout::draw_header(frame, header_area, app);

    match app.state.current_view {
        View::Catalog => catalog::draw(frame, main_area, app),
        View::Generator => generator::draw(frame, main_area, app),
    }

    layout::draw_status_bar(frame, app);

    // Errors are modal and drawn over everything else
    if let Some(error) = app.state.current_error() {
        components::render_error_dialog(frame, error);
    }
}

/// Furthest the generated prompt can scroll on a `screen`-sized terminal
pub fn output_scroll_limit(screen: Rect, output: &str, show_tips: bool) -> u16 {
    let (_, main_area) = layout::create_layout(screen);
    let viewport = generator::output_viewport(main_area, show_tips);
    generator::max_output_scroll(output, viewport)
}
