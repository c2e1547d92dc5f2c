//! UI module for rendering the TUI

mod forms;
mod layout;
mod tables;

use crate::app::App;
use ratatui::Frame;

/// Main draw function
pub fn draw(frame: &mut Frame, app: &App) {
    let [forms_area, flash_area, tables_area, status_area] = layout::create_layout(frame.area());

    forms::draw(frame, forms_area, app);
    layout::draw_flash(frame, flash_area, app);
    tables::draw(frame, tables_area, app);
    layout::draw_status_bar(frame, status_area, app);
}
