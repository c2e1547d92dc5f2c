//! Layout components (flash line, status bar)

use crate::app::App;
use crate::bridge::SUCCESS;
use crate::state::Panel;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Height of a form panel: six fields plus borders
const FORM_HEIGHT: u16 = 8;

/// Split the screen into forms, flash line, tables and status bar
pub fn create_layout(area: Rect) -> [Rect; 4] {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(FORM_HEIGHT), // Forms
            Constraint::Length(3),           // Flash message
            Constraint::Min(0),              // Result tables
            Constraint::Length(1),           // Status bar
        ])
        .split(area);

    [chunks[0], chunks[1], chunks[2], chunks[3]]
}

/// Draw the flash message region
pub fn draw_flash(frame: &mut Frame, area: Rect, app: &App) {
    let message = app.view.flash.as_deref().unwrap_or("");
    let color = if message == SUCCESS {
        Color::Green
    } else {
        Color::Yellow
    };
    let paragraph = Paragraph::new(message)
        .style(Style::default().fg(color))
        .block(
            Block::default()
                .title(" Message ")
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::DarkGray)),
        );
    frame.render_widget(paragraph, area);
}

/// Draw the status bar
pub fn draw_status_bar(frame: &mut Frame, area: Rect, app: &App) {
    let mut spans = vec![Span::styled(
        format!(" {} ", app.view.focus.label()),
        Style::default().fg(Color::Black).bg(Color::Cyan),
    )];

    spans.push(Span::raw(" "));
    spans.push(Span::styled(
        app.service_root.as_str(),
        Style::default().fg(Color::Blue),
    ));

    if app.in_flight > 0 {
        spans.push(Span::raw(" | "));
        spans.push(Span::styled(
            format!("{} pending", app.in_flight),
            Style::default().fg(Color::Yellow),
        ));
    }

    spans.push(Span::raw(" | "));
    spans.push(Span::styled(
        get_panel_hints(app.view.focus),
        Style::default().fg(Color::Gray),
    ));

    let status = Paragraph::new(Line::from(spans)).style(Style::default().bg(Color::DarkGray));
    frame.render_widget(status, area);
}

/// Get keyboard hints for the focused panel
fn get_panel_hints(panel: Panel) -> &'static str {
    match panel {
        Panel::Customer => {
            "Tab:next ^T:panel ^N:create ^R:get ^U:update ^D:delete ^F:search ^P:prefix ^L:lock ^K:unlock ^X:clear ^C:quit"
        }
        Panel::Address => {
            "Tab:next ^T:panel ^N:create ^R:get ^U:update ^D:delete ^F:search ^X:clear ^C:quit"
        }
    }
}
