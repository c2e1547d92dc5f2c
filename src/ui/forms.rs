//! Customer and address form panels

use crate::app::App;
use crate::state::{Form, FormField, Panel};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Width reserved for field labels
const LABEL_WIDTH: usize = 16;

/// Build the line for one form field
fn field_line(field: &FormField, is_active: bool) -> Line<'_> {
    let label_style = if is_active {
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::Gray)
    };

    let value_style = if field.read_only {
        Style::default().fg(Color::Yellow)
    } else if is_active {
        Style::default().fg(Color::White)
    } else {
        Style::default().fg(Color::DarkGray)
    };

    let display_value = if field.value.is_empty() && !is_active {
        "(empty)"
    } else {
        field.as_text()
    };

    let cursor = if is_active && !field.read_only {
        "▌"
    } else {
        ""
    };

    Line::from(vec![
        Span::styled(
            format!("{:<width$}", field.label, width = LABEL_WIDTH),
            label_style,
        ),
        Span::styled(display_value, value_style),
        Span::styled(cursor, Style::default().fg(Color::Cyan)),
    ])
}

fn draw_form(frame: &mut Frame, area: Rect, title: &str, form: &dyn Form, is_focused: bool) {
    let border_style = if is_focused {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::DarkGray)
    };

    let lines: Vec<Line> = form
        .fields()
        .into_iter()
        .enumerate()
        .map(|(idx, field)| field_line(field, is_focused && idx == form.active_field()))
        .collect();

    let block = Block::default()
        .title(format!(" {} ", title))
        .borders(Borders::ALL)
        .border_style(border_style);

    frame.render_widget(Paragraph::new(lines).block(block), area);
}

/// Draw both form panels side by side
pub fn draw(frame: &mut Frame, area: Rect, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(area);

    let view = &app.view;
    draw_form(
        frame,
        chunks[0],
        "Customer",
        &view.customer,
        view.focus == Panel::Customer,
    );
    draw_form(
        frame,
        chunks[1],
        "Address",
        &view.address,
        view.focus == Panel::Address,
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    fn spans_text(line: &Line) -> String {
        line.spans.iter().map(|s| s.content.as_ref()).collect()
    }

    #[test]
    fn test_empty_inactive_field_shows_placeholder() {
        let field = FormField::text("city", "City");
        assert!(spans_text(&field_line(&field, false)).contains("(empty)"));
    }

    #[test]
    fn test_active_field_shows_cursor() {
        let mut field = FormField::text("city", "City");
        field.set_text("Austin");
        let text = spans_text(&field_line(&field, true));
        assert!(text.starts_with("City"));
        assert!(text.ends_with("Austin▌"));
    }

    #[test]
    fn test_read_only_field_has_no_cursor() {
        let mut field = FormField::read_only("locked", "Locked");
        field.set_text("true");
        assert!(!spans_text(&field_line(&field, true)).contains('▌'));
    }
}
