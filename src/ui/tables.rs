//! Customer and address result tables

use crate::app::App;
use crate::state::{address_row, customer_row, ADDRESS_COLUMNS, CUSTOMER_COLUMNS};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Paragraph, Row, Table},
    Frame,
};

const CUSTOMER_WIDTHS: [Constraint; 7] = [
    Constraint::Length(4),
    Constraint::Percentage(12),
    Constraint::Percentage(12),
    Constraint::Percentage(12),
    Constraint::Percentage(10),
    Constraint::Length(6),
    Constraint::Min(20),
];

const ADDRESS_WIDTHS: [Constraint; 7] = [
    Constraint::Length(4),
    Constraint::Length(11),
    Constraint::Min(12),
    Constraint::Percentage(15),
    Constraint::Length(6),
    Constraint::Length(8),
    Constraint::Percentage(12),
];

fn header(columns: [&'static str; 7]) -> Row<'static> {
    Row::new(columns).style(
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD),
    )
}

fn block(title: &str) -> Block<'static> {
    Block::default()
        .title(format!(" {} ", title))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray))
}

/// Table that has not been built yet
fn draw_placeholder(frame: &mut Frame, area: Rect, title: &str, hint: &str) {
    let content = Paragraph::new(hint)
        .style(Style::default().fg(Color::DarkGray))
        .block(block(title));
    frame.render_widget(content, area);
}

fn draw_customers(frame: &mut Frame, area: Rect, app: &App) {
    let Some(customers) = &app.view.customer_results else {
        draw_placeholder(frame, area, "Customers", "Search or retrieve to list customers.");
        return;
    };

    let rows: Vec<Row> = customers.iter().map(|c| Row::new(customer_row(c))).collect();
    let table = Table::new(rows, CUSTOMER_WIDTHS)
        .header(header(CUSTOMER_COLUMNS))
        .block(block(&format!("Customers ({})", customers.len())));
    frame.render_widget(table, area);
}

fn draw_addresses(frame: &mut Frame, area: Rect, app: &App) {
    let Some(addresses) = &app.view.address_results else {
        draw_placeholder(frame, area, "Addresses", "Search to list a customer's addresses.");
        return;
    };

    let rows: Vec<Row> = addresses.iter().map(|a| Row::new(address_row(a))).collect();
    let table = Table::new(rows, ADDRESS_WIDTHS)
        .header(header(ADDRESS_COLUMNS))
        .block(block(&format!("Addresses ({})", addresses.len())));
    frame.render_widget(table, area);
}

/// Draw both result tables stacked
pub fn draw(frame: &mut Frame, area: Rect, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
        .split(area);

    draw_customers(frame, chunks[0], app);
    draw_addresses(frame, chunks[1], app);
}
