use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Cell, Paragraph, Row, Table, TableState},
};

use tripdeck_types::Trip;

use crate::presentation::formatters::time;

pub fn render(f: &mut Frame, area: Rect, trips: &[Trip], state: &mut TableState) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Min(0),
            Constraint::Length(1),
        ])
        .split(area);

    let title = Line::from(vec![
        Span::styled(
            "━━ ",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            "Your Trips",
            Style::default()
                .fg(Color::LightCyan)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            format!(" ({})", trips.len()),
            Style::default().fg(Color::Gray),
        ),
        Span::styled(
            " ━━",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ),
    ]);
    f.render_widget(Paragraph::new(title), chunks[0]);

    let header = Row::new(vec!["From", "Pickup", "Dropoff", "Created"]).style(
        Style::default()
            .fg(Color::Gray)
            .add_modifier(Modifier::BOLD),
    );

    let rows: Vec<Row> = trips
        .iter()
        .map(|trip| {
            Row::new(vec![
                Cell::from(trip.current_location.clone()),
                Cell::from(trip.pickup_location.clone()),
                Cell::from(trip.dropoff_location.clone()),
                Cell::from(time::format_date(&trip.created_at)),
            ])
        })
        .collect();

    let table = Table::new(
        rows,
        [
            Constraint::Percentage(28),
            Constraint::Percentage(28),
            Constraint::Percentage(28),
            Constraint::Percentage(16),
        ],
    )
    .header(header)
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray)),
    )
    .row_highlight_style(Style::default().add_modifier(Modifier::REVERSED))
    .highlight_symbol("> ");

    f.render_stateful_widget(table, chunks[1], state);

    let footer = Line::from(Span::styled(
        "Enter view trip │ ↑/↓ select │ n new trip │ q quit",
        Style::default().fg(Color::DarkGray),
    ));
    f.render_widget(Paragraph::new(footer), chunks[2]);
}
