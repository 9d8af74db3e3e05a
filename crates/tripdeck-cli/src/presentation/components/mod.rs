//! Stateless TUI widgets. Each render function draws one data shape
//! into an area; selection, scroll, and tab state are passed in by the
//! owning screen.

pub mod details_chrome;
pub mod form;
pub mod log_list;
pub mod route_map;
pub mod summary;
pub mod trip_table;

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
};

/// Dim spinner-style line shown while a screen's fetches are pending.
pub fn render_loading(f: &mut Frame, area: Rect, label: &str) {
    let paragraph = Paragraph::new(Line::from(Span::styled(
        label,
        Style::default().fg(Color::DarkGray),
    )))
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray)),
    );

    f.render_widget(paragraph, centered_band(area));
}

/// The one error surface: a red banner with the screen's generic
/// message. Error kinds are not distinguished here.
pub fn render_error_banner(f: &mut Frame, area: Rect, message: &str) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::LightRed))
        .title(Span::styled(
            " Error ",
            Style::default()
                .fg(Color::LightRed)
                .add_modifier(Modifier::BOLD),
        ));

    let paragraph = Paragraph::new(Line::from(Span::styled(
        message,
        Style::default().fg(Color::Red),
    )))
    .wrap(Wrap { trim: true })
    .block(block);

    f.render_widget(paragraph, centered_band(area));
}

/// Informational empty-state notice ("no route data", "no logs").
pub fn render_notice(f: &mut Frame, area: Rect, message: &str) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));

    let paragraph = Paragraph::new(Line::from(message))
        .wrap(Wrap { trim: true })
        .block(block);

    f.render_widget(paragraph, centered_band(area));
}

/// Empty-list call to action: message plus the key hint that replaces
/// the web app's "Plan New Trip" button.
pub fn render_empty_call_to_action(f: &mut Frame, area: Rect, message: &str, hint: &str) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));

    let lines = vec![
        Line::from(message.to_string()),
        Line::from(Span::styled(
            hint.to_string(),
            Style::default()
                .fg(Color::LightCyan)
                .add_modifier(Modifier::BOLD),
        )),
    ];

    let paragraph = Paragraph::new(lines).wrap(Wrap { trim: true }).block(block);

    f.render_widget(paragraph, centered_band_of(area, 4));
}

fn centered_band(area: Rect) -> Rect {
    centered_band_of(area, 3)
}

fn centered_band_of(area: Rect, height: u16) -> Rect {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(0),
            Constraint::Length(height),
            Constraint::Min(0),
        ])
        .split(area);
    chunks[1]
}
