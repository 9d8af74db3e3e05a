use std::rc::Rc;

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Tabs},
};

use tripdeck_types::Trip;

use crate::screens::DetailsTab;

/// Header, tab strip, body, footer.
pub fn layout(area: Rect) -> Rc<[Rect]> {
    Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Min(0),
            Constraint::Length(1),
        ])
        .split(area)
}

pub fn render_header(f: &mut Frame, area: Rect, trip: &Trip) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Green))
        .title(Span::styled(
            " Trip Details ",
            Style::default()
                .fg(Color::LightGreen)
                .add_modifier(Modifier::BOLD),
        ));

    let line = Line::from(vec![
        Span::styled("Origin: ", Style::default().fg(Color::Gray)),
        Span::styled(
            trip.current_location.clone(),
            Style::default()
                .fg(Color::LightCyan)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw(" │ "),
        Span::styled("Pickup: ", Style::default().fg(Color::Gray)),
        Span::styled(
            trip.pickup_location.clone(),
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw(" │ "),
        Span::styled("Destination: ", Style::default().fg(Color::Gray)),
        Span::styled(
            trip.dropoff_location.clone(),
            Style::default()
                .fg(Color::LightMagenta)
                .add_modifier(Modifier::BOLD),
        ),
    ]);

    f.render_widget(Paragraph::new(line).block(block), area);
}

pub fn render_tabs(f: &mut Frame, area: Rect, active: DetailsTab) {
    let titles: Vec<Line> = DetailsTab::ALL
        .iter()
        .enumerate()
        .map(|(i, tab)| Line::from(format!(" {} {} ", i + 1, tab.title())))
        .collect();

    let selected = DetailsTab::ALL
        .iter()
        .position(|tab| *tab == active)
        .unwrap_or(0);

    let tabs = Tabs::new(titles)
        .select(selected)
        .style(Style::default().fg(Color::Gray))
        .highlight_style(
            Style::default()
                .fg(Color::LightCyan)
                .add_modifier(Modifier::BOLD),
        )
        .divider("│");

    f.render_widget(tabs, area);
}

pub fn render_footer(f: &mut Frame, area: Rect, active: DetailsTab) {
    let hints = match active {
        DetailsTab::Map => "1/2/3 tabs │ ←/→ stop │ ↑/↓ scroll │ Esc back │ q quit",
        _ => "1/2/3 tabs │ Tab next │ ↑/↓ scroll │ Esc back │ q quit",
    };

    f.render_widget(
        Paragraph::new(Line::from(Span::styled(
            hints,
            Style::default().fg(Color::DarkGray),
        ))),
        area,
    );
}
