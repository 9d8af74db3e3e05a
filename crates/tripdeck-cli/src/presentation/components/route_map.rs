use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{
        Block, Borders, List, ListItem, ListState, Paragraph,
        canvas::{Canvas, Line as CanvasLine},
    },
};

use tripdeck_types::PointType;

use crate::presentation::formatters::time;
use crate::presentation::view_models::{MarkerViewModel, RouteMapViewModel};

/// Marker colors, one fixed category per point type.
pub fn point_color(point_type: PointType) -> Color {
    match point_type {
        PointType::Start => Color::Green,
        PointType::Pickup => Color::Blue,
        PointType::Rest => Color::Rgb(255, 165, 0), // Orange
        PointType::Fuel => Color::Yellow,
        PointType::Dropoff => Color::Red,
    }
}

pub fn render(f: &mut Frame, area: Rect, vm: &RouteMapViewModel, selected: usize) {
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(62), Constraint::Percentage(38)])
        .split(area);

    render_canvas(f, columns[0], vm, selected);

    let side = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(8), Constraint::Min(0)])
        .split(columns[1]);

    if let Some(marker) = vm.markers.get(selected) {
        render_marker_details(f, side[0], marker);
    }
    render_stop_cards(f, side[1], vm, selected);
}

fn render_canvas(f: &mut Frame, area: Rect, vm: &RouteMapViewModel, selected: usize) {
    let canvas = Canvas::default()
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::DarkGray))
                .title(Span::styled(
                    " Route Map ",
                    Style::default()
                        .fg(Color::LightCyan)
                        .add_modifier(Modifier::BOLD),
                )),
        )
        .x_bounds(vm.x_bounds)
        .y_bounds(vm.y_bounds)
        .paint(|ctx| {
            // Route line through every point, in sequence order.
            for pair in vm.positions.windows(2) {
                ctx.draw(&CanvasLine {
                    x1: pair[0].0,
                    y1: pair[0].1,
                    x2: pair[1].0,
                    y2: pair[1].1,
                    color: Color::Blue,
                });
            }

            // Markers on a separate layer so they sit on top of the line.
            ctx.layer();
            for (index, marker) in vm.markers.iter().enumerate() {
                let style = Style::default()
                    .fg(point_color(marker.point_type))
                    .add_modifier(Modifier::BOLD);
                let glyph = if index == selected { "◉" } else { "●" };
                ctx.print(
                    marker.longitude,
                    marker.latitude,
                    Line::from(Span::styled(glyph, style)),
                );
            }
        });

    f.render_widget(canvas, area);
}

/// Stands in for the map popup: the selected marker's type, location,
/// and timestamps.
fn render_marker_details(f: &mut Frame, area: Rect, marker: &MarkerViewModel) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(point_color(marker.point_type)))
        .title(Span::styled(
            " Stop Details ",
            Style::default()
                .fg(point_color(marker.point_type))
                .add_modifier(Modifier::BOLD),
        ));

    let mut lines = vec![
        Line::from(Span::styled(
            marker.point_type.label(),
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            marker.location.clone(),
            Style::default().fg(Color::Gray),
        )),
        Line::from(vec![
            Span::styled("Arrival: ", Style::default().fg(Color::Gray)),
            Span::styled(
                time::format_full_time(&marker.arrival),
                Style::default().fg(Color::White),
            ),
        ]),
    ];

    if let Some(departure) = &marker.departure {
        lines.push(Line::from(vec![
            Span::styled("Departure: ", Style::default().fg(Color::Gray)),
            Span::styled(
                time::format_full_time(departure),
                Style::default().fg(Color::White),
            ),
        ]));
    }

    if let Some(dwell) = marker.dwell_minutes
        && dwell > 0
    {
        lines.push(Line::from(Span::styled(
            format!("{} min stop", dwell),
            Style::default().fg(Color::Cyan),
        )));
    }

    f.render_widget(Paragraph::new(lines).block(block), area);
}

/// Card list mirroring the markers for non-map reading, one card per
/// route point in the same order.
fn render_stop_cards(f: &mut Frame, area: Rect, vm: &RouteMapViewModel, selected: usize) {
    let items: Vec<ListItem> = vm
        .markers
        .iter()
        .map(|marker| {
            ListItem::new(Line::from(vec![
                Span::styled(
                    format!("{:<8}", marker.point_type.tag()),
                    Style::default()
                        .fg(point_color(marker.point_type))
                        .add_modifier(Modifier::BOLD),
                ),
                Span::styled(marker.location.clone(), Style::default().fg(Color::White)),
                Span::styled(
                    format!("  {}", time::format_stop_time(&marker.arrival)),
                    Style::default().fg(Color::DarkGray),
                ),
            ]))
        })
        .collect();

    let list = List::new(items)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::DarkGray))
                .title(" Route Stops "),
        )
        .highlight_style(Style::default().add_modifier(Modifier::REVERSED))
        .highlight_symbol("> ");

    let mut state = ListState::default();
    state.select(Some(selected));
    f.render_stateful_widget(list, area, &mut state);
}
