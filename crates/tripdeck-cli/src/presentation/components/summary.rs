use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use crate::presentation::formatters::{number, time};
use crate::presentation::view_models::TripSummaryViewModel;

pub fn render(f: &mut Frame, area: Rect, vm: &TripSummaryViewModel, scroll: u16) {
    let mut lines = Vec::new();

    section(&mut lines, "Trip Overview");
    metric(
        &mut lines,
        "Total Distance",
        format!("{} miles", number::format_miles(vm.total_distance_miles)),
    );
    metric(
        &mut lines,
        "Total Duration",
        vm.duration_minutes
            .map(time::format_hours_minutes)
            .unwrap_or_else(|| "N/A".to_string()),
    );
    metric(&mut lines, "Number of Days", vm.day_count.to_string());
    lines.push(Line::default());

    section(&mut lines, "Key Locations");
    metric(&mut lines, "Starting Point", vm.current_location.clone());
    metric(&mut lines, "Pickup Location", vm.pickup_location.clone());
    metric(&mut lines, "Dropoff Location", vm.dropoff_location.clone());
    lines.push(Line::default());

    section(&mut lines, "Schedule Information");
    metric(
        &mut lines,
        "Required Rest Stops",
        format!("{} stops", vm.rest_stop_count),
    );
    metric(
        &mut lines,
        "Fuel Stops",
        format!("{} stops", vm.fuel_stop_count),
    );
    metric(
        &mut lines,
        "Estimated Driving Time",
        vm.est_driving_hours
            .map(|hours| format!("{} hours", hours))
            .unwrap_or_else(|| "N/A".to_string()),
    );
    lines.push(Line::default());

    section(&mut lines, "Detailed Route Information");
    for stop in &vm.stops {
        lines.push(Line::from(vec![
            Span::styled(
                format!("  {} ", stop.point_type.label()),
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(stop.location.clone(), Style::default().fg(Color::Gray)),
        ]));

        let mut stamps = vec![Span::styled(
            format!("    Arrival: {}", time::format_stop_time(&stop.arrival)),
            Style::default().fg(Color::DarkGray),
        )];
        if let Some(departure) = &stop.departure {
            stamps.push(Span::styled(
                format!("  Departure: {}", time::format_stop_time(departure)),
                Style::default().fg(Color::DarkGray),
            ));
        }
        if let Some(dwell) = stop.dwell_minutes
            && dwell > 0
        {
            stamps.push(Span::styled(
                format!("  ({} min)", dwell),
                Style::default().fg(Color::Cyan),
            ));
        }
        lines.push(Line::from(stamps));
    }

    let paragraph = Paragraph::new(lines).scroll((scroll, 0)).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray)),
    );

    f.render_widget(paragraph, area);
}

fn section(lines: &mut Vec<Line<'static>>, title: &'static str) {
    lines.push(Line::from(Span::styled(
        title,
        Style::default()
            .fg(Color::LightCyan)
            .add_modifier(Modifier::BOLD),
    )));
}

fn metric(lines: &mut Vec<Line<'static>>, label: &'static str, value: String) {
    lines.push(Line::from(vec![
        Span::styled(format!("  {}: ", label), Style::default().fg(Color::Gray)),
        Span::styled(value, Style::default().fg(Color::White)),
    ]));
}
