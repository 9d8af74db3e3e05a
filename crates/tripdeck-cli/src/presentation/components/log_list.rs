use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use crate::presentation::formatters::time;
use crate::presentation::view_models::{DutyCategoryViewModel, EldLogListViewModel};

pub fn render(f: &mut Frame, area: Rect, vm: &EldLogListViewModel, scroll: u16) {
    let mut lines: Vec<Line<'static>> = Vec::new();

    for (index, day) in vm.days.iter().enumerate() {
        if index > 0 {
            lines.push(Line::default());
            lines.push(Line::from(Span::styled(
                "─".repeat(60),
                Style::default().fg(Color::DarkGray),
            )));
            lines.push(Line::default());
        }

        lines.push(Line::from(Span::styled(
            format!("Log Date: {}", day.log_date.format("%b %-d, %Y")),
            Style::default()
                .fg(Color::LightCyan)
                .add_modifier(Modifier::BOLD),
        )));
        lines.push(Line::from(vec![
            Span::styled("Starting Location: ", Style::default().fg(Color::Gray)),
            Span::styled(
                day.starting_location.clone(),
                Style::default().fg(Color::White),
            ),
            Span::raw("   "),
            Span::styled("Ending Location: ", Style::default().fg(Color::Gray)),
            Span::styled(
                day.ending_location.clone(),
                Style::default().fg(Color::White),
            ),
        ]));

        for category in &day.categories {
            lines.push(Line::default());
            push_category(&mut lines, category);
        }
    }

    let paragraph = Paragraph::new(lines).scroll((scroll, 0)).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray))
            .title(Span::styled(
                " ELD Logs ",
                Style::default()
                    .fg(Color::LightCyan)
                    .add_modifier(Modifier::BOLD),
            )),
    );

    f.render_widget(paragraph, area);
}

fn push_category(lines: &mut Vec<Line<'static>>, category: &DutyCategoryViewModel) {
    lines.push(Line::from(Span::styled(
        format!("{} Periods:", category.label),
        Style::default()
            .fg(Color::White)
            .add_modifier(Modifier::BOLD),
    )));

    if category.periods.is_empty() {
        lines.push(Line::from(Span::styled(
            format!("  No {} recorded.", empty_label(category.label)),
            Style::default().fg(Color::DarkGray),
        )));
        return;
    }

    for period in &category.periods {
        let mut spans = vec![Span::styled(
            format!("  {} – {}", period.start, period.end),
            Style::default().fg(Color::White),
        )];
        if let Some(minutes) = period.duration_minutes {
            spans.push(Span::styled(
                format!("   Duration: {}", time::format_hours_minutes(minutes)),
                Style::default().fg(Color::Gray),
            ));
        }
        lines.push(Line::from(spans));
    }
}

fn empty_label(label: &str) -> &'static str {
    match label {
        "Driving" => "driving periods",
        "On Duty" => "on-duty periods",
        "Off Duty" => "off-duty periods",
        "Sleeper Berth" => "sleeper berth periods",
        _ => "periods",
    }
}
