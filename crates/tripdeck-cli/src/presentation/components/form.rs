use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use crate::screens::{FormField, FormScreen};

pub fn render(f: &mut Frame, area: Rect, form: &FormScreen) {
    let has_error = form.error.is_some();

    let mut constraints = vec![Constraint::Length(1)]; // Title bar
    if has_error {
        constraints.push(Constraint::Length(3)); // Error banner
    }
    for _ in FormField::ALL {
        constraints.push(Constraint::Length(4));
    }
    constraints.push(Constraint::Min(0));
    constraints.push(Constraint::Length(1)); // Footer hints

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(area);

    let mut chunk_idx = 0;
    render_title_bar(f, chunks[chunk_idx]);
    chunk_idx += 1;

    if has_error {
        if let Some(message) = &form.error {
            render_error_line(f, chunks[chunk_idx], message);
        }
        chunk_idx += 1;
    }

    for field in FormField::ALL {
        render_field(f, chunks[chunk_idx], form, field);
        chunk_idx += 1;
    }

    render_footer(f, chunks[chunks.len() - 1], form.submitting);
}

fn render_title_bar(f: &mut Frame, area: Rect) {
    let title = Line::from(vec![
        Span::styled(
            "━━ ",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            "Plan Your Trip",
            Style::default()
                .fg(Color::LightCyan)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            " ━━",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ),
    ]);

    f.render_widget(Paragraph::new(title), area);
}

fn render_error_line(f: &mut Frame, area: Rect, message: &str) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::LightRed));

    let paragraph = Paragraph::new(Line::from(Span::styled(
        message.to_string(),
        Style::default().fg(Color::Red),
    )))
    .block(block);

    f.render_widget(paragraph, area);
}

fn render_field(f: &mut Frame, area: Rect, form: &FormScreen, field: FormField) {
    let focused = form.focus == field;

    let border_style = if focused {
        Style::default().fg(Color::LightCyan)
    } else {
        Style::default().fg(Color::DarkGray)
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(border_style)
        .title(Span::styled(
            format!(" {} ", field.label()),
            if focused {
                Style::default()
                    .fg(Color::LightCyan)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::Gray)
            },
        ));

    let value = form.field_value(field);
    let value_line = if value.is_empty() && !focused {
        Line::from(Span::styled(
            field.placeholder(),
            Style::default().fg(Color::DarkGray),
        ))
    } else {
        let mut spans = vec![Span::styled(
            value.to_string(),
            Style::default().fg(Color::White),
        )];
        if focused {
            spans.push(Span::styled("▏", Style::default().fg(Color::LightCyan)));
        }
        Line::from(spans)
    };

    let lines = vec![
        value_line,
        Line::from(Span::styled(
            field.helper(),
            Style::default().fg(Color::DarkGray),
        )),
    ];

    f.render_widget(Paragraph::new(lines).block(block), area);
}

fn render_footer(f: &mut Frame, area: Rect, submitting: bool) {
    let line = if submitting {
        Line::from(Span::styled(
            "Creating trip...",
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        ))
    } else {
        Line::from(Span::styled(
            "Enter submit │ Tab next field │ Ctrl+T trips │ Esc quit",
            Style::default().fg(Color::DarkGray),
        ))
    };

    f.render_widget(Paragraph::new(line), area);
}
