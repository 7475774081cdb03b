//! Field rendering utilities for forms

use crate::state::{Form, FormField, FormModel};
use crate::ui::components::{render_button_row, BUTTON_HEIGHT};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

/// Rows for a multiline input, borders included
const MULTILINE_HEIGHT: u16 = 5;

/// Draw a form field; a validation message turns the border red and is
/// shown under the value
pub fn draw_field(
    frame: &mut Frame,
    area: Rect,
    field: &FormField,
    is_active: bool,
    error: Option<&str>,
) {
    let style = if is_active {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::DarkGray)
    };

    let border_style = match (error, is_active) {
        (Some(_), _) => Style::default().fg(Color::Red),
        (None, true) => Style::default().fg(Color::Cyan),
        (None, false) => Style::default().fg(Color::DarkGray),
    };

    let display_value = field.display_value();
    let display_str = if display_value.is_empty() && !is_active {
        "(empty)".to_string()
    } else {
        display_value
    };

    let cursor = if is_active { "▌" } else { "" };

    let content = if field.is_multiline() {
        let mut lines: Vec<Line> = display_str
            .lines()
            .map(|l| Line::from(l.to_string()))
            .collect();
        if is_active {
            if let Some(last) = lines.last_mut() {
                last.spans
                    .push(Span::styled(cursor, Style::default().fg(Color::Cyan)));
            } else {
                lines.push(Line::from(Span::styled(
                    cursor,
                    Style::default().fg(Color::Cyan),
                )));
            }
        }
        Paragraph::new(lines)
    } else {
        Paragraph::new(Line::from(vec![
            Span::styled(display_str, style),
            Span::styled(cursor, Style::default().fg(Color::Cyan)),
        ]))
    };

    let mut block = Block::default()
        .title(format!(" {} ", field.label))
        .borders(Borders::ALL)
        .border_style(border_style);
    if let Some(message) = error {
        block = block.title_bottom(Line::from(Span::styled(
            format!(" {message} "),
            Style::default().fg(Color::Red),
        )));
    }

    frame.render_widget(content.wrap(Wrap { trim: false }).block(block), area);
}

/// Draw every field of a form followed by its button row
pub fn draw_form(frame: &mut Frame, area: Rect, form: &FormModel) {
    let mut constraints: Vec<Constraint> = form
        .fields
        .iter()
        .map(|f| {
            Constraint::Length(if f.is_multiline() {
                MULTILINE_HEIGHT
            } else {
                3
            })
        })
        .collect();
    constraints.push(Constraint::Length(BUTTON_HEIGHT));
    constraints.push(Constraint::Min(0));

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(area);

    for (idx, field) in form.fields.iter().enumerate() {
        draw_field(
            frame,
            chunks[idx],
            field,
            form.active_slot == idx,
            form.error_for(&field.name),
        );
    }

    render_button_row(
        frame,
        chunks[form.fields.len()],
        &form.buttons,
        form.active_button(),
        |_| true,
    );
}

/// Rows `draw_form` needs for this form
pub fn form_height(form: &FormModel) -> u16 {
    form.fields
        .iter()
        .map(|f| if f.is_multiline() { MULTILINE_HEIGHT } else { 3 })
        .sum::<u16>()
        + BUTTON_HEIGHT
}

/// Help text line shown under forms
pub fn draw_help_text(frame: &mut Frame, area: Rect) {
    let help = Line::from(vec![
        Span::styled("Tab", Style::default().fg(Color::Cyan)),
        Span::styled(" next field  ", Style::default().fg(Color::DarkGray)),
        Span::styled("Shift+Tab", Style::default().fg(Color::Cyan)),
        Span::styled(" previous  ", Style::default().fg(Color::DarkGray)),
        Span::styled("Enter", Style::default().fg(Color::Cyan)),
        Span::styled(" submit  ", Style::default().fg(Color::DarkGray)),
        Span::styled("Esc", Style::default().fg(Color::Cyan)),
        Span::styled(" back", Style::default().fg(Color::DarkGray)),
    ]);
    frame.render_widget(Paragraph::new(help), area);
}
