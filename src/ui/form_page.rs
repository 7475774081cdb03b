//! Multi-field form page

use super::forms::{draw_form, draw_help_text, form_height};
use crate::state::ContactFormPage;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

/// Draw the form on the left and the result panel on the right
pub fn draw(frame: &mut Frame, area: Rect, page: &ContactFormPage) {
    let h_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
        .split(area);

    let form_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(form_height(&page.form)),
            Constraint::Length(1),
            Constraint::Min(0),
        ])
        .split(h_chunks[0]);

    draw_form(frame, form_chunks[0], &page.form);
    draw_help_text(frame, form_chunks[1]);
    draw_result(frame, h_chunks[1], page);
}

fn draw_result(frame: &mut Frame, area: Rect, page: &ContactFormPage) {
    let mut content = Vec::new();
    let border_color = match (&page.submitted, page.error_count()) {
        (Some(values), _) => {
            content.push(Line::from(Span::styled(
                "✓ Form submitted successfully!",
                Style::default()
                    .fg(Color::Green)
                    .add_modifier(Modifier::BOLD),
            )));
            content.push(Line::from(""));
            for (label, value) in values {
                content.push(Line::from(vec![
                    Span::styled(format!("{label}: "), Style::default().fg(Color::DarkGray)),
                    Span::raw(value.clone()),
                ]));
            }
            Color::Green
        }
        (None, 0) => {
            content.push(Line::from(Span::styled(
                "Fields marked * are required.",
                Style::default().fg(Color::DarkGray),
            )));
            Color::DarkGray
        }
        (None, count) => {
            content.push(Line::from(Span::styled(
                format!("✗ Please fix {count} error(s)"),
                Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
            )));
            if let Some(state) = &page.form.state {
                for (_, message) in state.errors() {
                    content.push(Line::from(vec![
                        Span::styled("  • ", Style::default().fg(Color::Red)),
                        Span::raw(message.to_string()),
                    ]));
                }
            }
            Color::Red
        }
    };

    let paragraph = Paragraph::new(content)
        .block(
            Block::default()
                .title(" Result ")
                .borders(Borders::ALL)
                .border_style(Style::default().fg(border_color)),
        )
        .wrap(Wrap { trim: false });
    frame.render_widget(paragraph, area);
}
