//! Dynamic content page

use super::components::{render_button_row, BUTTON_HEIGHT};
use crate::state::{DynamicPage, LoadPhase, DYNAMIC_BUTTONS};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Gauge, Paragraph},
    Frame,
};
use std::time::Instant;

/// Draw the buttons, the loading region and the toggled element
pub fn draw(frame: &mut Frame, area: Rect, page: &DynamicPage) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(BUTTON_HEIGHT),
            Constraint::Length(6),
            Constraint::Length(3),
            Constraint::Min(0),
        ])
        .split(area);

    render_button_row(
        frame,
        chunks[0],
        DYNAMIC_BUTTONS,
        Some(page.buttons.selected),
        |_| true,
    );

    let block = Block::default()
        .title(format!(
            " Content (loaded {}x) ",
            page.content.completed_loads()
        ))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));

    if let LoadPhase::Loading { .. } = page.content.phase() {
        let progress = page.content.progress(Instant::now());
        let gauge = Gauge::default()
            .block(block)
            .gauge_style(Style::default().fg(Color::Cyan).bg(Color::Black))
            .label("Loading...")
            .ratio(f64::from(progress));
        frame.render_widget(gauge, chunks[1]);
    } else {
        let content: Vec<Line> = match page.visible_content() {
            Some(lines) => lines
                .iter()
                .enumerate()
                .map(|(idx, line)| {
                    let style = if idx == 0 {
                        Style::default()
                            .fg(Color::Green)
                            .add_modifier(Modifier::BOLD)
                    } else {
                        Style::default()
                    };
                    Line::from(Span::styled(*line, style))
                })
                .collect(),
            None => vec![Line::from(Span::styled(
                "Press \"Load content\" to fetch the content.",
                Style::default().fg(Color::DarkGray),
            ))],
        };
        frame.render_widget(Paragraph::new(content).block(block), chunks[1]);
    }

    let element = if page.element_visible {
        Paragraph::new(Span::styled(
            "I was hidden until you toggled me",
            Style::default().fg(Color::Yellow),
        ))
        .block(
            Block::default()
                .title(" Hidden element ")
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Yellow)),
        )
    } else {
        Paragraph::new(Span::styled(
            "(element hidden)",
            Style::default().fg(Color::DarkGray),
        ))
    };
    frame.render_widget(element, chunks[2]);
}
