//! Button interaction page

use super::components::{render_button_row, BUTTON_HEIGHT};
use crate::state::{ButtonsPage, PRACTICE_BUTTONS};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

pub fn draw(frame: &mut Frame, area: Rect, page: &ButtonsPage) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(BUTTON_HEIGHT),
            Constraint::Length(5),
            Constraint::Min(0),
        ])
        .split(area);

    render_button_row(
        frame,
        chunks[0],
        PRACTICE_BUTTONS,
        Some(page.buttons.selected),
        |idx| !ButtonsPage::is_disabled(idx),
    );

    let message = match page.last_action {
        Some(action) => Span::styled(
            action.message(),
            Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD),
        ),
        None => Span::styled(
            "Each button only answers its own gesture.",
            Style::default().fg(Color::DarkGray),
        ),
    };

    let content = vec![
        Line::from(message),
        Line::from(""),
        Line::from(vec![
            Span::styled("Clicks: ", Style::default().fg(Color::DarkGray)),
            Span::raw(page.clicks.to_string()),
        ]),
    ];

    let panel = Paragraph::new(content).block(
        Block::default()
            .title(" Result ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Cyan)),
    );
    frame.render_widget(panel, chunks[1]);
}
