//! Alerts page

use super::components::{render_button_row, BUTTON_HEIGHT};
use crate::state::{AlertsPage, DialogKind, ALERT_BUTTONS};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

pub fn draw(frame: &mut Frame, area: Rect, page: &AlertsPage) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(BUTTON_HEIGHT),
            Constraint::Length(4),
            Constraint::Min(0),
        ])
        .split(area);

    render_button_row(
        frame,
        chunks[0],
        ALERT_BUTTONS,
        Some(page.buttons.selected),
        |_| true,
    );

    let line = match page.result() {
        Some(result) => {
            let color = match (result.kind, result.accepted) {
                (DialogKind::Alert, _) | (_, true) => Color::Green,
                (_, false) => Color::Yellow,
            };
            Line::from(vec![
                Span::styled(
                    format!("[{}] ", result.kind.label()),
                    Style::default().fg(Color::DarkGray),
                ),
                Span::styled(
                    result.describe(),
                    Style::default().fg(color).add_modifier(Modifier::BOLD),
                ),
            ])
        }
        None => Line::from(Span::styled(
            "Open a dialog to see its result here.",
            Style::default().fg(Color::DarkGray),
        )),
    };

    let result = Paragraph::new(line).block(
        Block::default()
            .title(" Result ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Cyan)),
    );
    frame.render_widget(result, chunks[1]);
}
