//! Login and welcome pages

use super::components::{render_button_row, BUTTON_HEIGHT};
use super::forms::{draw_form, draw_help_text, form_height};
use crate::state::{LoginPage, WelcomePage};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Width of the centered login card
const CARD_WIDTH: u16 = 50;

fn centered_column(area: Rect, width: u16) -> Rect {
    let width = width.min(area.width);
    Rect {
        x: area.x + (area.width - width) / 2,
        width,
        ..area
    }
}

/// Draw the login form with its error banner
pub fn draw_login(frame: &mut Frame, area: Rect, login: &LoginPage) {
    let block = Block::default()
        .title(" Sign in ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));
    let inner = block.inner(centered_column(area, CARD_WIDTH));
    frame.render_widget(block, centered_column(area, CARD_WIDTH));

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2),
            Constraint::Length(form_height(&login.form)),
            Constraint::Length(1),
            Constraint::Min(0),
        ])
        .split(inner);

    let banner = match login.banner() {
        Some(message) => Line::from(Span::styled(
            format!("✗ {message}"),
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        )),
        None => Line::from(Span::styled(
            "Use any email address and a password of 6+ characters",
            Style::default().fg(Color::DarkGray),
        )),
    };
    frame.render_widget(Paragraph::new(banner), chunks[0]);

    draw_form(frame, chunks[1], &login.form);
    draw_help_text(frame, chunks[2]);
}

/// Draw the signed-in landing page
pub fn draw_welcome(frame: &mut Frame, area: Rect, welcome: &WelcomePage) {
    let block = Block::default()
        .title(" Welcome ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Green));
    let outer = centered_column(area, CARD_WIDTH);
    let inner = block.inner(outer);
    frame.render_widget(block, outer);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(4),
            Constraint::Length(BUTTON_HEIGHT),
            Constraint::Min(0),
        ])
        .split(inner);

    let content = vec![
        Line::from(Span::styled(
            welcome.greeting(),
            Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(vec![
            Span::styled("Signed in at ", Style::default().fg(Color::DarkGray)),
            Span::raw(welcome.signed_in_at.format("%Y-%m-%d %H:%M:%S").to_string()),
        ]),
    ];
    frame.render_widget(Paragraph::new(content), chunks[0]);

    render_button_row(frame, chunks[1], &["Logout"], Some(0), |_| true);
}
