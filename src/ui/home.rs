//! Home page: site map menu

use super::render_scrollable_list;
use crate::state::HomePage;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph},
    Frame,
};

/// Draw the page menu
pub fn draw(frame: &mut Frame, area: Rect, home: &HomePage) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Min(0)])
        .split(area);

    let intro = Paragraph::new(vec![
        Line::from(Span::styled(
            "Practice pages for UI test automation",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            "Pick a page to exercise forms, waits, dialogs and tables.",
            Style::default().fg(Color::DarkGray),
        )),
    ]);
    frame.render_widget(intro, chunks[0]);

    let items: Vec<ListItem> = HomePage::entries()
        .enumerate()
        .map(|(idx, page)| {
            let is_selected = idx == home.selected_index;
            let prefix = if is_selected { "▸" } else { " " };
            let number = if idx < 9 {
                format!("{}", idx + 1)
            } else {
                " ".to_string()
            };

            let title_style = if is_selected {
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD)
            } else if page.is_browser_only() {
                Style::default().fg(Color::DarkGray)
            } else {
                Style::default()
            };

            ListItem::new(Line::from(vec![
                Span::styled(prefix, Style::default().fg(Color::Cyan)),
                Span::styled(format!(" {number} "), Style::default().fg(Color::Yellow)),
                Span::styled(format!("{:<18}", page.title()), title_style),
                Span::styled(page.route(), Style::default().fg(Color::DarkGray)),
            ]))
        })
        .collect();

    let list = List::new(items).block(
        Block::default()
            .title(" Pages ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Cyan)),
    );
    render_scrollable_list(frame, chunks[1], list, home.selected_index);
}
