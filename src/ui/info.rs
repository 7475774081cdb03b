//! Static pages: about, plus the browser-only widgets

use crate::state::Page;
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

fn browser_only_note(page: Page) -> &'static str {
    match page {
        Page::DragDrop => "Drag a card from one column and drop it on another.",
        Page::Download => "Click a link and check that the file lands in the download folder.",
        Page::Iframe => "Switch into the embedded frame before locating its elements.",
        Page::ShadowDom => "Pierce the shadow root to reach the elements inside it.",
        Page::Upload => "Send a file path to the file input and submit.",
        _ => "",
    }
}

/// Draw the about page
pub fn draw_about(frame: &mut Frame, area: Rect) {
    let content = vec![
        Line::from(Span::styled(
            "QA Playground",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from("A set of practice pages for UI test automation."),
        Line::from("Every page is deterministic: fixed messages, a fixed fixture and"),
        Line::from("a configurable simulated delay, so assertions stay stable."),
        Line::from(""),
        Line::from(vec![
            Span::styled("Version: ", Style::default().fg(Color::DarkGray)),
            Span::raw(env!("CARGO_PKG_VERSION")),
        ]),
    ];

    let paragraph = Paragraph::new(content)
        .block(
            Block::default()
                .title(" About ")
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Cyan)),
        )
        .wrap(Wrap { trim: false });
    frame.render_widget(paragraph, area);
}

/// Draw the placeholder for a page that needs a real browser
pub fn draw_browser_only(frame: &mut Frame, area: Rect, page: Page) {
    let content = vec![
        Line::from(Span::styled(
            page.title(),
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(browser_only_note(page)),
        Line::from(""),
        Line::from(vec![
            Span::styled(
                "This widget only exists in a browser. Route: ",
                Style::default().fg(Color::DarkGray),
            ),
            Span::styled(page.route(), Style::default().fg(Color::Cyan)),
        ]),
    ];

    let paragraph = Paragraph::new(content)
        .block(
            Block::default()
                .title(format!(" {} ", page.title()))
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::DarkGray)),
        )
        .wrap(Wrap { trim: false });
    frame.render_widget(paragraph, area);
}
