//! Layout components (header, status bar)

use crate::app::App;
use crate::state::Page;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Split the screen into header and content, reserving the bottom line for
/// the status bar
pub fn create_layout(area: Rect) -> (Rect, Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Header
            Constraint::Min(0),    // Content
            Constraint::Length(1), // Status bar
        ])
        .split(area);

    (chunks[0], chunks[1])
}

/// Draw the header: site name, page title and its route
pub fn draw_header(frame: &mut Frame, area: Rect, app: &App) {
    let page = app.state.current_page;
    let header = Paragraph::new(Line::from(vec![
        Span::styled(
            " QA Playground ",
            Style::default()
                .fg(Color::Black)
                .bg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw(" "),
        Span::styled(
            page.title(),
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw("  "),
        Span::styled(page.route(), Style::default().fg(Color::DarkGray)),
    ]));
    frame.render_widget(header, area);
}

/// Draw the status bar
pub fn draw_status_bar(frame: &mut Frame, app: &App) {
    let area = frame.area();
    let status_area = Rect {
        x: 0,
        y: area.height.saturating_sub(1),
        width: area.width,
        height: 1,
    };

    let mut spans = vec![Span::raw(" ")];

    // Page-specific hints
    let hints = get_page_hints(app.state.current_page);
    spans.push(Span::styled(hints, Style::default().fg(Color::Gray)));

    if let Some(msg) = &app.state.status_message {
        spans.push(Span::raw(" | "));
        spans.push(Span::styled(msg, Style::default().fg(Color::Green)));
    }

    let status = Paragraph::new(Line::from(spans)).style(Style::default().bg(Color::DarkGray));
    frame.render_widget(status, status_area);

    // Quit hint on the right
    let quit_hint = if app.state.controller.is_editing_text() {
        " ^C:quit "
    } else {
        " q:quit "
    };
    let quit_area = Rect {
        x: area.width.saturating_sub(quit_hint.len() as u16),
        y: area.height.saturating_sub(1),
        width: quit_hint.len() as u16,
        height: 1,
    };
    let quit_widget =
        Paragraph::new(quit_hint).style(Style::default().bg(Color::DarkGray).fg(Color::Gray));
    frame.render_widget(quit_widget, quit_area);
}

/// Get keyboard hints for the current page
fn get_page_hints(page: Page) -> &'static str {
    match page {
        Page::Home => "j/k:nav  Enter:open  1-9:jump",
        Page::Login | Page::Forms => "Tab:next  Shift+Tab:prev  Enter:submit  Esc:back",
        Page::Welcome => "Enter:logout  Esc:back",
        Page::Dynamic | Page::Alerts | Page::Api => "Tab/←/→:focus  Enter:press  Esc:back",
        Page::Buttons => "Tab/←/→:focus  Enter:click  d:double  r:right  Esc:back",
        Page::Tables => "j/k:nav  s:sort column  o:direction  Esc:back",
        Page::About
        | Page::DragDrop
        | Page::Download
        | Page::Iframe
        | Page::ShadowDom
        | Page::Upload => "Esc:back",
    }
}
