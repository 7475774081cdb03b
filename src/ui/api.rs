//! Mock API page

use super::components::{render_button_row, BUTTON_HEIGHT};
use crate::api::ApiRecord;
use crate::state::{ApiPage, API_BUTTONS};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Gauge, Paragraph, Row, Table, Wrap},
    Frame,
};
use std::time::Instant;

pub fn draw(frame: &mut Frame, area: Rect, page: &ApiPage) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(BUTTON_HEIGHT), Constraint::Min(0)])
        .split(area);

    render_button_row(
        frame,
        chunks[0],
        API_BUTTONS,
        Some(page.buttons.selected),
        |_| true,
    );

    let path = page.endpoint.map(|e| e.path()).unwrap_or("no request yet");
    let block = Block::default()
        .title(format!(" GET {path} "))
        .borders(Borders::ALL);

    if page.loader.is_loading() {
        let gauge = Gauge::default()
            .block(block.border_style(Style::default().fg(Color::Cyan)))
            .gauge_style(Style::default().fg(Color::Cyan).bg(Color::Black))
            .label("Waiting for response...")
            .ratio(f64::from(page.loader.progress(Instant::now())));
        let gauge_area = Rect {
            height: chunks[1].height.min(3),
            ..chunks[1]
        };
        frame.render_widget(gauge, gauge_area);
        return;
    }

    match &page.outcome {
        None => {
            let hint = Paragraph::new(Span::styled(
                "Fetch an endpoint to see the response.",
                Style::default().fg(Color::DarkGray),
            ))
            .block(block.border_style(Style::default().fg(Color::DarkGray)));
            frame.render_widget(hint, chunks[1]);
        }
        Some(Err(e)) => {
            let error = Paragraph::new(vec![
                Line::from(Span::styled(
                    format!("✗ {e}"),
                    Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
                )),
                Line::from(""),
                Line::from(Span::styled(
                    "The request failed. Your test should assert on this message.",
                    Style::default().fg(Color::DarkGray),
                )),
            ])
            .block(block.border_style(Style::default().fg(Color::Red)));
            frame.render_widget(error, chunks[1]);
        }
        Some(Ok(response)) if page.show_raw => {
            let raw = Paragraph::new(response.body.as_str())
                .block(
                    block
                        .title_bottom(format!(" {} raw ", response.status))
                        .border_style(Style::default().fg(Color::Green)),
                )
                .wrap(Wrap { trim: false });
            frame.render_widget(raw, chunks[1]);
        }
        Some(Ok(response)) => {
            let table = records_table(&response.records).block(
                block
                    .title_bottom(format!(
                        " {} OK, {} records ",
                        response.status,
                        response.records.len()
                    ))
                    .border_style(Style::default().fg(Color::Green)),
            );
            frame.render_widget(table, chunks[1]);
        }
    }
}

fn records_table(records: &[ApiRecord]) -> Table<'_> {
    let header = Row::new(["ID", "Name", "Username", "Email", "Phone", "Website"]).style(
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD),
    );
    let rows = records.iter().map(|r| {
        Row::new([
            r.id.to_string(),
            r.name.clone(),
            r.username.clone(),
            r.email.clone(),
            r.phone.clone(),
            r.website.clone(),
        ])
    });
    Table::new(
        rows,
        [
            Constraint::Length(4),
            Constraint::Min(16),
            Constraint::Length(12),
            Constraint::Min(20),
            Constraint::Length(14),
            Constraint::Min(12),
        ],
    )
    .header(header)
}
