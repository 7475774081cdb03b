//! Sortable table page

use super::render_scrollable_table;
use crate::state::{TableColumn, TablesPage};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Row, Table},
    Frame,
};

pub fn draw(frame: &mut Frame, area: Rect, page: &TablesPage) {
    let rows = page.sorted_rows();

    let block = Block::default()
        .title(" Users ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));

    if rows.is_empty() {
        let content = Paragraph::new("No records in the fixture.")
            .style(Style::default().fg(Color::DarkGray))
            .block(block);
        frame.render_widget(content, area);
        return;
    }

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(2), Constraint::Min(0)])
        .split(area);

    let sort_label = format!(
        "Sort: {} {}",
        page.sort_column.label(),
        page.sort_direction.symbol()
    );
    let header = Paragraph::new(Line::from(vec![
        Span::styled(sort_label, Style::default().fg(Color::Cyan)),
        Span::styled(" [s]column [o]direction", Style::default().fg(Color::DarkGray)),
    ]));
    frame.render_widget(header, chunks[0]);

    let header_cells = TableColumn::ALL.map(|column| {
        if column == page.sort_column {
            format!("{} {}", column.label(), page.sort_direction.symbol())
        } else {
            column.label().to_string()
        }
    });
    let header_row = Row::new(header_cells).style(
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD),
    );

    let body = rows.iter().map(|r| {
        Row::new([
            r.id.to_string(),
            r.name.clone(),
            r.email.clone(),
            r.registered.format("%Y-%m-%d").to_string(),
        ])
    });

    let table = Table::new(
        body,
        [
            Constraint::Length(5),
            Constraint::Min(18),
            Constraint::Min(24),
            Constraint::Length(12),
        ],
    )
    .header(header_row)
    .row_highlight_style(
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD),
    )
    .highlight_symbol("▸ ")
    .block(block);

    render_scrollable_table(frame, chunks[1], table, page.selected_index);
}
