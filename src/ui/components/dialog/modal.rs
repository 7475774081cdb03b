//! Blocking alert / confirm / prompt modal

use super::base::{render_dialog, DialogConfig};
use crate::state::DialogKind;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    style::{Color, Modifier, Style},
    text::{Line, Span},
    Frame,
};

/// How the user closed the modal
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModalOutcome {
    Accepted,
    Cancelled,
}

/// Open modal and its in-progress input
#[derive(Debug, Clone)]
pub struct ModalDialog {
    pub kind: DialogKind,
    pub message: String,
    /// Prompt text, seeded with the default value
    pub input: String,
    /// OK focused (otherwise Cancel)
    pub ok_selected: bool,
    /// Queued app error rather than a page dialog
    is_error: bool,
}

impl ModalDialog {
    pub fn new(kind: DialogKind, message: &str, default_value: &str) -> Self {
        Self {
            kind,
            message: message.to_string(),
            input: default_value.to_string(),
            ok_selected: true,
            is_error: false,
        }
    }

    /// Alert-style modal for a queued app error
    pub fn error(message: &str) -> Self {
        Self {
            is_error: true,
            ..Self::new(DialogKind::Alert, message, "")
        }
    }

    fn title(&self) -> &'static str {
        if self.is_error {
            "Error"
        } else {
            self.kind.label()
        }
    }

    fn has_cancel(&self) -> bool {
        self.kind != DialogKind::Alert
    }

    /// Feed one key press. Returns the outcome once the modal closes.
    pub fn handle_key(&mut self, key: KeyEvent) -> Option<ModalOutcome> {
        match key.code {
            KeyCode::Enter => Some(if self.ok_selected {
                ModalOutcome::Accepted
            } else {
                ModalOutcome::Cancelled
            }),
            KeyCode::Esc => Some(ModalOutcome::Cancelled),
            KeyCode::Tab | KeyCode::BackTab | KeyCode::Left | KeyCode::Right
                if self.has_cancel() =>
            {
                self.ok_selected = !self.ok_selected;
                None
            }
            KeyCode::Backspace if self.kind == DialogKind::Prompt => {
                self.input.pop();
                None
            }
            KeyCode::Char(c)
                if self.kind == DialogKind::Prompt
                    && !key.modifiers.contains(KeyModifiers::CONTROL) =>
            {
                self.input.push(c);
                None
            }
            _ => None,
        }
    }
}

/// Render the modal centered over whatever is on screen
pub fn render_modal(frame: &mut Frame, modal: &ModalDialog) {
    let mut body = Vec::new();

    if modal.kind == DialogKind::Prompt {
        body.push(Line::from(vec![
            Span::styled("> ", Style::default().fg(Color::Cyan)),
            Span::styled(modal.input.clone(), Style::default().fg(Color::White)),
            Span::styled("▌", Style::default().fg(Color::Cyan)),
        ]));
    }

    let button = |label: &'static str, selected: bool| {
        if selected {
            Span::styled(
                format!("▸ {label} "),
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            )
        } else {
            Span::styled(format!("  {label} "), Style::default().fg(Color::DarkGray))
        }
    };
    let mut buttons = vec![button("OK", modal.ok_selected)];
    if modal.has_cancel() {
        buttons.push(Span::raw("  "));
        buttons.push(button("Cancel", !modal.ok_selected));
    }
    body.push(Line::from(buttons));

    let (enter, esc) = if modal.is_error {
        (" dismiss  ", " dismiss")
    } else {
        (" choose  ", " cancel")
    };
    let hint = vec![
        Span::styled("Enter", Style::default().fg(Color::Cyan)),
        Span::styled(enter, Style::default().fg(Color::DarkGray)),
        Span::styled("Esc", Style::default().fg(Color::Cyan)),
        Span::styled(esc, Style::default().fg(Color::DarkGray)),
    ];
    let color = if modal.is_error {
        Color::Red
    } else {
        Color::Yellow
    };

    render_dialog(
        frame,
        DialogConfig {
            title: modal.title(),
            title_color: color,
            border_color: color,
            message: &modal.message,
            body,
            hint: Some(hint),
            max_width: 60,
        },
    );
}
