//! Blocking dialogs drawn over the last rendered frame

use super::components::{render_modal, ModalDialog, ModalOutcome};
use crate::state::{DialogKind, DialogPort};
use crossterm::event::{self, Event, KeyEventKind};
use ratatui::{backend::Backend, buffer::Buffer, Frame, Terminal};

/// `DialogPort` that runs its own event loop until the modal is answered.
///
/// The page underneath is frozen: the frame captured before the key press is
/// repainted behind the modal on every redraw.
pub struct TerminalDialogs<'a, B: Backend> {
    terminal: &'a mut Terminal<B>,
    background: &'a Buffer,
}

impl<'a, B: Backend> TerminalDialogs<'a, B> {
    pub fn new(terminal: &'a mut Terminal<B>, background: &'a Buffer) -> Self {
        Self {
            terminal,
            background,
        }
    }

    fn run(&mut self, mut modal: ModalDialog) -> (ModalOutcome, String) {
        tracing::debug!("{} opened", modal.kind.label());
        loop {
            let background = self.background;
            if let Err(e) = self.terminal.draw(|frame| {
                paint_background(frame, background);
                render_modal(frame, &modal);
            }) {
                tracing::warn!("Failed to draw dialog: {e}");
                return (ModalOutcome::Cancelled, modal.input);
            }

            match event::read() {
                Ok(Event::Key(key)) if key.kind == KeyEventKind::Press => {
                    if let Some(outcome) = modal.handle_key(key) {
                        return (outcome, modal.input);
                    }
                }
                Ok(_) => {}
                Err(e) => {
                    tracing::warn!("Failed to read dialog input: {e}");
                    return (ModalOutcome::Cancelled, modal.input);
                }
            }
        }
    }
}

/// Copy the frozen page into the frame, clipped to the current size
fn paint_background(frame: &mut Frame, background: &Buffer) {
    let area = frame.area().intersection(background.area);
    let buffer = frame.buffer_mut();
    for y in area.top()..area.bottom() {
        for x in area.left()..area.right() {
            if let (Some(dst), Some(src)) = (buffer.cell_mut((x, y)), background.cell((x, y))) {
                *dst = src.clone();
            }
        }
    }
}

impl<B: Backend> DialogPort for TerminalDialogs<'_, B> {
    fn alert(&mut self, message: &str) {
        self.run(ModalDialog::new(DialogKind::Alert, message, ""));
    }

    fn confirm(&mut self, message: &str) -> bool {
        let (outcome, _) = self.run(ModalDialog::new(DialogKind::Confirm, message, ""));
        outcome == ModalOutcome::Accepted
    }

    fn prompt(&mut self, message: &str, default_value: &str) -> Option<String> {
        let (outcome, input) = self.run(ModalDialog::new(DialogKind::Prompt, message, default_value));
        (outcome == ModalOutcome::Accepted).then_some(input)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::{backend::TestBackend, layout::Rect, style::Style};

    #[test]
    fn test_paint_background_clips_to_frame() {
        let mut background = Buffer::empty(Rect::new(0, 0, 20, 5));
        background.set_string(0, 0, "frozen page", Style::default());

        let mut terminal = Terminal::new(TestBackend::new(10, 3)).unwrap();
        let frame = terminal
            .draw(|frame| paint_background(frame, &background))
            .unwrap();

        assert_eq!(frame.buffer.area, Rect::new(0, 0, 10, 3));
        let first_row: String = (0..10)
            .filter_map(|x| frame.buffer.cell((x, 0)).map(|c| c.symbol().to_string()))
            .collect();
        assert_eq!(first_row, "frozen pag");
    }
}
