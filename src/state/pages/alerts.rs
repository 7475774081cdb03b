//! Alerts page: native-style alert, confirm and prompt dialogs

use crate::state::dialog::{DialogPort, DialogResult, DialogTrigger};
use crate::state::pages::ButtonRow;

pub const ALERT_BUTTONS: &[&str] = &["Alert", "Confirm", "Prompt"];

#[derive(Debug, Clone)]
pub struct AlertsPage {
    pub buttons: ButtonRow,
    pub trigger: DialogTrigger,
}

impl Default for AlertsPage {
    fn default() -> Self {
        Self {
            buttons: ButtonRow::new(ALERT_BUTTONS),
            trigger: DialogTrigger::default(),
        }
    }
}

impl AlertsPage {
    /// Press the focused button. Blocks until the dialog is answered.
    pub fn activate(&mut self, port: &mut dyn DialogPort) {
        match self.buttons.selected {
            0 => self.trigger.show_alert(port, "I am an alert box!"),
            1 => {
                self.trigger.show_confirm(port, "Press a button!");
            }
            _ => {
                self.trigger
                    .show_prompt(port, "Please enter your name:", "Harry Potter");
            }
        }
    }

    pub fn result(&self) -> Option<&DialogResult> {
        self.trigger.last_result()
    }
}
