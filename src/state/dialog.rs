//! Blocking alert / confirm / prompt dialogs behind a capability trait

/// Which native dialog was shown
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DialogKind {
    Alert,
    Confirm,
    Prompt,
}

impl DialogKind {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Alert => "Alert",
            Self::Confirm => "Confirm",
            Self::Prompt => "Prompt",
        }
    }
}

/// Outcome of the most recent dialog
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DialogResult {
    pub kind: DialogKind,
    pub accepted: bool,
    /// Entered text, prompt only
    pub input_value: Option<String>,
}

impl DialogResult {
    /// Sentence the alerts page shows for this result
    pub fn describe(&self) -> String {
        match (self.kind, self.accepted, &self.input_value) {
            (DialogKind::Alert, _, _) => "You successfully clicked an alert".to_string(),
            (DialogKind::Confirm, true, _) => "You pressed OK".to_string(),
            (DialogKind::Confirm, false, _) => "You pressed Cancel".to_string(),
            (DialogKind::Prompt, true, Some(value)) => format!("You entered: {value}"),
            (DialogKind::Prompt, _, _) => "Prompt cancelled".to_string(),
        }
    }
}

/// Blocking dialog capability.
///
/// Each call returns only after the user has answered; no other page logic
/// runs in between.
#[cfg_attr(test, mockall::automock)]
pub trait DialogPort {
    fn alert(&mut self, message: &str);

    fn confirm(&mut self, message: &str) -> bool;

    /// `None` when cancelled
    fn prompt(&mut self, message: &str, default_value: &str) -> Option<String>;
}

/// Shows dialogs through a port and remembers the last outcome
#[derive(Debug, Clone, Default)]
pub struct DialogTrigger {
    last: Option<DialogResult>,
}

impl DialogTrigger {
    pub fn last_result(&self) -> Option<&DialogResult> {
        self.last.as_ref()
    }

    pub fn show_alert(&mut self, port: &mut dyn DialogPort, message: &str) {
        port.alert(message);
        self.record(DialogResult {
            kind: DialogKind::Alert,
            accepted: true,
            input_value: None,
        });
    }

    pub fn show_confirm(&mut self, port: &mut dyn DialogPort, message: &str) -> bool {
        let accepted = port.confirm(message);
        self.record(DialogResult {
            kind: DialogKind::Confirm,
            accepted,
            input_value: None,
        });
        accepted
    }

    pub fn show_prompt(
        &mut self,
        port: &mut dyn DialogPort,
        message: &str,
        default_value: &str,
    ) -> Option<String> {
        let value = port.prompt(message, default_value);
        self.record(DialogResult {
            kind: DialogKind::Prompt,
            accepted: value.is_some(),
            input_value: value.clone(),
        });
        value
    }

    fn record(&mut self, result: DialogResult) {
        tracing::debug!("{} closed, accepted={}", result.kind.label(), result.accepted);
        self.last = Some(result);
    }
}
