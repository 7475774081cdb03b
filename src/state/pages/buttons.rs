//! Button interaction practice

use crate::state::pages::ButtonRow;

pub const PRACTICE_BUTTONS: &[&str] = &["Click me", "Double-click me", "Right-click me", "Disabled"];

/// Index of the button that never reacts
const DISABLED_BUTTON: usize = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ButtonAction {
    Click,
    DoubleClick,
    RightClick,
}

impl ButtonAction {
    pub fn message(&self) -> &'static str {
        match self {
            Self::Click => "You have done a dynamic click",
            Self::DoubleClick => "You have done a double click",
            Self::RightClick => "You have done a right click",
        }
    }
}

#[derive(Debug, Clone)]
pub struct ButtonsPage {
    pub buttons: ButtonRow,
    pub last_action: Option<ButtonAction>,
    pub clicks: u32,
}

impl Default for ButtonsPage {
    fn default() -> Self {
        Self {
            buttons: ButtonRow::new(PRACTICE_BUTTONS),
            last_action: None,
            clicks: 0,
        }
    }
}

impl ButtonsPage {
    pub fn is_disabled(index: usize) -> bool {
        index == DISABLED_BUTTON
    }

    /// Perform an interaction on the focused button.
    ///
    /// Each button only answers its own gesture, like the browser page.
    pub fn interact(&mut self, action: ButtonAction) {
        let expected = match self.buttons.selected {
            0 => ButtonAction::Click,
            1 => ButtonAction::DoubleClick,
            2 => ButtonAction::RightClick,
            _ => return,
        };
        if action == expected {
            self.clicks += 1;
            self.last_action = Some(action);
        }
    }
}
