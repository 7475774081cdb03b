//! Dialog components for TUI

mod base;
mod modal;

pub use modal::{render_modal, ModalDialog, ModalOutcome};
