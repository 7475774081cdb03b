//! Application state module

mod app_state;
mod dialog;
mod dynamic;
mod forms;
mod pages;

pub use app_state::*;
pub use dialog::*;
pub use dynamic::*;
pub use forms::*;
pub use pages::*;
