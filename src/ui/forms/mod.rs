//! Form rendering module

mod field_renderer;

pub use field_renderer::{draw_form, draw_help_text, form_height};
