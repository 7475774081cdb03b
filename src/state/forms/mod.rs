//! Form domain layer
//!
//! Declarative field rules, the validation engine that evaluates them, and
//! the editable field model the pages render.

mod field;
mod form;
mod rules;
mod validation;

pub use field::FormField;
pub use form::{Form, FormModel};
pub use rules::{FieldRule, FormDefinition, EMAIL_PATTERN, PHONE_PATTERN};
