//! Focus handling shared by every page form

use super::field::FormField;
use super::validation::FormState;
use std::collections::HashMap;

/// Trait for common form operations.
///
/// Focus slots cover the input fields first, then the page's buttons.
pub trait Form {
    fn fields(&self) -> &[FormField];
    fn fields_mut(&mut self) -> &mut [FormField];
    fn button_count(&self) -> usize;
    fn active_slot(&self) -> usize;
    fn set_active_slot(&mut self, index: usize);

    fn slot_count(&self) -> usize {
        self.fields().len() + self.button_count()
    }

    fn next_field(&mut self) {
        let count = self.slot_count();
        if count == 0 {
            return;
        }
        let current = self.active_slot();
        self.set_active_slot((current + 1) % count);
    }

    fn prev_field(&mut self) {
        let count = self.slot_count();
        let current = self.active_slot();
        if current == 0 {
            self.set_active_slot(count.saturating_sub(1));
        } else {
            self.set_active_slot(current - 1);
        }
    }

    /// Focused input, if focus is not on a button
    fn active_field_mut(&mut self) -> Option<&mut FormField> {
        let index = self.active_slot();
        self.fields_mut().get_mut(index)
    }

    /// Focused button index, if focus is past the inputs
    fn active_button(&self) -> Option<usize> {
        self.active_slot().checked_sub(self.fields().len())
    }

    /// Current values keyed by field name
    fn values(&self) -> HashMap<String, String> {
        self.fields()
            .iter()
            .map(|f| (f.name.clone(), f.value.clone()))
            .collect()
    }
}

/// Field list plus focus and the latest validation pass
#[derive(Debug, Clone)]
pub struct FormModel {
    pub fields: Vec<FormField>,
    pub buttons: Vec<&'static str>,
    pub active_slot: usize,
    /// Result of the last submit, cleared on the next edit
    pub state: Option<FormState>,
}

impl FormModel {
    pub fn new(fields: Vec<FormField>, buttons: Vec<&'static str>) -> Self {
        Self {
            fields,
            buttons,
            active_slot: 0,
            state: None,
        }
    }

    pub fn field(&self, name: &str) -> Option<&FormField> {
        self.fields.iter().find(|f| f.name == name)
    }

    /// Focus is on an input rather than a button
    pub fn is_editing_text(&self) -> bool {
        self.active_slot < self.fields.len()
    }

    pub fn input_char(&mut self, c: char) {
        if let Some(field) = self.active_field_mut() {
            field.push_char(c);
            self.state = None;
        }
    }

    pub fn backspace(&mut self) {
        if let Some(field) = self.active_field_mut() {
            field.pop_char();
            self.state = None;
        }
    }

    pub fn reset(&mut self) {
        for field in &mut self.fields {
            field.clear();
        }
        self.active_slot = 0;
        self.state = None;
    }

    /// Message to show under a field after a failed submit
    pub fn error_for(&self, name: &str) -> Option<&str> {
        self.state.as_ref().and_then(|s| s.message(name))
    }
}

impl Form for FormModel {
    fn fields(&self) -> &[FormField] {
        &self.fields
    }
    fn fields_mut(&mut self) -> &mut [FormField] {
        &mut self.fields
    }
    fn button_count(&self) -> usize {
        self.buttons.len()
    }
    fn active_slot(&self) -> usize {
        self.active_slot
    }
    fn set_active_slot(&mut self, index: usize) {
        self.active_slot = index.min(self.slot_count().saturating_sub(1));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::forms::validation::validate;
    use crate::state::forms::FieldRule;

    fn model() -> FormModel {
        FormModel::new(
            vec![
                FormField::text("username", "Username"),
                FormField::password("password", "Password"),
            ],
            vec!["Login"],
        )
    }

    #[test]
    fn test_slot_count_includes_buttons() {
        assert_eq!(model().slot_count(), 3);
    }

    #[test]
    fn test_next_field_cycles() {
        let mut form = model();
        for _ in 0..3 {
            form.next_field();
        }
        assert_eq!(form.active_slot, 0);
    }

    #[test]
    fn test_prev_field_wraps_to_last_button() {
        let mut form = model();
        form.prev_field();
        assert_eq!(form.active_slot, 2);
        assert_eq!(form.active_button(), Some(0));
        assert!(form.active_field_mut().is_none());
    }

    #[test]
    fn test_focus_moves_on_empty_form_stay_put() {
        let mut form = FormModel::new(Vec::new(), Vec::new());
        form.next_field();
        form.prev_field();
        assert_eq!(form.active_slot, 0);
        assert!(form.active_field_mut().is_none());
    }

    #[test]
    fn test_set_active_slot_clamps() {
        let mut form = model();
        form.set_active_slot(100);
        assert_eq!(form.active_slot, 2);
    }

    #[test]
    fn test_input_goes_to_active_field() {
        let mut form = model();
        form.input_char('a');
        form.next_field();
        form.input_char('b');
        let values = form.values();
        assert_eq!(values["username"], "a");
        assert_eq!(values["password"], "b");
    }

    #[test]
    fn test_input_on_button_is_ignored() {
        let mut form = model();
        form.set_active_slot(2);
        form.input_char('x');
        assert!(form.values().values().all(|v| v.is_empty()));
    }

    #[test]
    fn test_edit_clears_validation_state() {
        let mut form = model();
        let rules = vec![FieldRule::new("username").required("Username is required")];
        form.state = Some(validate(&rules, &form.values()));
        assert_eq!(form.error_for("username"), Some("Username is required"));
        form.input_char('a');
        assert!(form.state.is_none());
        assert_eq!(form.error_for("username"), None);
    }

    #[test]
    fn test_reset() {
        let mut form = model();
        form.input_char('a');
        form.next_field();
        form.reset();
        assert_eq!(form.active_slot, 0);
        assert_eq!(form.field("username").unwrap().as_text(), "");
    }
}
