//! Multi-field form practice page

use crate::error::Result;
use crate::state::forms::{
    FieldRule, Form, FormDefinition, FormField, FormModel, EMAIL_PATTERN, PHONE_PATTERN,
};

const SUBMIT_BUTTON: usize = 0;

fn is_adult_age(value: &str) -> bool {
    value
        .trim()
        .parse::<u32>()
        .is_ok_and(|age| (18..=120).contains(&age))
}

/// Registration-style form with required and optional fields
#[derive(Debug, Clone)]
pub struct ContactFormPage {
    pub form: FormModel,
    rules: FormDefinition,
    /// Label/value pairs of the last accepted submission
    pub submitted: Option<Vec<(String, String)>>,
}

impl ContactFormPage {
    pub fn new() -> Result<Self> {
        let rules = FormDefinition::new(vec![
            FieldRule::new("name").required("Name is required").length(
                Some(2),
                Some(50),
                "Name must be between 2 and 50 characters",
            ),
            FieldRule::new("email")
                .required("Email is required")
                .pattern(EMAIL_PATTERN, "Invalid email format")?,
            FieldRule::new("phone").pattern(PHONE_PATTERN, "Invalid phone number")?,
            FieldRule::new("age").custom(is_adult_age, "Age must be a number between 18 and 120"),
            FieldRule::new("message").length(
                None,
                Some(200),
                "Message must be at most 200 characters",
            ),
        ])?;
        let form = FormModel::new(
            vec![
                FormField::text("name", "Full Name *"),
                FormField::text("email", "Email *"),
                FormField::text("phone", "Phone (10 digits)"),
                FormField::text("age", "Age"),
                FormField::multiline("message", "Message"),
            ],
            vec!["Submit", "Reset"],
        );
        Ok(Self {
            form,
            rules,
            submitted: None,
        })
    }

    /// Validate; on success keep a summary of what was sent
    pub fn submit(&mut self) -> bool {
        let state = self.rules.validate(&self.form.values());
        let accepted = state.is_valid();
        self.submitted = accepted.then(|| {
            self.form
                .fields
                .iter()
                .filter(|f| !f.as_text().trim().is_empty())
                .map(|f| (f.label.trim_end_matches(" *").to_string(), f.value.clone()))
                .collect()
        });
        tracing::info!("Form submitted, valid={accepted}");
        self.form.state = Some(state);
        accepted
    }

    pub fn reset(&mut self) {
        self.form.reset();
        self.submitted = None;
    }

    /// Enter on a focused button: Submit or Reset
    pub fn press_button(&mut self, index: usize) {
        if index == SUBMIT_BUTTON {
            self.submit();
        } else {
            self.reset();
        }
    }

    pub fn error_count(&self) -> usize {
        self.form
            .state
            .as_ref()
            .map(|s| s.errors().count())
            .unwrap_or(0)
    }

    pub fn input_char(&mut self, c: char) {
        self.form.input_char(c);
        self.submitted = None;
    }

    pub fn backspace(&mut self) {
        self.form.backspace();
        self.submitted = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn fill(page: &mut ContactFormPage, name: &str, value: &str) {
        let slot = page
            .form
            .fields
            .iter()
            .position(|f| f.name == name)
            .unwrap();
        page.form.set_active_slot(slot);
        for c in value.chars() {
            page.input_char(c);
        }
    }

    #[test]
    fn test_age_check() {
        assert!(is_adult_age("18"));
        assert!(is_adult_age(" 120 "));
        assert!(!is_adult_age("17"));
        assert!(!is_adult_age("abc"));
        assert!(!is_adult_age("-5"));
    }

    #[test]
    fn test_empty_form_requires_name_and_email_only() {
        let mut page = ContactFormPage::new().unwrap();
        assert!(!page.submit());
        let state = page.form.state.as_ref().unwrap();
        assert_eq!(state.message("name"), Some("Name is required"));
        assert_eq!(state.message("email"), Some("Email is required"));
        assert_eq!(state.message("phone"), None);
        assert_eq!(state.message("age"), None);
        assert_eq!(state.message("message"), None);
        assert_eq!(page.error_count(), 2);
        assert!(page.submitted.is_none());
    }

    #[test]
    fn test_invalid_email() {
        let mut page = ContactFormPage::new().unwrap();
        fill(&mut page, "name", "Ada Lovelace");
        fill(&mut page, "email", "not-an-email");
        assert!(!page.submit());
        assert_eq!(page.form.error_for("email"), Some("Invalid email format"));
    }

    #[test]
    fn test_optional_fields_checked_when_filled() {
        let mut page = ContactFormPage::new().unwrap();
        fill(&mut page, "name", "Ada Lovelace");
        fill(&mut page, "email", "user@example.com");
        fill(&mut page, "phone", "555-1234");
        fill(&mut page, "age", "12");
        assert!(!page.submit());
        assert_eq!(page.form.error_for("phone"), Some("Invalid phone number"));
        assert_eq!(
            page.form.error_for("age"),
            Some("Age must be a number between 18 and 120")
        );
    }

    #[test]
    fn test_valid_submission_summary() {
        let mut page = ContactFormPage::new().unwrap();
        fill(&mut page, "name", "Ada Lovelace");
        fill(&mut page, "email", "user@example.com");
        fill(&mut page, "age", "36");
        assert!(page.submit());
        assert_eq!(
            page.submitted,
            Some(vec![
                ("Full Name".to_string(), "Ada Lovelace".to_string()),
                ("Email".to_string(), "user@example.com".to_string()),
                ("Age".to_string(), "36".to_string()),
            ])
        );
    }

    #[test]
    fn test_name_length_bounds() {
        let mut page = ContactFormPage::new().unwrap();
        fill(&mut page, "name", "A");
        fill(&mut page, "email", "user@example.com");
        assert!(!page.submit());
        assert_eq!(
            page.form.error_for("name"),
            Some("Name must be between 2 and 50 characters")
        );
    }

    #[test]
    fn test_reset_clears_everything() {
        let mut page = ContactFormPage::new().unwrap();
        fill(&mut page, "name", "Ada Lovelace");
        fill(&mut page, "email", "user@example.com");
        page.submit();
        page.reset();
        assert!(page.submitted.is_none());
        assert!(page.form.state.is_none());
        assert!(page.form.values().values().all(|v| v.is_empty()));
    }

    #[test]
    fn test_press_buttons() {
        let mut page = ContactFormPage::new().unwrap();
        fill(&mut page, "name", "Ada Lovelace");
        page.press_button(0);
        assert_eq!(page.error_count(), 1);
        page.press_button(1);
        assert_eq!(page.error_count(), 0);
        assert_eq!(page.form.field("name").unwrap().as_text(), "");
    }

    #[test]
    fn test_editing_hides_previous_summary() {
        let mut page = ContactFormPage::new().unwrap();
        fill(&mut page, "name", "Ada Lovelace");
        fill(&mut page, "email", "user@example.com");
        assert!(page.submit());
        page.backspace();
        assert!(page.submitted.is_none());
    }
}
