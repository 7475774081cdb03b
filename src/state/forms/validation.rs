//! Validation engine: field rules in, form state out

use super::rules::{FieldRule, FormDefinition};
use std::collections::HashMap;

/// Outcome of validating a single field
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldState {
    pub value: String,
    pub valid: bool,
    pub message: Option<String>,
}

impl FieldState {
    fn valid(value: &str) -> Self {
        Self {
            value: value.to_string(),
            valid: true,
            message: None,
        }
    }

    fn invalid(value: &str, message: &str) -> Self {
        Self {
            value: value.to_string(),
            valid: false,
            message: Some(message.to_string()),
        }
    }
}

/// Snapshot of a form after one validation pass, in declaration order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormState {
    fields: Vec<(String, FieldState)>,
}

impl FormState {
    /// True iff every field is valid
    pub fn is_valid(&self) -> bool {
        self.fields.iter().all(|(_, f)| f.valid)
    }

    pub fn get(&self, field_id: &str) -> Option<&FieldState> {
        self.fields
            .iter()
            .find(|(id, _)| id == field_id)
            .map(|(_, f)| f)
    }

    /// Message of a field, if it failed
    pub fn message(&self, field_id: &str) -> Option<&str> {
        self.get(field_id).and_then(|f| f.message.as_deref())
    }

    /// First failing field and its message, by declaration order
    pub fn first_error(&self) -> Option<(&str, &str)> {
        self.fields.iter().find_map(|(id, f)| {
            f.message
                .as_deref()
                .filter(|_| !f.valid)
                .map(|m| (id.as_str(), m))
        })
    }

    pub fn errors(&self) -> impl Iterator<Item = (&str, &str)> {
        self.fields
            .iter()
            .filter_map(|(id, f)| f.message.as_deref().map(|m| (id.as_str(), m)))
    }
}

/// Check one value against one rule.
///
/// Precedence is required, then pattern, then length, then custom. Optional
/// fields that are blank after trimming skip every other check.
pub fn validate_field(rule: &FieldRule, value: &str) -> FieldState {
    if value.trim().is_empty() {
        return if rule.required {
            FieldState::invalid(value, &rule.error_message)
        } else {
            FieldState::valid(value)
        };
    }

    if let Some(pattern) = &rule.pattern {
        if !pattern.is_match(value) {
            return FieldState::invalid(value, &pattern.message);
        }
    }

    if let Some(length) = &rule.length {
        if !length.contains(value.chars().count()) {
            return FieldState::invalid(value, &length.message);
        }
    }

    if let Some(custom) = &rule.custom_check {
        if !(custom.check)(value) {
            return FieldState::invalid(value, &custom.message);
        }
    }

    FieldState::valid(value)
}

/// Validate every rule against the submitted values.
///
/// Values missing from the map count as empty input.
pub fn validate(rules: &[FieldRule], values: &HashMap<String, String>) -> FormState {
    let fields = rules
        .iter()
        .map(|rule| {
            let value = values.get(&rule.field_id).map(String::as_str).unwrap_or("");
            (rule.field_id.clone(), validate_field(rule, value))
        })
        .collect();
    FormState { fields }
}

impl FormDefinition {
    pub fn validate(&self, values: &HashMap<String, String>) -> FormState {
        validate(self.rules(), values)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::forms::rules::{EMAIL_PATTERN, PHONE_PATTERN};

    fn values(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    fn email_rule() -> FieldRule {
        FieldRule::new("email")
            .required("Email is required")
            .pattern(EMAIL_PATTERN, "Invalid email format")
            .unwrap()
    }

    fn is_even_length(value: &str) -> bool {
        value.len() % 2 == 0
    }

    mod precedence {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_required_wins_over_everything() {
            let rule = email_rule().length(Some(5), None, "Too short");
            let state = validate_field(&rule, "");
            assert!(!state.valid);
            assert_eq!(state.message.as_deref(), Some("Email is required"));
        }

        #[test]
        fn test_whitespace_only_counts_as_empty() {
            let state = validate_field(&email_rule(), "   \t");
            assert_eq!(state.message.as_deref(), Some("Email is required"));
            assert_eq!(state.value, "   \t");
        }

        #[test]
        fn test_pattern_wins_over_length() {
            let rule = email_rule().length(Some(20), None, "Too short");
            let state = validate_field(&rule, "short");
            assert_eq!(state.message.as_deref(), Some("Invalid email format"));
        }

        #[test]
        fn test_length_wins_over_custom() {
            let rule = FieldRule::new("code")
                .length(Some(3), Some(3), "Must be 3 characters")
                .custom(is_even_length, "Must be even");
            let state = validate_field(&rule, "abcde");
            assert_eq!(state.message.as_deref(), Some("Must be 3 characters"));
        }

        #[test]
        fn test_custom_runs_last() {
            let rule = FieldRule::new("code")
                .length(Some(1), Some(10), "Bad length")
                .custom(is_even_length, "Must be even");
            let state = validate_field(&rule, "abc");
            assert_eq!(state.message.as_deref(), Some("Must be even"));
            assert!(validate_field(&rule, "abcd").valid);
        }

        #[test]
        fn test_length_counts_characters_not_bytes() {
            let rule = FieldRule::new("name").length(None, Some(3), "Too long");
            assert!(validate_field(&rule, "äöü").valid);
        }
    }

    mod optional_fields {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_empty_optional_with_pattern_is_valid() {
            let rule = FieldRule::new("phone")
                .pattern(PHONE_PATTERN, "Invalid phone number")
                .unwrap()
                .length(Some(10), Some(10), "Bad length");
            let state = validate_field(&rule, "");
            assert!(state.valid);
            assert_eq!(state.message, None);
        }

        #[test]
        fn test_non_empty_optional_is_checked() {
            let rule = FieldRule::new("phone")
                .pattern(PHONE_PATTERN, "Invalid phone number")
                .unwrap();
            let state = validate_field(&rule, "12-34");
            assert_eq!(state.message.as_deref(), Some("Invalid phone number"));
        }
    }

    mod form_level {
        use super::*;
        use pretty_assertions::assert_eq;

        fn rules() -> Vec<FieldRule> {
            vec![
                FieldRule::new("username").required("Username is required"),
                FieldRule::new("password").required("Password is required"),
            ]
        }

        #[test]
        fn test_missing_values_are_empty() {
            let state = validate(&rules(), &HashMap::new());
            assert!(!state.is_valid());
            assert_eq!(state.errors().count(), 2);
            assert_eq!(state.message("username"), Some("Username is required"));
            assert_eq!(state.message("password"), Some("Password is required"));
        }

        #[test]
        fn test_first_error_follows_declaration_order() {
            let state = validate(&rules(), &values(&[("username", "ann")]));
            assert_eq!(
                state.first_error(),
                Some(("password", "Password is required"))
            );

            let state = validate(&rules(), &HashMap::new());
            assert_eq!(
                state.first_error(),
                Some(("username", "Username is required"))
            );
        }

        #[test]
        fn test_all_valid() {
            let state = validate(&rules(), &values(&[("username", "a"), ("password", "b")]));
            assert!(state.is_valid());
            assert_eq!(state.first_error(), None);
            assert_eq!(state.errors().count(), 0);
        }

        #[test]
        fn test_idempotent() {
            let input = values(&[("username", ""), ("password", "secret")]);
            let first = validate(&rules(), &input);
            let second = validate(&rules(), &input);
            assert_eq!(first, second);
        }

        #[test]
        fn test_unknown_values_are_ignored() {
            let state = validate(
                &rules(),
                &values(&[("username", "a"), ("password", "b"), ("extra", "")]),
            );
            assert!(state.is_valid());
            assert!(state.get("extra").is_none());
        }

        #[test]
        fn test_empty_rules_are_valid() {
            let state = validate(&[], &values(&[("anything", "x")]));
            assert!(state.is_valid());
            assert_eq!(state, FormState::default());
        }
    }

    mod email_scenario {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_not_an_email_is_rejected() {
            let form = FormDefinition::new(vec![email_rule()]).unwrap();
            let state = form.validate(&values(&[("email", "not-an-email")]));
            assert!(!state.is_valid());
            assert_eq!(state.message("email"), Some("Invalid email format"));
        }

        #[test]
        fn test_real_email_is_accepted() {
            let form = FormDefinition::new(vec![email_rule()]).unwrap();
            let state = form.validate(&values(&[("email", "user@example.com")]));
            assert!(state.is_valid());
            assert_eq!(
                state.get("email"),
                Some(&FieldState {
                    value: "user@example.com".to_string(),
                    valid: true,
                    message: None,
                })
            );
        }
    }
}
