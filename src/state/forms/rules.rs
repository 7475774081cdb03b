//! Declarative field rules and form definitions

use crate::error::{PlaygroundError, Result};
use regex::Regex;
use std::collections::HashSet;
use std::fmt;

/// Loose email shape used by the login and contact forms
pub const EMAIL_PATTERN: &str = r"[^\s@]+@[^\s@]+\.[^\s@]+";

/// Ten digits, no separators
pub const PHONE_PATTERN: &str = r"\d{10}";

/// Predicate over the raw field value
pub type CustomCheck = fn(&str) -> bool;

/// Regular expression that must match the whole value
#[derive(Clone)]
pub struct PatternRule {
    regex: Regex,
    source: String,
    pub message: String,
}

impl PatternRule {
    pub fn is_match(&self, value: &str) -> bool {
        self.regex.is_match(value)
    }
}

impl fmt::Debug for PatternRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PatternRule")
            .field("pattern", &self.source)
            .field("message", &self.message)
            .finish()
    }
}

/// Inclusive character-count bounds
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LengthRule {
    pub min: Option<usize>,
    pub max: Option<usize>,
    pub message: String,
}

impl LengthRule {
    pub fn contains(&self, len: usize) -> bool {
        self.min.map_or(true, |min| len >= min) && self.max.map_or(true, |max| len <= max)
    }
}

#[derive(Clone)]
pub struct CustomRule {
    pub check: CustomCheck,
    pub message: String,
}

impl fmt::Debug for CustomRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CustomRule")
            .field("message", &self.message)
            .finish_non_exhaustive()
    }
}

/// Validation contract for one form input.
///
/// Built once per page with the builder methods and never mutated afterwards.
///
/// ```ignore
/// let rule = FieldRule::new("email")
///     .required("Email is required")
///     .pattern(EMAIL_PATTERN, "Invalid email format")?;
/// ```
#[derive(Debug, Clone)]
pub struct FieldRule {
    pub field_id: String,
    pub required: bool,
    /// Message shown when a required field is empty
    pub error_message: String,
    pub pattern: Option<PatternRule>,
    pub length: Option<LengthRule>,
    pub custom_check: Option<CustomRule>,
}

impl FieldRule {
    /// Create an optional field with no checks
    pub fn new(field_id: &str) -> Self {
        Self {
            field_id: field_id.to_string(),
            required: false,
            error_message: "This field is required".to_string(),
            pattern: None,
            length: None,
            custom_check: None,
        }
    }

    pub fn required(mut self, message: &str) -> Self {
        self.required = true;
        self.error_message = message.to_string();
        self
    }

    /// Add a full-match pattern. Fails if the expression does not compile.
    pub fn pattern(mut self, pattern: &str, message: &str) -> Result<Self> {
        let regex = Regex::new(&format!("^(?:{pattern})$")).map_err(|source| {
            PlaygroundError::InvalidPattern {
                field_id: self.field_id.clone(),
                source,
            }
        })?;
        self.pattern = Some(PatternRule {
            regex,
            source: pattern.to_string(),
            message: message.to_string(),
        });
        Ok(self)
    }

    pub fn length(mut self, min: Option<usize>, max: Option<usize>, message: &str) -> Self {
        self.length = Some(LengthRule {
            min,
            max,
            message: message.to_string(),
        });
        self
    }

    pub fn custom(mut self, check: CustomCheck, message: &str) -> Self {
        self.custom_check = Some(CustomRule {
            check,
            message: message.to_string(),
        });
        self
    }
}

/// Ordered set of rules for one form
#[derive(Debug, Clone)]
pub struct FormDefinition {
    rules: Vec<FieldRule>,
}

impl FormDefinition {
    /// Build a definition, rejecting duplicate field ids
    pub fn new(rules: Vec<FieldRule>) -> Result<Self> {
        let mut seen = HashSet::new();
        for rule in &rules {
            if !seen.insert(rule.field_id.as_str()) {
                return Err(PlaygroundError::DuplicateField(rule.field_id.clone()));
            }
        }
        Ok(Self { rules })
    }

    pub fn rules(&self) -> &[FieldRule] {
        &self.rules
    }
}
