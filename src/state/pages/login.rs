//! Login and welcome pages

use crate::error::Result;
use crate::state::forms::{FieldRule, Form, FormDefinition, FormField, FormModel, EMAIL_PATTERN};
use chrono::{DateTime, Local};

/// Login form: email-shaped username plus a password
#[derive(Debug, Clone)]
pub struct LoginPage {
    pub form: FormModel,
    rules: FormDefinition,
}

impl LoginPage {
    pub fn new() -> Result<Self> {
        let rules = FormDefinition::new(vec![
            FieldRule::new("username")
                .required("Username is required")
                .pattern(EMAIL_PATTERN, "Invalid email format")?,
            FieldRule::new("password")
                .required("Password is required")
                .length(Some(6), None, "Password must be at least 6 characters"),
        ])?;
        let form = FormModel::new(
            vec![
                FormField::text("username", "Username"),
                FormField::password("password", "Password"),
            ],
            vec!["Login"],
        );
        Ok(Self { form, rules })
    }

    /// Validate and return the username to sign in with, if the form is valid
    pub fn submit(&mut self) -> Option<String> {
        let state = self.rules.validate(&self.form.values());
        let accepted = state.is_valid();
        if accepted {
            tracing::info!("Login accepted");
        } else {
            tracing::info!("Login rejected with {} error(s)", state.errors().count());
        }
        self.form.state = Some(state);
        accepted.then(|| {
            self.form
                .field("username")
                .map(|f| f.as_text().trim().to_string())
                .unwrap_or_default()
        })
    }

    /// The single error banner shows the first failing field
    pub fn banner(&self) -> Option<&str> {
        self.form
            .state
            .as_ref()
            .and_then(|s| s.first_error())
            .map(|(_, message)| message)
    }

    /// Enter on the password or the button submits, elsewhere it moves focus
    pub fn enter_submits(&self) -> bool {
        self.form.active_slot + 1 >= self.form.fields.len()
    }
}

/// Landing page after a successful login
#[derive(Debug, Clone)]
pub struct WelcomePage {
    pub username: String,
    pub signed_in_at: DateTime<Local>,
}

impl WelcomePage {
    pub fn new(username: String) -> Self {
        Self {
            username,
            signed_in_at: Local::now(),
        }
    }

    pub fn greeting(&self) -> String {
        if self.username.is_empty() {
            "Welcome!".to_string()
        } else {
            format!("Welcome, {}!", self.username)
        }
    }
}
