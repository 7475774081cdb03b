//! Form field value objects

/// How a field's value is shown on screen
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FieldKind {
    #[default]
    Text,
    /// Rendered as bullets
    Password,
    Multiline,
}

/// A single editable input with its label and current value
#[derive(Debug, Clone)]
pub struct FormField {
    pub name: String,
    pub label: String,
    pub value: String,
    pub kind: FieldKind,
}

impl FormField {
    /// Create a new single-line text field
    pub fn text(name: &str, label: &str) -> Self {
        Self {
            name: name.to_string(),
            label: label.to_string(),
            value: String::new(),
            kind: FieldKind::Text,
        }
    }

    pub fn password(name: &str, label: &str) -> Self {
        Self {
            kind: FieldKind::Password,
            ..Self::text(name, label)
        }
    }

    pub fn multiline(name: &str, label: &str) -> Self {
        Self {
            kind: FieldKind::Multiline,
            ..Self::text(name, label)
        }
    }

    pub fn is_multiline(&self) -> bool {
        self.kind == FieldKind::Multiline
    }

    pub fn as_text(&self) -> &str {
        &self.value
    }

    /// Push a character to the field value
    pub fn push_char(&mut self, c: char) {
        if c == '\n' && !self.is_multiline() {
            return;
        }
        self.value.push(c);
    }

    /// Remove the last character from the field value
    pub fn pop_char(&mut self) {
        self.value.pop();
    }

    pub fn clear(&mut self) {
        self.value.clear();
    }

    /// Get the display value for rendering
    pub fn display_value(&self) -> String {
        match self.kind {
            FieldKind::Password => "•".repeat(self.value.chars().count()),
            FieldKind::Text | FieldKind::Multiline => self.value.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_field_defaults() {
        let field = FormField::text("username", "Username");
        assert_eq!(field.name, "username");
        assert_eq!(field.label, "Username");
        assert_eq!(field.as_text(), "");
        assert_eq!(field.kind, FieldKind::Text);
    }

    #[test]
    fn test_push_and_pop() {
        let mut field = FormField::text("name", "Name");
        field.push_char('a');
        field.push_char('b');
        field.pop_char();
        assert_eq!(field.as_text(), "a");
        field.pop_char();
        field.pop_char();
        assert_eq!(field.as_text(), "");
    }

    #[test]
    fn test_newline_only_in_multiline() {
        let mut single = FormField::text("name", "Name");
        single.push_char('\n');
        assert_eq!(single.as_text(), "");

        let mut multi = FormField::multiline("message", "Message");
        multi.push_char('a');
        multi.push_char('\n');
        multi.push_char('b');
        assert_eq!(multi.as_text(), "a\nb");
        assert!(multi.is_multiline());
    }

    #[test]
    fn test_password_is_masked() {
        let mut field = FormField::password("password", "Password");
        field.value = "secret".to_string();
        assert_eq!(field.display_value(), "••••••");
        assert_eq!(field.as_text(), "secret");
    }

    #[test]
    fn test_clear() {
        let mut field = FormField::text("name", "Name");
        field.value = "value".to_string();
        field.clear();
        assert_eq!(field.as_text(), "");
    }
}
