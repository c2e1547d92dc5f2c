//! Form field value objects

/// Represents a single form field with its configuration and value
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormField {
    pub name: String,
    pub label: String,
    pub value: String,
    /// Read-only fields are only ever written from service responses
    pub read_only: bool,
}

impl FormField {
    /// Create a new editable text field
    pub fn text(name: &str, label: &str) -> Self {
        Self {
            name: name.to_string(),
            label: label.to_string(),
            value: String::new(),
            read_only: false,
        }
    }

    /// Create a new read-only field
    pub fn read_only(name: &str, label: &str) -> Self {
        Self {
            read_only: true,
            ..Self::text(name, label)
        }
    }

    /// Get the text value
    pub fn as_text(&self) -> &str {
        &self.value
    }

    /// Trimmed value, `None` when the user left the field blank
    pub fn filled(&self) -> Option<String> {
        let trimmed = self.value.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(trimmed.to_string())
        }
    }

    pub fn is_blank(&self) -> bool {
        self.value.trim().is_empty()
    }

    /// Set the text value
    pub fn set_text(&mut self, value: impl Into<String>) {
        self.value = value.into();
    }

    /// Push a character to the field value
    pub fn push_char(&mut self, c: char) {
        if !self.read_only {
            self.value.push(c);
        }
    }

    /// Remove the last character from the field value
    pub fn pop_char(&mut self) {
        if !self.read_only {
            self.value.pop();
        }
    }

    /// Clear the field value
    pub fn clear(&mut self) {
        self.value.clear();
    }
}
