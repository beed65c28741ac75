//! Per-field form validation results.

use serde::Serialize;

/// Field-level validation messages, in the order they were raised.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ValidationErrors {
    fields: Vec<FieldError>,
}

/// A validation message attached to one form field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldError {
    /// Form field name
    pub field: &'static str,
    /// Message shown next to the field
    pub message: String,
}

impl ValidationErrors {
    /// No errors.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a message for `field`, replacing any earlier one.
    pub fn add(&mut self, field: &'static str, message: impl Into<String>) {
        let message = message.into();
        match self.fields.iter_mut().find(|e| e.field == field) {
            Some(existing) => existing.message = message,
            None => self.fields.push(FieldError { field, message }),
        }
    }

    /// Drop the message for `field`, e.g. once the user edits it.
    pub fn clear(&mut self, field: &str) {
        self.fields.retain(|e| e.field != field);
    }

    /// Message for `field`, if any.
    pub fn get(&self, field: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|e| e.field == field)
            .map(|e| e.message.as_str())
    }

    /// True when nothing was recorded.
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Number of failing fields.
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Iterate the recorded errors.
    pub fn iter(&self) -> impl Iterator<Item = &FieldError> {
        self.fields.iter()
    }

    /// `Ok(())` when empty, otherwise `Err(self)`.
    pub fn into_result(self) -> Result<(), ValidationErrors> {
        if self.is_empty() { Ok(()) } else { Err(self) }
    }
}

impl std::fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut first = true;
        for error in &self.fields {
            if !first {
                f.write_str("; ")?;
            }
            write!(f, "{}: {}", error.field, error.message)?;
            first = false;
        }
        Ok(())
    }
}

impl std::error::Error for ValidationErrors {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_replace_clear() {
        let mut errors = ValidationErrors::new();
        assert!(errors.clone().into_result().is_ok());

        errors.add("title", "Title is required");
        errors.add("email", "Email is required");
        errors.add("email", "Email is invalid");
        assert_eq!(errors.len(), 2);
        assert_eq!(errors.get("email"), Some("Email is invalid"));
        assert_eq!(errors.to_string(), "title: Title is required; email: Email is invalid");

        errors.clear("title");
        assert_eq!(errors.get("title"), None);
        assert!(errors.into_result().is_err());
    }
}
