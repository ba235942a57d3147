//! Form field value objects

use super::validator::trim_input;
use serde::{Deserialize, Serialize};
use std::fmt;

/// The four required text inputs of the registration form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldId {
    Name,
    Email,
    Phone,
    Organization,
}

impl FieldId {
    /// All text fields in form order
    pub const ALL: [FieldId; 4] = [
        FieldId::Name,
        FieldId::Email,
        FieldId::Phone,
        FieldId::Organization,
    ];

    /// Stable identifier used in logs and serialized requests
    pub fn key(&self) -> &'static str {
        match self {
            FieldId::Name => "name",
            FieldId::Email => "email",
            FieldId::Phone => "phone",
            FieldId::Organization => "organization",
        }
    }

    /// Human-readable label for rendering
    pub fn label(&self) -> &'static str {
        match self {
            FieldId::Name => "Full Name",
            FieldId::Email => "Email Address",
            FieldId::Phone => "Phone Number",
            FieldId::Organization => "Company/Organization",
        }
    }

    /// Position of this field in form order
    pub fn index(&self) -> usize {
        match self {
            FieldId::Name => 0,
            FieldId::Email => 1,
            FieldId::Phone => 2,
            FieldId::Organization => 3,
        }
    }
}

impl fmt::Display for FieldId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// Validity of a field as last observed
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum FieldStatus {
    /// Not validated since the last edit
    #[default]
    Untouched,
    Valid,
    Invalid(String),
}

/// A single text field with its current value and validity
#[derive(Debug, Clone)]
pub struct FormField {
    id: FieldId,
    value: String,
    status: FieldStatus,
}

impl FormField {
    /// Create an empty, untouched field
    pub fn new(id: FieldId) -> Self {
        Self {
            id,
            value: String::new(),
            status: FieldStatus::Untouched,
        }
    }

    pub fn id(&self) -> FieldId {
        self.id
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn status(&self) -> &FieldStatus {
        &self.status
    }

    /// Replace the text and drop any stale verdict
    pub fn set_text(&mut self, value: String) {
        self.value = value;
        self.status = FieldStatus::Untouched;
    }

    /// Record the outcome of a validator run
    pub fn set_status(&mut self, status: FieldStatus) {
        self.status = status;
    }

    /// Clear the value and status
    pub fn clear(&mut self) {
        self.value.clear();
        self.status = FieldStatus::Untouched;
    }

    /// Whether the field counts toward completion (non-blank)
    pub fn is_filled(&self) -> bool {
        !trim_input(&self.value).is_empty()
    }

    /// Error message of the last failed validation, if any
    pub fn error_message(&self) -> Option<&str> {
        match &self.status {
            FieldStatus::Invalid(message) => Some(message),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_field_is_empty_and_untouched() {
        let field = FormField::new(FieldId::Email);
        assert_eq!(field.id(), FieldId::Email);
        assert_eq!(field.value(), "");
        assert_eq!(field.status(), &FieldStatus::Untouched);
        assert!(!field.is_filled());
    }

    #[test]
    fn test_set_text_clears_stale_error() {
        let mut field = FormField::new(FieldId::Name);
        field.set_status(FieldStatus::Invalid("Full name is required".to_string()));
        assert_eq!(field.error_message(), Some("Full name is required"));

        field.set_text("Jo".to_string());
        assert_eq!(field.status(), &FieldStatus::Untouched);
        assert!(field.error_message().is_none());
    }

    #[test]
    fn test_whitespace_only_is_not_filled() {
        let mut field = FormField::new(FieldId::Phone);
        field.set_text("   ".to_string());
        assert!(!field.is_filled());
        field.set_text(" 5 ".to_string());
        assert!(field.is_filled());
        field.set_text("\u{FEFF}".to_string());
        assert!(!field.is_filled());
    }

    #[test]
    fn test_clear_resets_value_and_status() {
        let mut field = FormField::new(FieldId::Organization);
        field.set_text("Acme".to_string());
        field.set_status(FieldStatus::Valid);
        field.clear();
        assert_eq!(field.value(), "");
        assert_eq!(field.status(), &FieldStatus::Untouched);
    }

    #[test]
    fn test_field_id_order_matches_index() {
        for (i, id) in FieldId::ALL.iter().enumerate() {
            assert_eq!(id.index(), i);
        }
    }

    #[test]
    fn test_field_id_serializes_lowercase() {
        let json = serde_json::to_string(&FieldId::Organization).unwrap();
        assert_eq!(json, "\"organization\"");
        assert_eq!(FieldId::Phone.to_string(), "phone");
    }
}
