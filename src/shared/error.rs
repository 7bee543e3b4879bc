//! Shared Error Types
//!
//! `FieldError` is a single violated rule on a named input field. Sign-up
//! validation collects them fail-slow and the backend returns them in the
//! `errors` array of a 400 response.
//!
//! ```rust
//! use church_members::shared::error::FieldError;
//!
//! let error = FieldError::new("email", "email must be a valid email address");
//! assert_eq!(error.field, "email");
//! ```
use serde::{Deserialize, Serialize};

/// A single violated validation rule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldError {
    /// The input field the rule applies to (camelCase, as sent by clients)
    pub field: String,
    /// Human-readable message naming the field
    pub message: String,
}

impl FieldError {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_error_serializes_field_and_message() {
        let error = FieldError::new("firstName", "firstName is required");
        let json = serde_json::to_value(&error).unwrap();
        assert_eq!(
            json,
            serde_json::json!({ "field": "firstName", "message": "firstName is required" })
        );
    }
}
