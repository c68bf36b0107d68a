//! Validation error type.

use serde::Serialize;

/// A single per-field validation error.
///
/// Carries the dotted field path, the value as submitted (pre-coercion),
/// a description of the expected type, and a human-readable message.
/// A validation attempt yields zero or more of these; zero errors means
/// the typed value is well-formed.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ValidationError {
    /// Dotted field path (`customer.name`, `items.1.count`).
    pub path: String,
    /// The value as submitted, before any coercion. `null` for a
    /// missing field.
    pub received: serde_json::Value,
    /// Description of the expected type.
    pub expected: String,
    /// Human-readable message.
    pub message: String,
}

impl ValidationError {
    /// Error for a required field absent from the payload.
    #[must_use]
    pub fn missing(path: impl Into<String>, expected: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            received: serde_json::Value::Null,
            expected: expected.into(),
            message: "missing required field".to_string(),
        }
    }

    /// Error for a value that does not match (and cannot be coerced to)
    /// the declared type.
    #[must_use]
    pub fn type_mismatch(
        path: impl Into<String>,
        received: serde_json::Value,
        expected: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            path: path.into(),
            received,
            expected: expected.into(),
            message: message.into(),
        }
    }
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "validation error at '{}': {}", self.path, self.message)
    }
}

impl std::error::Error for ValidationError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        let err = ValidationError::missing("customer.name", "string");
        assert_eq!(
            err.to_string(),
            "validation error at 'customer.name': missing required field"
        );
    }

    #[test]
    fn test_serialization_shape() {
        let err = ValidationError::type_mismatch(
            "count",
            serde_json::json!("abc"),
            "integer",
            "cannot coerce \"abc\" to integer: invalid digit found in string",
        );

        let json = serde_json::to_value(&err).unwrap();
        assert_eq!(json["path"], "count");
        assert_eq!(json["received"], "abc");
        assert_eq!(json["expected"], "integer");
        assert!(json["message"].as_str().unwrap().contains("invalid digit"));
    }
}
