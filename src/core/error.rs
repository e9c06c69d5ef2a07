//! Typed error handling for store operations
//!
//! Three error kinds cover every rejected write: validation failures
//! (missing or out-of-range input), references to nonexistent keys, and
//! uniqueness violations. All of them are recovered at the call site and
//! surfaced as a user-visible message; none are fatal to the process.
//!
//! # Example
//!
//! ```rust,ignore
//! match store.delete_item("Apples").await {
//!     Ok(()) => println!("deleted"),
//!     Err(StoreError::NotFound { resource, key }) => {
//!         println!("{} '{}' not found", resource, key);
//!     }
//!     Err(e) => eprintln!("{}", e.to_response().message),
//! }
//! ```

use serde::Serialize;
use std::fmt;

/// The main error type for store operations
#[derive(Debug, Clone, PartialEq)]
pub enum StoreError {
    /// Input validation failed (missing or out-of-range field)
    Validation(ValidationError),

    /// A record was looked up by a key that does not exist
    NotFound { resource: &'static str, key: String },

    /// A record was created with a natural key that is already taken
    DuplicateKey { resource: &'static str, key: String },

    /// Internal store errors (should not happen in normal operation)
    Internal(String),
}

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StoreError::Validation(e) => write!(f, "{}", e),
            StoreError::NotFound { resource, key } => {
                write!(f, "{} with key '{}' not found", resource, key)
            }
            StoreError::DuplicateKey { resource, key } => {
                write!(f, "{} with key '{}' already exists", resource, key)
            }
            StoreError::Internal(msg) => write!(f, "Internal error: {}", msg),
        }
    }
}

impl std::error::Error for StoreError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            StoreError::Validation(e) => Some(e),
            _ => None,
        }
    }
}

/// Error response structure for presentation layers
///
/// Carries a stable machine-readable code next to the human-readable
/// message, plus optional structured details.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    /// Error code for programmatic handling
    pub code: String,
    /// Human-readable error message
    pub message: String,
    /// Optional additional details
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

impl StoreError {
    /// Get the error code for this error
    pub fn error_code(&self) -> &'static str {
        match self {
            StoreError::Validation(_) => "VALIDATION_ERROR",
            StoreError::NotFound { .. } => "NOT_FOUND",
            StoreError::DuplicateKey { .. } => "DUPLICATE_KEY",
            StoreError::Internal(_) => "INTERNAL_ERROR",
        }
    }

    /// Convert to an error response
    pub fn to_response(&self) -> ErrorResponse {
        ErrorResponse {
            code: self.error_code().to_string(),
            message: self.to_string(),
            details: self.details(),
        }
    }

    /// Get additional details for the error
    fn details(&self) -> Option<serde_json::Value> {
        match self {
            StoreError::NotFound { resource, key }
            | StoreError::DuplicateKey { resource, key } => Some(serde_json::json!({
                "resource": resource,
                "key": key,
            })),
            StoreError::Validation(ValidationError::Fields(errors)) => {
                Some(serde_json::json!({ "fields": errors }))
            }
            _ => None,
        }
    }

    /// Shorthand for a not-found failure on a resource
    pub fn not_found(resource: &'static str, key: impl Into<String>) -> Self {
        StoreError::NotFound {
            resource,
            key: key.into(),
        }
    }

    /// Shorthand for a duplicate-key failure on a resource
    pub fn duplicate_key(resource: &'static str, key: impl Into<String>) -> Self {
        StoreError::DuplicateKey {
            resource,
            key: key.into(),
        }
    }
}

// =============================================================================
// Validation Errors
// =============================================================================

/// A single failed field check
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FieldError {
    /// Field that failed validation
    pub field: String,
    /// What was wrong with it
    pub message: String,
}

/// Errors related to input validation
#[derive(Debug, Clone, PartialEq)]
pub enum ValidationError {
    /// One or more fields failed their checks
    Fields(Vec<FieldError>),
}

impl ValidationError {
    /// Build a validation error for a single field
    pub fn field(field: impl Into<String>, message: impl Into<String>) -> Self {
        ValidationError::Fields(vec![FieldError {
            field: field.into(),
            message: message.into(),
        }])
    }

    /// Collect accumulated field errors; `Ok(())` when the list is empty
    pub fn from_errors(errors: Vec<FieldError>) -> Result<(), StoreError> {
        if errors.is_empty() {
            Ok(())
        } else {
            Err(StoreError::Validation(ValidationError::Fields(errors)))
        }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationError::Fields(errors) => {
                let joined = errors
                    .iter()
                    .map(|e| format!("{}: {}", e.field, e.message))
                    .collect::<Vec<_>>()
                    .join("; ");
                write!(f, "Validation failed: {}", joined)
            }
        }
    }
}

impl std::error::Error for ValidationError {}

impl From<ValidationError> for StoreError {
    fn from(err: ValidationError) -> Self {
        StoreError::Validation(err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_display_and_code() {
        let err = StoreError::not_found("item", "Apples");
        assert_eq!(err.to_string(), "item with key 'Apples' not found");
        assert_eq!(err.error_code(), "NOT_FOUND");
    }

    #[test]
    fn test_duplicate_key_response_details() {
        let err = StoreError::duplicate_key("customer", "9876543210");
        let response = err.to_response();
        assert_eq!(response.code, "DUPLICATE_KEY");
        let details = response.details.unwrap();
        assert_eq!(details["resource"], "customer");
        assert_eq!(details["key"], "9876543210");
    }

    #[test]
    fn test_validation_error_joins_fields() {
        let err = StoreError::Validation(ValidationError::Fields(vec![
            FieldError {
                field: "name".to_string(),
                message: "must not be empty".to_string(),
            },
            FieldError {
                field: "age".to_string(),
                message: "must be at least 10".to_string(),
            },
        ]));
        let text = err.to_string();
        assert!(text.contains("name: must not be empty"));
        assert!(text.contains("age: must be at least 10"));
        assert_eq!(err.error_code(), "VALIDATION_ERROR");
    }

    #[test]
    fn test_from_errors_empty_is_ok() {
        assert!(ValidationError::from_errors(vec![]).is_ok());
    }

    #[test]
    fn test_from_errors_nonempty_is_err() {
        let result = ValidationError::from_errors(vec![FieldError {
            field: "quantity".to_string(),
            message: "must be positive".to_string(),
        }]);
        assert!(matches!(result, Err(StoreError::Validation(_))));
    }
}
