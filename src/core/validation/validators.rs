//! Reusable field validators
//!
//! These validators are applied by the entity constructors to validate
//! incoming field values. Each failed check produces a [`FieldError`] that
//! the caller collects.

use crate::core::error::FieldError;

/// Validator: string must not be empty (whitespace counts as empty)
pub fn non_empty() -> impl Fn(&str, &str) -> Result<(), FieldError> + Send + Sync + Clone {
    |field: &str, value: &str| {
        if value.trim().is_empty() {
            Err(FieldError {
                field: field.to_string(),
                message: "must not be empty".to_string(),
            })
        } else {
            Ok(())
        }
    }
}

/// Validator: number must be strictly positive
pub fn positive() -> impl Fn(&str, f64) -> Result<(), FieldError> + Send + Sync + Clone {
    |field: &str, value: f64| {
        if value <= 0.0 {
            Err(FieldError {
                field: field.to_string(),
                message: format!("must be positive (value: {})", value),
            })
        } else {
            Ok(())
        }
    }
}

/// Validator: number must not be negative
pub fn non_negative() -> impl Fn(&str, f64) -> Result<(), FieldError> + Send + Sync + Clone {
    |field: &str, value: f64| {
        if value < 0.0 {
            Err(FieldError {
                field: field.to_string(),
                message: format!("must not be negative (value: {})", value),
            })
        } else {
            Ok(())
        }
    }
}

/// Validator: number must be at least the given minimum
pub fn at_least(min: u32) -> impl Fn(&str, u32) -> Result<(), FieldError> + Send + Sync + Clone {
    move |field: &str, value: u32| {
        if value < min {
            Err(FieldError {
                field: field.to_string(),
                message: format!("must be at least {} (value: {})", min, value),
            })
        } else {
            Ok(())
        }
    }
}

/// Validator: string must be exactly `len` ASCII digits
pub fn digits(len: usize) -> impl Fn(&str, &str) -> Result<(), FieldError> + Send + Sync + Clone {
    move |field: &str, value: &str| {
        if value.len() != len || !value.chars().all(|c| c.is_ascii_digit()) {
            Err(FieldError {
                field: field.to_string(),
                message: format!("must be exactly {} digits (value: '{}')", len, value),
            })
        } else {
            Ok(())
        }
    }
}

/// Run a check and push its failure, if any, onto the error list
pub fn check(errors: &mut Vec<FieldError>, result: Result<(), FieldError>) {
    if let Err(e) = result {
        errors.push(e);
    }
}
