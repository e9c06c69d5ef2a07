//! Validation system
//!
//! Reusable field validators applied to entity input before it reaches the
//! store. Failed checks accumulate into a [`ValidationError`] listing every
//! offending field.
//!
//! [`ValidationError`]: crate::core::error::ValidationError

pub mod validators;
