//! Customer entity

use crate::core::error::StoreError;
use crate::core::validation::validators::{at_least, check, digits, non_empty};
use crate::core::{Record, error::ValidationError};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Length of a valid contact number
pub const CONTACT_DIGITS: usize = 10;

/// Minimum customer age accepted at registration
pub const MIN_AGE: u32 = 10;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    Male,
    Female,
    Other,
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Gender::Male => write!(f, "Male"),
            Gender::Female => write!(f, "Female"),
            Gender::Other => write!(f, "Other"),
        }
    }
}

/// A registered customer, keyed by contact number.
///
/// The contact is a fixed-length numeric string and must be unique across
/// the store; uniqueness is enforced at creation time.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Customer {
    pub id: Uuid,
    pub contact: String,
    pub name: String,
    pub age: u32,
    pub gender: Gender,
    pub address: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Customer {
    /// Build a validated customer
    ///
    /// Fails when the contact is not exactly [`CONTACT_DIGITS`] digits, the
    /// name is empty, or the age is below [`MIN_AGE`].
    pub fn new(
        contact: impl Into<String>,
        name: impl Into<String>,
        age: u32,
        gender: Gender,
        address: impl Into<String>,
    ) -> Result<Self, StoreError> {
        let contact = contact.into();
        let name = name.into();
        let address = address.into();

        let mut errors = Vec::new();
        check(&mut errors, digits(CONTACT_DIGITS)("contact", &contact));
        check(&mut errors, non_empty()("name", &name));
        check(&mut errors, at_least(MIN_AGE)("age", age));
        ValidationError::from_errors(errors)?;

        let now = Utc::now();
        Ok(Self {
            id: Uuid::new_v4(),
            contact,
            name,
            age,
            gender,
            address,
            created_at: now,
            updated_at: now,
        })
    }
}

impl Record for Customer {
    fn resource_name() -> &'static str {
        "customers"
    }

    fn resource_name_singular() -> &'static str {
        "customer"
    }

    fn id(&self) -> Uuid {
        self.id
    }

    fn key(&self) -> &str {
        &self.contact
    }

    fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    fn touch(&mut self) {
        self.updated_at = Utc::now();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_customer() {
        let customer =
            Customer::new("9876543210", "Ravi", 34, Gender::Male, "12 Main Rd").unwrap();
        assert_eq!(customer.key(), "9876543210");
        assert_eq!(customer.gender.to_string(), "Male");
    }

    #[test]
    fn test_short_contact_rejected() {
        let result = Customer::new("98765", "Ravi", 34, Gender::Male, "12 Main Rd");
        assert!(matches!(result, Err(StoreError::Validation(_))));
    }

    #[test]
    fn test_alpha_contact_rejected() {
        assert!(Customer::new("98765abcde", "Ravi", 34, Gender::Male, "x").is_err());
    }

    #[test]
    fn test_underage_rejected() {
        assert!(Customer::new("9876543210", "Kid", 9, Gender::Other, "x").is_err());
    }

    #[test]
    fn test_min_age_accepted() {
        assert!(Customer::new("9876543210", "Teen", 10, Gender::Female, "x").is_ok());
    }

    #[test]
    fn test_empty_name_rejected() {
        assert!(Customer::new("9876543210", "", 34, Gender::Male, "x").is_err());
    }

    #[test]
    fn test_gender_serde_roundtrip() {
        let json = serde_json::to_string(&Gender::Female).unwrap();
        assert_eq!(json, "\"female\"");
        let back: Gender = serde_json::from_str(&json).unwrap();
        assert_eq!(back, Gender::Female);
    }
}
