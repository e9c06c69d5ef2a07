//! Inventory item entity

use crate::core::error::StoreError;
use crate::core::validation::validators::{check, non_empty, non_negative};
use crate::core::{Record, error::ValidationError};
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// An inventory item, keyed by its name.
///
/// `due_on` is the item's date attribute: a payment-due date for grocery
/// variants, an expiry date for medical-shop variants. The store treats it
/// uniformly when computing overdue reports.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Item {
    pub id: Uuid,
    pub name: String,
    pub quantity: u32,
    pub unit_price: f64,
    pub due_on: NaiveDate,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Item {
    /// Build a validated item
    ///
    /// Fails with a validation error when the name is empty or the unit
    /// price is negative.
    pub fn new(
        name: impl Into<String>,
        quantity: u32,
        unit_price: f64,
        due_on: NaiveDate,
    ) -> Result<Self, StoreError> {
        let name = name.into();

        let mut errors = Vec::new();
        check(&mut errors, non_empty()("name", &name));
        check(&mut errors, non_negative()("unit_price", unit_price));
        ValidationError::from_errors(errors)?;

        let now = Utc::now();
        Ok(Self {
            id: Uuid::new_v4(),
            name,
            quantity,
            unit_price,
            due_on,
            created_at: now,
            updated_at: now,
        })
    }

    /// Replace the mutable fields in place, keeping id and creation time
    ///
    /// Runs the same field checks as [`Item::new`]; on failure the item is
    /// left untouched.
    pub fn apply_update(
        &mut self,
        quantity: u32,
        unit_price: f64,
        due_on: NaiveDate,
    ) -> Result<(), StoreError> {
        let mut errors = Vec::new();
        check(&mut errors, non_negative()("unit_price", unit_price));
        ValidationError::from_errors(errors)?;

        self.quantity = quantity;
        self.unit_price = unit_price;
        self.due_on = due_on;
        self.touch();
        Ok(())
    }
}

impl Record for Item {
    fn resource_name() -> &'static str {
        "items"
    }

    fn resource_name_singular() -> &'static str {
        "item"
    }

    fn id(&self) -> Uuid {
        self.id
    }

    fn key(&self) -> &str {
        &self.name
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
