//! Purchase record entity

use crate::core::error::StoreError;
use crate::core::validation::validators::{check, digits, non_empty, positive};
use crate::core::{Record, error::ValidationError};
use crate::entities::customer::CONTACT_DIGITS;
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// One purchase made by a customer, keyed by a store-assigned receipt
/// number ("RCT-0001", ...).
///
/// The record carries both the raw total and the price after the tiered
/// discount, so the history report never has to recompute either.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PurchaseRecord {
    pub id: Uuid,
    pub receipt_no: String,
    /// Contact of the purchasing customer; must reference a stored customer
    pub contact: String,
    pub item_name: String,
    pub quantity: u32,
    pub unit_price: f64,
    pub purchased_on: NaiveDate,
    /// quantity × unit price, before discount
    pub total: f64,
    /// Absolute discount granted by the tier table
    pub discount: f64,
    /// total − discount
    pub final_price: f64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl PurchaseRecord {
    /// Build a validated purchase record, applying a discount percentage
    ///
    /// Fails when the contact is malformed, the item name is empty, or the
    /// quantity or unit price is not strictly positive. The referential
    /// check against stored customers is the store's job, not this
    /// constructor's.
    pub fn new(
        receipt_no: impl Into<String>,
        contact: impl Into<String>,
        item_name: impl Into<String>,
        quantity: u32,
        unit_price: f64,
        purchased_on: NaiveDate,
        discount_pct: f64,
    ) -> Result<Self, StoreError> {
        let contact = contact.into();
        let item_name = item_name.into();

        let mut errors = Vec::new();
        check(&mut errors, digits(CONTACT_DIGITS)("contact", &contact));
        check(&mut errors, non_empty()("item_name", &item_name));
        check(&mut errors, positive()("quantity", quantity as f64));
        check(&mut errors, positive()("unit_price", unit_price));
        ValidationError::from_errors(errors)?;

        let total = quantity as f64 * unit_price;
        let discount = total * discount_pct / 100.0;
        let final_price = total - discount;

        let now = Utc::now();
        Ok(Self {
            id: Uuid::new_v4(),
            receipt_no: receipt_no.into(),
            contact,
            item_name,
            quantity,
            unit_price,
            purchased_on,
            total,
            discount,
            final_price,
            created_at: now,
            updated_at: now,
        })
    }
}

impl Record for PurchaseRecord {
    fn resource_name() -> &'static str {
        "purchases"
    }

    fn resource_name_singular() -> &'static str {
        "purchase"
    }

    fn id(&self) -> Uuid {
        self.id
    }

    fn key(&self) -> &str {
        &self.receipt_no
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
