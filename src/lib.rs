//! # Stockroom
//!
//! A record management core for small retail and medical-shop dashboards:
//! inventory items, customers, purchase history, and invoices behind one
//! explicit store object.
//!
//! ## Features
//!
//! - **Typed Entities**: items, customers, purchase records, and invoices
//!   as tagged structs keyed by a natural identifier
//! - **Explicit Store**: a single [`store::RecordStore`] owns its records;
//!   no ambient shared state
//! - **Derived Reporting**: low/excess stock alerts, overdue payments,
//!   per-customer purchase aggregation
//! - **Tiered Discounts**: purchase-total-dependent discount table,
//!   configurable via YAML
//! - **Invoice Totals**: per-line tax and discount resolution with a
//!   plain-text document rendering
//! - **Typed Errors**: validation, not-found, and duplicate-key failures
//!   surfaced as recoverable, user-presentable errors
//! - **Automatic Timestamps**: created_at and updated_at managed
//!   automatically
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use stockroom::prelude::*;
//!
//! let store = RecordStore::with_defaults();
//!
//! store.add_item("Apples", 3, 0.5, due).await?;
//! store.add_customer("9876543210", "Ravi", 34, Gender::Male, "12 Main Rd").await?;
//!
//! let purchase = store
//!     .add_purchase("9876543210", "Apples", 2, 3000.0, purchased_on)
//!     .await?;
//! assert_eq!(purchase.final_price, 5400.0); // 10% tier discount
//!
//! for item in store.low_stock(5).await? {
//!     println!("restock {}", item.name);
//! }
//! ```

pub mod config;
pub mod core;
pub mod entities;
pub mod reports;
pub mod storage;
pub mod store;

/// Re-exports of commonly used types and traits
pub mod prelude {
    // === Core Traits ===
    pub use crate::core::{
        entity::Record,
        error::{ErrorResponse, StoreError, ValidationError},
        service::RecordService,
    };

    // === Entities ===
    pub use crate::entities::{
        Customer, Gender, Invoice, InvoiceLine, Item, LineInput, PaymentStatus, PurchaseRecord,
    };

    // === Reports ===
    pub use crate::reports::{OverdueItem, PurchaseSummary, StockAlerts};

    // === Storage ===
    pub use crate::storage::InMemoryRecordService;

    // === Config ===
    pub use crate::config::{DiscountTier, InvoiceDefaults, StoreConfig};

    // === Store ===
    pub use crate::store::RecordStore;

    // === External dependencies ===
    pub use chrono::{DateTime, NaiveDate, Utc};
    pub use serde::{Deserialize, Serialize};
    pub use uuid::Uuid;
}
