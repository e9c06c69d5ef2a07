//! The record store facade
//!
//! [`RecordStore`] is the single owner of all records: inventory items,
//! customers, purchase history, and invoices. Callers hold the store
//! explicitly; there is no ambient shared state. Every operation is one
//! synchronous read or write with no intermediate state.

use crate::config::StoreConfig;
use crate::core::{Record, RecordService, error::StoreError};
use crate::entities::{
    Customer, Gender, Invoice, Item, LineInput, PaymentStatus, PurchaseRecord,
};
use crate::reports::{self, OverdueItem, PurchaseSummary, StockAlerts};
use crate::storage::InMemoryRecordService;
use chrono::NaiveDate;
use indexmap::IndexMap;
use std::sync::atomic::{AtomicU64, Ordering};
use tracing::{info, warn};

/// Holds every entity collection and answers the derived queries.
pub struct RecordStore {
    config: StoreConfig,
    items: InMemoryRecordService<Item>,
    customers: InMemoryRecordService<Customer>,
    purchases: InMemoryRecordService<PurchaseRecord>,
    invoices: InMemoryRecordService<Invoice>,
    receipt_seq: AtomicU64,
    invoice_seq: AtomicU64,
}

impl RecordStore {
    /// Create a store with the given configuration
    pub fn new(config: StoreConfig) -> Self {
        Self {
            config,
            items: InMemoryRecordService::new(),
            customers: InMemoryRecordService::new(),
            purchases: InMemoryRecordService::new(),
            invoices: InMemoryRecordService::new(),
            receipt_seq: AtomicU64::new(0),
            invoice_seq: AtomicU64::new(0),
        }
    }

    /// Create a store with the default configuration
    pub fn with_defaults() -> Self {
        Self::new(StoreConfig::default_config())
    }

    pub fn config(&self) -> &StoreConfig {
        &self.config
    }

    // =========================================================================
    // Items
    // =========================================================================

    /// Add a new inventory item
    pub async fn add_item(
        &self,
        name: &str,
        quantity: u32,
        unit_price: f64,
        due_on: NaiveDate,
    ) -> Result<Item, StoreError> {
        let item = Item::new(name, quantity, unit_price, due_on).inspect_err(|e| {
            warn!(name, %e, "rejected item");
        })?;

        let created = self.items.create(item).await?;
        info!(name = %created.name, quantity = created.quantity, "item added");
        Ok(created)
    }

    /// Get an item by name
    pub async fn get_item(&self, name: &str) -> Result<Option<Item>, StoreError> {
        self.items.get(name).await
    }

    /// List all items in insertion order
    pub async fn list_items(&self) -> Result<Vec<Item>, StoreError> {
        self.items.list().await
    }

    /// Update an item's quantity, price, and date attribute in place
    pub async fn update_item(
        &self,
        name: &str,
        quantity: u32,
        unit_price: f64,
        due_on: NaiveDate,
    ) -> Result<Item, StoreError> {
        let mut item = self
            .items
            .get(name)
            .await?
            .ok_or_else(|| StoreError::not_found("item", name))?;

        item.apply_update(quantity, unit_price, due_on)
            .inspect_err(|e| {
                warn!(name, %e, "rejected item update");
            })?;
        let updated = self.items.update(name, item).await?;
        info!(name, quantity, "item updated");
        Ok(updated)
    }

    /// Delete an item by name
    pub async fn delete_item(&self, name: &str) -> Result<(), StoreError> {
        self.items.delete(name).await?;
        info!(name, "item deleted");
        Ok(())
    }

    // =========================================================================
    // Stock & payment reports
    // =========================================================================

    /// Items with quantity strictly below the threshold
    pub async fn low_stock(&self, threshold: u32) -> Result<Vec<Item>, StoreError> {
        Ok(reports::low_stock(&self.items.list().await?, threshold))
    }

    /// Items with quantity strictly above the threshold
    pub async fn excess_stock(&self, threshold: u32) -> Result<Vec<Item>, StoreError> {
        Ok(reports::excess_stock(&self.items.list().await?, threshold))
    }

    /// Low and excess stock reports using the configured thresholds
    pub async fn stock_alerts(&self) -> Result<StockAlerts, StoreError> {
        let items = self.items.list().await?;
        Ok(StockAlerts {
            low_stock: reports::low_stock(&items, self.config.low_stock_threshold),
            excess_stock: reports::excess_stock(&items, self.config.excess_stock_threshold),
        })
    }

    /// Items whose date attribute fell before `today`, with days overdue
    pub async fn overdue(&self, today: NaiveDate) -> Result<Vec<OverdueItem>, StoreError> {
        Ok(reports::overdue(&self.items.list().await?, today))
    }

    // =========================================================================
    // Customers
    // =========================================================================

    /// Register a new customer; the contact number must be unique
    pub async fn add_customer(
        &self,
        contact: &str,
        name: &str,
        age: u32,
        gender: Gender,
        address: &str,
    ) -> Result<Customer, StoreError> {
        let customer = Customer::new(contact, name, age, gender, address).inspect_err(|e| {
            warn!(contact, %e, "rejected customer");
        })?;

        let created = self.customers.create(customer).await?;
        info!(contact = %created.contact, "customer added");
        Ok(created)
    }

    /// Get a customer by contact number
    pub async fn get_customer(&self, contact: &str) -> Result<Option<Customer>, StoreError> {
        self.customers.get(contact).await
    }

    /// List all customers in registration order
    pub async fn list_customers(&self) -> Result<Vec<Customer>, StoreError> {
        self.customers.list().await
    }

    /// Number of registered customers
    pub async fn customer_count(&self) -> Result<usize, StoreError> {
        self.customers.count().await
    }

    // =========================================================================
    // Purchases
    // =========================================================================

    /// Record a purchase for an existing customer
    ///
    /// Fails with `NotFound` when the contact is unknown, leaving the
    /// purchase list unchanged. The tiered discount from the configuration
    /// is applied to the purchase total; the returned record carries the
    /// final price.
    pub async fn add_purchase(
        &self,
        contact: &str,
        item_name: &str,
        quantity: u32,
        unit_price: f64,
        purchased_on: NaiveDate,
    ) -> Result<PurchaseRecord, StoreError> {
        // Referential check first: a purchase must point at a stored customer
        if self.customers.get(contact).await?.is_none() {
            warn!(contact, "purchase rejected: unknown customer");
            return Err(StoreError::not_found("customer", contact));
        }

        let total = quantity as f64 * unit_price;
        let discount_pct = self.config.discount_pct(total);

        let receipt_no = self.next_receipt_no();
        let purchase = PurchaseRecord::new(
            receipt_no,
            contact,
            item_name,
            quantity,
            unit_price,
            purchased_on,
            discount_pct,
        )
        .inspect_err(|e| {
            warn!(contact, item_name, %e, "rejected purchase");
        })?;

        let created = self.purchases.create(purchase).await?;
        info!(
            receipt = %created.receipt_no,
            contact,
            final_price = created.final_price,
            "purchase recorded"
        );
        Ok(created)
    }

    /// List all purchases in recording order
    pub async fn list_purchases(&self) -> Result<Vec<PurchaseRecord>, StoreError> {
        self.purchases.list().await
    }

    /// Aggregated purchase history, grouped by customer contact
    pub async fn purchase_history_by_customer(
        &self,
    ) -> Result<IndexMap<String, PurchaseSummary>, StoreError> {
        Ok(reports::purchase_history_by_customer(
            &self.purchases.list().await?,
        ))
    }

    // =========================================================================
    // Invoices
    // =========================================================================

    /// Generate, store, and return an invoice for an order
    ///
    /// The invoice id is derived from a running count. Lines that omit
    /// their tax percentage or discount fall back to the given invoice-level
    /// values.
    pub async fn generate_invoice(
        &self,
        order_id: &str,
        lines: Vec<LineInput>,
        tax_pct: Option<f64>,
        discount: Option<f64>,
        shipping: Option<f64>,
    ) -> Result<Invoice, StoreError> {
        let defaults = &self.config.invoice;
        let invoice_id = self.next_invoice_id();

        let invoice = Invoice::build(
            invoice_id,
            order_id,
            lines,
            tax_pct.unwrap_or(defaults.tax_pct),
            discount.unwrap_or(defaults.discount),
            shipping.unwrap_or(defaults.shipping),
        )
        .inspect_err(|e| {
            warn!(order_id, %e, "rejected invoice");
        })?;

        let created = self.invoices.create(invoice).await?;
        info!(invoice_id = %created.invoice_id, total = created.total, "invoice generated");
        Ok(created)
    }

    /// Get an invoice by its id
    pub async fn get_invoice(&self, invoice_id: &str) -> Result<Option<Invoice>, StoreError> {
        self.invoices.get(invoice_id).await
    }

    /// List all invoices in generation order
    pub async fn list_invoices(&self) -> Result<Vec<Invoice>, StoreError> {
        self.invoices.list().await
    }

    /// Change an invoice's payment status
    pub async fn set_invoice_status(
        &self,
        invoice_id: &str,
        status: PaymentStatus,
    ) -> Result<Invoice, StoreError> {
        let mut invoice = self
            .invoices
            .get(invoice_id)
            .await?
            .ok_or_else(|| StoreError::not_found("invoice", invoice_id))?;

        invoice.status = status;
        invoice.touch();
        let updated = self.invoices.update(invoice_id, invoice).await?;
        info!(invoice_id, %status, "invoice status changed");
        Ok(updated)
    }

    // =========================================================================
    // Sequences
    // =========================================================================

    fn next_receipt_no(&self) -> String {
        let n = self.receipt_seq.fetch_add(1, Ordering::Relaxed) + 1;
        format!("RCT-{:04}", n)
    }

    fn next_invoice_id(&self) -> String {
        let n = self.invoice_seq.fetch_add(1, Ordering::Relaxed) + 1;
        format!("INV-{:04}", n)
    }
}

impl Default for RecordStore {
    fn default() -> Self {
        Self::with_defaults()
    }
}
