//! Invoice entity and totals arithmetic

use crate::core::error::{FieldError, StoreError};
use crate::core::validation::validators::{check, non_empty, non_negative, positive};
use crate::core::{Record, error::ValidationError};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Payment state of an invoice
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PaymentStatus {
    Paid,
    Pending,
    Overdue,
}

impl fmt::Display for PaymentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PaymentStatus::Paid => write!(f, "Paid"),
            PaymentStatus::Pending => write!(f, "Pending"),
            PaymentStatus::Overdue => write!(f, "Overdue"),
        }
    }
}

/// One requested invoice line
///
/// Tax percentage and discount may be omitted, in which case the
/// invoice-level defaults passed to `generate_invoice` apply.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct LineInput {
    pub name: String,
    pub rate: f64,
    pub quantity: u32,
    #[serde(default)]
    pub tax_pct: Option<f64>,
    #[serde(default)]
    pub discount: Option<f64>,
}

impl LineInput {
    pub fn new(name: impl Into<String>, rate: f64, quantity: u32) -> Self {
        Self {
            name: name.into(),
            rate,
            quantity,
            tax_pct: None,
            discount: None,
        }
    }

    pub fn with_tax_pct(mut self, tax_pct: f64) -> Self {
        self.tax_pct = Some(tax_pct);
        self
    }

    pub fn with_discount(mut self, discount: f64) -> Self {
        self.discount = Some(discount);
        self
    }
}

/// A resolved invoice line with its tax and discount pinned down
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct InvoiceLine {
    pub name: String,
    pub rate: f64,
    pub quantity: u32,
    pub tax_pct: f64,
    pub discount: f64,
}

impl InvoiceLine {
    /// rate × quantity
    pub fn amount(&self) -> f64 {
        self.rate * self.quantity as f64
    }

    /// Tax charged on this line
    pub fn tax(&self) -> f64 {
        self.amount() * self.tax_pct / 100.0
    }

    /// Line contribution to the subtotal: amount + tax − discount
    pub fn net(&self) -> f64 {
        self.amount() + self.tax() - self.discount
    }
}

/// A generated invoice, keyed by its running-count id ("INV-0001", ...)
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Invoice {
    pub id: Uuid,
    pub invoice_id: String,
    pub order_id: String,
    pub lines: Vec<InvoiceLine>,
    pub subtotal: f64,
    pub tax_total: f64,
    pub shipping: f64,
    pub total: f64,
    pub status: PaymentStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Invoice {
    /// Build an invoice from line inputs, resolving omitted per-line tax and
    /// discount against the given defaults.
    ///
    /// Totals:
    /// - line tax = rate × quantity × tax% / 100
    /// - subtotal = Σ (rate × quantity + tax − discount)
    /// - total = subtotal + Σ tax + shipping
    ///
    /// Fails when there are no lines, a line name is empty, a rate or
    /// discount is negative, or a quantity is zero.
    pub fn build(
        invoice_id: impl Into<String>,
        order_id: impl Into<String>,
        lines: Vec<LineInput>,
        default_tax_pct: f64,
        default_discount: f64,
        shipping: f64,
    ) -> Result<Self, StoreError> {
        let mut errors = Vec::new();
        if lines.is_empty() {
            errors.push(FieldError {
                field: "lines".to_string(),
                message: "invoice needs at least one line".to_string(),
            });
        }
        for line in &lines {
            check(&mut errors, non_empty()("line.name", &line.name));
            check(&mut errors, non_negative()("line.rate", line.rate));
            check(
                &mut errors,
                positive()("line.quantity", line.quantity as f64),
            );
            check(
                &mut errors,
                non_negative()("line.discount", line.discount.unwrap_or(0.0)),
            );
        }
        check(&mut errors, non_negative()("shipping", shipping));
        ValidationError::from_errors(errors)?;

        let lines: Vec<InvoiceLine> = lines
            .into_iter()
            .map(|line| InvoiceLine {
                name: line.name,
                rate: line.rate,
                quantity: line.quantity,
                tax_pct: line.tax_pct.unwrap_or(default_tax_pct),
                discount: line.discount.unwrap_or(default_discount),
            })
            .collect();

        let subtotal: f64 = lines.iter().map(InvoiceLine::net).sum();
        let tax_total: f64 = lines.iter().map(InvoiceLine::tax).sum();
        let total = subtotal + tax_total + shipping;

        let now = Utc::now();
        Ok(Self {
            id: Uuid::new_v4(),
            invoice_id: invoice_id.into(),
            order_id: order_id.into(),
            lines,
            subtotal,
            tax_total,
            shipping,
            total,
            status: PaymentStatus::Pending,
            created_at: now,
            updated_at: now,
        })
    }

    /// File name of the rendered document, named by invoice id
    pub fn document_name(&self) -> String {
        format!("{}.txt", self.invoice_id)
    }

    /// Render the invoice document with its fixed layout: header,
    /// line-item table, totals, and payment status.
    pub fn render_document(&self) -> String {
        let mut doc = String::new();

        doc.push_str(&format!("INVOICE {}\n", self.invoice_id));
        doc.push_str(&format!("Order: {}\n", self.order_id));
        doc.push_str(&format!("Date:  {}\n", self.created_at.format("%Y-%m-%d")));
        doc.push_str(&"-".repeat(62));
        doc.push('\n');
        doc.push_str(&format!(
            "{:<20} {:>8} {:>5} {:>7} {:>8} {:>9}\n",
            "Item", "Rate", "Qty", "Tax%", "Disc", "Net"
        ));
        for line in &self.lines {
            doc.push_str(&format!(
                "{:<20} {:>8.2} {:>5} {:>7.2} {:>8.2} {:>9.2}\n",
                line.name,
                line.rate,
                line.quantity,
                line.tax_pct,
                line.discount,
                line.net()
            ));
        }
        doc.push_str(&"-".repeat(62));
        doc.push('\n');
        doc.push_str(&format!("{:>52} {:>9.2}\n", "Subtotal:", self.subtotal));
        doc.push_str(&format!("{:>52} {:>9.2}\n", "Tax:", self.tax_total));
        doc.push_str(&format!("{:>52} {:>9.2}\n", "Shipping:", self.shipping));
        doc.push_str(&format!("{:>52} {:>9.2}\n", "Total:", self.total));
        doc.push_str(&format!("Payment status: {}\n", self.status));

        doc
    }
}

impl Record for Invoice {
    fn resource_name() -> &'static str {
        "invoices"
    }

    fn resource_name_singular() -> &'static str {
        "invoice"
    }

    fn id(&self) -> Uuid {
        self.id
    }

    fn key(&self) -> &str {
        &self.invoice_id
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
    fn test_line_arithmetic() {
        let line = InvoiceLine {
            name: "Widget".to_string(),
            rate: 100.0,
            quantity: 2,
            tax_pct: 10.0,
            discount: 5.0,
        };
        assert_eq!(line.amount(), 200.0);
        assert_eq!(line.tax(), 20.0);
        assert_eq!(line.net(), 215.0);
    }

    #[test]
    fn test_invoice_totals_two_lines() {
        let invoice = Invoice::build(
            "INV-0001",
            "ORD-77",
            vec![
                LineInput::new("Widget", 100.0, 2)
                    .with_tax_pct(10.0)
                    .with_discount(5.0),
                LineInput::new("Gasket", 50.0, 1)
                    .with_tax_pct(0.0)
                    .with_discount(0.0),
            ],
            0.0,
            0.0,
            0.0,
        )
        .unwrap();

        // nets: 200 + 20 - 5 = 215 and 50; subtotal 265; total 265 + 20
        assert_eq!(invoice.subtotal, 265.0);
        assert_eq!(invoice.tax_total, 20.0);
        assert_eq!(invoice.total, 285.0);
        assert_eq!(invoice.status, PaymentStatus::Pending);
    }

    #[test]
    fn test_defaults_fill_omitted_line_fields() {
        let invoice = Invoice::build(
            "INV-0002",
            "ORD-78",
            vec![LineInput::new("Widget", 100.0, 1)],
            18.0,
            2.0,
            0.0,
        )
        .unwrap();

        assert_eq!(invoice.lines[0].tax_pct, 18.0);
        assert_eq!(invoice.lines[0].discount, 2.0);
        // net = 100 + 18 - 2 = 116; total = 116 + 18
        assert_eq!(invoice.subtotal, 116.0);
        assert_eq!(invoice.total, 134.0);
    }

    #[test]
    fn test_shipping_added_to_total() {
        let invoice = Invoice::build(
            "INV-0003",
            "ORD-79",
            vec![LineInput::new("Widget", 100.0, 1)],
            0.0,
            0.0,
            25.0,
        )
        .unwrap();
        assert_eq!(invoice.total, 125.0);
    }

    #[test]
    fn test_empty_lines_rejected() {
        let result = Invoice::build("INV-0004", "ORD-80", vec![], 0.0, 0.0, 0.0);
        assert!(matches!(result, Err(StoreError::Validation(_))));
    }

    #[test]
    fn test_zero_quantity_line_rejected() {
        let result = Invoice::build(
            "INV-0005",
            "ORD-81",
            vec![LineInput::new("Widget", 100.0, 0)],
            0.0,
            0.0,
            0.0,
        );
        assert!(result.is_err());
    }

    #[test]
    fn test_document_layout() {
        let invoice = Invoice::build(
            "INV-0006",
            "ORD-82",
            vec![LineInput::new("Widget", 100.0, 2).with_tax_pct(10.0)],
            0.0,
            0.0,
            0.0,
        )
        .unwrap();

        assert_eq!(invoice.document_name(), "INV-0006.txt");

        let doc = invoice.render_document();
        assert!(doc.starts_with("INVOICE INV-0006"));
        assert!(doc.contains("Order: ORD-82"));
        assert!(doc.contains("Widget"));
        assert!(doc.contains("Payment status: Pending"));
    }
}
