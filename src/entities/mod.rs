//! Domain entities held by the store

pub mod customer;
pub mod invoice;
pub mod item;
pub mod purchase;

pub use customer::{Customer, Gender};
pub use invoice::{Invoice, InvoiceLine, LineInput, PaymentStatus};
pub use item::Item;
pub use purchase::PurchaseRecord;
