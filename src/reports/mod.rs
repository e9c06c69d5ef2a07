//! Derived reporting views
//!
//! Everything in this module is computed from the stored records on demand;
//! nothing here is a stored entity.

use crate::entities::{Item, PurchaseRecord};
use chrono::NaiveDate;
use indexmap::IndexMap;
use serde::Serialize;

/// Both threshold reports in one shot, using the configured thresholds
#[derive(Clone, Debug, Serialize)]
pub struct StockAlerts {
    pub low_stock: Vec<Item>,
    pub excess_stock: Vec<Item>,
}

/// An item whose date attribute has passed
#[derive(Clone, Debug, Serialize)]
pub struct OverdueItem {
    pub item: Item,
    pub days_overdue: i64,
}

/// Aggregated purchase history for one customer
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct PurchaseSummary {
    /// Purchased item names joined with ", "
    pub items: String,
    pub total_quantity: u32,
    pub total_spent: f64,
    /// Purchase dates joined with ", "
    pub dates: String,
}

/// Items with quantity strictly below the threshold, insertion order kept
pub fn low_stock(items: &[Item], threshold: u32) -> Vec<Item> {
    items
        .iter()
        .filter(|item| item.quantity < threshold)
        .cloned()
        .collect()
}

/// Items with quantity strictly above the threshold, insertion order kept
pub fn excess_stock(items: &[Item], threshold: u32) -> Vec<Item> {
    items
        .iter()
        .filter(|item| item.quantity > threshold)
        .cloned()
        .collect()
}

/// Items whose date attribute fell before `today`, with days overdue
pub fn overdue(items: &[Item], today: NaiveDate) -> Vec<OverdueItem> {
    items
        .iter()
        .filter(|item| item.due_on < today)
        .map(|item| OverdueItem {
            days_overdue: (today - item.due_on).num_days(),
            item: item.clone(),
        })
        .collect()
}

/// Group purchases by customer contact and aggregate each group
///
/// Contacts appear in the order of their first purchase. Spending sums the
/// discounted final price, which is what the customer actually paid.
pub fn purchase_history_by_customer(
    purchases: &[PurchaseRecord],
) -> IndexMap<String, PurchaseSummary> {
    let mut history: IndexMap<String, PurchaseSummary> = IndexMap::new();

    for purchase in purchases {
        let date = purchase.purchased_on.format("%Y-%m-%d").to_string();
        match history.get_mut(&purchase.contact) {
            Some(summary) => {
                summary.items.push_str(", ");
                summary.items.push_str(&purchase.item_name);
                summary.total_quantity += purchase.quantity;
                summary.total_spent += purchase.final_price;
                summary.dates.push_str(", ");
                summary.dates.push_str(&date);
            }
            None => {
                history.insert(
                    purchase.contact.clone(),
                    PurchaseSummary {
                        items: purchase.item_name.clone(),
                        total_quantity: purchase.quantity,
                        total_spent: purchase.final_price,
                        dates: date,
                    },
                );
            }
        }
    }

    history
}
