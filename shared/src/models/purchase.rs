//! Purchase ledger models

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A recorded purchase
///
/// Product fields are snapshots captured at purchase time, not live links;
/// `product_id` is an optional weak lookup key used to resolve the target
/// product for stock adjustments.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Purchase {
    pub id: Uuid,
    pub product_id: Option<Uuid>,
    pub date: NaiveDate,
    pub code: String,
    pub name: String,
    pub description: String,
    pub color: String,
    pub quantity: u32,
}

/// Input for recording a purchase
#[derive(Debug, Clone, Default, Deserialize)]
pub struct NewPurchase {
    /// Explicitly selected target product, checked before code matching
    pub product_id: Option<Uuid>,
    /// Defaults to today when absent
    pub date: Option<NaiveDate>,
    pub code: String,
    pub name: String,
    pub description: String,
    pub color: String,
    pub quantity: u32,
}

/// Outcome of the stock side of a purchase mutation
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub enum StockAdjustment {
    /// The target product was resolved and its quantity updated
    Applied { product_id: Uuid, new_quantity: u32 },
    /// No product matched; the purchase stands with no stock change
    Orphan,
}
