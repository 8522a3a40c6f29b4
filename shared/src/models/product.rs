//! Product catalog models

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A catalog product with its live stock quantity
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Product {
    pub id: Uuid,
    /// Dense 1-based display order, recomputed on structural changes
    pub sr_no: u32,
    /// Unique product code, compared case-insensitively (e.g., "COT-001")
    pub code: String,
    pub name: String,
    pub description: String,
    /// Color label (e.g., "BL-STR", "Maroon")
    pub color: String,
    pub quantity: u32,
}

/// Fields accepted when creating a product
#[derive(Debug, Clone, Default, Deserialize)]
pub struct NewProduct {
    pub code: String,
    pub name: String,
    pub description: String,
    pub color: String,
    pub quantity: u32,
}

/// Partial update for a product
///
/// A `None` or blank submitted value keeps the existing value; partial
/// updates never clear a field.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ProductPatch {
    pub code: Option<String>,
    pub name: Option<String>,
    pub description: Option<String>,
    pub color: Option<String>,
    pub quantity: Option<u32>,
}

/// Sortable columns of the product table
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ProductSortKey {
    Code,
    Name,
    Description,
    Color,
    Quantity,
}

impl Product {
    /// String value of a sortable column, used for list-view ordering
    pub fn sort_value(&self, key: ProductSortKey) -> String {
        match key {
            ProductSortKey::Code => self.code.clone(),
            ProductSortKey::Name => self.name.clone(),
            ProductSortKey::Description => self.description.clone(),
            ProductSortKey::Color => self.color.clone(),
            ProductSortKey::Quantity => self.quantity.to_string(),
        }
    }
}
