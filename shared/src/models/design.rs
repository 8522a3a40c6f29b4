//! Design reference models
//!
//! Designs are static reference data in the current scope: read-only rows
//! the production order board snapshots from.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A saree design
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Design {
    /// Stable reference-data key (e.g., "1")
    pub id: String,
    /// Design code (e.g., "D-1001")
    pub code: String,
    pub name: String,
    pub saree_type: Option<String>,
    pub fabric: Option<String>,
    pub colour_pattern: Option<String>,
    pub default_rate: Decimal,
    pub default_mrp: Decimal,
    pub opening_stock: u32,
    pub notes: Option<String>,
}

/// Immutable copy of a design taken when an order is created
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct DesignSnapshot {
    pub id: String,
    pub code: String,
    pub name: String,
    pub opening_stock: u32,
    pub description: Option<String>,
}

impl From<&Design> for DesignSnapshot {
    fn from(design: &Design) -> Self {
        Self {
            id: design.id.clone(),
            code: design.code.clone(),
            name: design.name.clone(),
            opening_stock: design.opening_stock,
            description: design.colour_pattern.clone(),
        }
    }
}
