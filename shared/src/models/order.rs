//! Production order models

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::DesignSnapshot;

/// Status of a production order
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum OrderStatus {
    Pending,
    InProduction,
    Completed,
    Cancelled,
}

impl OrderStatus {
    /// Whether the order can still move through the lifecycle
    pub fn is_open(&self) -> bool {
        matches!(self, OrderStatus::Pending | OrderStatus::InProduction)
    }
}

impl std::fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OrderStatus::Pending => write!(f, "Pending"),
            OrderStatus::InProduction => write!(f, "In Production"),
            OrderStatus::Completed => write!(f, "Completed"),
            OrderStatus::Cancelled => write!(f, "Cancelled"),
        }
    }
}

/// Optional progress sub-state shown alongside the status
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum OrderProgress {
    NotStarted,
    InProgress,
    Completed,
}

/// A material line item on an order
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct MaterialRow {
    pub name: String,
    pub qty: u32,
    pub included: bool,
}

/// Immutable copy of a reference client taken when an order is created
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ClientSnapshot {
    pub id: String,
    pub name: String,
    pub mobile: Option<String>,
    pub city_area: Option<String>,
    pub client_type: Option<String>,
}

/// A manufacturing order tracked on the production board
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProductionOrder {
    pub id: Uuid,
    pub order_no: String,
    pub order_date: NaiveDate,
    pub qty_ordered: u32,
    pub rate_per_piece: Decimal,
    pub status: OrderStatus,
    pub progress: Option<OrderProgress>,
    /// Snapshots, never live references; later edits to the reference data
    /// do not change historical orders
    pub client: ClientSnapshot,
    pub design: DesignSnapshot,
    pub batch_lot_no: String,
    pub expected_delivery_date: Option<NaiveDate>,
    /// Free-text note recorded when materials are issued
    /// (e.g., "110 pcs on 2025-01-22")
    pub material_issued: String,
    pub remarks: String,
    /// Material rows included at creation time
    pub materials: Vec<MaterialRow>,
    pub description: String,
}

impl ProductionOrder {
    /// Total quantity across included material rows
    pub fn total_material_qty(&self) -> u32 {
        self.materials
            .iter()
            .filter(|m| m.included)
            .map(|m| m.qty)
            .sum()
    }
}

/// Input for creating a production order
#[derive(Debug, Clone, Default, Deserialize)]
pub struct NewOrder {
    /// Reference-data key of the chosen client
    pub client_id: String,
    /// Reference-data key of the chosen design
    pub design_id: String,
    /// Defaults to today when absent
    pub order_date: Option<NaiveDate>,
    pub qty_ordered: u32,
    pub rate_per_piece: Decimal,
    pub batch_lot_no: String,
    pub expected_delivery_date: Option<NaiveDate>,
    pub materials: Vec<MaterialRow>,
    pub remarks: String,
    pub description: String,
}

/// Side-effect capture submitted when completing an order
#[derive(Debug, Clone, Default, Deserialize)]
pub struct OrderCompletion {
    pub returned_qty_1: u32,
    pub returned_qty_2: u32,
    pub wastage: u32,
    pub labor_cost: Decimal,
    pub note: Option<String>,
}

impl OrderCompletion {
    /// Composed remarks line recorded on the completed order
    pub fn remarks(&self) -> String {
        format!(
            "Completed. Returned: {}, {} | Wastage: {} | Salary: {} | {}",
            self.returned_qty_1,
            self.returned_qty_2,
            self.wastage,
            self.labor_cost,
            self.note.as_deref().unwrap_or_default()
        )
    }
}
