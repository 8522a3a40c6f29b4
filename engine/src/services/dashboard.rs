//! Dashboard aggregates
//!
//! Read-only counters derived from the live tables.

use serde::Serialize;
use shared::models::OrderStatus;

use crate::services::{ClientService, OrderService};

/// Aggregate counters shown on the dashboard
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct DashboardSnapshot {
    pub total_clients: usize,
    pub total_designs: usize,
    pub pending_orders: usize,
    pub in_production: usize,
}

/// Compute the dashboard counters from the owning services
pub fn snapshot(clients: &ClientService, orders: &OrderService) -> DashboardSnapshot {
    DashboardSnapshot {
        total_clients: clients.len(),
        total_designs: orders.reference_designs().len(),
        pending_orders: orders.count_by_status(OrderStatus::Pending),
        in_production: orders.count_by_status(OrderStatus::InProduction),
    }
}
