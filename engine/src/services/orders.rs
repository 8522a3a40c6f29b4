//! Production order board service
//!
//! Orders move through {Pending, In Production, Completed, Cancelled}.
//! Client and design references are captured as immutable snapshots at
//! creation time; later edits to the reference data never change
//! historical orders.

use chrono::Utc;
use shared::models::{
    ClientSnapshot, Design, DesignSnapshot, MaterialRow, NewOrder, OrderCompletion,
    OrderProgress, OrderStatus, ProductionOrder,
};
use uuid::Uuid;

use crate::error::{AppError, AppResult};
use crate::services::reference;
use crate::store::Store;

const STORAGE_KEY: &str = "production_orders_v1";

/// Production order board service
pub struct OrderService {
    store: Store,
    orders: Vec<ProductionOrder>,
    clients: Vec<ClientSnapshot>,
    designs: Vec<Design>,
    materials: Vec<MaterialRow>,
}

impl OrderService {
    /// Load the board from the store against the static reference data
    pub fn load(store: Store) -> Self {
        let orders = store.load(STORAGE_KEY, Vec::new());
        Self {
            store,
            orders,
            clients: reference::static_clients(),
            designs: reference::static_designs(),
            materials: reference::static_materials(),
        }
    }

    pub fn all(&self) -> &[ProductionOrder] {
        &self.orders
    }

    pub fn len(&self) -> usize {
        self.orders.len()
    }

    pub fn is_empty(&self) -> bool {
        self.orders.is_empty()
    }

    pub fn get(&self, id: Uuid) -> Option<&ProductionOrder> {
        self.orders.iter().find(|o| o.id == id)
    }

    /// Reference clients selectable on the board
    pub fn reference_clients(&self) -> &[ClientSnapshot] {
        &self.clients
    }

    /// Reference designs selectable on the board
    pub fn reference_designs(&self) -> &[Design] {
        &self.designs
    }

    /// Material rows pre-filled into every new order form, all included
    /// with zero quantity until the caller edits them
    pub fn reference_materials(&self) -> &[MaterialRow] {
        &self.materials
    }

    /// Create an order, capturing client/design/material snapshots
    pub fn create(&mut self, input: NewOrder) -> AppResult<ProductionOrder> {
        let client = self
            .clients
            .iter()
            .find(|c| c.id == input.client_id)
            .ok_or_else(|| AppError::validation("client", "Select a client"))?
            .clone();
        let design = self
            .designs
            .iter()
            .find(|d| d.id == input.design_id)
            .map(DesignSnapshot::from)
            .ok_or_else(|| AppError::validation("design", "Select a design"))?;
        if input.qty_ordered == 0 {
            return Err(AppError::validation("qty_ordered", "Enter ordered quantity"));
        }

        // An untouched form submits the pre-filled reference rows
        let materials = if input.materials.is_empty() {
            self.materials.clone()
        } else {
            input.materials
        };

        let now = Utc::now();
        let order = ProductionOrder {
            id: Uuid::new_v4(),
            order_no: format!("PO-{}", now.timestamp_millis()),
            order_date: input.order_date.unwrap_or_else(|| now.date_naive()),
            qty_ordered: input.qty_ordered,
            rate_per_piece: input.rate_per_piece,
            status: OrderStatus::Pending,
            progress: None,
            client,
            design,
            batch_lot_no: input.batch_lot_no,
            expected_delivery_date: input.expected_delivery_date,
            material_issued: String::new(),
            remarks: input.remarks,
            materials: materials.into_iter().filter(|m| m.included).collect(),
            description: input.description,
        };
        self.orders.insert(0, order.clone());
        self.save();

        tracing::debug!("Created order {}", order.order_no);
        Ok(order)
    }

    /// Issue materials: Pending -> In Production
    ///
    /// Records the total included material quantity with today's date. Any
    /// status other than Pending is a no-op returning the unchanged order.
    pub fn issue_materials(&mut self, id: Uuid) -> AppResult<ProductionOrder> {
        let order = self
            .orders
            .iter_mut()
            .find(|o| o.id == id)
            .ok_or_else(|| AppError::NotFound("Order".to_string()))?;

        if order.status != OrderStatus::Pending {
            return Ok(order.clone());
        }

        let total = order.total_material_qty();
        order.status = OrderStatus::InProduction;
        order.material_issued = format!("{} pcs on {}", total, Utc::now().date_naive());

        let updated = order.clone();
        self.save();
        Ok(updated)
    }

    /// Complete an order, composing a remarks line from the side-effect
    /// capture (returned quantities, wastage, labor cost, note)
    pub fn complete_order(
        &mut self,
        id: Uuid,
        completion: OrderCompletion,
    ) -> AppResult<ProductionOrder> {
        let order = self
            .orders
            .iter_mut()
            .find(|o| o.id == id)
            .ok_or_else(|| AppError::NotFound("Order".to_string()))?;

        if order.status == OrderStatus::Cancelled {
            return Err(AppError::InvalidStateTransition(
                "Cancelled orders cannot be completed".to_string(),
            ));
        }

        order.status = OrderStatus::Completed;
        order.progress = Some(OrderProgress::Completed);
        order.remarks = completion.remarks();

        let updated = order.clone();
        self.save();
        Ok(updated)
    }

    /// Cancel an open order
    pub fn cancel_order(&mut self, id: Uuid) -> AppResult<ProductionOrder> {
        let order = self
            .orders
            .iter_mut()
            .find(|o| o.id == id)
            .ok_or_else(|| AppError::NotFound("Order".to_string()))?;

        if !order.status.is_open() {
            return Err(AppError::InvalidStateTransition(format!(
                "{} orders cannot be cancelled",
                order.status
            )));
        }

        order.status = OrderStatus::Cancelled;
        let updated = order.clone();
        self.save();
        Ok(updated)
    }

    /// Hard removal, legal from any state
    pub fn delete(&mut self, id: Uuid) -> AppResult<()> {
        let before = self.orders.len();
        self.orders.retain(|o| o.id != id);
        if self.orders.len() == before {
            return Err(AppError::NotFound("Order".to_string()));
        }
        self.save();
        Ok(())
    }

    /// Substring match over order no, client name, design code
    pub fn search(&self, term: &str) -> Vec<ProductionOrder> {
        let needle = term.trim().to_lowercase();
        self.orders
            .iter()
            .filter(|o| {
                o.order_no.to_lowercase().contains(&needle)
                    || o.client.name.to_lowercase().contains(&needle)
                    || o.design.code.to_lowercase().contains(&needle)
            })
            .cloned()
            .collect()
    }

    /// Orders in one status
    pub fn filter_by_status(&self, status: OrderStatus) -> Vec<ProductionOrder> {
        self.orders
            .iter()
            .filter(|o| o.status == status)
            .cloned()
            .collect()
    }

    /// Count of orders in one status, used by the dashboard
    pub fn count_by_status(&self, status: OrderStatus) -> usize {
        self.orders.iter().filter(|o| o.status == status).count()
    }

    fn save(&self) {
        self.store.save(STORAGE_KEY, &self.orders);
    }
}
