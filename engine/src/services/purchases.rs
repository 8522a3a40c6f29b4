//! Purchase ledger service
//!
//! Recording a purchase increments the linked product's stock; deleting a
//! purchase is the compensating action that decrements it back, floored at
//! zero. Both steps of a delete run as one logical operation: everything is
//! resolved and validated before the first mutation, so a failure leaves
//! the ledger and the catalog untouched.

use chrono::Utc;
use shared::models::{NewPurchase, Purchase, StockAdjustment};
use shared::validation::{validate_positive_quantity, validate_required};
use uuid::Uuid;

use crate::error::{AppError, AppResult};
use crate::services::CatalogService;
use crate::store::Store;

const STORAGE_KEY: &str = "purchases_v1";

/// Purchase ledger service owning the append-only purchase table
pub struct PurchaseService {
    store: Store,
    purchases: Vec<Purchase>,
}

impl PurchaseService {
    pub fn load(store: Store) -> Self {
        let purchases = store.load(STORAGE_KEY, Vec::new());
        Self { store, purchases }
    }

    pub fn all(&self) -> &[Purchase] {
        &self.purchases
    }

    pub fn len(&self) -> usize {
        self.purchases.len()
    }

    pub fn is_empty(&self) -> bool {
        self.purchases.is_empty()
    }

    pub fn get(&self, id: Uuid) -> Option<&Purchase> {
        self.purchases.iter().find(|p| p.id == id)
    }

    /// Record a purchase, incrementing the resolved product's stock
    ///
    /// The target product is resolved by explicit selection first, else by
    /// exact code match. An unresolved purchase is still recorded with no
    /// stock adjustment: the orphan outcome is intentional, not an error.
    pub fn record(
        &mut self,
        catalog: &mut CatalogService,
        input: NewPurchase,
    ) -> AppResult<(Purchase, StockAdjustment)> {
        validate_required(&input.code)
            .map_err(|_| AppError::validation("code", "Product code is required"))?;
        validate_required(&input.name)
            .map_err(|_| AppError::validation("name", "Product name is required"))?;
        validate_positive_quantity(input.quantity)
            .map_err(|m| AppError::validation("quantity", m))?;

        let resolved = self.resolve_product(catalog, input.product_id, &input.code);

        let purchase = Purchase {
            id: Uuid::new_v4(),
            product_id: input.product_id.or(resolved),
            date: input.date.unwrap_or_else(|| Utc::now().date_naive()),
            code: input.code,
            name: input.name,
            description: input.description,
            color: input.color,
            quantity: input.quantity,
        };
        self.purchases.push(purchase.clone());
        self.save();

        let adjustment = match resolved {
            Some(product_id) => {
                let new_quantity = catalog.increase_stock(product_id, purchase.quantity)?;
                StockAdjustment::Applied {
                    product_id,
                    new_quantity,
                }
            }
            None => {
                tracing::warn!(
                    "Purchase {} has no matching product for code {}; stock unchanged",
                    purchase.id,
                    purchase.code
                );
                StockAdjustment::Orphan
            }
        };

        Ok((purchase, adjustment))
    }

    /// Delete a purchase, reverting its stock increment
    ///
    /// The decrement is clamped at zero: if the product was edited between
    /// purchase-create and purchase-delete, the reversal never drives the
    /// quantity negative.
    pub fn delete(
        &mut self,
        catalog: &mut CatalogService,
        id: Uuid,
    ) -> AppResult<StockAdjustment> {
        let purchase = self
            .get(id)
            .ok_or_else(|| AppError::NotFound("Purchase".to_string()))?;
        let quantity = purchase.quantity;
        let resolved = self.resolve_product(catalog, purchase.product_id, &purchase.code);

        let adjustment = match resolved {
            Some(product_id) => {
                let new_quantity = catalog.decrease_stock(product_id, quantity)?;
                StockAdjustment::Applied {
                    product_id,
                    new_quantity,
                }
            }
            None => StockAdjustment::Orphan,
        };

        self.purchases.retain(|p| p.id != id);
        self.save();
        Ok(adjustment)
    }

    /// Resolve the target product: explicit selection first, then exact
    /// code match
    fn resolve_product(
        &self,
        catalog: &CatalogService,
        product_id: Option<Uuid>,
        code: &str,
    ) -> Option<Uuid> {
        if let Some(id) = product_id {
            if catalog.get(id).is_some() {
                return Some(id);
            }
        }
        catalog.find_by_code(code).map(|p| p.id)
    }

    fn save(&self) {
        self.store.save(STORAGE_KEY, &self.purchases);
    }
}
