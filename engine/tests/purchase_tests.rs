//! Purchase ledger tests
//!
//! Covers stock increment on record, the compensating decrement on delete
//! with its clamp at zero, product resolution by selection and by exact
//! code, and orphan purchases that touch no stock.

use chrono::NaiveDate;
use proptest::prelude::*;
use shared::models::{NewProduct, NewPurchase, ProductPatch, StockAdjustment};
use uuid::Uuid;

use saree_management_engine::services::{CatalogService, PurchaseService};
use saree_management_engine::{AppError, Store};

fn test_services() -> (tempfile::TempDir, CatalogService, PurchaseService) {
    let dir = tempfile::tempdir().expect("tempdir");
    let store = Store::open(dir.path());
    let catalog = CatalogService::load(store.clone(), 8);
    let purchases = PurchaseService::load(store);
    (dir, catalog, purchases)
}

fn seed_product(catalog: &mut CatalogService, code: &str, quantity: u32) -> Uuid {
    catalog
        .create(NewProduct {
            code: code.to_string(),
            name: format!("{} product", code),
            description: String::new(),
            color: String::new(),
            quantity,
        })
        .unwrap()
        .id
}

fn purchase_of(code: &str, quantity: u32) -> NewPurchase {
    NewPurchase {
        product_id: None,
        date: Some(NaiveDate::from_ymd_opt(2024, 3, 15).unwrap()),
        code: code.to_string(),
        name: format!("{} restock", code),
        description: String::new(),
        color: String::new(),
        quantity,
    }
}

// ============================================================================
// Unit Tests
// ============================================================================

mod unit_tests {
    use super::*;

    #[test]
    fn test_record_then_delete_restores_stock() {
        let (_dir, mut catalog, mut purchases) = test_services();
        let product_id = seed_product(&mut catalog, "COT-001", 12);

        let (purchase, adjustment) = purchases
            .record(&mut catalog, purchase_of("COT-001", 5))
            .unwrap();
        assert_eq!(
            adjustment,
            StockAdjustment::Applied {
                product_id,
                new_quantity: 17
            }
        );
        assert_eq!(catalog.get(product_id).unwrap().quantity, 17);

        let adjustment = purchases.delete(&mut catalog, purchase.id).unwrap();
        assert_eq!(
            adjustment,
            StockAdjustment::Applied {
                product_id,
                new_quantity: 12
            }
        );
        assert!(purchases.is_empty());
    }

    #[test]
    fn test_record_resolves_by_explicit_selection_first() {
        let (_dir, mut catalog, mut purchases) = test_services();
        let selected = seed_product(&mut catalog, "COT-001", 10);
        let by_code = seed_product(&mut catalog, "SLK-002", 10);

        // Explicit selection wins even when the code points elsewhere
        let mut input = purchase_of("SLK-002", 3);
        input.product_id = Some(selected);
        let (_, adjustment) = purchases.record(&mut catalog, input).unwrap();

        assert_eq!(
            adjustment,
            StockAdjustment::Applied {
                product_id: selected,
                new_quantity: 13
            }
        );
        assert_eq!(catalog.get(by_code).unwrap().quantity, 10);
    }

    #[test]
    fn test_record_falls_back_to_exact_code_match() {
        let (_dir, mut catalog, mut purchases) = test_services();
        let product_id = seed_product(&mut catalog, "COT-001", 10);

        // Stale selection: the id no longer exists, the code still matches
        let mut input = purchase_of("COT-001", 2);
        input.product_id = Some(Uuid::new_v4());
        let (_, adjustment) = purchases.record(&mut catalog, input).unwrap();

        assert_eq!(
            adjustment,
            StockAdjustment::Applied {
                product_id,
                new_quantity: 12
            }
        );
    }

    #[test]
    fn test_code_resolution_is_case_sensitive() {
        let (_dir, mut catalog, mut purchases) = test_services();
        let product_id = seed_product(&mut catalog, "COT-001", 10);

        let (_, adjustment) = purchases
            .record(&mut catalog, purchase_of("cot-001", 2))
            .unwrap();

        assert_eq!(adjustment, StockAdjustment::Orphan);
        assert_eq!(catalog.get(product_id).unwrap().quantity, 10);
    }

    #[test]
    fn test_orphan_purchase_is_recorded_without_stock_change() {
        let (_dir, mut catalog, mut purchases) = test_services();
        seed_product(&mut catalog, "COT-001", 10);

        let (purchase, adjustment) = purchases
            .record(&mut catalog, purchase_of("GRT-999", 4))
            .unwrap();

        assert_eq!(adjustment, StockAdjustment::Orphan);
        assert_eq!(purchases.len(), 1);
        assert!(purchase.product_id.is_none());

        // Deleting the orphan is also a no-op for stock
        let adjustment = purchases.delete(&mut catalog, purchase.id).unwrap();
        assert_eq!(adjustment, StockAdjustment::Orphan);
    }

    #[test]
    fn test_record_validation() {
        let (_dir, mut catalog, mut purchases) = test_services();

        let err = purchases
            .record(&mut catalog, purchase_of("  ", 1))
            .unwrap_err();
        assert!(matches!(err, AppError::Validation { .. }));

        let mut input = purchase_of("COT-001", 1);
        input.name = String::new();
        let err = purchases.record(&mut catalog, input).unwrap_err();
        assert!(matches!(err, AppError::Validation { .. }));

        let err = purchases
            .record(&mut catalog, purchase_of("COT-001", 0))
            .unwrap_err();
        assert!(matches!(err, AppError::Validation { .. }));

        assert!(purchases.is_empty());
    }

    #[test]
    fn test_record_defaults_date_to_today() {
        let (_dir, mut catalog, mut purchases) = test_services();
        let mut input = purchase_of("GRT-999", 1);
        input.date = None;
        let (purchase, _) = purchases.record(&mut catalog, input).unwrap();
        assert_eq!(purchase.date, chrono::Utc::now().date_naive());
    }

    #[test]
    fn test_delete_clamps_reversal_at_zero() {
        let (_dir, mut catalog, mut purchases) = test_services();
        let product_id = seed_product(&mut catalog, "COT-001", 0);

        let (purchase, _) = purchases
            .record(&mut catalog, purchase_of("COT-001", 5))
            .unwrap();

        // Stock edited down below the purchased amount in the meantime
        catalog
            .update(
                product_id,
                ProductPatch {
                    quantity: Some(2),
                    ..Default::default()
                },
            )
            .unwrap();

        let adjustment = purchases.delete(&mut catalog, purchase.id).unwrap();
        assert_eq!(
            adjustment,
            StockAdjustment::Applied {
                product_id,
                new_quantity: 0
            }
        );
    }

    #[test]
    fn test_delete_unknown_purchase_leaves_everything_untouched() {
        let (_dir, mut catalog, mut purchases) = test_services();
        let product_id = seed_product(&mut catalog, "COT-001", 10);
        purchases
            .record(&mut catalog, purchase_of("COT-001", 5))
            .unwrap();

        let err = purchases.delete(&mut catalog, Uuid::new_v4()).unwrap_err();
        assert!(matches!(err, AppError::NotFound(_)));
        assert_eq!(purchases.len(), 1);
        assert_eq!(catalog.get(product_id).unwrap().quantity, 15);
    }

    #[test]
    fn test_ledger_persists_across_reload() {
        let dir = tempfile::tempdir().expect("tempdir");
        let store = Store::open(dir.path());
        let mut catalog = CatalogService::load(store.clone(), 8);
        let mut purchases = PurchaseService::load(store.clone());
        seed_product(&mut catalog, "COT-001", 10);
        purchases
            .record(&mut catalog, purchase_of("COT-001", 5))
            .unwrap();

        let reloaded = PurchaseService::load(store);
        assert_eq!(reloaded.len(), 1);
        assert_eq!(reloaded.all()[0].code, "COT-001");
    }
}

// ============================================================================
// Property-Based Tests
// ============================================================================

mod property_tests {
    use super::*;

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(64))]

        /// The product's stock always equals its opening quantity plus the
        /// sum of recorded purchases against it
        #[test]
        fn prop_stock_equals_opening_plus_purchases(
            opening in 0u32..100,
            amounts in prop::collection::vec(1u32..50, 1..8),
        ) {
            let (_dir, mut catalog, mut purchases) = test_services();
            let product_id = seed_product(&mut catalog, "COT-001", opening);

            for qty in &amounts {
                purchases.record(&mut catalog, purchase_of("COT-001", *qty)).unwrap();
            }

            let expected = opening + amounts.iter().sum::<u32>();
            prop_assert_eq!(catalog.get(product_id).unwrap().quantity, expected);
        }

        /// Recording then deleting every purchase returns stock to where
        /// it started, in any deletion order
        #[test]
        fn prop_delete_is_the_inverse_of_record(
            opening in 0u32..100,
            amounts in prop::collection::vec(1u32..50, 1..8),
            reverse in any::<bool>(),
        ) {
            let (_dir, mut catalog, mut purchases) = test_services();
            let product_id = seed_product(&mut catalog, "COT-001", opening);

            let mut ids: Vec<Uuid> = amounts
                .iter()
                .map(|qty| {
                    purchases
                        .record(&mut catalog, purchase_of("COT-001", *qty))
                        .unwrap()
                        .0
                        .id
                })
                .collect();
            if reverse {
                ids.reverse();
            }
            for id in ids {
                purchases.delete(&mut catalog, id).unwrap();
            }

            prop_assert_eq!(catalog.get(product_id).unwrap().quantity, opening);
            prop_assert!(purchases.is_empty());
        }

        /// However stock is edited between record and delete, the reversal
        /// never drives the quantity negative (it floors at zero)
        #[test]
        fn prop_reversal_never_underflows(
            purchased in 1u32..50,
            edited in 0u32..50,
        ) {
            let (_dir, mut catalog, mut purchases) = test_services();
            let product_id = seed_product(&mut catalog, "COT-001", 0);

            let (purchase, _) = purchases
                .record(&mut catalog, purchase_of("COT-001", purchased))
                .unwrap();
            catalog
                .update(product_id, ProductPatch {
                    quantity: Some(edited),
                    ..Default::default()
                })
                .unwrap();

            let adjustment = purchases.delete(&mut catalog, purchase.id).unwrap();
            let expected = edited.saturating_sub(purchased);
            prop_assert_eq!(adjustment, StockAdjustment::Applied {
                product_id,
                new_quantity: expected,
            });
        }
    }
}
