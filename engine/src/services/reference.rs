//! Static reference data and seed rows
//!
//! The production order board works against a fixed client/design/material
//! set; the catalog and client register are seeded with a small default
//! inventory when their stores are empty.

use rust_decimal::Decimal;
use shared::models::{
    ClientSnapshot, ClientType, Design, MaterialRow, NewClient, NewProduct,
};

/// Clients selectable on the production order board
pub fn static_clients() -> Vec<ClientSnapshot> {
    vec![
        snapshot("1", "ABC Textiles", "9999999999", "Chennai", "Retail"),
        snapshot("2", "Kumar Handlooms", "9888888888", "Coimbatore", "Wholesale"),
        snapshot("3", "Sundar Exports", "9777777777", "Tirupur", "Export"),
        snapshot("4", "Meena Fabrics", "9666666666", "Madurai", "Retail"),
        snapshot("5", "Ramesh Stores", "9555555555", "Salem", "Wholesale"),
    ]
}

fn snapshot(id: &str, name: &str, mobile: &str, city: &str, kind: &str) -> ClientSnapshot {
    ClientSnapshot {
        id: id.to_string(),
        name: name.to_string(),
        mobile: Some(mobile.to_string()),
        city_area: Some(city.to_string()),
        client_type: Some(kind.to_string()),
    }
}

/// Designs selectable on the production order board
pub fn static_designs() -> Vec<Design> {
    vec![
        Design {
            id: "1".to_string(),
            code: "D-1001".to_string(),
            name: "Floral Print".to_string(),
            saree_type: Some("Silk".to_string()),
            fabric: Some("Silk".to_string()),
            colour_pattern: Some("Red floral on silk".to_string()),
            default_rate: Decimal::from(12),
            default_mrp: Decimal::from(18),
            opening_stock: 1500,
            notes: None,
        },
        Design {
            id: "2".to_string(),
            code: "D-2002".to_string(),
            name: "Geometric Pattern".to_string(),
            saree_type: Some("Cotton".to_string()),
            fabric: Some("Cotton".to_string()),
            colour_pattern: Some("Blue geometric motif".to_string()),
            default_rate: Decimal::from(15),
            default_mrp: Decimal::from(22),
            opening_stock: 500,
            notes: None,
        },
    ]
}

/// The fixed material list offered on every new order
pub fn static_materials() -> Vec<MaterialRow> {
    [
        "Kanchipuram Pattu (Kanjivaram)",
        "Moli",
        "Padi",
        "Ady",
        "Dnout",
    ]
    .into_iter()
    .map(|name| MaterialRow {
        name: name.to_string(),
        qty: 0,
        included: true,
    })
    .collect()
}

/// Default product rows seeded into an empty catalog
pub fn seed_products() -> Vec<NewProduct> {
    vec![
        product("COT-001", "Cotton Saree - Blue Stripes", "Soft cotton saree with blue stripes", "Blue", 12),
        product("SLK-002", "Silk Saree - Maroon", "Premium silk saree with elegant pattern", "Maroon", 5),
        product("GRT-003", "Georgette Saree - Pink", "Lightweight georgette saree", "Pink", 8),
        product("LNN-004", "Linen Saree - Green", "Pure linen saree for summer collection", "Green", 6),
        product("KNC-005", "Kanchipuram Silk - Gold Border", "Traditional Kanchipuram saree", "Gold", 3),
    ]
}

fn product(code: &str, name: &str, description: &str, color: &str, quantity: u32) -> NewProduct {
    NewProduct {
        code: code.to_string(),
        name: name.to_string(),
        description: description.to_string(),
        color: color.to_string(),
        quantity,
    }
}

/// Default client rows seeded into an empty register
pub fn seed_clients() -> Vec<NewClient> {
    vec![
        NewClient {
            name: "Ramesh Patel".to_string(),
            mobile: "9876543210".to_string(),
            alternate_mobile: Some("9123456780".to_string()),
            city_area: Some("Ahmedabad".to_string()),
            client_type: Some(ClientType::Retail),
            gst_no: Some("24ABCDE1234F1Z5".to_string()),
            opening_balance: Some(Decimal::from(2500)),
            notes: Some("Regular customer, prefers morning delivery.".to_string()),
        },
        NewClient {
            name: "Kiran Enterprises".to_string(),
            mobile: "9012345678".to_string(),
            alternate_mobile: None,
            city_area: Some("Mumbai".to_string()),
            client_type: Some(ClientType::Wholesale),
            gst_no: Some("27AAPQR5678L9Z2".to_string()),
            opening_balance: Some(Decimal::from(12000)),
            notes: Some("Bulk orders monthly. Payment usually by NEFT.".to_string()),
        },
    ]
}
