//! Saree Business Management Platform - Status Console
//!
//! Opens the local store, seeds default reference rows into empty tables,
//! and reports the dashboard counters.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use saree_management_engine::services::{
    dashboard, reference, CatalogService, ClientService, OrderService, PurchaseService,
};
use saree_management_engine::{Config, Store};

fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "sbm_console=debug,saree_management_engine=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    dotenvy::dotenv().ok();
    let config = Config::load()?;

    tracing::info!("Starting Saree Business Management console");
    tracing::info!("Environment: {}", config.environment);
    tracing::info!("Data directory: {}", config.storage.data_dir);

    let store = Store::open(&config.storage.data_dir);
    let mut catalog = CatalogService::load(store.clone(), config.catalog.page_size);
    let mut clients = ClientService::load(store.clone());
    let purchases = PurchaseService::load(store.clone());
    let orders = OrderService::load(store);

    if config.seed.load_defaults {
        seed_defaults(&mut catalog, &mut clients)?;
    }

    let snapshot = dashboard::snapshot(&clients, &orders);
    tracing::info!("Products: {}", catalog.len());
    tracing::info!("Purchases: {}", purchases.len());
    tracing::info!("Clients: {}", snapshot.total_clients);
    tracing::info!("Designs: {}", snapshot.total_designs);
    tracing::info!("Pending orders: {}", snapshot.pending_orders);
    tracing::info!("In production: {}", snapshot.in_production);

    Ok(())
}

/// Seed default products and clients into empty tables
fn seed_defaults(catalog: &mut CatalogService, clients: &mut ClientService) -> anyhow::Result<()> {
    if catalog.is_empty() {
        for product in reference::seed_products() {
            catalog.create(product)?;
        }
        tracing::info!("Seeded {} default products", catalog.len());
    }
    if clients.is_empty() {
        for client in reference::seed_clients() {
            clients.create(client)?;
        }
        tracing::info!("Seeded {} default clients", clients.len());
    }
    Ok(())
}
