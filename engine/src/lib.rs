//! Saree Business Management Platform - Engine
//!
//! Core services for a saree manufacturing operation: client register,
//! product/stock catalog, purchase ledger with stock reconciliation,
//! production order tracking, and dashboard aggregates. Each service owns
//! its in-memory table and mirrors it to a keyed JSON store.

pub mod config;
pub mod csv;
pub mod error;
pub mod services;
pub mod store;

pub use config::Config;
pub use error::{AppError, AppResult};
pub use store::Store;
