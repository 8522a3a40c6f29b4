//! Shared types and models for the Saree Business Management Platform
//!
//! This crate contains the domain model shared between the engine and any
//! future front-end surface of the system.

pub mod models;
pub mod types;
pub mod validation;

pub use models::*;
pub use types::*;
pub use validation::*;
