//! Domain models for the Saree Business Management Platform

mod client;
mod design;
mod order;
mod product;
mod purchase;

pub use client::*;
pub use design::*;
pub use order::*;
pub use product::*;
pub use purchase::*;
