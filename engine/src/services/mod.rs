//! Business logic services for the Saree Business Management Platform

pub mod catalog;
pub mod clients;
pub mod dashboard;
pub mod orders;
pub mod purchases;
pub mod reference;

pub use catalog::CatalogService;
pub use clients::ClientService;
pub use dashboard::DashboardSnapshot;
pub use orders::OrderService;
pub use purchases::PurchaseService;
