//! Stores domain module.
//!
//! This crate contains the business rules for a single retail location:
//! catalog registration, stock movements, sale recording with
//! price-at-sale-time revenue capture, and the weekly operating schedule.
//! Implemented purely as deterministic domain logic (no IO, no storage).

pub mod schedule;
pub mod stock;
pub mod store;

pub use schedule::OpeningHours;
pub use stock::StockEntry;
pub use store::Store;
