//! Chain domain module.
//!
//! Aggregation and reporting across the member stores of a retail chain:
//! revenue rollups, best-seller ranking, and schedule-aware open-store
//! queries. Every query recomputes from current store state; nothing is
//! cached.

pub mod chain;

pub use chain::Chain;
