//! Products domain module.
//!
//! This crate contains the chain-wide product catalog type: one product
//! instance shared by reference across every store that carries it.

pub mod product;

pub use product::{Product, SharedProduct};
