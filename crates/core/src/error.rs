//! Domain error model.

use thiserror::Error;

use crate::id::{ProductId, StoreId};

/// Result type used across the domain layer.
pub type DomainResult<T> = Result<T, DomainError>;

/// Domain-level error.
///
/// Every variant is a deterministic validation failure surfaced to the
/// immediate caller. A rejected operation leaves store and chain state
/// untouched, so callers may log and continue.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// The product id is already present in the store catalog.
    #[error("product {id} is already registered")]
    DuplicateProduct { id: ProductId },

    /// The product was never registered in this store.
    #[error("product {id} is not registered; register it before stocking or selling")]
    UnknownProduct { id: ProductId },

    /// Stock movements and sales require a strictly positive quantity.
    #[error("quantity must be greater than zero, got {quantity}")]
    InvalidQuantity { quantity: i64 },

    /// The sale asked for more units than the store currently holds.
    #[error("insufficient stock for product {id}: {available} available, {requested} requested")]
    InsufficientStock {
        id: ProductId,
        available: i64,
        requested: i64,
    },

    /// A store with the same id is already part of the chain.
    #[error("store {id} is already part of the chain")]
    DuplicateStore { id: StoreId },

    /// No store with this id exists in the chain.
    #[error("store {id} is not part of the chain")]
    UnknownStore { id: StoreId },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn insufficient_stock_message_reports_both_quantities() {
        let err = DomainError::InsufficientStock {
            id: ProductId::new(3),
            available: 2,
            requested: 9,
        };
        let msg = err.to_string();
        assert!(msg.contains("product 3"));
        assert!(msg.contains("2 available"));
        assert!(msg.contains("9 requested"));
    }

    #[test]
    fn messages_name_the_offending_id() {
        assert!(
            DomainError::UnknownProduct { id: ProductId::new(42) }
                .to_string()
                .contains("42")
        );
        assert!(
            DomainError::DuplicateStore { id: StoreId::new(7) }
                .to_string()
                .contains("7")
        );
    }
}
