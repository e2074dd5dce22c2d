use std::cell::Cell;
use std::rc::Rc;

use serde::{Deserialize, Serialize};

use tillbook_core::ProductId;

/// Shared handle to a catalog product.
///
/// The same product may be registered with any number of stores. Cloning the
/// handle clones the reference, not the product, so a price update made
/// through one holder is observed by every other holder.
pub type SharedProduct = Rc<Product>;

/// A catalog product: immutable identity, mutable price.
///
/// The price lives in a `Cell` so it can change behind the shared handle.
/// Stores never read a product's price except at the moment a sale is
/// recorded; revenue already on the books keeps the price it was sold at.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    id: ProductId,
    name: String,
    price: Cell<f64>,
}

impl Product {
    pub fn new(id: ProductId, name: impl Into<String>, price: f64) -> Self {
        Self {
            id,
            name: name.into(),
            price: Cell::new(price),
        }
    }

    /// Create a product already wrapped for sharing across stores.
    pub fn shared(id: ProductId, name: impl Into<String>, price: f64) -> SharedProduct {
        Rc::new(Self::new(id, name, price))
    }

    pub fn id(&self) -> ProductId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Current unit price.
    pub fn price(&self) -> f64 {
        self.price.get()
    }

    /// Update the unit price.
    ///
    /// Takes effect for every store holding this product from the next sale
    /// on; previously recorded revenue is not touched.
    pub fn set_price(&self, price: f64) {
        self.price.set(price);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn price_update_is_visible_through_every_handle() {
        let product = Product::shared(ProductId::new(1), "Whole Milk", 150.0);
        let other = Rc::clone(&product);

        product.set_price(175.0);

        assert_eq!(other.price(), 175.0);
        assert_eq!(product.price(), 175.0);
    }

    #[test]
    fn identity_stays_fixed_after_price_changes() {
        let product = Product::new(ProductId::new(2), "Dove Soap", 100.0);
        product.set_price(90.0);

        assert_eq!(product.id(), ProductId::new(2));
        assert_eq!(product.name(), "Dove Soap");
        assert_eq!(product.price(), 90.0);
    }
}
