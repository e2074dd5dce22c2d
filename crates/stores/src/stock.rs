//! Per-product inventory and sales record.

use tillbook_products::SharedProduct;

/// One store's inventory and sales record for a single product.
///
/// `revenue` is the cumulative sum over all recorded sales of quantity times
/// the unit price at the moment each sale was made. Later price changes leave
/// it untouched. Counters only move through the owning [`Store`]'s
/// operations, which validate before mutating.
///
/// [`Store`]: crate::Store
#[derive(Debug, Clone)]
pub struct StockEntry {
    product: SharedProduct,
    current_quantity: i64,
    sold_quantity: i64,
    revenue: f64,
}

impl StockEntry {
    pub(crate) fn new(product: SharedProduct) -> Self {
        Self {
            product,
            current_quantity: 0,
            sold_quantity: 0,
            revenue: 0.0,
        }
    }

    pub fn product(&self) -> &SharedProduct {
        &self.product
    }

    /// Units currently on hand.
    pub fn current_quantity(&self) -> i64 {
        self.current_quantity
    }

    /// Units sold over the lifetime of the entry.
    pub fn sold_quantity(&self) -> i64 {
        self.sold_quantity
    }

    /// Revenue accrued over the lifetime of the entry.
    pub fn revenue(&self) -> f64 {
        self.revenue
    }

    pub(crate) fn receive(&mut self, quantity: i64) {
        self.current_quantity += quantity;
    }

    /// Record a sale at the product's current price and return the total.
    ///
    /// The caller has already checked the quantity and availability.
    pub(crate) fn sell(&mut self, quantity: i64) -> f64 {
        let total = self.product.price() * quantity as f64;
        self.current_quantity -= quantity;
        self.sold_quantity += quantity;
        self.revenue += total;
        total
    }
}
