//! A single retail location: catalog, stock movements, sales, schedule.

use std::collections::BTreeMap;

use chrono::{NaiveTime, Weekday};

use tillbook_core::{DomainError, DomainResult, ProductId, StoreId};
use tillbook_products::{Product, SharedProduct};

use crate::schedule::OpeningHours;
use crate::stock::StockEntry;

/// A single retail location with its own catalog, stock and sales history.
///
/// The catalog is keyed by product id in a `BTreeMap`, so iteration is in
/// ascending id order and chain-level reports come out identical run to run.
/// Every mutating operation validates its input completely before touching
/// state; a rejected call leaves the store exactly as it was.
#[derive(Debug, Clone)]
pub struct Store {
    id: StoreId,
    name: String,
    hours: OpeningHours,
    inventory: BTreeMap<ProductId, StockEntry>,
}

impl Store {
    /// Create a store with the default schedule (08:00–22:00, seven days).
    pub fn new(id: StoreId, name: impl Into<String>) -> Self {
        Self::with_hours(id, name, OpeningHours::default())
    }

    /// Create a store with an explicit weekly schedule.
    pub fn with_hours(id: StoreId, name: impl Into<String>, hours: OpeningHours) -> Self {
        Self {
            id,
            name: name.into(),
            hours,
            inventory: BTreeMap::new(),
        }
    }

    pub fn id(&self) -> StoreId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn hours(&self) -> &OpeningHours {
        &self.hours
    }

    /// Add a product to the catalog with empty stock and sales history.
    pub fn register_product(&mut self, product: SharedProduct) -> DomainResult<()> {
        let id = product.id();
        if self.inventory.contains_key(&id) {
            return Err(DomainError::DuplicateProduct { id });
        }
        self.inventory.insert(id, StockEntry::new(product));
        Ok(())
    }

    /// Drop a product from the catalog, discarding its stock and history.
    pub fn unregister_product(&mut self, product: &Product) -> DomainResult<()> {
        let id = product.id();
        self.inventory
            .remove(&id)
            .map(|_| ())
            .ok_or(DomainError::UnknownProduct { id })
    }

    /// Receive `quantity` units of a registered product.
    pub fn add_stock(&mut self, product_id: ProductId, quantity: i64) -> DomainResult<()> {
        if quantity <= 0 {
            return Err(DomainError::InvalidQuantity { quantity });
        }
        self.entry_mut(product_id)?.receive(quantity);
        Ok(())
    }

    /// Record a sale at the product's current price and return the sale total.
    ///
    /// The price is captured at this moment; changing the product's price
    /// afterwards does not rewrite revenue already on the books.
    pub fn register_sale(&mut self, product_id: ProductId, quantity: i64) -> DomainResult<f64> {
        if quantity <= 0 {
            return Err(DomainError::InvalidQuantity { quantity });
        }
        let entry = self.entry_mut(product_id)?;
        if entry.current_quantity() < quantity {
            return Err(DomainError::InsufficientStock {
                id: product_id,
                available: entry.current_quantity(),
                requested: quantity,
            });
        }
        Ok(entry.sell(quantity))
    }

    /// Units currently on hand; zero when the product was never registered.
    pub fn stock_on_hand(&self, product_id: ProductId) -> i64 {
        self.inventory
            .get(&product_id)
            .map_or(0, |e| e.current_quantity())
    }

    /// Units sold of a product; zero when the product was never registered.
    pub fn quantity_sold(&self, product_id: ProductId) -> i64 {
        self.inventory
            .get(&product_id)
            .map_or(0, |e| e.sold_quantity())
    }

    /// Revenue recorded for a product; zero when never registered.
    pub fn product_revenue(&self, product_id: ProductId) -> f64 {
        self.inventory
            .get(&product_id)
            .map_or(0.0, |e| e.revenue())
    }

    /// Revenue recorded across the whole catalog.
    pub fn total_revenue(&self) -> f64 {
        self.inventory.values().map(|e| e.revenue()).sum()
    }

    /// Entries with at least one recorded sale.
    ///
    /// Order is unspecified for callers; used by chain-level aggregation.
    pub fn sold_entries(&self) -> impl Iterator<Item = &StockEntry> {
        self.inventory.values().filter(|e| e.sold_quantity() > 0)
    }

    /// Whether the store is open on `day` at `time`.
    pub fn is_open(&self, day: Weekday, time: NaiveTime) -> bool {
        self.hours.is_open_at(day, time)
    }

    fn entry_mut(&mut self, id: ProductId) -> DomainResult<&mut StockEntry> {
        self.inventory
            .get_mut(&id)
            .ok_or(DomainError::UnknownProduct { id })
    }
}
