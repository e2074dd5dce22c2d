//! Chain-level aggregation and reporting.

use std::collections::HashMap;

use chrono::{NaiveTime, Weekday};

use tillbook_core::{DomainError, DomainResult, ProductId, StoreId};
use tillbook_stores::Store;

/// Number of entries in the best-seller report.
const TOP_SELLERS: usize = 5;

/// A retail chain: an ordered collection of stores aggregated for reporting.
///
/// The chain holds no product or stock data of its own. Every report walks
/// the current state of the member stores, so a query issued right after a
/// sale already sees it.
#[derive(Debug, Default)]
pub struct Chain {
    stores: Vec<Store>,
}

impl Chain {
    pub fn new() -> Self {
        Self { stores: Vec::new() }
    }

    /// Build a chain from a sequence of stores, rejecting duplicate ids.
    pub fn with_stores(stores: impl IntoIterator<Item = Store>) -> DomainResult<Self> {
        let mut chain = Self::new();
        for store in stores {
            chain.add_store(store)?;
        }
        Ok(chain)
    }

    /// Append a store to the chain.
    pub fn add_store(&mut self, store: Store) -> DomainResult<()> {
        if self.stores.iter().any(|s| s.id() == store.id()) {
            return Err(DomainError::DuplicateStore { id: store.id() });
        }
        self.stores.push(store);
        Ok(())
    }

    /// Remove the store with `id` and hand it back, history included.
    pub fn remove_store(&mut self, id: StoreId) -> DomainResult<Store> {
        let index = self
            .stores
            .iter()
            .position(|s| s.id() == id)
            .ok_or(DomainError::UnknownStore { id })?;
        Ok(self.stores.remove(index))
    }

    pub fn store(&self, id: StoreId) -> Option<&Store> {
        self.stores.iter().find(|s| s.id() == id)
    }

    pub fn store_mut(&mut self, id: StoreId) -> Option<&mut Store> {
        self.stores.iter_mut().find(|s| s.id() == id)
    }

    /// Member stores in chain order.
    pub fn stores(&self) -> &[Store] {
        &self.stores
    }

    /// Member stores as `"name (ID: id)"`, comma separated, in chain order.
    pub fn available_stores(&self) -> String {
        self.stores
            .iter()
            .map(|s| format!("{} (ID: {})", s.name(), s.id()))
            .collect::<Vec<_>>()
            .join(", ")
    }

    /// Revenue recorded across every member store.
    pub fn total_revenue(&self) -> f64 {
        self.stores.iter().map(|s| s.total_revenue()).sum()
    }

    /// The member store with the highest recorded revenue.
    ///
    /// Ties keep the earliest store in chain order.
    pub fn highest_revenue_store(&self) -> String {
        let mut best: Option<(&Store, f64)> = None;
        for store in &self.stores {
            let revenue = store.total_revenue();
            if best.is_none_or(|(_, top)| revenue > top) {
                best = Some((store, revenue));
            }
        }
        match best {
            Some((store, revenue)) => format!(
                "{} (ID: {}). Total Revenue: {revenue:.2}",
                store.name(),
                store.id()
            ),
            None => "No supermarkets or sales data available.".to_string(),
        }
    }

    /// The top five selling products across the chain, formatted as
    /// `"Name: qty - Name: qty"`.
    ///
    /// Sold quantities of the same product id are summed across stores,
    /// whichever handle instance each store holds. Products with no sales are
    /// excluded; an empty report renders as an empty string. Ties keep
    /// encounter order (stores in chain order, each catalog in ascending
    /// product id), so the report is identical run to run.
    pub fn top_selling_products(&self) -> String {
        let mut totals: Vec<(String, i64)> = Vec::new();
        let mut by_id: HashMap<ProductId, usize> = HashMap::new();

        for store in &self.stores {
            for entry in store.sold_entries() {
                let product = entry.product();
                match by_id.get(&product.id()) {
                    Some(&slot) => totals[slot].1 += entry.sold_quantity(),
                    None => {
                        by_id.insert(product.id(), totals.len());
                        totals.push((product.name().to_string(), entry.sold_quantity()));
                    }
                }
            }
        }

        // Stable sort: equal quantities stay in encounter order.
        totals.sort_by(|a, b| b.1.cmp(&a.1));
        totals
            .iter()
            .take(TOP_SELLERS)
            .map(|(name, quantity)| format!("{name}: {quantity}"))
            .collect::<Vec<_>>()
            .join(" - ")
    }

    /// Stores open on `day` at `time`, as `"name (id), name (id)"`.
    pub fn open_stores(&self, day: Weekday, time: NaiveTime) -> String {
        let open: Vec<String> = self
            .stores
            .iter()
            .filter(|s| s.is_open(day, time))
            .map(|s| format!("{} ({})", s.name(), s.id()))
            .collect();
        if open.is_empty() {
            return "No supermarkets open at this time.".to_string();
        }
        open.join(", ")
    }
}
