//! Console demo: seeds two branches, runs a scripted trading day (including
//! sales that are meant to fail), then prints the consolidated chain report.

use std::rc::Rc;

use anyhow::Result;
use chrono::{NaiveTime, Weekday};

use tillbook_chain::Chain;
use tillbook_core::{ProductId, StoreId};
use tillbook_products::{Product, SharedProduct};
use tillbook_stores::{OpeningHours, Store};

fn main() -> Result<()> {
    tillbook_observability::init();

    // Catalog shared across branches: one product instance per id.
    let rice = Product::shared(ProductId::new(1), "White Rice", 200.0);
    let milk = Product::shared(ProductId::new(2), "Whole Milk", 150.0);
    let coke = Product::shared(ProductId::new(3), "Coca-Cola 2.5L", 500.0);
    let soap = Product::shared(ProductId::new(4), "Dove Soap", 100.0);
    let water = Product::shared(ProductId::new(5), "Mineral Water", 80.0);
    let wine = Product::shared(ProductId::new(6), "Cabernet Sauvignon Wine", 1200.0);

    tracing::info!("loading inventory");

    let mut central = Store::new(StoreId::new(1), "Central Branch");
    for product in [&rice, &milk, &coke, &soap, &water, &wine] {
        central.register_product(Rc::clone(product))?;
        central.add_stock(product.id(), 100)?;
    }

    // North Branch carries no wine and keeps shorter hours.
    let north_hours = OpeningHours::new(
        NaiveTime::from_hms_opt(9, 0, 0).expect("09:00 is a valid time"),
        NaiveTime::from_hms_opt(20, 0, 0).expect("20:00 is a valid time"),
        [
            Weekday::Mon,
            Weekday::Tue,
            Weekday::Wed,
            Weekday::Thu,
            Weekday::Fri,
            Weekday::Sat,
        ],
    );
    let mut north = Store::with_hours(StoreId::new(2), "North Branch", north_hours);
    for product in [&rice, &milk, &coke, &water] {
        north.register_product(Rc::clone(product))?;
        north.add_stock(product.id(), 50)?;
    }

    tracing::info!("processing daily sales");

    process_sale(&mut central, &coke, 10);
    process_sale(&mut central, &rice, 20);

    // Deliberate failures: the register keeps going.
    process_sale(&mut north, &wine, 5); // never registered there
    process_sale(&mut north, &coke, 1_000); // more than on hand
    process_sale(&mut north, &water, 10);

    let chain = Chain::with_stores([central, north])?;

    println!("==========================================");
    println!("       CONSOLIDATED FINAL REPORT");
    println!("==========================================");
    println!("Stores:           {}", chain.available_stores());
    println!("Chain revenue:    {:.2}", chain.total_revenue());
    println!("Best performer:   {}", chain.highest_revenue_store());
    println!("Top sellers:      {}", chain.top_selling_products());
    println!(
        "Open Mon 21:00:   {}",
        chain.open_stores(
            Weekday::Mon,
            NaiveTime::from_hms_opt(21, 0, 0).expect("21:00 is a valid time")
        )
    );
    println!("==========================================");

    Ok(())
}

/// Record one sale, logging the outcome instead of aborting the run.
fn process_sale(store: &mut Store, product: &SharedProduct, quantity: i64) {
    match store.register_sale(product.id(), quantity) {
        Ok(total) => tracing::info!(
            store = store.name(),
            product = product.name(),
            quantity,
            total,
            "sale recorded"
        ),
        Err(err) => tracing::warn!(store = store.name(), %err, "sale rejected"),
    }
}
