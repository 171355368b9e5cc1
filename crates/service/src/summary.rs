//! Dashboard stock metrics.

use serde::{Deserialize, Serialize};

use stocktrace_catalog::{Location, Product};
use stocktrace_ledger::InventoryMovement;

/// Aggregate numbers shown on the dashboard.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StockSummary {
    /// Sum of quantities across all product rows.
    pub total_units: u64,
    /// Number of product rows (one per product-location pair).
    pub product_count: usize,
    pub location_count: usize,
    pub movement_count: usize,
}

impl StockSummary {
    pub fn compute(
        products: &[Product],
        locations: &[Location],
        movements: &[InventoryMovement],
    ) -> Self {
        Self {
            total_units: products.iter().map(|p| p.quantity).sum(),
            product_count: products.len(),
            location_count: locations.len(),
            movement_count: movements.len(),
        }
    }
}

/// The `n` largest rows by quantity, descending. Ties keep catalog order.
pub fn top_products(products: &[Product], n: usize) -> Vec<Product> {
    let mut sorted: Vec<Product> = products.to_vec();
    sorted.sort_by(|a, b| b.quantity.cmp(&a.quantity));
    sorted.truncate(n);
    sorted
}
