//! Inventory facade: the single entry point presentation layers consume.
//!
//! Wraps the catalog store, movement ledger and stock mutation engine behind
//! one mutex-owned state object, adds read caching with explicit
//! invalidation, the sign-in boundary, and dashboard summary metrics.

pub mod fixtures;
pub mod service;
pub mod summary;

pub use service::InventoryService;
pub use summary::StockSummary;
