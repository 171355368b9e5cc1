//! Stock mutation engine.
//!
//! Translates a movement request into catalog quantity adjustments plus one
//! ledger entry, as a single all-or-nothing step. Pure domain logic: no IO,
//! no locking (the facade serializes requests).

pub mod mutation;

pub use mutation::StockMutationEngine;
