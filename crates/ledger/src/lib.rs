//! Movement ledger: the append-only chronological record of stock movements.
//!
//! Entries are immutable facts. Validation belongs to the mutation engine;
//! the ledger records whatever it is handed and never rejects on its own.

pub mod ledger;
pub mod movement;

pub use ledger::MovementLedger;
pub use movement::{InventoryMovement, MovementRequest, MovementType};
