//! Append-only movement log.

use std::sync::Arc;

use chrono::Utc;

use stocktrace_core::MovementId;
use stocktrace_events::{EventBus, InMemoryBus, StoreChange};

use crate::movement::{InventoryMovement, MovementRequest};

/// Append-only chronological record of stock movements.
///
/// No update or delete operation exists. Reads return entries most recent
/// first; entries sharing a timestamp keep their append order, so repeated
/// reads without an intervening append are identical.
#[derive(Debug)]
pub struct MovementLedger {
    entries: Vec<InventoryMovement>,
    bus: Arc<InMemoryBus<StoreChange>>,
}

impl MovementLedger {
    pub fn new(bus: Arc<InMemoryBus<StoreChange>>) -> Self {
        Self {
            entries: Vec::new(),
            bus,
        }
    }

    /// Build a ledger from pre-existing entries (fixtures, snapshots).
    pub fn with_entries(
        entries: Vec<InventoryMovement>,
        bus: Arc<InMemoryBus<StoreChange>>,
    ) -> Self {
        Self { entries, bus }
    }

    /// All movements, sorted by timestamp descending.
    pub fn movements(&self) -> Vec<InventoryMovement> {
        let mut out = self.entries.clone();
        // Stable sort: equal timestamps keep append order.
        out.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));
        out
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Record a movement, assigning id and current timestamp.
    ///
    /// The ledger never rejects on its own; validation is the mutation
    /// engine's job.
    pub fn append(&mut self, request: MovementRequest) -> InventoryMovement {
        let movement = InventoryMovement {
            id: MovementId::new(),
            product_id: request.product_id,
            quantity: request.quantity,
            movement_type: request.movement_type,
            from_location_id: request.from_location_id,
            to_location_id: request.to_location_id,
            timestamp: Utc::now(),
        };
        self.entries.push(movement.clone());
        let _ = self.bus.publish(StoreChange::movements());
        movement
    }
}
