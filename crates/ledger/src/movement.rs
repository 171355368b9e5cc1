use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use stocktrace_core::{LocationId, MovementId, ProductId};

/// How a movement changes stock.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum MovementType {
    /// Stock arrives at a destination location.
    Receive,
    /// Stock moves from one location to another.
    Transfer,
    /// Stock leaves a source location.
    Ship,
}

impl core::fmt::Display for MovementType {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            MovementType::Receive => write!(f, "RECEIVE"),
            MovementType::Transfer => write!(f, "TRANSFER"),
            MovementType::Ship => write!(f, "SHIP"),
        }
    }
}

/// A movement as submitted by a caller, before the ledger assigns
/// id/timestamp.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MovementRequest {
    pub movement_type: MovementType,
    pub product_id: ProductId,
    pub quantity: u64,
    pub from_location_id: Option<LocationId>,
    pub to_location_id: Option<LocationId>,
}

impl MovementRequest {
    pub fn receive(product_id: ProductId, quantity: u64, to: LocationId) -> Self {
        Self {
            movement_type: MovementType::Receive,
            product_id,
            quantity,
            from_location_id: None,
            to_location_id: Some(to),
        }
    }

    pub fn ship(product_id: ProductId, quantity: u64, from: LocationId) -> Self {
        Self {
            movement_type: MovementType::Ship,
            product_id,
            quantity,
            from_location_id: Some(from),
            to_location_id: None,
        }
    }

    pub fn transfer(product_id: ProductId, quantity: u64, from: LocationId, to: LocationId) -> Self {
        Self {
            movement_type: MovementType::Transfer,
            product_id,
            quantity,
            from_location_id: Some(from),
            to_location_id: Some(to),
        }
    }
}

/// A recorded stock movement. Immutable once created.
///
/// `from_location_id` is present unless the type is RECEIVE;
/// `to_location_id` is present unless the type is SHIP.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InventoryMovement {
    pub id: MovementId,
    pub product_id: ProductId,
    pub quantity: u64,
    pub movement_type: MovementType,
    pub from_location_id: Option<LocationId>,
    pub to_location_id: Option<LocationId>,
    pub timestamp: DateTime<Utc>,
}
