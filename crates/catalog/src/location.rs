use serde::{Deserialize, Serialize};

use stocktrace_core::LocationId;

/// A stock location (warehouse, dock, storefront, ...).
///
/// Locations are referenced by product rows and movements; they are never
/// cascading-deleted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Location {
    pub id: LocationId,
    pub name: String,
}

/// Fields required to create a location.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewLocation {
    pub name: String,
}

/// Typed partial update for a location.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocationPatch {
    pub name: Option<String>,
}

impl LocationPatch {
    pub(crate) fn apply_to(&self, location: &mut Location) {
        if let Some(name) = &self.name {
            location.name = name.clone();
        }
    }
}
