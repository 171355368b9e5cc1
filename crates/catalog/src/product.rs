use serde::{Deserialize, Serialize};

use stocktrace_core::{LocationId, ProductId};

/// One product's stock at one location.
///
/// The same logical product may occupy several rows (one per location) that
/// share `name`/`sku` but carry distinct `id`/`location_id`. The mutation
/// engine preserves this shape when it credits stock at a location with no
/// existing row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub sku: String,
    /// Stock count at `location_id`. Unsigned: quantities are never negative.
    pub quantity: u64,
    pub location_id: LocationId,
}

impl Product {
    /// True when `other` is stock of the same logical product
    /// (name/sku lineage), regardless of which location holds it.
    pub fn same_identity(&self, other: &Product) -> bool {
        self.name == other.name && self.sku == other.sku
    }
}

/// Fields required to create a product row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewProduct {
    pub name: String,
    pub sku: String,
    pub quantity: u64,
    pub location_id: LocationId,
}

/// Typed partial update for a product row.
///
/// `None` leaves a field untouched. Unknown fields simply cannot be
/// expressed, unlike a dynamic merge.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductPatch {
    pub name: Option<String>,
    pub sku: Option<String>,
    pub quantity: Option<u64>,
    pub location_id: Option<LocationId>,
}

impl ProductPatch {
    pub(crate) fn apply_to(&self, product: &mut Product) {
        if let Some(name) = &self.name {
            product.name = name.clone();
        }
        if let Some(sku) = &self.sku {
            product.sku = sku.clone();
        }
        if let Some(quantity) = self.quantity {
            product.quantity = quantity;
        }
        if let Some(location_id) = self.location_id {
            product.location_id = location_id;
        }
    }
}
