//! In-memory catalog store.

use std::sync::Arc;

use stocktrace_core::{InventoryError, InventoryResult, LocationId, ProductId};
use stocktrace_events::{EventBus, InMemoryBus, StoreChange};

use crate::location::{Location, LocationPatch, NewLocation};
use crate::product::{NewProduct, Product, ProductPatch};

/// Catalog of product and location records.
///
/// Collections keep insertion order. Every successful mutation publishes a
/// [`StoreChange`] so cached views can refresh. Callers are expected to hold
/// an outer lock around a store + ledger pair; the store itself does no
/// locking.
#[derive(Debug)]
pub struct CatalogStore {
    products: Vec<Product>,
    locations: Vec<Location>,
    bus: Arc<InMemoryBus<StoreChange>>,
}

impl CatalogStore {
    pub fn new(bus: Arc<InMemoryBus<StoreChange>>) -> Self {
        Self {
            products: Vec::new(),
            locations: Vec::new(),
            bus,
        }
    }

    /// Build a store from pre-existing records (fixtures, snapshots).
    pub fn with_records(
        products: Vec<Product>,
        locations: Vec<Location>,
        bus: Arc<InMemoryBus<StoreChange>>,
    ) -> Self {
        Self {
            products,
            locations,
            bus,
        }
    }

    // ── reads ────────────────────────────────────────────────────────────

    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn locations(&self) -> &[Location] {
        &self.locations
    }

    pub fn product(&self, id: ProductId) -> Option<&Product> {
        self.products.iter().find(|p| p.id == id)
    }

    pub fn location(&self, id: LocationId) -> Option<&Location> {
        self.locations.iter().find(|l| l.id == id)
    }

    /// Find the row holding stock of the same logical product as `exemplar`
    /// at `location`.
    ///
    /// Movements re-resolve the source/destination row per location instead
    /// of trusting the row id in the request: the id identifies *a* row, and
    /// the caller's form may pass the id of the product's row at an arbitrary
    /// location.
    pub fn stock_at(&self, exemplar: &Product, location: LocationId) -> Option<&Product> {
        self.products
            .iter()
            .find(|p| p.location_id == location && p.same_identity(exemplar))
    }

    // ── product lifecycle ────────────────────────────────────────────────

    pub fn create_product(&mut self, new: NewProduct) -> InventoryResult<Product> {
        if new.name.trim().is_empty() {
            return Err(InventoryError::validation("product name cannot be empty"));
        }
        if self.location(new.location_id).is_none() {
            return Err(InventoryError::validation("unknown location"));
        }

        let product = Product {
            id: ProductId::new(),
            name: new.name,
            sku: new.sku,
            quantity: new.quantity,
            location_id: new.location_id,
        };
        self.products.push(product.clone());
        self.notify_products();
        Ok(product)
    }

    pub fn update_product(
        &mut self,
        id: ProductId,
        patch: ProductPatch,
    ) -> InventoryResult<Product> {
        if let Some(name) = &patch.name
            && name.trim().is_empty()
        {
            return Err(InventoryError::validation("product name cannot be empty"));
        }
        if let Some(location_id) = patch.location_id
            && self.location(location_id).is_none()
        {
            return Err(InventoryError::validation("unknown location"));
        }

        let product = self
            .products
            .iter_mut()
            .find(|p| p.id == id)
            .ok_or_else(|| InventoryError::not_found("product not found"))?;
        patch.apply_to(product);
        let updated = product.clone();
        self.notify_products();
        Ok(updated)
    }

    // ── location lifecycle ───────────────────────────────────────────────

    pub fn create_location(&mut self, new: NewLocation) -> InventoryResult<Location> {
        if new.name.trim().is_empty() {
            return Err(InventoryError::validation("location name cannot be empty"));
        }

        let location = Location {
            id: LocationId::new(),
            name: new.name,
        };
        self.locations.push(location.clone());
        self.notify_locations();
        Ok(location)
    }

    pub fn update_location(
        &mut self,
        id: LocationId,
        patch: LocationPatch,
    ) -> InventoryResult<Location> {
        if let Some(name) = &patch.name
            && name.trim().is_empty()
        {
            return Err(InventoryError::validation("location name cannot be empty"));
        }

        let location = self
            .locations
            .iter_mut()
            .find(|l| l.id == id)
            .ok_or_else(|| InventoryError::not_found("location not found"))?;
        patch.apply_to(location);
        let updated = location.clone();
        self.notify_locations();
        Ok(updated)
    }

    // ── engine-facing quantity primitives ────────────────────────────────

    /// Remove `amount` units from the row `id`.
    ///
    /// The engine validates sufficiency up front; this re-check keeps the
    /// non-negativity invariant local to the store.
    pub fn debit(&mut self, id: ProductId, amount: u64) -> InventoryResult<()> {
        let row = self
            .products
            .iter_mut()
            .find(|p| p.id == id)
            .ok_or_else(|| InventoryError::not_found("product not found"))?;
        if row.quantity < amount {
            return Err(InventoryError::insufficient_stock(amount, row.quantity));
        }
        row.quantity -= amount;
        self.notify_products();
        Ok(())
    }

    /// Add `amount` units to the row `id`.
    pub fn credit(&mut self, id: ProductId, amount: u64) -> InventoryResult<()> {
        let row = self
            .products
            .iter_mut()
            .find(|p| p.id == id)
            .ok_or_else(|| InventoryError::not_found("product not found"))?;
        row.quantity = row.quantity.saturating_add(amount);
        self.notify_products();
        Ok(())
    }

    /// Insert a fully-formed row (find-or-create credit at a new location).
    pub fn insert_row(&mut self, row: Product) {
        self.products.push(row);
        self.notify_products();
    }

    fn notify_products(&self) {
        let _ = self.bus.publish(StoreChange::products());
    }

    fn notify_locations(&self) {
        let _ = self.bus.publish(StoreChange::locations());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use stocktrace_events::ChangeKind;

    fn store_with_location() -> (CatalogStore, LocationId) {
        let bus = Arc::new(InMemoryBus::new());
        let mut store = CatalogStore::new(bus);
        let location = store
            .create_location(NewLocation {
                name: "Main Warehouse".to_string(),
            })
            .unwrap();
        (store, location.id)
    }

    fn widget(location_id: LocationId, quantity: u64) -> NewProduct {
        NewProduct {
            name: "Quantum Widget".to_string(),
            sku: "QW-1001".to_string(),
            quantity,
            location_id,
        }
    }

    #[test]
    fn create_product_assigns_fresh_id_and_keeps_insertion_order() {
        let (mut store, location_id) = store_with_location();

        let first = store.create_product(widget(location_id, 10)).unwrap();
        let second = store
            .create_product(NewProduct {
                name: "Hyper Spanner".to_string(),
                sku: "HS-2023".to_string(),
                quantity: 5,
                location_id,
            })
            .unwrap();

        assert_ne!(first.id, second.id);
        let ids: Vec<_> = store.products().iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![first.id, second.id]);
    }

    #[test]
    fn create_product_rejects_empty_name_and_unknown_location() {
        let (mut store, location_id) = store_with_location();

        let err = store
            .create_product(NewProduct {
                name: "   ".to_string(),
                sku: "X".to_string(),
                quantity: 1,
                location_id,
            })
            .unwrap_err();
        assert!(matches!(err, InventoryError::Validation(_)));

        let err = store
            .create_product(widget(LocationId::new(), 1))
            .unwrap_err();
        assert!(matches!(err, InventoryError::Validation(_)));
        assert!(store.products().is_empty());
    }

    #[test]
    fn update_product_merges_only_present_fields() {
        let (mut store, location_id) = store_with_location();
        let product = store.create_product(widget(location_id, 10)).unwrap();

        let updated = store
            .update_product(
                product.id,
                ProductPatch {
                    quantity: Some(42),
                    ..ProductPatch::default()
                },
            )
            .unwrap();

        assert_eq!(updated.quantity, 42);
        assert_eq!(updated.name, "Quantum Widget");
        assert_eq!(updated.sku, "QW-1001");
    }

    #[test]
    fn update_missing_product_is_not_found() {
        let (mut store, _) = store_with_location();
        let err = store
            .update_product(ProductId::new(), ProductPatch::default())
            .unwrap_err();
        assert!(matches!(err, InventoryError::NotFound(_)));
    }

    #[test]
    fn debit_never_underflows() {
        let (mut store, location_id) = store_with_location();
        let product = store.create_product(widget(location_id, 3)).unwrap();

        let err = store.debit(product.id, 4).unwrap_err();
        assert_eq!(
            err,
            InventoryError::InsufficientStock {
                requested: 4,
                available: 3
            }
        );
        assert_eq!(store.product(product.id).unwrap().quantity, 3);

        store.debit(product.id, 3).unwrap();
        assert_eq!(store.product(product.id).unwrap().quantity, 0);
    }

    #[test]
    fn stock_at_matches_identity_not_row_id() {
        let (mut store, location_id) = store_with_location();
        let dock = store
            .create_location(NewLocation {
                name: "Dock A".to_string(),
            })
            .unwrap();

        let main_row = store.create_product(widget(location_id, 10)).unwrap();
        let dock_row = store.create_product(widget(dock.id, 4)).unwrap();

        let found = store.stock_at(&main_row, dock.id).unwrap();
        assert_eq!(found.id, dock_row.id);
        assert!(store.stock_at(&main_row, LocationId::new()).is_none());
    }

    #[test]
    fn mutations_notify_subscribers() {
        let bus = Arc::new(InMemoryBus::new());
        let sub = bus.subscribe();
        let mut store = CatalogStore::new(Arc::clone(&bus));

        let location = store
            .create_location(NewLocation {
                name: "Dock A".to_string(),
            })
            .unwrap();
        assert_eq!(sub.recv().unwrap().kind, ChangeKind::Locations);

        store.create_product(widget(location.id, 1)).unwrap();
        assert_eq!(sub.recv().unwrap().kind, ChangeKind::Products);
    }
}
