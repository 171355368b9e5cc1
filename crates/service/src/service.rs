//! The inventory facade.

use std::sync::{Arc, Mutex, MutexGuard};

use stocktrace_auth::{AuthError, Session, User, UserDirectory};
use stocktrace_catalog::{
    CatalogStore, Location, LocationPatch, NewLocation, NewProduct, Product, ProductPatch,
};
use stocktrace_core::{InventoryError, InventoryResult, LocationId, ProductId};
use stocktrace_engine::StockMutationEngine;
use stocktrace_events::{EventBus, InMemoryBus, StoreChange, Subscription};
use stocktrace_ledger::{InventoryMovement, MovementLedger, MovementRequest};

use crate::summary::{self, StockSummary};

/// Catalog + ledger pair. Guarded by a single mutex so every
/// read-validate-write sequence is atomic: two concurrent SHIPs against the
/// same row cannot both pass the sufficiency check before either debits.
#[derive(Debug)]
struct StoreState {
    catalog: CatalogStore,
    ledger: MovementLedger,
}

/// Cached read snapshots.
///
/// Invalidation policy: product cache after product or movement mutations,
/// location cache after location mutations, movement cache after movement
/// submission.
#[derive(Debug, Default)]
struct ReadCaches {
    products: Option<Vec<Product>>,
    locations: Option<Vec<Location>>,
    movements: Option<Vec<InventoryMovement>>,
}

/// Single entry point around the catalog store, movement ledger and stock
/// mutation engine.
///
/// Lock ordering: `state` before `caches`, always. Methods take `&self`, so
/// a facade behind an `Arc` can be shared across threads.
#[derive(Debug)]
pub struct InventoryService {
    state: Mutex<StoreState>,
    caches: Mutex<ReadCaches>,
    bus: Arc<InMemoryBus<StoreChange>>,
    engine: StockMutationEngine,
    directory: UserDirectory,
    session: Mutex<Option<Session>>,
}

impl InventoryService {
    /// An empty inventory with the given sign-in directory.
    pub fn new(directory: UserDirectory) -> Self {
        let bus = Arc::new(InMemoryBus::new());
        Self::from_parts(
            CatalogStore::new(Arc::clone(&bus)),
            MovementLedger::new(Arc::clone(&bus)),
            bus,
            directory,
        )
    }

    pub(crate) fn from_parts(
        catalog: CatalogStore,
        ledger: MovementLedger,
        bus: Arc<InMemoryBus<StoreChange>>,
        directory: UserDirectory,
    ) -> Self {
        Self {
            state: Mutex::new(StoreState { catalog, ledger }),
            caches: Mutex::new(ReadCaches::default()),
            bus,
            engine: StockMutationEngine::new(),
            directory,
            session: Mutex::new(None),
        }
    }

    /// Subscribe to change notifications (see the invalidation policy on
    /// [`ReadCaches`]); external cached views refresh by re-reading.
    pub fn subscribe(&self) -> Subscription<StoreChange> {
        self.bus.subscribe()
    }

    fn lock_state(&self) -> InventoryResult<MutexGuard<'_, StoreState>> {
        self.state
            .lock()
            .map_err(|_| InventoryError::internal("store state lock poisoned"))
    }

    fn lock_caches(&self) -> InventoryResult<MutexGuard<'_, ReadCaches>> {
        self.caches
            .lock()
            .map_err(|_| InventoryError::internal("read cache lock poisoned"))
    }

    // ── reads ────────────────────────────────────────────────────────────

    pub fn list_products(&self) -> InventoryResult<Vec<Product>> {
        let state = self.lock_state()?;
        let mut caches = self.lock_caches()?;
        if let Some(products) = &caches.products {
            return Ok(products.clone());
        }
        let products = state.catalog.products().to_vec();
        caches.products = Some(products.clone());
        Ok(products)
    }

    pub fn list_locations(&self) -> InventoryResult<Vec<Location>> {
        let state = self.lock_state()?;
        let mut caches = self.lock_caches()?;
        if let Some(locations) = &caches.locations {
            return Ok(locations.clone());
        }
        let locations = state.catalog.locations().to_vec();
        caches.locations = Some(locations.clone());
        Ok(locations)
    }

    /// Movements, most recent first.
    pub fn list_movements(&self) -> InventoryResult<Vec<InventoryMovement>> {
        let state = self.lock_state()?;
        let mut caches = self.lock_caches()?;
        if let Some(movements) = &caches.movements {
            return Ok(movements.clone());
        }
        let movements = state.ledger.movements();
        caches.movements = Some(movements.clone());
        Ok(movements)
    }

    pub fn summary(&self) -> InventoryResult<StockSummary> {
        Ok(StockSummary::compute(
            &self.list_products()?,
            &self.list_locations()?,
            &self.list_movements()?,
        ))
    }

    /// The `n` largest product rows by quantity, descending.
    pub fn top_products(&self, n: usize) -> InventoryResult<Vec<Product>> {
        Ok(summary::top_products(&self.list_products()?, n))
    }

    // ── movements ────────────────────────────────────────────────────────

    /// Validate and apply a movement. All-or-nothing: a rejected request
    /// changes neither quantities nor the ledger.
    pub fn submit_movement(
        &self,
        request: MovementRequest,
    ) -> InventoryResult<InventoryMovement> {
        let mut guard = self.lock_state()?;
        let state = &mut *guard;
        let result =
            self.engine
                .execute(&mut state.catalog, &mut state.ledger, request.clone());

        match &result {
            Ok(movement) => {
                let mut caches = self.lock_caches()?;
                caches.products = None;
                caches.movements = None;
                tracing::info!(
                    movement_id = %movement.id,
                    movement_type = %movement.movement_type,
                    product_id = %movement.product_id,
                    quantity = movement.quantity,
                    "movement recorded"
                );
            }
            Err(err) => {
                tracing::warn!(
                    movement_type = %request.movement_type,
                    product_id = %request.product_id,
                    quantity = request.quantity,
                    error = %err,
                    "movement rejected"
                );
            }
        }

        result
    }

    // ── catalog mutations ────────────────────────────────────────────────

    pub fn create_product(&self, new: NewProduct) -> InventoryResult<Product> {
        let mut state = self.lock_state()?;
        let product = state.catalog.create_product(new)?;
        self.lock_caches()?.products = None;
        Ok(product)
    }

    pub fn update_product(
        &self,
        id: ProductId,
        patch: ProductPatch,
    ) -> InventoryResult<Product> {
        let mut state = self.lock_state()?;
        let product = state.catalog.update_product(id, patch)?;
        self.lock_caches()?.products = None;
        Ok(product)
    }

    pub fn create_location(&self, new: NewLocation) -> InventoryResult<Location> {
        let mut state = self.lock_state()?;
        let location = state.catalog.create_location(new)?;
        self.lock_caches()?.locations = None;
        Ok(location)
    }

    pub fn update_location(
        &self,
        id: LocationId,
        patch: LocationPatch,
    ) -> InventoryResult<Location> {
        let mut state = self.lock_state()?;
        let location = state.catalog.update_location(id, patch)?;
        self.lock_caches()?.locations = None;
        Ok(location)
    }

    // ── sign-in boundary ─────────────────────────────────────────────────

    pub fn sign_in(&self, email: &str, password: &str, remember: bool) -> Result<User, AuthError> {
        let session = self.directory.sign_in(email, password, remember)?;
        let user = session.user.clone();
        if let Ok(mut current) = self.session.lock() {
            *current = Some(session);
        }
        tracing::info!(email = %user.email, "signed in");
        Ok(user)
    }

    pub fn sign_out(&self) {
        if let Ok(mut current) = self.session.lock() {
            if let Some(session) = current.take() {
                tracing::info!(email = %session.user.email, "signed out");
            }
        }
    }

    pub fn current_user(&self) -> Option<User> {
        self.session
            .lock()
            .ok()
            .and_then(|s| s.as_ref().map(|session| session.user.clone()))
    }
}
