//! Demo fixture: a small seeded inventory for the dev harness and black-box
//! tests.

use std::sync::Arc;

use chrono::{Duration, Utc};

use stocktrace_auth::{User, UserDirectory};
use stocktrace_catalog::{CatalogStore, Location, Product};
use stocktrace_core::{LocationId, MovementId, ProductId};
use stocktrace_events::InMemoryBus;
use stocktrace_ledger::{InventoryMovement, MovementLedger, MovementType};

use crate::service::InventoryService;

/// Directory with the demo account plus a locked one.
pub fn demo_directory() -> UserDirectory {
    UserDirectory::new()
        .with_user(User::new("demo@user.com"), "password")
        .with_user(User::locked("locked@user.com"), "password")
}

fn location(name: &str) -> Location {
    Location {
        id: LocationId::new(),
        name: name.to_string(),
    }
}

fn row(name: &str, sku: &str, quantity: u64, location_id: LocationId) -> Product {
    Product {
        id: ProductId::new(),
        name: name.to_string(),
        sku: sku.to_string(),
        quantity,
        location_id,
    }
}

fn historical(
    product_id: ProductId,
    quantity: u64,
    movement_type: MovementType,
    from: Option<LocationId>,
    to: Option<LocationId>,
    days_ago: i64,
) -> InventoryMovement {
    InventoryMovement {
        id: MovementId::new(),
        product_id,
        quantity,
        movement_type,
        from_location_id: from,
        to_location_id: to,
        timestamp: Utc::now() - Duration::days(days_ago),
    }
}

/// A seeded facade: four locations, ten product rows, five historical
/// movements, and the demo sign-in directory.
pub fn demo_service() -> InventoryService {
    let warehouse = location("Main Warehouse");
    let dock = location("Dock A");
    let storefront = location("Retail Storefront");
    let overflow = location("Overflow Storage");

    let products = vec![
        row("Quantum Widget", "QW-1001", 150, warehouse.id),
        row("Hyper Spanner", "HS-2023", 75, warehouse.id),
        row("Flux Capacitor Core", "FC-C-003", 25, dock.id),
        row("Photon Drill Bit", "PD-B-450", 500, storefront.id),
        row("Neutrino Probe", "NP-X9", 30, overflow.id),
        row("Plasma Injector", "PI-778", 200, warehouse.id),
        row("Tachyon Emitter", "TE-5G", 120, dock.id),
        row("Gravity Plating", "GP-99", 800, storefront.id),
        row("Dark Matter Filter", "DMF-01", 5, overflow.id),
        row("Warp Coil", "WC-42", 95, warehouse.id),
    ];

    let movements = vec![
        historical(
            products[0].id,
            50,
            MovementType::Receive,
            None,
            Some(warehouse.id),
            5,
        ),
        historical(
            products[1].id,
            25,
            MovementType::Transfer,
            Some(warehouse.id),
            Some(dock.id),
            4,
        ),
        historical(
            products[3].id,
            100,
            MovementType::Ship,
            Some(storefront.id),
            None,
            3,
        ),
        historical(
            products[2].id,
            10,
            MovementType::Receive,
            None,
            Some(dock.id),
            2,
        ),
        historical(
            products[0].id,
            5,
            MovementType::Ship,
            Some(warehouse.id),
            None,
            1,
        ),
    ];

    let locations = vec![warehouse, dock, storefront, overflow];
    let bus = Arc::new(InMemoryBus::new());
    let catalog = CatalogStore::with_records(products, locations, Arc::clone(&bus));
    let ledger = MovementLedger::with_entries(movements, Arc::clone(&bus));

    InventoryService::from_parts(catalog, ledger, bus, demo_directory())
}
