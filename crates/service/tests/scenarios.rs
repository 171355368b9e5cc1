//! Black-box tests against the seeded demo inventory.

use std::sync::Arc;
use std::sync::mpsc;
use std::thread;

use stocktrace_catalog::{NewLocation, Product, ProductPatch};
use stocktrace_core::InventoryError;
use stocktrace_ledger::{MovementRequest, MovementType};
use stocktrace_service::{InventoryService, fixtures};

fn product_by_sku(service: &InventoryService, sku: &str) -> Product {
    service
        .list_products()
        .unwrap()
        .into_iter()
        .find(|p| p.sku == sku)
        .unwrap_or_else(|| panic!("no product with sku {sku}"))
}

fn location_id_by_name(service: &InventoryService, name: &str) -> stocktrace_core::LocationId {
    service
        .list_locations()
        .unwrap()
        .into_iter()
        .find(|l| l.name == name)
        .unwrap_or_else(|| panic!("no location named {name}"))
        .id
}

#[test]
fn receiving_into_a_stocked_location_adds_to_the_row() {
    let service = fixtures::demo_service();
    let widget = product_by_sku(&service, "QW-1001");
    assert_eq!(widget.quantity, 150);

    let movement = service
        .submit_movement(MovementRequest::receive(widget.id, 50, widget.location_id))
        .unwrap();

    assert_eq!(movement.movement_type, MovementType::Receive);
    assert_eq!(product_by_sku(&service, "QW-1001").quantity, 200);
    assert_eq!(service.summary().unwrap().movement_count, 6);
}

#[test]
fn shipping_reduces_the_source_row() {
    let service = fixtures::demo_service();
    let widget = product_by_sku(&service, "QW-1001");

    let movement = service
        .submit_movement(MovementRequest::ship(widget.id, 5, widget.location_id))
        .unwrap();

    assert_eq!(product_by_sku(&service, "QW-1001").quantity, 145);
    assert_eq!(movement.from_location_id, Some(widget.location_id));
    assert_eq!(movement.to_location_id, None);
}

#[test]
fn overdrawn_ship_is_rejected_and_leaves_no_trace() {
    let service = fixtures::demo_service();
    let widget = product_by_sku(&service, "QW-1001");
    let movements_before = service.list_movements().unwrap();

    let err = service
        .submit_movement(MovementRequest::ship(widget.id, 1000, widget.location_id))
        .unwrap_err();

    assert_eq!(
        err,
        InventoryError::InsufficientStock {
            requested: 1000,
            available: 150
        }
    );
    assert_eq!(product_by_sku(&service, "QW-1001").quantity, 150);
    assert_eq!(service.list_movements().unwrap(), movements_before);
}

#[test]
fn transferring_to_an_empty_location_creates_a_row_and_conserves_stock() {
    let service = fixtures::demo_service();
    let spanner = product_by_sku(&service, "HS-2023");
    assert_eq!(spanner.quantity, 75);
    let dock = location_id_by_name(&service, "Dock A");

    service
        .submit_movement(MovementRequest::transfer(
            spanner.id,
            25,
            spanner.location_id,
            dock,
        ))
        .unwrap();

    let rows: Vec<Product> = service
        .list_products()
        .unwrap()
        .into_iter()
        .filter(|p| p.sku == "HS-2023")
        .collect();
    assert_eq!(rows.len(), 2);
    let source = rows.iter().find(|p| p.location_id == spanner.location_id).unwrap();
    let dest = rows.iter().find(|p| p.location_id == dock).unwrap();
    assert_eq!(source.quantity, 50);
    assert_eq!(dest.quantity, 25);
    assert_eq!(rows.iter().map(|p| p.quantity).sum::<u64>(), 75);
}

#[test]
fn receive_without_destination_is_a_validation_error() {
    let service = fixtures::demo_service();
    let widget = product_by_sku(&service, "QW-1001");
    let mut request = MovementRequest::receive(widget.id, 10, widget.location_id);
    request.to_location_id = None;

    let err = service.submit_movement(request).unwrap_err();
    assert_eq!(err, InventoryError::validation("missing location"));
    assert_eq!(product_by_sku(&service, "QW-1001").quantity, 150);
    assert_eq!(service.summary().unwrap().movement_count, 5);
}

#[test]
fn unknown_product_is_not_found() {
    let service = fixtures::demo_service();
    let warehouse = location_id_by_name(&service, "Main Warehouse");

    let err = service
        .submit_movement(MovementRequest::receive(
            stocktrace_core::ProductId::new(),
            10,
            warehouse,
        ))
        .unwrap_err();

    assert_eq!(err, InventoryError::not_found("product not found"));
    assert_eq!(service.summary().unwrap().movement_count, 5);
}

#[test]
fn movement_reads_are_ordered_and_idempotent() {
    let service = fixtures::demo_service();

    let first = service.list_movements().unwrap();
    let second = service.list_movements().unwrap();
    assert_eq!(first, second);

    for pair in first.windows(2) {
        assert!(pair[0].timestamp >= pair[1].timestamp);
    }
}

#[test]
fn caches_are_invalidated_by_the_relevant_mutations() {
    let service = fixtures::demo_service();
    let widget = product_by_sku(&service, "QW-1001");

    // Prime all caches.
    let products_before = service.list_products().unwrap();
    let locations_before = service.list_locations().unwrap();
    let movements_before = service.list_movements().unwrap();

    service
        .submit_movement(MovementRequest::receive(widget.id, 1, widget.location_id))
        .unwrap();

    // Product + movement caches refresh; location cache is untouched.
    assert_ne!(service.list_products().unwrap(), products_before);
    assert_ne!(service.list_movements().unwrap(), movements_before);
    assert_eq!(service.list_locations().unwrap(), locations_before);

    service
        .create_location(NewLocation {
            name: "Cold Storage".to_string(),
        })
        .unwrap();
    assert_eq!(service.list_locations().unwrap().len(), 5);
}

#[test]
fn product_edits_go_through_typed_patches() {
    let service = fixtures::demo_service();
    let probe = product_by_sku(&service, "NP-X9");

    let updated = service
        .update_product(
            probe.id,
            ProductPatch {
                quantity: Some(40),
                ..ProductPatch::default()
            },
        )
        .unwrap();

    assert_eq!(updated.quantity, 40);
    assert_eq!(updated.name, "Neutrino Probe");
    assert_eq!(product_by_sku(&service, "NP-X9").quantity, 40);
}

#[test]
fn sign_in_accepts_demo_and_rejects_locked_accounts() {
    let service = fixtures::demo_service();

    assert!(service.current_user().is_none());
    let user = service.sign_in("demo@user.com", "password", true).unwrap();
    assert_eq!(user.email, "demo@user.com");
    assert_eq!(service.current_user().unwrap().email, "demo@user.com");

    service.sign_out();
    assert!(service.current_user().is_none());

    let err = service
        .sign_in("locked@user.com", "password", false)
        .unwrap_err();
    assert_eq!(err.to_string(), "Account locked. Please contact support.");
}

#[test]
fn concurrent_ships_never_overdraw_a_row() {
    let service = Arc::new(fixtures::demo_service());
    let widget = product_by_sku(&service, "QW-1001");
    assert_eq!(widget.quantity, 150);

    let (tx, rx) = mpsc::channel();
    let mut handles = Vec::new();
    for _ in 0..8 {
        let service = Arc::clone(&service);
        let tx = tx.clone();
        let widget = widget.clone();
        handles.push(thread::spawn(move || {
            for _ in 0..30 {
                let outcome = service.submit_movement(MovementRequest::ship(
                    widget.id,
                    10,
                    widget.location_id,
                ));
                tx.send(outcome.is_ok()).unwrap();
            }
        }));
    }
    drop(tx);
    for handle in handles {
        handle.join().unwrap();
    }

    let successes = rx.iter().filter(|ok| *ok).count() as u64;
    let remaining = product_by_sku(&service, "QW-1001").quantity;

    // 240 attempts against 150 units: exactly 15 can succeed, and the row
    // must account for every successful debit.
    assert_eq!(successes, 15);
    assert_eq!(remaining, 150 - successes * 10);
    assert_eq!(
        service.summary().unwrap().movement_count as u64,
        5 + successes
    );
}
