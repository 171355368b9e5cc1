//! Dev harness: seeds the demo inventory, signs in, records a few movements
//! and prints the resulting dashboard numbers.

use anyhow::{Context, Result};

use stocktrace_ledger::MovementRequest;
use stocktrace_service::fixtures;

fn main() -> Result<()> {
    stocktrace_observability::init();

    let service = fixtures::demo_service();
    let user = service.sign_in("demo@user.com", "password", false)?;
    tracing::info!(email = %user.email, "demo session opened");

    let products = service.list_products()?;
    let locations = service.list_locations()?;
    let widget = products.first().context("fixture has no products")?;
    let destination = locations
        .iter()
        .find(|l| l.id != widget.location_id)
        .context("fixture has no second location")?;

    service.submit_movement(MovementRequest::receive(widget.id, 25, widget.location_id))?;
    service.submit_movement(MovementRequest::transfer(
        widget.id,
        10,
        widget.location_id,
        destination.id,
    ))?;

    let summary = service.summary()?;
    println!("{}", serde_json::to_string_pretty(&summary)?);

    for movement in service.list_movements()?.iter().take(5) {
        println!(
            "{} {} x{} ({})",
            movement.timestamp.to_rfc3339(),
            movement.movement_type,
            movement.quantity,
            movement.id
        );
    }

    service.sign_out();
    Ok(())
}
