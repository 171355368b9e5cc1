use stocktrace_catalog::{CatalogStore, Product};
use stocktrace_core::{InventoryError, InventoryResult, LocationId, ProductId};
use stocktrace_ledger::{InventoryMovement, MovementLedger, MovementRequest, MovementType};

/// One quantity adjustment against the catalog.
#[derive(Debug, Clone, PartialEq, Eq)]
enum StockAdjustment {
    /// Remove units from an existing row.
    Debit { row: ProductId, amount: u64 },
    /// Add units to an existing row.
    Credit { row: ProductId, amount: u64 },
    /// Create a new row for a product arriving at a location with no
    /// existing stock of it.
    CreateRow(Product),
}

/// A fully validated movement, ready to apply.
///
/// The plan is computed against the current catalog before anything is
/// touched; a request that fails validation therefore leaves the catalog and
/// ledger unchanged.
#[derive(Debug, Clone, PartialEq, Eq)]
struct MovementPlan {
    adjustments: Vec<StockAdjustment>,
    /// The request with its location fields normalized per movement type
    /// (RECEIVE carries no source, SHIP no destination).
    request: MovementRequest,
}

/// Validates movement requests against the catalog and applies the resulting
/// quantity changes, then records the movement in the ledger.
#[derive(Debug, Default)]
pub struct StockMutationEngine;

impl StockMutationEngine {
    pub fn new() -> Self {
        Self
    }

    /// Execute a movement request end to end.
    ///
    /// Validation order (first failure aborts with zero side effects):
    /// 1. quantity must be positive;
    /// 2. the product id must resolve to an existing row;
    /// 3. the locations required by the movement type must be present
    ///    (and differ, for transfers);
    /// 4. for SHIP/TRANSFER the source row must hold enough stock.
    pub fn execute(
        &self,
        catalog: &mut CatalogStore,
        ledger: &mut MovementLedger,
        request: MovementRequest,
    ) -> InventoryResult<InventoryMovement> {
        let plan = self.plan(catalog, request)?;
        self.apply(catalog, ledger, plan)
    }

    fn plan(&self, catalog: &CatalogStore, request: MovementRequest) -> InventoryResult<MovementPlan> {
        if request.quantity == 0 {
            return Err(InventoryError::validation("invalid quantity"));
        }

        // The request id names *a* row of the product; source and destination
        // rows are re-resolved per location from this exemplar's name/sku
        // lineage.
        let exemplar = catalog
            .product(request.product_id)
            .ok_or_else(|| InventoryError::not_found("product not found"))?
            .clone();

        match request.movement_type {
            MovementType::Receive => {
                let to = request
                    .to_location_id
                    .ok_or_else(|| InventoryError::validation("missing location"))?;

                let adjustments = vec![self.credit_or_create(catalog, &exemplar, to, request.quantity)];
                Ok(MovementPlan {
                    adjustments,
                    request: MovementRequest {
                        from_location_id: None,
                        ..request
                    },
                })
            }
            MovementType::Ship => {
                let from = request
                    .from_location_id
                    .ok_or_else(|| InventoryError::validation("missing location"))?;

                let source = self.source_row(catalog, &exemplar, from, request.quantity)?;
                Ok(MovementPlan {
                    adjustments: vec![StockAdjustment::Debit {
                        row: source,
                        amount: request.quantity,
                    }],
                    request: MovementRequest {
                        to_location_id: None,
                        ..request
                    },
                })
            }
            MovementType::Transfer => {
                let (Some(from), Some(to)) = (request.from_location_id, request.to_location_id)
                else {
                    return Err(InventoryError::validation("missing location"));
                };
                if from == to {
                    return Err(InventoryError::validation(
                        "transfer source and destination must differ",
                    ));
                }

                let source = self.source_row(catalog, &exemplar, from, request.quantity)?;
                let adjustments = vec![
                    StockAdjustment::Debit {
                        row: source,
                        amount: request.quantity,
                    },
                    self.credit_or_create(catalog, &exemplar, to, request.quantity),
                ];
                Ok(MovementPlan {
                    adjustments,
                    request,
                })
            }
        }
    }

    /// Resolve the source row for SHIP/TRANSFER and check sufficiency.
    fn source_row(
        &self,
        catalog: &CatalogStore,
        exemplar: &Product,
        from: LocationId,
        quantity: u64,
    ) -> InventoryResult<ProductId> {
        match catalog.stock_at(exemplar, from) {
            Some(row) if row.quantity >= quantity => Ok(row.id),
            Some(row) => Err(InventoryError::insufficient_stock(quantity, row.quantity)),
            None => Err(InventoryError::insufficient_stock(quantity, 0)),
        }
    }

    /// Find-or-create credit at the destination.
    ///
    /// This is a behavioral contract, not an incidental detail: stock of an
    /// existing product arriving at a location with no row for it creates a
    /// new row cloned from the exemplar's name/sku with the moved quantity.
    fn credit_or_create(
        &self,
        catalog: &CatalogStore,
        exemplar: &Product,
        to: LocationId,
        quantity: u64,
    ) -> StockAdjustment {
        match catalog.stock_at(exemplar, to) {
            Some(row) => StockAdjustment::Credit {
                row: row.id,
                amount: quantity,
            },
            None => StockAdjustment::CreateRow(Product {
                id: ProductId::new(),
                name: exemplar.name.clone(),
                sku: exemplar.sku.clone(),
                quantity,
                location_id: to,
            }),
        }
    }

    fn apply(
        &self,
        catalog: &mut CatalogStore,
        ledger: &mut MovementLedger,
        plan: MovementPlan,
    ) -> InventoryResult<InventoryMovement> {
        for adjustment in plan.adjustments {
            match adjustment {
                StockAdjustment::Debit { row, amount } => catalog.debit(row, amount)?,
                StockAdjustment::Credit { row, amount } => catalog.credit(row, amount)?,
                StockAdjustment::CreateRow(product) => catalog.insert_row(product),
            }
        }
        Ok(ledger.append(plan.request))
    }
}
