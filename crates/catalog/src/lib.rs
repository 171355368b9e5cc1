//! Catalog domain module: product and location records.
//!
//! This crate owns the Product/Location lifecycles. Stock *changes* driven by
//! movements live in `stocktrace-engine`; this crate only exposes the
//! invariant-preserving primitives the engine needs.

pub mod location;
pub mod product;
pub mod store;

pub use location::{Location, LocationPatch, NewLocation};
pub use product::{NewProduct, Product, ProductPatch};
pub use store::CatalogStore;
