//! `stocktrace-observability` — process-wide logging setup.

pub mod tracing;

pub use tracing::{init, init_with_default};
