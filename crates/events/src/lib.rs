//! `stocktrace-events` — change notification for cached views.
//!
//! The stores publish a [`StoreChange`] after every successful mutation so
//! that cached read models (dashboards, tables) know to refresh. The bus is
//! distribution only; the stores remain the source of truth.

pub mod bus;
pub mod change;

pub use bus::{EventBus, InMemoryBus, InMemoryBusError, Subscription};
pub use change::{ChangeKind, StoreChange};
