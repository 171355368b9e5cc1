//! Store change notifications.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Which cached collection a mutation touched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChangeKind {
    Products,
    Locations,
    Movements,
}

/// Notification that a store collection changed.
///
/// Carries no payload on purpose: subscribers re-read through the facade
/// rather than patching local copies, so a lost or duplicated notification
/// can never corrupt a view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoreChange {
    pub kind: ChangeKind,
    pub occurred_at: DateTime<Utc>,
}

impl StoreChange {
    pub fn now(kind: ChangeKind) -> Self {
        Self {
            kind,
            occurred_at: Utc::now(),
        }
    }

    pub fn products() -> Self {
        Self::now(ChangeKind::Products)
    }

    pub fn locations() -> Self {
        Self::now(ChangeKind::Locations)
    }

    pub fn movements() -> Self {
        Self::now(ChangeKind::Movements)
    }
}
