use serde::{Deserialize, Serialize};

use stocktrace_core::UserId;

/// User account status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum AccountStatus {
    /// User can sign in.
    #[default]
    Active,
    /// User is locked out and cannot sign in regardless of credentials.
    Locked,
}

/// A user known to the directory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: UserId,
    pub email: String,
    pub status: AccountStatus,
}

impl User {
    pub fn new(email: impl Into<String>) -> Self {
        Self {
            id: UserId::new(),
            email: email.into().trim().to_lowercase(),
            status: AccountStatus::Active,
        }
    }

    pub fn locked(email: impl Into<String>) -> Self {
        Self {
            status: AccountStatus::Locked,
            ..Self::new(email)
        }
    }
}
