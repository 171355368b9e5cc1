//! In-memory user directory and sign-in checks.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::user::{AccountStatus, User};

/// Sign-in failure. Messages are surfaced to the caller verbatim.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AuthError {
    #[error("Invalid credentials. Please try again.")]
    InvalidCredentials,

    #[error("Account locked. Please contact support.")]
    AccountLocked,
}

/// An authenticated session.
///
/// `remember` is recorded for the presentation layer; where it persists the
/// session is out of scope here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    pub user: User,
    pub remember: bool,
    pub signed_in_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
struct Credential {
    user: User,
    password: String,
}

/// User directory with plain credential checks.
#[derive(Debug, Clone, Default)]
pub struct UserDirectory {
    credentials: Vec<Credential>,
}

impl UserDirectory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_user(mut self, user: User, password: impl Into<String>) -> Self {
        self.credentials.push(Credential {
            user,
            password: password.into(),
        });
        self
    }

    /// Check credentials and open a session.
    ///
    /// A locked account fails before the password is examined, so callers
    /// cannot probe passwords of locked users.
    pub fn sign_in(
        &self,
        email: &str,
        password: &str,
        remember: bool,
    ) -> Result<Session, AuthError> {
        let email = email.trim().to_lowercase();
        let credential = self
            .credentials
            .iter()
            .find(|c| c.user.email == email)
            .ok_or(AuthError::InvalidCredentials)?;

        if credential.user.status == AccountStatus::Locked {
            return Err(AuthError::AccountLocked);
        }
        if credential.password != password {
            return Err(AuthError::InvalidCredentials);
        }

        Ok(Session {
            user: credential.user.clone(),
            remember,
            signed_in_at: Utc::now(),
        })
    }
}
