//! Sign-in boundary for the inventory facade.
//!
//! Deliberately small: an in-memory user directory with credential checks
//! and account locking. Session *storage* (tokens, persistence, providers)
//! is a presentation concern and lives outside this crate.

pub mod directory;
pub mod user;

pub use directory::{AuthError, Session, UserDirectory};
pub use user::{AccountStatus, User};
