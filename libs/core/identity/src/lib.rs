//! Identity and credential primitives shared by the domain crates.
//!
//! - [`new_id`] / [`parse_id`]: time-ordered UUIDv7 identifiers
//! - [`hash_password`] / [`verify_password`]: Argon2id password hashing
//!
//! Everything here is pure: no I/O, no shared state.

mod id;
mod password;

pub use id::{new_id, parse_id};
pub use password::{hash_password, verify_password};

use thiserror::Error;

#[derive(Debug, Error)]
pub enum IdentityError {
    #[error("invalid id: {0}")]
    InvalidId(String),

    #[error("password hashing failed: {0}")]
    PasswordHash(String),
}

pub type IdentityResult<T> = Result<T, IdentityError>;
