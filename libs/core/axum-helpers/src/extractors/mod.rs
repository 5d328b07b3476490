//! Custom extractors for Axum handlers.
//!
//! All reject with [`AppError`](crate::errors::AppError), so a malformed id,
//! body or query string yields a 400 `{message}` like every other error.

pub mod json_body;
pub mod query_params;
pub mod uuid_path;

pub use json_body::JsonBody;
pub use query_params::QueryParams;
pub use uuid_path::UuidPath;
