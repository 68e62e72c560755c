//! Data models
//!
//! Shared between the HTTP layer and the data-access layer.
//! DB row types use `#[cfg_attr(feature = "db", derive(sqlx::FromRow))]`.
//! All IDs are `i32` (PostgreSQL INTEGER).

pub mod department;
pub mod employee;

// Re-exports
pub use department::*;
pub use employee::*;
