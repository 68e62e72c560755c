//! Shared types for the employee service
//!
//! Error types, response structures and the employee/department models
//! used by the HTTP layer and the data-access layer.

pub mod error;
pub mod models;
pub mod response;
pub mod serde_helpers;
