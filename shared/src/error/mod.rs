//! Unified error system for the employee service
//!
//! This module provides:
//! - [`ErrorCode`]: Standardized error codes for all error types
//! - [`AppError`]: Rich error type with codes, messages, and details
//!
//! # Error Code Ranges
//!
//! - 0xxx: Request errors
//! - 8xxx: Employee errors
//! - 9xxx: System errors
//!
//! # Example
//!
//! ```
//! use shared::error::{AppError, ErrorCode};
//!
//! // Create a simple error
//! let err = AppError::new(ErrorCode::NotFound);
//!
//! // Create an error with custom message
//! let err = AppError::with_message(ErrorCode::RequiredField, "Provide empid or name");
//!
//! // Create an error with details
//! let err = AppError::invalid_format("Missing required field")
//!     .with_detail("field", "hire_date");
//! ```

mod codes;
mod http;
mod rejection;
mod types;

pub use codes::{ErrorCode, InvalidErrorCode};
pub use types::{AppError, ErrorBody};
