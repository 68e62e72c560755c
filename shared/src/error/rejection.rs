//! Extractor rejections mapped onto [`AppError`]
//!
//! Handlers take `Result<Json<T>, JsonRejection>` (and friends) and use `?`
//! so malformed input produces the same JSON error body as everything else.

use super::codes::ErrorCode;
use super::types::AppError;
use axum::extract::rejection::{JsonRejection, PathRejection, QueryRejection};

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        match rejection {
            JsonRejection::MissingJsonContentType(_) => {
                AppError::new(ErrorCode::UnsupportedMediaType)
            }
            other => AppError::invalid_format("Invalid JSON body")
                .with_detail("reason", other.body_text()),
        }
    }
}

impl From<PathRejection> for AppError {
    /// A segment that does not parse behaves like a route that does not match.
    fn from(rejection: PathRejection) -> Self {
        AppError::with_message(ErrorCode::NotFound, "No route matches this path")
            .with_detail("reason", rejection.body_text())
    }
}

impl From<QueryRejection> for AppError {
    fn from(rejection: QueryRejection) -> Self {
        AppError::invalid_request("Invalid query string").with_detail("reason", rejection.body_text())
    }
}
