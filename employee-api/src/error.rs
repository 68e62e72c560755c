//! Service-layer error type
//!
//! `ServiceError` bridges the gap between DB-layer errors (`sqlx::Error`)
//! and the API-layer error (`AppError`). It enables `?` propagation from the
//! data-access layer straight out of a handler. Opaque database failures are
//! logged here, once, before the cause is dropped from the response.

use shared::error::{AppError, ErrorCode};

/// Data-access failure, classified by what the caller can do about it
#[derive(Debug, thiserror::Error)]
pub enum ServiceError {
    /// Primary-key violation (duplicate empid)
    #[error("duplicate key: {0}")]
    Duplicate(String),
    /// Foreign-key violation (unknown dept_id)
    #[error("foreign key violation: {0}")]
    ForeignKey(String),
    /// Any other database or infrastructure error
    #[error(transparent)]
    Db(sqlx::Error),
}

impl From<sqlx::Error> for ServiceError {
    fn from(e: sqlx::Error) -> Self {
        match &e {
            sqlx::Error::Database(db) if db.is_unique_violation() => {
                ServiceError::Duplicate(db.message().to_string())
            }
            sqlx::Error::Database(db) if db.is_foreign_key_violation() => {
                ServiceError::ForeignKey(db.message().to_string())
            }
            _ => ServiceError::Db(e),
        }
    }
}

impl From<ServiceError> for AppError {
    fn from(e: ServiceError) -> Self {
        match e {
            ServiceError::Duplicate(detail) => {
                AppError::conflict(ErrorCode::EmployeeIdExists, "Employee id already exists")
                    .with_detail("reason", detail)
            }
            ServiceError::ForeignKey(detail) => {
                AppError::with_message(ErrorCode::DepartmentNotFound, "Department does not exist")
                    .with_detail("reason", detail)
            }
            ServiceError::Db(db_err) => {
                tracing::error!(error = %db_err, "Service database error");
                AppError::new(ErrorCode::DatabaseError)
            }
        }
    }
}

/// Convenience type alias for service-layer results
pub type ServiceResult<T> = Result<T, ServiceError>;

#[cfg(test)]
mod tests {
    use super::*;
    use http::StatusCode;

    #[test]
    fn duplicate_maps_to_conflict() {
        let err: AppError = ServiceError::Duplicate("testing_project_pkey".into()).into();
        assert_eq!(err.code, ErrorCode::EmployeeIdExists);
        assert_eq!(err.http_status(), StatusCode::CONFLICT);
    }

    #[test]
    fn foreign_key_maps_to_bad_request() {
        let err: AppError = ServiceError::ForeignKey("fk_dept".into()).into();
        assert_eq!(err.code, ErrorCode::DepartmentNotFound);
        assert_eq!(err.http_status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn other_database_errors_are_opaque() {
        let err: AppError = ServiceError::from(sqlx::Error::PoolTimedOut).into();
        assert_eq!(err.code, ErrorCode::DatabaseError);
        assert_eq!(err.http_status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert!(err.details.is_none());
    }

    #[test]
    fn row_not_found_is_not_classified() {
        assert!(matches!(
            ServiceError::from(sqlx::Error::RowNotFound),
            ServiceError::Db(_)
        ));
    }
}
