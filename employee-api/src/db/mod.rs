//! Database access layer
//!
//! Every method issues exactly one SQL statement. Statements run in
//! autocommit mode on a pooled connection, so each mutation is committed
//! before the method returns.

pub mod employee;
#[cfg(test)]
pub mod memory;

use async_trait::async_trait;
use shared::models::{EmployeeCreate, EmployeeDetail, EmployeeUpdate, EmployeeWithDepartment};

use crate::error::ServiceResult;

pub use employee::PgEmployeeStore;

/// Employee persistence
#[async_trait]
pub trait EmployeeStore: Send + Sync {
    async fn insert(&self, data: &EmployeeCreate) -> ServiceResult<()>;

    /// Overwrite every mutable column. Returns rows affected.
    async fn update(&self, empid: i32, data: &EmployeeUpdate) -> ServiceResult<u64>;

    /// Returns rows affected.
    async fn delete(&self, empid: i32) -> ServiceResult<u64>;

    async fn find_by_empid(&self, empid: i32) -> ServiceResult<Vec<EmployeeDetail>>;

    /// Case-sensitive substring match on name.
    async fn search_by_name(&self, fragment: &str) -> ServiceResult<Vec<EmployeeDetail>>;

    /// All employees joined with their department, ordered by empid.
    async fn list_with_departments(&self) -> ServiceResult<Vec<EmployeeWithDepartment>>;

    /// Round trip to the database.
    async fn ping(&self) -> ServiceResult<()>;
}
