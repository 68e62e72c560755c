//! Employee routes
//!
//! Each handler performs exactly one store call. Mutations report success
//! even when no row matched; lookups that match nothing return `[]`.

use axum::{
    Json,
    extract::{
        Path, Query, State,
        rejection::{JsonRejection, PathRejection, QueryRejection},
    },
};
use shared::error::AppError;
use shared::models::{
    EmployeeCreate, EmployeeDetail, EmployeeLookup, EmployeeUpdate, EmployeeWithDepartment,
    LookupBy, LookupError,
};
use shared::response::MessageResponse;

use crate::state::AppState;

type ApiResult<T> = Result<Json<T>, AppError>;

/// POST /add_employee
pub async fn add_employee(
    State(state): State<AppState>,
    payload: Result<Json<EmployeeCreate>, JsonRejection>,
) -> ApiResult<MessageResponse> {
    let Json(data) = payload?;

    state.store.insert(&data).await?;

    tracing::info!(empid = data.empid, dept_id = data.dept_id, "Employee added");
    Ok(Json(MessageResponse::new("Employee added successfully")))
}

/// PUT /update_employee/{empid}
pub async fn update_employee(
    State(state): State<AppState>,
    path: Result<Path<i32>, PathRejection>,
    payload: Result<Json<EmployeeUpdate>, JsonRejection>,
) -> ApiResult<MessageResponse> {
    let Path(empid) = path?;
    let Json(data) = payload?;

    let affected = state.store.update(empid, &data).await?;

    tracing::info!(empid, affected, "Employee updated");
    Ok(Json(MessageResponse::new("Employee updated successfully")))
}

/// DELETE /delete_employee/{empid}
pub async fn delete_employee(
    State(state): State<AppState>,
    path: Result<Path<i32>, PathRejection>,
) -> ApiResult<MessageResponse> {
    let Path(empid) = path?;

    let affected = state.store.delete(empid).await?;

    tracing::info!(empid, affected, "Employee deleted");
    Ok(Json(MessageResponse::new("Employee deleted successfully")))
}

/// GET /get_employee?empid=..|name=..
///
/// A repeated key uses its first value.
pub async fn get_employee(
    State(state): State<AppState>,
    query: Result<Query<Vec<(String, String)>>, QueryRejection>,
) -> ApiResult<Vec<EmployeeDetail>> {
    let Query(pairs) = query?;
    let lookup = EmployeeLookup::from_pairs(pairs);

    let rows = match lookup.resolve() {
        Ok(LookupBy::Empid(empid)) => state.store.find_by_empid(empid).await?,
        Ok(LookupBy::NameContains(name)) => state.store.search_by_name(&name).await?,
        Err(LookupError::Missing) => return Err(AppError::required("Provide empid or name")),
        Err(LookupError::InvalidEmpid(raw)) => {
            return Err(
                AppError::invalid_request("empid must be an integer").with_detail("empid", raw),
            );
        }
    };

    tracing::debug!(count = rows.len(), "Employee lookup");
    Ok(Json(rows))
}

/// GET /get_employees_with_department
pub async fn list_employees_with_department(
    State(state): State<AppState>,
) -> ApiResult<Vec<EmployeeWithDepartment>> {
    let rows = state.store.list_with_departments().await?;
    Ok(Json(rows))
}
