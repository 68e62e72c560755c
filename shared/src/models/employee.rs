//! Employee Model
//!
//! Two read projections exist and they are intentionally not unified:
//! [`EmployeeDetail`] (single lookup) carries `dept_id`,
//! [`EmployeeWithDepartment`] (full listing) does not.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::serde_helpers::lenient_i32;

/// Employee row joined with its department name (lookup by empid or name)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct EmployeeDetail {
    pub empid: i32,
    pub name: String,
    pub dept_id: i32,
    pub salary: Decimal,
    pub hire_date: NaiveDate,
    pub department_name: String,
}

/// Employee listing row (no `dept_id`)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct EmployeeWithDepartment {
    pub empid: i32,
    pub name: String,
    pub salary: Decimal,
    pub hire_date: NaiveDate,
    pub department_name: String,
}

/// Create employee payload
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmployeeCreate {
    #[serde(deserialize_with = "lenient_i32")]
    pub empid: i32,
    pub name: String,
    #[serde(deserialize_with = "lenient_i32")]
    pub dept_id: i32,
    pub salary: Decimal,
    pub hire_date: NaiveDate,
}

/// Update employee payload (full overwrite of the mutable columns)
///
/// An `empid` in the body is ignored; the path segment identifies the row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmployeeUpdate {
    pub name: String,
    #[serde(deserialize_with = "lenient_i32")]
    pub dept_id: i32,
    pub salary: Decimal,
    pub hire_date: NaiveDate,
}

/// Query string of `GET /get_employee`
///
/// Values stay raw strings so an empty `empid=` can fall through to `name`.
#[derive(Debug, Clone, Default)]
pub struct EmployeeLookup {
    pub empid: Option<String>,
    pub name: Option<String>,
}

/// Resolved lookup strategy
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LookupBy {
    Empid(i32),
    NameContains(String),
}

/// Why a lookup could not be resolved
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LookupError {
    /// Neither `empid` nor `name` was supplied
    Missing,
    /// `empid` was supplied but is not an integer
    InvalidEmpid(String),
}

impl EmployeeLookup {
    /// Build from decoded query pairs. A repeated key keeps its first value.
    pub fn from_pairs<I>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (String, String)>,
    {
        let mut lookup = Self::default();
        for (key, value) in pairs {
            let slot = match key.as_str() {
                "empid" => &mut lookup.empid,
                "name" => &mut lookup.name,
                _ => continue,
            };
            if slot.is_none() {
                *slot = Some(value);
            }
        }
        lookup
    }

    /// `empid` wins when both are present; blank values count as absent.
    pub fn resolve(&self) -> Result<LookupBy, LookupError> {
        let present = |v: &Option<String>| v.as_deref().filter(|s| !s.is_empty()).map(str::to_owned);

        if let Some(raw) = present(&self.empid) {
            return raw
                .trim()
                .parse::<i32>()
                .map(LookupBy::Empid)
                .map_err(|_| LookupError::InvalidEmpid(raw));
        }
        match present(&self.name) {
            Some(name) => Ok(LookupBy::NameContains(name)),
            None => Err(LookupError::Missing),
        }
    }
}
