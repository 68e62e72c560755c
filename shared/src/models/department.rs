//! Department Model

use serde::{Deserialize, Serialize};

/// Department reference row (read-only, owned by the database schema)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct Department {
    pub dept_id: i32,
    pub department_name: String,
}

impl Department {
    pub fn new(dept_id: i32, department_name: impl Into<String>) -> Self {
        Self {
            dept_id,
            department_name: department_name.into(),
        }
    }
}
