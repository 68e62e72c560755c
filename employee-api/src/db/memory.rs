//! In-memory [`EmployeeStore`] for router tests
//!
//! Mirrors the constraints the PostgreSQL schema enforces: `empid` is a
//! primary key and `dept_id` must reference a seeded department.

use async_trait::async_trait;
use shared::models::{
    Department, EmployeeCreate, EmployeeDetail, EmployeeUpdate, EmployeeWithDepartment,
};
use std::collections::BTreeMap;
use std::sync::atomic::{AtomicBool, Ordering};
use tokio::sync::Mutex;

use super::EmployeeStore;
use crate::error::{ServiceError, ServiceResult};

#[derive(Default)]
struct Tables {
    employees: BTreeMap<i32, EmployeeCreate>,
    departments: BTreeMap<i32, String>,
}

#[derive(Default)]
pub struct MemoryEmployeeStore {
    tables: Mutex<Tables>,
    offline: AtomicBool,
}

impl MemoryEmployeeStore {
    pub fn with_departments(departments: impl IntoIterator<Item = Department>) -> Self {
        let departments = departments
            .into_iter()
            .map(|d| (d.dept_id, d.department_name))
            .collect();
        Self {
            tables: Mutex::new(Tables {
                employees: BTreeMap::new(),
                departments,
            }),
            offline: AtomicBool::new(false),
        }
    }

    /// Make every subsequent call fail like a lost connection.
    pub fn go_offline(&self) {
        self.offline.store(true, Ordering::SeqCst);
    }

    fn check_online(&self) -> ServiceResult<()> {
        if self.offline.load(Ordering::SeqCst) {
            return Err(ServiceError::Db(sqlx::Error::PoolClosed));
        }
        Ok(())
    }
}

impl Tables {
    fn check_department(&self, dept_id: i32) -> ServiceResult<()> {
        if self.departments.contains_key(&dept_id) {
            Ok(())
        } else {
            Err(ServiceError::ForeignKey(format!(
                "Key (dept_id)=({dept_id}) is not present in table \"department\"."
            )))
        }
    }

    fn detail(&self, row: &EmployeeCreate) -> Option<EmployeeDetail> {
        let department_name = self.departments.get(&row.dept_id)?;
        Some(EmployeeDetail {
            empid: row.empid,
            name: row.name.clone(),
            dept_id: row.dept_id,
            salary: row.salary,
            hire_date: row.hire_date,
            department_name: department_name.clone(),
        })
    }
}

#[async_trait]
impl EmployeeStore for MemoryEmployeeStore {
    async fn insert(&self, data: &EmployeeCreate) -> ServiceResult<()> {
        self.check_online()?;
        let mut tables = self.tables.lock().await;
        if tables.employees.contains_key(&data.empid) {
            return Err(ServiceError::Duplicate(format!(
                "Key (empid)=({}) already exists.",
                data.empid
            )));
        }
        tables.check_department(data.dept_id)?;
        tables.employees.insert(data.empid, data.clone());
        Ok(())
    }

    async fn update(&self, empid: i32, data: &EmployeeUpdate) -> ServiceResult<u64> {
        self.check_online()?;
        let mut tables = self.tables.lock().await;
        if !tables.employees.contains_key(&empid) {
            return Ok(0);
        }
        tables.check_department(data.dept_id)?;
        if let Some(row) = tables.employees.get_mut(&empid) {
            row.name = data.name.clone();
            row.dept_id = data.dept_id;
            row.salary = data.salary;
            row.hire_date = data.hire_date;
        }
        Ok(1)
    }

    async fn delete(&self, empid: i32) -> ServiceResult<u64> {
        self.check_online()?;
        let mut tables = self.tables.lock().await;
        Ok(tables.employees.remove(&empid).map_or(0, |_| 1))
    }

    async fn find_by_empid(&self, empid: i32) -> ServiceResult<Vec<EmployeeDetail>> {
        self.check_online()?;
        let tables = self.tables.lock().await;
        Ok(tables
            .employees
            .get(&empid)
            .and_then(|row| tables.detail(row))
            .into_iter()
            .collect())
    }

    async fn search_by_name(&self, fragment: &str) -> ServiceResult<Vec<EmployeeDetail>> {
        self.check_online()?;
        let tables = self.tables.lock().await;
        Ok(tables
            .employees
            .values()
            .filter(|row| row.name.contains(fragment))
            .filter_map(|row| tables.detail(row))
            .collect())
    }

    async fn list_with_departments(&self) -> ServiceResult<Vec<EmployeeWithDepartment>> {
        self.check_online()?;
        let tables = self.tables.lock().await;
        Ok(tables
            .employees
            .values()
            .filter_map(|row| tables.detail(row))
            .map(|d| EmployeeWithDepartment {
                empid: d.empid,
                name: d.name,
                salary: d.salary,
                hire_date: d.hire_date,
                department_name: d.department_name,
            })
            .collect())
    }

    async fn ping(&self) -> ServiceResult<()> {
        self.check_online()
    }
}
