//! Employee database operations (PostgreSQL)
//!
//! Employees live in `testing_project`, department names in `department`.
//! Both tables belong to the external schema; nothing here creates them.

use async_trait::async_trait;
use shared::models::{EmployeeCreate, EmployeeDetail, EmployeeUpdate, EmployeeWithDepartment};
use sqlx::PgPool;

use super::EmployeeStore;
use crate::error::ServiceResult;

/// [`EmployeeStore`] backed by a PostgreSQL connection pool
#[derive(Clone)]
pub struct PgEmployeeStore {
    pool: PgPool,
}

impl PgEmployeeStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

const FIND_BY_EMPID_SQL: &str = r#"
    SELECT e.empid, e.name, e.dept_id, e.salary, e.hire_date, d.department_name
    FROM testing_project e
    JOIN department d ON e.dept_id = d.dept_id
    WHERE e.empid = $1
"#;

const SEARCH_BY_NAME_SQL: &str = r#"
    SELECT e.empid, e.name, e.dept_id, e.salary, e.hire_date, d.department_name
    FROM testing_project e
    JOIN department d ON e.dept_id = d.dept_id
    WHERE e.name LIKE $1
"#;

/// Listing order is by empid ascending
const LIST_WITH_DEPARTMENTS_SQL: &str = r#"
    SELECT e.empid, e.name, e.salary, e.hire_date, d.department_name
    FROM testing_project e
    JOIN department d ON e.dept_id = d.dept_id
    ORDER BY e.empid
"#;

/// `%fragment%` pattern for `LIKE`; wildcards in the fragment are kept.
pub(crate) fn contains_pattern(fragment: &str) -> String {
    format!("%{fragment}%")
}

#[async_trait]
impl EmployeeStore for PgEmployeeStore {
    async fn insert(&self, data: &EmployeeCreate) -> ServiceResult<()> {
        sqlx::query(
            r#"
            INSERT INTO testing_project (empid, name, dept_id, salary, hire_date)
            VALUES ($1, $2, $3, $4, $5)
            "#,
        )
        .bind(data.empid)
        .bind(&data.name)
        .bind(data.dept_id)
        .bind(data.salary)
        .bind(data.hire_date)
        .execute(&self.pool)
        .await?;
        Ok(())
    }

    async fn update(&self, empid: i32, data: &EmployeeUpdate) -> ServiceResult<u64> {
        let result = sqlx::query(
            r#"
            UPDATE testing_project
            SET name = $1, dept_id = $2, salary = $3, hire_date = $4
            WHERE empid = $5
            "#,
        )
        .bind(&data.name)
        .bind(data.dept_id)
        .bind(data.salary)
        .bind(data.hire_date)
        .bind(empid)
        .execute(&self.pool)
        .await?;
        Ok(result.rows_affected())
    }

    async fn delete(&self, empid: i32) -> ServiceResult<u64> {
        let result = sqlx::query("DELETE FROM testing_project WHERE empid = $1")
            .bind(empid)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected())
    }

    async fn find_by_empid(&self, empid: i32) -> ServiceResult<Vec<EmployeeDetail>> {
        let rows: Vec<EmployeeDetail> = sqlx::query_as(FIND_BY_EMPID_SQL)
            .bind(empid)
            .fetch_all(&self.pool)
            .await?;
        Ok(rows)
    }

    async fn search_by_name(&self, fragment: &str) -> ServiceResult<Vec<EmployeeDetail>> {
        let rows: Vec<EmployeeDetail> = sqlx::query_as(SEARCH_BY_NAME_SQL)
            .bind(contains_pattern(fragment))
            .fetch_all(&self.pool)
            .await?;
        Ok(rows)
    }

    async fn list_with_departments(&self) -> ServiceResult<Vec<EmployeeWithDepartment>> {
        let rows: Vec<EmployeeWithDepartment> = sqlx::query_as(LIST_WITH_DEPARTMENTS_SQL)
            .fetch_all(&self.pool)
            .await?;
        Ok(rows)
    }

    async fn ping(&self) -> ServiceResult<()> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }
}


/// Runs against a live PostgreSQL named by `DATABASE_URL`:
/// `cargo test -p employee-api -- --ignored`.
///
/// Tables are created as TEMP on a single-connection pool so they shadow
/// any real `testing_project`/`department` and vanish with the session.
#[cfg(test)]
mod pg_tests {
    use super::*;
    use crate::error::ServiceError;
    use chrono::NaiveDate;
    use rust_decimal::Decimal;
    use sqlx::postgres::PgPoolOptions;

    async fn temp_store() -> PgEmployeeStore {
        let url = std::env::var("DATABASE_URL").expect("DATABASE_URL must be set");
        let pool = PgPoolOptions::new()
            .max_connections(1)
            .connect(&url)
            .await
            .unwrap();

        for stmt in [
            "CREATE TEMP TABLE department (dept_id INT PRIMARY KEY, department_name TEXT NOT NULL)",
            "CREATE TEMP TABLE testing_project (
                empid INT PRIMARY KEY,
                name TEXT NOT NULL,
                dept_id INT NOT NULL REFERENCES department (dept_id),
                salary NUMERIC(12, 2) NOT NULL,
                hire_date DATE NOT NULL
            )",
            "INSERT INTO department VALUES (10, 'Engineering'), (20, 'Sales')",
        ] {
            sqlx::query(stmt).execute(&pool).await.unwrap();
        }
        PgEmployeeStore::new(pool)
    }

    fn create(empid: i32, name: &str, dept_id: i32) -> EmployeeCreate {
        EmployeeCreate {
            empid,
            name: name.into(),
            dept_id,
            salary: Decimal::new(100050, 2),
            hire_date: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
        }
    }

    #[tokio::test]
    #[ignore = "requires DATABASE_URL"]
    async fn crud_round_trip_against_postgres() {
        let store = temp_store().await;
        store.ping().await.unwrap();

        store.insert(&create(3, "Mark", 10)).await.unwrap();
        store.insert(&create(1, "John", 20)).await.unwrap();
        store.insert(&create(2, "Joanna", 10)).await.unwrap();

        let listed = store.list_with_departments().await.unwrap();
        let ids: Vec<i32> = listed.iter().map(|r| r.empid).collect();
        assert_eq!(ids, vec![1, 2, 3]);
        assert_eq!(listed[0].department_name, "Sales");
        assert_eq!(listed[0].salary, Decimal::new(100050, 2));

        let found = store.search_by_name("Jo").await.unwrap();
        assert_eq!(found.len(), 2);

        let update = EmployeeUpdate {
            name: "Marcus".into(),
            dept_id: 20,
            salary: Decimal::from(2000),
            hire_date: NaiveDate::from_ymd_opt(2023, 6, 30).unwrap(),
        };
        assert_eq!(store.update(3, &update).await.unwrap(), 1);
        assert_eq!(store.update(99, &update).await.unwrap(), 0);

        let detail = store.find_by_empid(3).await.unwrap();
        assert_eq!(detail.len(), 1);
        assert_eq!(detail[0].name, "Marcus");
        assert_eq!(detail[0].dept_id, 20);

        assert_eq!(store.delete(3).await.unwrap(), 1);
        assert_eq!(store.delete(3).await.unwrap(), 0);
        assert!(store.find_by_empid(3).await.unwrap().is_empty());
    }

    #[tokio::test]
    #[ignore = "requires DATABASE_URL"]
    async fn constraint_violations_are_classified() {
        let store = temp_store().await;
        store.insert(&create(1, "John", 10)).await.unwrap();

        let dup = store.insert(&create(1, "Again", 10)).await.unwrap_err();
        assert!(matches!(dup, ServiceError::Duplicate(_)));

        let fk = store.insert(&create(2, "Lost", 99)).await.unwrap_err();
        assert!(matches!(fk, ServiceError::ForeignKey(_)));
    }
}
