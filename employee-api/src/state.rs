//! Application state

use sqlx::postgres::PgPoolOptions;
use std::sync::Arc;

use crate::config::Config;
use crate::db::{EmployeeStore, PgEmployeeStore};

type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    /// Employee persistence (PostgreSQL pool in production)
    pub store: Arc<dyn EmployeeStore>,
}

impl AppState {
    /// Connect to PostgreSQL and build the state.
    ///
    /// Fails when the database is unreachable at startup.
    pub async fn new(config: &Config) -> Result<Self, BoxError> {
        let pool = PgPoolOptions::new()
            .max_connections(config.db_max_connections)
            .connect_with(config.connect_options())
            .await?;

        tracing::info!("Connected to PostgreSQL");

        Ok(Self::from_store(Arc::new(PgEmployeeStore::new(pool))))
    }

    pub fn from_store(store: Arc<dyn EmployeeStore>) -> Self {
        Self { store }
    }
}
