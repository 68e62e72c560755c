//! Service configuration

use sqlx::postgres::PgConnectOptions;

type BoxError = Box<dyn std::error::Error + Send + Sync>;

const PASSWORD_MASK: &str = "********";

/// Service configuration, read once at startup
///
/// Database settings left unset fall back to the libpq defaults
/// (`PGHOST`, `PGDATABASE`, ...), which is what `PgConnectOptions::new()` reads.
#[derive(Debug, Clone)]
pub struct Config {
    /// Database host (env: DB_HOST)
    pub db_host: Option<String>,
    /// Database name (env: DB_NAME)
    pub db_name: Option<String>,
    /// Database user (env: DB_USER)
    pub db_user: Option<String>,
    /// Database password (env: DB_PASSWORD)
    pub db_password: Option<String>,
    /// Database port (env: DB_PORT)
    pub db_port: Option<u16>,
    /// Pool size (env: DB_MAX_CONNECTIONS)
    pub db_max_connections: u32,
    /// Listen address (env: HTTP_HOST)
    pub http_host: String,
    /// Listen port (env: HTTP_PORT)
    pub http_port: u16,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self, BoxError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration through an arbitrary key lookup
    pub fn from_lookup<F>(lookup: F) -> Result<Self, BoxError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |key: &str| lookup(key).filter(|v| !v.is_empty());

        Ok(Self {
            db_host: var("DB_HOST"),
            db_name: var("DB_NAME"),
            db_user: var("DB_USER"),
            db_password: var("DB_PASSWORD"),
            db_port: parse_opt(var("DB_PORT"), "DB_PORT")?,
            db_max_connections: parse_opt(var("DB_MAX_CONNECTIONS"), "DB_MAX_CONNECTIONS")?
                .unwrap_or(5),
            http_host: var("HTTP_HOST").unwrap_or_else(|| "127.0.0.1".into()),
            http_port: parse_opt(var("HTTP_PORT"), "HTTP_PORT")?.unwrap_or(5000),
        })
    }

    /// PostgreSQL connection options, layered over the libpq defaults
    pub fn connect_options(&self) -> PgConnectOptions {
        let mut options = PgConnectOptions::new();
        if let Some(host) = &self.db_host {
            options = options.host(host);
        }
        if let Some(port) = self.db_port {
            options = options.port(port);
        }
        if let Some(name) = &self.db_name {
            options = options.database(name);
        }
        if let Some(user) = &self.db_user {
            options = options.username(user);
        }
        if let Some(password) = &self.db_password {
            options = options.password(password);
        }
        options
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.http_host, self.http_port)
    }

    /// Password as it may appear in logs
    pub fn masked_password(&self) -> &'static str {
        match self.db_password {
            Some(_) => PASSWORD_MASK,
            None => "<unset>",
        }
    }

    /// Log the database settings the service starts with
    pub fn log_summary(&self) {
        let shown = |v: &Option<String>| v.clone().unwrap_or_else(|| "<unset>".into());
        tracing::info!("Host: {}", shown(&self.db_host));
        tracing::info!("DB: {}", shown(&self.db_name));
        tracing::info!("User: {}", shown(&self.db_user));
        tracing::info!("Password: {}", self.masked_password());
    }
}

fn parse_opt<T: std::str::FromStr>(raw: Option<String>, name: &str) -> Result<Option<T>, BoxError> {
    raw.map(|v| {
        v.trim()
            .parse::<T>()
            .map_err(|_| format!("{name} must be a number, got {v:?}").into())
    })
    .transpose()
}
