//! Runtime settings from the process environment (after `.env` is loaded).

use sqlx::postgres::PgConnectOptions;
use std::str::FromStr;
use std::time::Duration;

pub const DEFAULT_DB_HOST: &str = "localhost";
pub const DEFAULT_DB_PORT: u16 = 5432;
pub const DEFAULT_DB_NAME: &str = "simple_api";
pub const DEFAULT_DB_USER: &str = "postgres";
pub const DEFAULT_SERVER_PORT: u16 = 3000;

/// Connection pool bounds. Callers wait up to `acquire_timeout` for a free connection.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PoolSettings {
    pub max_connections: u32,
    pub min_connections: u32,
    pub acquire_timeout: Duration,
    pub idle_timeout: Duration,
}

impl Default for PoolSettings {
    fn default() -> Self {
        Self {
            max_connections: 5,
            min_connections: 0,
            acquire_timeout: Duration::from_millis(30_000),
            idle_timeout: Duration::from_millis(10_000),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Settings {
    /// Full URL; takes precedence over the individual `db_*` fields.
    pub database_url: Option<String>,
    pub db_host: String,
    pub db_port: u16,
    pub db_name: String,
    pub db_user: String,
    pub db_password: String,
    pub pool: PoolSettings,
    pub server_port: u16,
}

impl Default for Settings {
    fn default() -> Self {
        Self::from_lookup(|_| None)
    }
}

impl Settings {
    /// Read settings from environment variables.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build settings from any key lookup. Missing keys take defaults; numeric keys
    /// that fail to parse take defaults with a warning.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        let pool_defaults = PoolSettings::default();
        Self {
            database_url: get("DATABASE_URL"),
            db_host: get("DB_HOST").unwrap_or_else(|| DEFAULT_DB_HOST.into()),
            db_port: parse_or(&get, "DB_PORT", DEFAULT_DB_PORT),
            db_name: get("DB_NAME").unwrap_or_else(|| DEFAULT_DB_NAME.into()),
            db_user: get("DB_USER").unwrap_or_else(|| DEFAULT_DB_USER.into()),
            db_password: lookup("DB_PASSWORD").unwrap_or_default(),
            pool: PoolSettings {
                max_connections: parse_or(&get, "DB_POOL_MAX", pool_defaults.max_connections),
                min_connections: parse_or(&get, "DB_POOL_MIN", pool_defaults.min_connections),
                acquire_timeout: Duration::from_millis(parse_or(
                    &get,
                    "DB_POOL_ACQUIRE_MS",
                    pool_defaults.acquire_timeout.as_millis() as u64,
                )),
                idle_timeout: Duration::from_millis(parse_or(
                    &get,
                    "DB_POOL_IDLE_MS",
                    pool_defaults.idle_timeout.as_millis() as u64,
                )),
            },
            server_port: parse_or(&get, "SERVER_PORT", DEFAULT_SERVER_PORT),
        }
    }

    /// Connection options for the Record Store.
    pub fn connect_options(&self) -> Result<PgConnectOptions, sqlx::Error> {
        if let Some(url) = &self.database_url {
            return PgConnectOptions::from_str(url);
        }
        Ok(PgConnectOptions::new()
            .host(&self.db_host)
            .port(self.db_port)
            .database(&self.db_name)
            .username(&self.db_user)
            .password(&self.db_password))
    }

    /// `host:port` used for the docs server field when the request carries no Host header.
    pub fn fallback_host(&self) -> String {
        format!("localhost:{}", self.server_port)
    }
}

fn parse_or<T, G>(get: &G, key: &str, default: T) -> T
where
    T: FromStr + Copy + std::fmt::Display,
    G: Fn(&str) -> Option<String>,
{
    match get(key) {
        None => default,
        Some(raw) => match raw.trim().parse() {
            Ok(v) => v,
            Err(_) => {
                tracing::warn!(key, value = %raw, default = %default, "invalid setting, using default");
                default
            }
        },
    }
}
