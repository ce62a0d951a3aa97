use std::time::Duration;

use crate::server::error::{config::ConfigError, AppError};

const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 8080;
const DEFAULT_LOG_LEVEL: &str = "info";
const DEFAULT_SHUTDOWN_GRACE_PERIOD_SECS: u64 = 5;

const DEFAULT_DB_MAX_CONNECTIONS: u32 = 10;
const DEFAULT_DB_MIN_CONNECTIONS: u32 = 1;
const DEFAULT_DB_CONNECT_TIMEOUT_SECS: u64 = 8;
const DEFAULT_DB_IDLE_TIMEOUT_SECS: u64 = 300;
const DEFAULT_DB_MAX_LIFETIME_SECS: u64 = 1800;
const DEFAULT_DB_CONNECT_RETRIES: u32 = 5;
const DEFAULT_DB_CONNECT_RETRY_DELAY_SECS: u64 = 2;
const DEFAULT_DB_TEST_BEFORE_ACQUIRE: bool = true;

/// Connection pool limits and the startup retry policy.
#[derive(Debug, Clone, PartialEq)]
pub struct PoolConfig {
    pub max_connections: u32,
    pub min_connections: u32,
    pub connect_timeout: Duration,
    pub idle_timeout: Duration,
    pub max_lifetime: Duration,
    /// Additional attempts made after the first failed connect.
    pub connect_retries: u32,
    pub connect_retry_delay: Duration,
    /// Ping each connection when it is checked out of the pool, discarding dead ones.
    pub test_before_acquire: bool,
    /// Postgres `search_path` applied to every pooled connection. Ignored by SQLite.
    pub schema: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub host: String,
    pub port: u16,

    pub database_url: String,
    pub pool: PoolConfig,

    /// `tracing_subscriber::EnvFilter` directive, e.g. `info` or `quotebook=debug,sea_orm=warn`.
    pub log_level: String,
    pub shutdown_grace_period: Duration,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Builds the configuration from an arbitrary variable source.
    ///
    /// `from_env` delegates here with `std::env::var`; tests pass a map instead.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, AppError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let vars = EnvReader { lookup };

        Ok(Self {
            host: vars.string_or("SERVER_HOST", DEFAULT_HOST),
            port: vars.parse_or("SERVER_PORT", DEFAULT_PORT)?,
            database_url: vars.required("DATABASE_URL")?,
            pool: PoolConfig {
                max_connections: vars.parse_or("DB_MAX_CONNECTIONS", DEFAULT_DB_MAX_CONNECTIONS)?,
                min_connections: vars.parse_or("DB_MIN_CONNECTIONS", DEFAULT_DB_MIN_CONNECTIONS)?,
                connect_timeout: vars
                    .seconds_or("DB_CONNECT_TIMEOUT_SECS", DEFAULT_DB_CONNECT_TIMEOUT_SECS)?,
                idle_timeout: vars.seconds_or("DB_IDLE_TIMEOUT_SECS", DEFAULT_DB_IDLE_TIMEOUT_SECS)?,
                max_lifetime: vars.seconds_or("DB_MAX_LIFETIME_SECS", DEFAULT_DB_MAX_LIFETIME_SECS)?,
                connect_retries: vars.parse_or("DB_CONNECT_RETRIES", DEFAULT_DB_CONNECT_RETRIES)?,
                connect_retry_delay: vars.seconds_or(
                    "DB_CONNECT_RETRY_DELAY_SECS",
                    DEFAULT_DB_CONNECT_RETRY_DELAY_SECS,
                )?,
                test_before_acquire: vars
                    .parse_or("DB_TEST_BEFORE_ACQUIRE", DEFAULT_DB_TEST_BEFORE_ACQUIRE)?,
                schema: vars.schema("DB_SCHEMA")?,
            },
            log_level: vars.string_or("LOG_LEVEL", DEFAULT_LOG_LEVEL),
            shutdown_grace_period: vars.seconds_or(
                "SHUTDOWN_GRACE_PERIOD_SECS",
                DEFAULT_SHUTDOWN_GRACE_PERIOD_SECS,
            )?,
        })
    }

    /// Address the HTTP listener binds to, in `host:port` form.
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

struct EnvReader<F> {
    lookup: F,
}

impl<F> EnvReader<F>
where
    F: Fn(&str) -> Option<String>,
{
    fn get(&self, name: &str) -> Option<String> {
        (self.lookup)(name).filter(|value| !value.trim().is_empty())
    }

    fn required(&self, name: &str) -> Result<String, ConfigError> {
        self.get(name)
            .ok_or_else(|| ConfigError::MissingEnvVar(name.to_string()))
    }

    fn string_or(&self, name: &str, default: &str) -> String {
        self.get(name).unwrap_or_else(|| default.to_string())
    }

    fn parse_or<T>(&self, name: &str, default: T) -> Result<T, ConfigError>
    where
        T: std::str::FromStr,
        T::Err: std::fmt::Display,
    {
        match self.get(name) {
            None => Ok(default),
            Some(value) => value
                .trim()
                .parse::<T>()
                .map_err(|e| ConfigError::InvalidEnvVar {
                    name: name.to_string(),
                    reason: e.to_string(),
                    value,
                }),
        }
    }

    fn seconds_or(&self, name: &str, default: u64) -> Result<Duration, ConfigError> {
        self.parse_or(name, default).map(Duration::from_secs)
    }

    /// Reads an optional schema name; only ASCII alphanumerics and `_` are accepted
    /// since the value ends up in a `SET search_path` statement.
    fn schema(&self, name: &str) -> Result<Option<String>, ConfigError> {
        let Some(value) = self.get(name) else {
            return Ok(None);
        };

        let trimmed = value.trim();
        if !trimmed.chars().all(|c| c.is_ascii_alphanumeric() || c == '_') {
            return Err(ConfigError::InvalidEnvVar {
                name: name.to_string(),
                reason: "only alphanumeric characters and '_' are allowed".to_string(),
                value,
            });
        }

        Ok(Some(trimmed.to_string()))
    }
}
