//! Application configuration module
//!
//! Configuration is read from the process environment (after `.env` has been
//! loaded by the binary). `DATABASE_URL` and `JWT_SECRET` are mandatory; a
//! missing value is a startup error, never a silent default.

use std::fmt;
use std::time::Duration;
use thiserror::Error;

pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_CORS_ORIGIN: &str = "http://localhost:3000";
pub const DEFAULT_BCRYPT_COST: u32 = 12;
const BCRYPT_MIN_COST: u32 = 4;
const BCRYPT_MAX_COST: u32 = 31;

/// Connection pool and startup-connection settings
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DatabaseSettings {
    pub max_connections: u32,
    /// Bound on establishing a connection or acquiring one from the pool
    pub acquire_timeout: Duration,
    /// Bound on a single query
    pub query_timeout: Duration,
    /// Attempts made at startup before giving up
    pub connect_attempts: u32,
    pub connect_retry_delay: Duration,
}

impl Default for DatabaseSettings {
    fn default() -> Self {
        Self {
            max_connections: 10,
            acquire_timeout: Duration::from_secs(5),
            query_timeout: Duration::from_secs(10),
            connect_attempts: 5,
            connect_retry_delay: Duration::from_secs(2),
        }
    }
}

/// Application configuration
#[derive(Clone)]
pub struct AppConfig {
    pub database_url: String,
    pub jwt_secret: String,
    pub port: u16,
    /// Allowed cross-origin request sources; `*` allows any origin
    pub cors_origins: Vec<String>,
    pub bcrypt_cost: u32,
    pub database: DatabaseSettings,
}

impl fmt::Debug for AppConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AppConfig")
            .field("database_url", &"[hidden]")
            .field("jwt_secret", &"[hidden]")
            .field("port", &self.port)
            .field("cors_origins", &self.cors_origins)
            .field("bcrypt_cost", &self.bcrypt_cost)
            .field("database", &self.database)
            .finish()
    }
}

impl AppConfig {
    /// Create a new AppConfigBuilder
    pub fn builder() -> AppConfigBuilder {
        AppConfigBuilder::default()
    }

    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Load configuration through an arbitrary variable lookup
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |name: &str| lookup(name).filter(|v| !v.trim().is_empty());
        let defaults = DatabaseSettings::default();

        let mut builder = AppConfig::builder()
            .database_url(get("DATABASE_URL").ok_or(ConfigError::MissingValue("DATABASE_URL"))?)
            .jwt_secret(get("JWT_SECRET").ok_or(ConfigError::MissingValue("JWT_SECRET"))?);

        if let Some(port) = get("PORT").or_else(|| get("SERVER_PORT")) {
            builder = builder.port(parse("PORT", &port)?);
        }
        if let Some(origins) = get("CORS_ORIGINS") {
            builder = builder.cors_origins(
                origins
                    .split(',')
                    .map(str::trim)
                    .filter(|o| !o.is_empty())
                    .map(str::to_string)
                    .collect(),
            );
        }
        if let Some(cost) = get("BCRYPT_COST") {
            builder = builder.bcrypt_cost(parse("BCRYPT_COST", &cost)?);
        }

        let seconds = |name: &'static str, default: Duration| -> Result<Duration, ConfigError> {
            match get(name) {
                Some(raw) => parse::<u64>(name, &raw).map(Duration::from_secs),
                None => Ok(default),
            }
        };

        let database = DatabaseSettings {
            max_connections: match get("DB_MAX_CONNECTIONS") {
                Some(raw) => parse("DB_MAX_CONNECTIONS", &raw)?,
                None => defaults.max_connections,
            },
            acquire_timeout: seconds("DB_ACQUIRE_TIMEOUT_SECS", defaults.acquire_timeout)?,
            query_timeout: seconds("DB_QUERY_TIMEOUT_SECS", defaults.query_timeout)?,
            connect_attempts: match get("DB_CONNECT_ATTEMPTS") {
                Some(raw) => parse("DB_CONNECT_ATTEMPTS", &raw)?,
                None => defaults.connect_attempts,
            },
            connect_retry_delay: seconds(
                "DB_CONNECT_RETRY_DELAY_SECS",
                defaults.connect_retry_delay,
            )?,
        };

        builder.database(database).build()
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.database_url.trim().is_empty() {
            return Err(ConfigError::MissingValue("DATABASE_URL"));
        }
        if self.jwt_secret.trim().is_empty() {
            return Err(ConfigError::MissingValue("JWT_SECRET"));
        }
        if !(BCRYPT_MIN_COST..=BCRYPT_MAX_COST).contains(&self.bcrypt_cost) {
            return Err(ConfigError::InvalidValue {
                name: "BCRYPT_COST",
                reason: format!(
                    "must be between {} and {}",
                    BCRYPT_MIN_COST,
                    BCRYPT_MAX_COST
                ),
            });
        }
        if self.database.max_connections == 0 {
            return Err(ConfigError::InvalidValue {
                name: "DB_MAX_CONNECTIONS",
                reason: "must be at least 1".to_string(),
            });
        }
        if self.database.connect_attempts == 0 {
            return Err(ConfigError::InvalidValue {
                name: "DB_CONNECT_ATTEMPTS",
                reason: "must be at least 1".to_string(),
            });
        }
        Ok(())
    }
}

fn parse<T: std::str::FromStr>(name: &'static str, raw: &str) -> Result<T, ConfigError>
where
    T::Err: fmt::Display,
{
    raw.trim().parse::<T>().map_err(|e| ConfigError::InvalidValue {
        name,
        reason: e.to_string(),
    })
}

/// Builder for AppConfig
#[derive(Default)]
pub struct AppConfigBuilder {
    database_url: Option<String>,
    jwt_secret: Option<String>,
    port: Option<u16>,
    cors_origins: Option<Vec<String>>,
    bcrypt_cost: Option<u32>,
    database: Option<DatabaseSettings>,
}

impl AppConfigBuilder {
    pub fn database_url(mut self, url: impl Into<String>) -> Self {
        self.database_url = Some(url.into());
        self
    }

    pub fn jwt_secret(mut self, secret: impl Into<String>) -> Self {
        self.jwt_secret = Some(secret.into());
        self
    }

    pub fn port(mut self, port: u16) -> Self {
        self.port = Some(port);
        self
    }

    pub fn cors_origins(mut self, origins: Vec<String>) -> Self {
        self.cors_origins = Some(origins);
        self
    }

    pub fn bcrypt_cost(mut self, cost: u32) -> Self {
        self.bcrypt_cost = Some(cost);
        self
    }

    pub fn database(mut self, settings: DatabaseSettings) -> Self {
        self.database = Some(settings);
        self
    }

    /// Build and validate the configuration
    pub fn build(self) -> Result<AppConfig, ConfigError> {
        let config = AppConfig {
            database_url: self
                .database_url
                .ok_or(ConfigError::MissingValue("DATABASE_URL"))?,
            jwt_secret: self.jwt_secret.ok_or(ConfigError::MissingValue("JWT_SECRET"))?,
            port: self.port.unwrap_or(DEFAULT_PORT),
            cors_origins: self
                .cors_origins
                .unwrap_or_else(|| vec![DEFAULT_CORS_ORIGIN.to_string()]),
            bcrypt_cost: self.bcrypt_cost.unwrap_or(DEFAULT_BCRYPT_COST),
            database: self.database.unwrap_or_default(),
        };
        config.validate()?;
        Ok(config)
    }
}

/// Configuration errors
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("missing required configuration value: {0}")]
    MissingValue(&'static str),
    #[error("invalid value for {name}: {reason}")]
    InvalidValue { name: &'static str, reason: String },
}
