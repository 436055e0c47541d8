//! Server configuration read from environment variables.

use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Default bind host.
pub const DEFAULT_HOST: &str = "0.0.0.0";
/// Default bind port.
pub const DEFAULT_PORT: u16 = 8000;
/// Default r2d2 pool size.
pub const DEFAULT_MAX_CONNECTIONS: u32 = 5;
/// Default directory for the local storage backend.
pub const DEFAULT_STATE_DIR: &str = "./taskboard-state";

/// Where projects and tasks are kept.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StorageBackend {
    /// Process memory; lost on restart.
    Memory,
    /// `PostgreSQL` through a connection pool.
    Postgres {
        /// Connection URL.
        database_url: String,
        /// Pool size.
        max_connections: u32,
    },
    /// JSON files in a local state directory.
    Local {
        /// State directory.
        state_dir: String,
    },
}

impl StorageBackend {
    /// Returns the backend name as accepted by `TASKBOARD_STORAGE`.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Memory => "memory",
            Self::Postgres { .. } => "postgres",
            Self::Local { .. } => "local",
        }
    }
}

/// Errors raised while reading configuration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// A variable held a value that could not be parsed.
    #[error("invalid value for {variable}: {value}")]
    InvalidValue {
        /// Variable name.
        variable: &'static str,
        /// Offending value.
        value: String,
    },
    /// `TASKBOARD_STORAGE` named an unknown backend.
    #[error("unknown storage backend: {0} (expected memory, postgres or local)")]
    UnknownBackend(String),
    /// A variable required by the selected backend is missing.
    #[error("{0} must be set")]
    Missing(&'static str),
}

/// Settings for the HTTP server.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    /// Bind host.
    pub host: String,
    /// Bind port.
    pub port: u16,
    /// Storage backend.
    pub storage: StorageBackend,
}

impl ServerConfig {
    /// Reads configuration from the process environment, loading a `.env`
    /// file first when one exists.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when a variable is invalid or missing.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenv::dotenv().ok();
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Reads configuration through `lookup`, which maps a variable name to
    /// its value. Blank values count as unset.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when a variable is invalid or missing.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let read = |name: &str| lookup(name).filter(|value| !value.trim().is_empty());

        let host = read("HOST").unwrap_or_else(|| DEFAULT_HOST.to_owned());
        let port = parse_or("PORT", read("PORT"), DEFAULT_PORT)?;

        let backend = read("TASKBOARD_STORAGE").unwrap_or_else(|| "memory".to_owned());
        let storage = match backend.trim().to_ascii_lowercase().as_str() {
            "memory" => StorageBackend::Memory,
            "postgres" => StorageBackend::Postgres {
                database_url: read("DATABASE_URL").ok_or(ConfigError::Missing("DATABASE_URL"))?,
                max_connections: parse_or(
                    "DATABASE_MAX_CONNECTIONS",
                    read("DATABASE_MAX_CONNECTIONS"),
                    DEFAULT_MAX_CONNECTIONS,
                )?,
            },
            "local" => StorageBackend::Local {
                state_dir: read("TASKBOARD_STATE_DIR")
                    .unwrap_or_else(|| DEFAULT_STATE_DIR.to_owned()),
            },
            _ => return Err(ConfigError::UnknownBackend(backend)),
        };

        Ok(Self {
            host,
            port,
            storage,
        })
    }

    /// Returns the `host:port` bind address.
    #[must_use]
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_owned(),
            port: DEFAULT_PORT,
            storage: StorageBackend::Memory,
        }
    }
}

fn parse_or<T>(variable: &'static str, raw: Option<String>, default: T) -> Result<T, ConfigError>
where
    T: FromStr,
    T::Err: fmt::Display,
{
    raw.map_or(Ok(default), |value| {
        value
            .trim()
            .parse()
            .map_err(|_| ConfigError::InvalidValue { variable, value })
    })
}
