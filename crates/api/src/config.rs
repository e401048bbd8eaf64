//! API configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! ## Optional
//! - `API_HOST` - Bind address (default: 127.0.0.1)
//! - `API_PORT` - Listen port (default: 3000)
//! - `API_DATABASE_URL` - `PostgreSQL` connection string; falls back to
//!   `DATABASE_URL`. When neither is set the in-memory store is used.
//! - `SENTRY_DSN` - Sentry error tracking DSN
//! - `SENTRY_ENVIRONMENT` - Sentry environment tag
//! - `SENTRY_SAMPLE_RATE` - Error sample rate (default: 1.0)
//! - `SENTRY_TRACES_SAMPLE_RATE` - Transaction sample rate (default: 0.0)

use std::net::{IpAddr, SocketAddr};

use secrecy::SecretString;
use thiserror::Error;

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// Which document store backs the catalog.
#[derive(Debug, Clone)]
pub enum StoreConfig {
    /// Process-local store; contents are lost on restart.
    Memory,
    /// `PostgreSQL` (connection URL contains the password).
    Postgres { database_url: SecretString },
}

/// Catalog API configuration.
#[derive(Debug, Clone)]
pub struct ApiConfig {
    /// IP address to bind the server to
    pub host: IpAddr,
    /// Port to listen on
    pub port: u16,
    /// Document store selection
    pub store: StoreConfig,
    /// Sentry DSN for error tracking
    pub sentry_dsn: Option<String>,
    /// Sentry environment (e.g. "production")
    pub sentry_environment: Option<String>,
    /// Fraction of errors sent to Sentry
    pub sentry_sample_rate: f32,
    /// Fraction of requests traced in Sentry
    pub sentry_traces_sample_rate: f32,
}

impl ApiConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a variable is present but cannot be parsed.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build configuration from an arbitrary variable source.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a variable is present but cannot be parsed.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let host = parse_or_default::<IpAddr, _>(&lookup, "API_HOST", "127.0.0.1")?;
        let port = parse_or_default::<u16, _>(&lookup, "API_PORT", "3000")?;

        let store = non_blank(&lookup, "API_DATABASE_URL")
            .or_else(|| non_blank(&lookup, "DATABASE_URL"))
            .map_or(StoreConfig::Memory, |url| StoreConfig::Postgres {
                database_url: SecretString::from(url),
            });

        let sentry_sample_rate = parse_or_default::<f32, _>(&lookup, "SENTRY_SAMPLE_RATE", "1.0")?;
        let sentry_traces_sample_rate =
            parse_or_default::<f32, _>(&lookup, "SENTRY_TRACES_SAMPLE_RATE", "0.0")?;

        Ok(Self {
            host,
            port,
            store,
            sentry_dsn: lookup("SENTRY_DSN"),
            sentry_environment: lookup("SENTRY_ENVIRONMENT"),
            sentry_sample_rate,
            sentry_traces_sample_rate,
        })
    }

    /// Returns the socket address for binding the server.
    #[must_use]
    pub const fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

// =============================================================================
// Helper Functions
// =============================================================================

/// Read a variable, treating an empty or whitespace-only value as unset.
fn non_blank<F>(lookup: &F, key: &str) -> Option<String>
where
    F: Fn(&str) -> Option<String>,
{
    lookup(key).filter(|value| !value.trim().is_empty())
}

/// Read a variable, falling back to `default`, and parse it.
fn parse_or_default<T, F>(lookup: &F, key: &str, default: &str) -> Result<T, ConfigError>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
    F: Fn(&str) -> Option<String>,
{
    lookup(key)
        .unwrap_or_else(|| default.to_string())
        .parse::<T>()
        .map_err(|e| ConfigError::InvalidEnvVar(key.to_string(), e.to_string()))
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::collections::HashMap;

    use secrecy::ExposeSecret;

    use super::*;

    fn load(vars: &[(&str, &str)]) -> Result<ApiConfig, ConfigError> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect();
        ApiConfig::from_lookup(|key| map.get(key).cloned())
    }

    #[test]
    fn test_defaults() {
        let config = load(&[]).unwrap();
        assert_eq!(config.socket_addr().to_string(), "127.0.0.1:3000");
        assert!(matches!(config.store, StoreConfig::Memory));
        assert!(config.sentry_dsn.is_none());
    }

    #[test]
    fn test_database_url_selects_postgres() {
        let config = load(&[("API_DATABASE_URL", "postgres://localhost/catalog")]).unwrap();
        match config.store {
            StoreConfig::Postgres { database_url } => {
                assert_eq!(database_url.expose_secret(), "postgres://localhost/catalog");
            }
            StoreConfig::Memory => panic!("expected postgres store"),
        }
    }

    #[test]
    fn test_generic_database_url_fallback() {
        let config = load(&[("DATABASE_URL", "postgres://fallback/db")]).unwrap();
        assert!(matches!(config.store, StoreConfig::Postgres { .. }));
    }

    #[test]
    fn test_blank_database_url_means_memory() {
        let config = load(&[("API_DATABASE_URL", "  ")]).unwrap();
        assert!(matches!(config.store, StoreConfig::Memory));
    }

    #[test]
    fn test_blank_api_database_url_falls_through() {
        let config = load(&[
            ("API_DATABASE_URL", ""),
            ("DATABASE_URL", "postgres://fallback/db"),
        ])
        .unwrap();
        match config.store {
            StoreConfig::Postgres { database_url } => {
                assert_eq!(database_url.expose_secret(), "postgres://fallback/db");
            }
            StoreConfig::Memory => panic!("expected postgres store"),
        }
    }

    #[test]
    fn test_invalid_port() {
        let err = load(&[("API_PORT", "not-a-port")]).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidEnvVar(ref key, _) if key == "API_PORT"));
    }

    #[test]
    fn test_custom_bind() {
        let config = load(&[("API_HOST", "0.0.0.0"), ("API_PORT", "8080")]).unwrap();
        assert_eq!(config.socket_addr().to_string(), "0.0.0.0:8080");
    }

    #[test]
    fn test_debug_redacts_database_url() {
        let config = load(&[("API_DATABASE_URL", "postgres://user:hunter2@db/catalog")]).unwrap();
        let debug_output = format!("{config:?}");
        assert!(!debug_output.contains("hunter2"));
    }
}
