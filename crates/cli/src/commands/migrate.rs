//! Database migration command.
//!
//! # Usage
//!
//! ```bash
//! pineapple migrate
//! ```
//!
//! # Environment Variables
//!
//! - `API_DATABASE_URL` - `PostgreSQL` connection string (falls back to
//!   `DATABASE_URL`)
//!
//! # Migration Files
//!
//! `crates/api/migrations/`

use secrecy::{ExposeSecret, SecretString};
use sqlx::PgPool;
use thiserror::Error;
use tracing::info;

#[derive(Debug, Error)]
pub enum MigrationError {
    #[error("Missing environment variable: {0}")]
    MissingEnvVar(&'static str),

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Migration error: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),
}

/// Run the catalog API's migrations.
///
/// # Errors
///
/// Returns `MigrationError` if no database is configured, the connection
/// fails, or a migration fails.
pub async fn run() -> Result<(), MigrationError> {
    let database_url = database_url(|key| std::env::var(key).ok())
        .ok_or(MigrationError::MissingEnvVar("API_DATABASE_URL"))?;

    info!("Connecting to catalog database...");
    let pool = PgPool::connect(database_url.expose_secret()).await?;

    info!("Running catalog migrations...");
    sqlx::migrate!("../api/migrations").run(&pool).await?;

    info!("Catalog migrations complete!");
    Ok(())
}

/// `API_DATABASE_URL`, else `DATABASE_URL`. Blank values count as unset.
fn database_url<F>(lookup: F) -> Option<SecretString>
where
    F: Fn(&str) -> Option<String>,
{
    let non_blank = |key: &str| lookup(key).filter(|url| !url.trim().is_empty());
    non_blank("API_DATABASE_URL")
        .or_else(|| non_blank("DATABASE_URL"))
        .map(SecretString::from)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn resolve(vars: &[(&str, &str)]) -> Option<String> {
        database_url(|key| {
            vars.iter()
                .find(|(k, _)| *k == key)
                .map(|(_, v)| (*v).to_string())
        })
        .map(|url| url.expose_secret().to_string())
    }

    #[test]
    fn test_prefers_api_database_url() {
        let url = resolve(&[
            ("API_DATABASE_URL", "postgres://api/db"),
            ("DATABASE_URL", "postgres://generic/db"),
        ]);
        assert_eq!(url.as_deref(), Some("postgres://api/db"));
    }

    #[test]
    fn test_blank_api_database_url_falls_through() {
        let url = resolve(&[
            ("API_DATABASE_URL", "  "),
            ("DATABASE_URL", "postgres://generic/db"),
        ]);
        assert_eq!(url.as_deref(), Some("postgres://generic/db"));
    }

    #[test]
    fn test_nothing_configured() {
        assert!(resolve(&[]).is_none());
        assert!(resolve(&[("DATABASE_URL", "")]).is_none());
    }
}
