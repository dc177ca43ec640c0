// Configuration management from environment variables

use dotenv::dotenv;
use std::env;

/// Configuration settings for the catalog API server
#[derive(Debug, Clone)]
pub struct ApiConfig {
    // Server configuration
    pub host: String,
    pub port: u16,

    // Database configuration; notes and categories are disabled without it
    pub database_url: Option<String>,
    pub db_pool_max: u32,
    pub db_pool_min: u32,
}

impl ApiConfig {
    /// Creates configuration instance from environment variables with defaults
    pub fn from_env() -> Self {
        dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the configuration from an arbitrary variable source
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let host = lookup("HOST").unwrap_or_else(|| "0.0.0.0".to_string());
        let port = lookup("PORT")
            .and_then(|v| v.parse::<u16>().ok())
            .unwrap_or(3000);
        let database_url = lookup("DATABASE_URL")
            .filter(|url| !url.trim().is_empty())
            .or_else(|| compose_database_url(&lookup));
        let db_pool_max = lookup("DB_POOL_MAX")
            .and_then(|v| v.parse().ok())
            .unwrap_or(10);
        let db_pool_min = lookup("DB_POOL_MIN")
            .and_then(|v| v.parse().ok())
            .unwrap_or(1);

        Self {
            host,
            port,
            database_url,
            db_pool_max,
            db_pool_min,
        }
    }

    /// Returns formatted server address string (host:port)
    pub fn server_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Postgres URL from the individual `DB_*` variables, when `DB_HOST` is set
fn compose_database_url<F>(lookup: &F) -> Option<String>
where
    F: Fn(&str) -> Option<String>,
{
    let host = lookup("DB_HOST")?;
    let port = lookup("DB_PORT").unwrap_or_else(|| "5432".to_string());
    let user = lookup("DB_USER").unwrap_or_else(|| "postgres".to_string());
    let password = lookup("DB_PASSWORD").unwrap_or_default();
    let name = lookup("DB_NAME").unwrap_or_else(|| "catalog".to_string());

    Some(format!(
        "postgres://{}:{}@{}:{}/{}",
        user, password, host, port, name
    ))
}
