use sea_orm::{ConnectionTrait, Database, DbBackend, Statement};
use std::error::Error;
use tracing::{error, info};

use crate::config::DatabaseConfig;

/// Database names are interpolated into DDL, so only plain identifiers are accepted
fn is_valid_name(name: &str) -> bool {
    !name.is_empty()
        && name.len() <= 63
        && name
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_')
        && !name.starts_with(|c: char| c.is_ascii_digit())
}

/// Execute the create command
pub async fn execute(config: &DatabaseConfig, name: Option<String>) -> Result<(), Box<dyn Error>> {
    // Use provided name or default from config
    let db_name = name.unwrap_or_else(|| config.name.clone());
    if !is_valid_name(&db_name) {
        error!("Invalid database name: {}", db_name);
        return Err(format!("Invalid database name: {}", db_name).into());
    }

    info!("Creating database: {}", db_name);

    // Connect to the maintenance database of the same server
    let server = Database::connect(config.server_url()).await.map_err(|e| {
        error!("Failed to connect to database server: {}", e);
        e
    })?;

    // Check if database exists
    let existing = server
        .query_one(Statement::from_sql_and_values(
            DbBackend::Postgres,
            "SELECT 1 FROM pg_database WHERE datname = $1",
            [db_name.clone().into()],
        ))
        .await?;

    if existing.is_some() {
        info!("Database '{}' already exists", db_name);
        return Ok(());
    }

    // Create database
    server
        .execute(Statement::from_string(
            DbBackend::Postgres,
            format!("CREATE DATABASE \"{}\"", db_name),
        ))
        .await
        .map_err(|e| {
            error!("Failed to create database: {}", e);
            e
        })?;

    info!("Database '{}' created successfully", db_name);
    Ok(())
}
