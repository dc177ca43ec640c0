use migration::Migrator;
use sea_orm_migration::MigratorTrait;
use std::error::Error;
use tracing::{error, info};

use crate::commands::connect;
use crate::config::DatabaseConfig;

/// Execute the migrate command
pub async fn execute(config: &DatabaseConfig, steps: Option<u32>) -> Result<(), Box<dyn Error>> {
    let connection = connect(config).await?;

    // Log migration files to be applied
    let pending = Migrator::get_pending_migrations(&connection).await?;
    info!("Found {} pending migrations", pending.len());
    for m in &pending {
        info!("Pending migration: {}", m.name());
    }

    match steps {
        Some(n) => info!("Running {} migrations", n),
        None => info!("Running all pending migrations"),
    }

    Migrator::up(&connection, steps).await.map_err(|e| {
        error!("Failed to run migrations: {}", e);
        error!("Migration error details: {:?}", e);
        e
    })?;

    info!("Migrations applied successfully");
    Ok(())
}

/// Drops every table and reapplies all migrations
pub async fn reset(config: &DatabaseConfig) -> Result<(), Box<dyn Error>> {
    let connection = connect(config).await?;

    info!("Resetting database '{}'", config.name);
    Migrator::fresh(&connection).await.map_err(|e| {
        error!("Failed to reset database: {}", e);
        e
    })?;

    info!("Database reset and all migrations applied");
    Ok(())
}

/// Lists applied and pending migrations
pub async fn status(config: &DatabaseConfig) -> Result<(), Box<dyn Error>> {
    let connection = connect(config).await?;

    let applied = Migrator::get_applied_migrations(&connection).await?;
    let pending = Migrator::get_pending_migrations(&connection).await?;

    info!("Database '{}' on {}:{}", config.name, config.host, config.port);
    info!("Applied migrations: {}", applied.len());
    for m in &applied {
        info!("  [applied] {}", m.name());
    }
    info!("Pending migrations: {}", pending.len());
    for m in &pending {
        info!("  [pending] {}", m.name());
    }

    Ok(())
}
