// Subcommand implementations

pub mod create;
pub mod migrate;
pub mod seed;

use sea_orm::{Database, DatabaseConnection, DbErr};
use tracing::{error, info};

use crate::config::DatabaseConfig;

/// Connects to the configured database
pub async fn connect(config: &DatabaseConfig) -> Result<DatabaseConnection, DbErr> {
    info!(
        "Connecting to database '{}' on {}:{}",
        config.name, config.host, config.port
    );
    Database::connect(&config.url)
        .await
        .inspect_err(|e| error!("Failed to connect to database: {}", e))
}
