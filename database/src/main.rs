use clap::{Parser, Subcommand};
use std::error::Error;

mod commands;
mod config;

use config::DatabaseConfig;

/// Catalog database management: create, migrate, inspect and seed the notes database
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Connection URL; overrides DATABASE_URL and the DB_* variables
    #[arg(long, global = true)]
    database_url: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Create the database if the server does not have it yet
    Create {
        /// Database name (defaults to the configured one)
        #[arg(short, long)]
        name: Option<String>,
    },
    /// Apply pending migrations
    Migrate {
        /// Number of migrations to apply (all if not specified)
        #[arg(short, long)]
        steps: Option<u32>,
    },
    /// Drop all tables and re-run every migration
    Reset,
    /// List applied and pending migrations
    Status,
    /// Insert sample categories and notes into an empty database
    Seed,
}

impl Cli {
    fn database_config(&self) -> Result<DatabaseConfig, config::ConfigError> {
        match &self.database_url {
            Some(url) => DatabaseConfig::parse(url),
            None => DatabaseConfig::from_env(),
        }
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    dotenv::dotenv().ok();

    let cli = Cli::parse();
    let config = cli.database_config()?;

    match cli.command {
        Commands::Create { name } => commands::create::execute(&config, name).await?,
        Commands::Migrate { steps } => commands::migrate::execute(&config, steps).await?,
        Commands::Reset => commands::migrate::reset(&config).await?,
        Commands::Status => commands::migrate::status(&config).await?,
        Commands::Seed => commands::seed::execute(&config).await?,
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parses_subcommands() {
        let cli = Cli::parse_from(["catalog-database", "migrate", "--steps", "1"]);
        assert!(matches!(cli.command, Commands::Migrate { steps: Some(1) }));

        let cli = Cli::parse_from([
            "catalog-database",
            "seed",
            "--database-url",
            "postgres://app:pw@db:5432/catalog",
        ]);
        assert!(matches!(cli.command, Commands::Seed));
        assert_eq!(cli.database_config().unwrap().host, "db");
    }
}
