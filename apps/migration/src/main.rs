use std::path::PathBuf;

use calendar_migration::runner::{
    applied_migrations, pending_migrations, revert_migrations, run_migrations,
};
use clap::{Parser, Subcommand};
use sea_orm::ConnectionTrait;
use tracing_subscriber::prelude::*;

use crate::config::MigrationConfig;
use crate::error::MigrationCliError;

mod config;
mod error;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[arg(short, long, value_name = "FILE")]
    config: Option<Vec<PathBuf>>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Apply pending migrations
    Up,
    /// Revert applied migrations, the last one by default
    Down {
        #[arg(short, long, default_value_t = 1)]
        steps: u32,
    },
    /// List applied and pending migrations
    Status,
}

fn main() -> Result<(), MigrationCliError> {
    let cli = Cli::parse();

    let config = MigrationConfig::load(&cli.config.unwrap_or_default())?;
    initialize_tracing(&config)?;

    tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()?
        .block_on(run(cli.command, config))
}

async fn run(command: Command, config: MigrationConfig) -> Result<(), MigrationCliError> {
    let db = sea_orm::Database::connect(&config.database_url).await?;
    tracing::debug!("Connected to {:?} database, running {command:?}", db.get_database_backend());

    match command {
        Command::Up => run_migrations(&db).await?,
        Command::Down { steps } => revert_migrations(&db, Some(steps)).await?,
        Command::Status => {
            for name in applied_migrations(&db).await? {
                println!("applied  {name}");
            }
            for name in pending_migrations(&db).await? {
                println!("pending  {name}");
            }
        }
    }

    Ok(())
}

fn initialize_tracing(config: &MigrationConfig) -> Result<(), MigrationCliError> {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .or_else(|_| {
            tracing_subscriber::EnvFilter::try_new(config.trace_level.as_deref().unwrap_or("debug"))
        })
        .map_err(|e| MigrationCliError::Tracing(e.to_string()))?;

    let tracing_layer = tracing_subscriber::registry().with(filter);

    if config.trace_json.unwrap_or_default() {
        tracing_layer
            .with(tracing_subscriber::fmt::layer().json().flatten_event(true))
            .init();
    } else {
        tracing_layer.with(tracing_subscriber::fmt::layer()).init();
    };

    Ok(())
}
