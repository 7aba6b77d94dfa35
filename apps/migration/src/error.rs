use sea_orm::DbErr;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum MigrationCliError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Tracing setup failed: {0}")]
    Tracing(String),

    #[error("Runtime error: {0}")]
    Runtime(#[from] std::io::Error),

    #[error("Database error: {0}")]
    Database(#[from] DbErr),
}
