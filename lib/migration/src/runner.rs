use sea_orm::{DatabaseConnection, DbErr};
use sea_orm_migration::MigratorTrait;

use crate::Migrator;

pub async fn run_migrations(db: &DatabaseConnection) -> Result<(), DbErr> {
    let pending = Migrator::get_pending_migrations(db).await?;
    if pending.is_empty() {
        tracing::info!("Database schema up to date");
        return Ok(());
    }

    for migration in &pending {
        tracing::debug!("Pending migration: {}", migration.name());
    }
    tracing::info!("Applying {} migration(s)", pending.len());

    Migrator::up(db, None).await.inspect_err(|err| {
        tracing::error!("Migration failed: {err}");
    })
}

/// Reverts the last `steps` applied migrations, all of them when `None`
pub async fn revert_migrations(
    db: &DatabaseConnection,
    steps: Option<u32>,
) -> Result<(), DbErr> {
    let applied = Migrator::get_applied_migrations(db).await?;
    let count = steps.map_or(applied.len(), |steps| applied.len().min(steps as usize));
    tracing::info!("Reverting {count} migration(s)");

    Migrator::down(db, steps).await.inspect_err(|err| {
        tracing::error!("Migration rollback failed: {err}");
    })
}

pub async fn applied_migrations(db: &DatabaseConnection) -> Result<Vec<String>, DbErr> {
    Ok(Migrator::get_applied_migrations(db)
        .await?
        .iter()
        .map(|migration| migration.name().to_owned())
        .collect())
}

pub async fn pending_migrations(db: &DatabaseConnection) -> Result<Vec<String>, DbErr> {
    Ok(Migrator::get_pending_migrations(db)
        .await?
        .iter()
        .map(|migration| migration.name().to_owned())
        .collect())
}
