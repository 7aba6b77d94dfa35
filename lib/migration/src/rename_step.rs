use sea_orm_migration::prelude::*;

use crate::datatype::string_len_null;
use crate::error::SchemaError;

/// Guarded, reversible rename of a single column.
///
/// `apply` renames the legacy column when it is present, otherwise it makes
/// sure the canonical column exists. `revert` renames the canonical column
/// back without checking for it first.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SchemaRenameStep {
    pub table: &'static str,
    pub legacy_column: &'static str,
    pub canonical_column: &'static str,
    /// Length of the `varchar` created when neither column exists
    pub canonical_max_len: u32,
}

impl SchemaRenameStep {
    pub async fn apply(&self, manager: &SchemaManager<'_>) -> Result<(), SchemaError> {
        if self.has_column(manager, self.legacy_column).await? {
            tracing::info!(
                "Renaming column {}.{} to {}",
                self.table,
                self.legacy_column,
                self.canonical_column
            );
            return self
                .rename_column(manager, self.legacy_column, self.canonical_column)
                .await;
        }

        // SQLite has no `ADD COLUMN IF NOT EXISTS`, check explicitly
        if self.has_column(manager, self.canonical_column).await? {
            tracing::info!(
                "Column {}.{} already present, nothing to apply",
                self.table,
                self.canonical_column
            );
            return Ok(());
        }

        tracing::info!(
            "Column {}.{} missing, adding {}",
            self.table,
            self.legacy_column,
            self.canonical_column
        );
        self.add_canonical_column(manager).await
    }

    pub async fn revert(&self, manager: &SchemaManager<'_>) -> Result<(), SchemaError> {
        tracing::info!(
            "Renaming column {}.{} back to {}",
            self.table,
            self.canonical_column,
            self.legacy_column
        );
        self.rename_column(manager, self.canonical_column, self.legacy_column)
            .await
    }

    async fn has_column(
        &self,
        manager: &SchemaManager<'_>,
        column: &str,
    ) -> Result<bool, SchemaError> {
        let exists = manager
            .has_column(self.table, column)
            .await
            .map_err(|source| {
                tracing::warn!("Catalog query for {}.{column} failed: {source}", self.table);
                SchemaError::CatalogQuery {
                    table: self.table.to_owned(),
                    column: column.to_owned(),
                    source,
                }
            })?;

        tracing::debug!("Column {}.{column} exists: {exists}", self.table);
        Ok(exists)
    }

    async fn rename_column(
        &self,
        manager: &SchemaManager<'_>,
        from: &'static str,
        to: &'static str,
    ) -> Result<(), SchemaError> {
        manager
            .alter_table(
                Table::alter()
                    .table(Alias::new(self.table))
                    .rename_column(Alias::new(from), Alias::new(to))
                    .to_owned(),
            )
            .await
            .map_err(|source| {
                self.ddl_error(format!("rename column {}.{from} to {to}", self.table), source)
            })
    }

    async fn add_canonical_column(&self, manager: &SchemaManager<'_>) -> Result<(), SchemaError> {
        manager
            .alter_table(
                Table::alter()
                    .table(Alias::new(self.table))
                    .add_column(string_len_null(
                        Alias::new(self.canonical_column),
                        self.canonical_max_len,
                    ))
                    .to_owned(),
            )
            .await
            .map_err(|source| {
                self.ddl_error(
                    format!("add column {}.{}", self.table, self.canonical_column),
                    source,
                )
            })
    }

    fn ddl_error(&self, operation: String, source: DbErr) -> SchemaError {
        tracing::warn!("Failed to {operation}: {source}");
        SchemaError::DdlExecution { operation, source }
    }
}
