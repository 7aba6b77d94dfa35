use sea_orm_migration::prelude::*;

use crate::rename_step::SchemaRenameStep;

pub const RENAME_LITURGICAL_COLOR: SchemaRenameStep = SchemaRenameStep {
    table: "special_days",
    legacy_column: "liturgical_color",
    canonical_column: "liturgicalColor",
    canonical_max_len: 10,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        Ok(RENAME_LITURGICAL_COLOR.apply(manager).await?)
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        Ok(RENAME_LITURGICAL_COLOR.revert(manager).await?)
    }
}
