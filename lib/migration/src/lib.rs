use sea_orm_migration::prelude::*;

pub(crate) mod datatype;
pub mod error;
pub mod rename_step;
pub mod runner;

mod m20240612_000001_rename_liturgical_color;

pub use m20240612_000001_rename_liturgical_color::RENAME_LITURGICAL_COLOR;
pub use sea_orm_migration::MigratorTrait;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![Box::new(
            m20240612_000001_rename_liturgical_color::Migration,
        )]
    }
}
