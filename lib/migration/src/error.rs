use sea_orm::DbErr;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SchemaError {
    #[error("Failed to inspect column `{table}.{column}`: {source}")]
    CatalogQuery {
        table: String,
        column: String,
        #[source]
        source: DbErr,
    },

    #[error("Failed to {operation}: {source}")]
    DdlExecution {
        operation: String,
        #[source]
        source: DbErr,
    },
}

impl SchemaError {
    pub fn db_err(&self) -> &DbErr {
        match self {
            Self::CatalogQuery { source, .. } | Self::DdlExecution { source, .. } => source,
        }
    }
}

// The migration runner only understands `DbErr`, keep the message so the halted run names the cause
impl From<SchemaError> for DbErr {
    fn from(value: SchemaError) -> Self {
        DbErr::Migration(value.to_string())
    }
}
