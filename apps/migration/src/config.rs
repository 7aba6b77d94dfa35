use std::path::PathBuf;

use figment::Figment;
use figment::providers::{Env, Format, Serialized, Yaml};
use serde::{Deserialize, Serialize};

use crate::error::MigrationCliError;

pub const ENV_PREFIX: &str = "MIGRATION_";

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(default, rename_all = "camelCase")]
pub struct MigrationConfig {
    pub database_url: String,
    pub trace_level: Option<String>,
    pub trace_json: Option<bool>,
}

impl Default for MigrationConfig {
    fn default() -> Self {
        Self {
            database_url: "sqlite::memory:".to_owned(),
            trace_level: None,
            trace_json: None,
        }
    }
}

impl MigrationConfig {
    /// Files are merged in order, later ones win, environment overrides all of them
    pub fn load(files: &[PathBuf]) -> Result<Self, MigrationCliError> {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        for file in files {
            figment = figment.merge(Yaml::file(file));
        }

        figment
            .merge(Env::prefixed(ENV_PREFIX).split("__").lowercase(false))
            .extract()
            .map_err(|e| MigrationCliError::Config(e.to_string()))
    }
}
