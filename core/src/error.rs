//! Error types for catalog lookups and settings handling

use std::path::PathBuf;
use thiserror::Error;

use crate::game_data::AbilityId;

/// Errors during spell/buff lookups
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CatalogError {
    #[error("no spell data registered for id {id}")]
    SpellNotFound { id: AbilityId },

    #[error("no buff data registered for id {id}")]
    BuffNotFound { id: AbilityId },

    #[error("id {id} is not a rank of spell {main_id}")]
    RankNotFound { id: AbilityId, main_id: AbilityId },
}

/// Errors while building settings or catalogs
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid settings: {reason}")]
    Invalid { reason: String },

    #[error("id {id} is registered by more than one record")]
    DuplicateId { id: AbilityId },

    #[error("failed to read {path}")]
    ReadFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse TOML in {path}")]
    ParseToml {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}
