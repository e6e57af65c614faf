//! Errors from building or loading a catalog.

use std::path::PathBuf;

use thiserror::Error;

use super::character::CharacterId;
use super::question::QuestionId;

/// Errors from catalog construction and loading.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("failed to read catalog file {path}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid TOML catalog: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("invalid JSON catalog: {0}")]
    Json(#[from] serde_json::Error),

    #[error("unsupported catalog format {extension:?}; expected .toml or .json")]
    UnsupportedFormat { extension: String },

    #[error("duplicate character id \"{0}\"")]
    DuplicateCharacter(CharacterId),

    #[error("duplicate question id \"{0}\"")]
    DuplicateQuestion(QuestionId),

    #[error("catalog has no characters")]
    Empty,
}

/// Result type for catalog operations.
pub type CatalogResult<T> = std::result::Result<T, CatalogError>;
