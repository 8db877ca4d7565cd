//! Importer error types

use std::path::PathBuf;

use reviews_common::ConfigError;
use thiserror::Error;

/// Errors raised while seeding the database
#[derive(Debug, Error)]
pub enum ImportError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Failed to read script {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}

impl ImportError {
    /// Build a read error for `path`
    pub fn read(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Read {
            path: path.into(),
            source,
        }
    }
}
