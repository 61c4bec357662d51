//! Error type for the parsing and export layers
//!
//! Generation itself is total and never returns an error. Only turning names
//! into shapes/modes, reading scene files and writing exports can fail.

use std::path::PathBuf;

/// Errors raised outside the generator core
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Shape name not one of `triangle`, `quad`, `cube`
    #[error("unknown shape '{0}' (expected triangle, quad or cube)")]
    UnknownShape(String),

    /// Mode name not one of `soup`, `indexed`
    #[error("unknown primitive mode '{0}' (expected soup or indexed)")]
    UnknownMode(String),

    /// Filesystem failure while reading a scene file or writing an export
    #[error("I/O error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Scene file is not valid TOML or has mistyped keys
    #[error("invalid scene file: {0}")]
    Toml(#[from] toml::de::Error),

    /// JSON serialization failed
    #[error("JSON encoding failed: {0}")]
    Json(#[from] serde_json::Error),
}

impl Error {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

/// Result alias used across the crate
pub type Result<T> = std::result::Result<T, Error>;
