//! Error types for the portfolio core.
//!
//! The tracker itself never fails; these cover the edges where data comes
//! in from outside: config files, content documents and layout tables.

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while loading or assembling page data.
#[derive(Debug, Error)]
pub enum Error {
    /// A file could not be read.
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// `portfolio.toml` exists but is not valid.
    #[error("invalid config: {0}")]
    ConfigParse(#[from] toml::de::Error),

    /// A content or layout document is not valid JSON for its type.
    #[error("invalid JSON document: {0}")]
    ContentParse(#[from] serde_json::Error),

    /// A section id was declared twice when building a table.
    #[error("duplicate section id `{0}`")]
    DuplicateSection(String),

    /// A section id is not part of the fixed table.
    #[error("unknown section id `{0}`")]
    UnknownSection(String),

    /// Geometry that can never describe a rendered section.
    #[error("invalid layout for `{id}`: {reason}")]
    InvalidLayout { id: String, reason: &'static str },
}

/// Shorthand used across the crate.
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}
