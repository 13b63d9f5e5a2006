//! Errors raised by config persistence.

use std::path::PathBuf;

/// Why loading or saving `config.ron` failed.
///
/// Every filesystem variant carries the path it was touching, so the
/// message a user sees points at the actual file.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// The file exists but could not be read.
    #[error("cannot read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The file or its parent directory could not be written.
    #[error("cannot write {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The file's contents are not valid RON for this config shape.
    #[error("malformed config in {path}: {source}")]
    Malformed {
        path: PathBuf,
        #[source]
        source: ron::error::SpannedError,
    },

    /// The in-memory config could not be rendered to RON.
    #[error("cannot serialize config: {0}")]
    Serialize(#[from] ron::Error),
}
