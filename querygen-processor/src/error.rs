//! Error types for processor configuration.

use std::path::PathBuf;
use thiserror::Error;

/// Result type for configuration operations.
pub type ConfigResult<T> = Result<T, ConfigError>;

#[derive(Debug, Error)]
pub enum ConfigError {
    /// The configuration file could not be read.
    #[error("failed to read processor config {path:?}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The configuration file is not valid TOML or has the wrong shape.
    #[error("invalid processor config: {0}")]
    Parse(#[from] toml::de::Error),

    /// An annotation role was configured with an empty name.
    #[error("empty annotation name for role '{0}'")]
    EmptyAnnotation(&'static str),
}
