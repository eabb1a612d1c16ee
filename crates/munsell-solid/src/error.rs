//! Error types for solid building and configuration.

use std::path::PathBuf;
use thiserror::Error;

/// Result type for solid operations.
pub type SolidResult<T> = Result<T, SolidError>;

/// Errors that can occur while configuring or building the solid.
#[derive(Debug, Error)]
pub enum SolidError {
    /// Table loading or lookup failed.
    #[error(transparent)]
    Table(#[from] munsell_core::MunsellError),

    /// I/O error reading a config file.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// YAML parsing error.
    #[error("YAML parse error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// Config file not found.
    #[error("config file not found: {path}")]
    ConfigNotFound {
        /// Path that was searched.
        path: PathBuf,
    },

    /// No table asset was configured.
    #[error("no color table configured")]
    NoTable,
}
