//! Error types for the serveconf options resolver.
//!
//! The merge itself never fails; these errors cover the surfaces around it
//! (loading configuration, reading build configuration files, logging setup).

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ServeError {
    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Failed to load build configuration {path:?}: {message}")]
    BuildConfigLoad { path: PathBuf, message: String },

    #[error("Build configuration contains no targets")]
    EmptyBuildConfiguration,

    #[error("Serialization error: {0}")]
    Serialization(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<config::ConfigError> for ServeError {
    fn from(err: config::ConfigError) -> Self {
        ServeError::ConfigError(err.to_string())
    }
}

impl From<serde_json::Error> for ServeError {
    fn from(err: serde_json::Error) -> Self {
        ServeError::Serialization(err.to_string())
    }
}
