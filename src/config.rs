//! Configuration System
//!
//! Layered configuration for the resolver's baseline values (default port, loopback
//! host name, default build mode) and for logging. Layers are merged by the `config`
//! crate: built-in defaults, the global file, workspace files, then environment
//! variables.

use crate::build::Mode;
use crate::logging::LoggingConfig;
use serde::{Deserialize, Serialize};

mod facade;
mod merge;
mod sources;

pub use facade::ConfigLoader;

/// Root configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ServeConfig {
    /// Baselines the resolver compares CLI arguments against
    #[serde(default)]
    pub resolver: ResolverContext,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Baseline values consulted during a merge.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResolverContext {
    /// Port the CLI reports when the user did not choose one
    #[serde(default = "default_port")]
    pub default_port: u16,

    /// Loopback host name the CLI reports when the user did not choose one
    #[serde(default = "default_host")]
    pub default_host: String,

    /// Build mode applied when the build configuration declares none
    #[serde(default)]
    pub default_mode: Mode,
}

pub(crate) fn default_port() -> u16 {
    8080
}

pub(crate) fn default_host() -> String {
    "localhost".to_string()
}

impl Default for ResolverContext {
    fn default() -> Self {
        Self {
            default_port: default_port(),
            default_host: default_host(),
            default_mode: Mode::default(),
        }
    }
}

impl ResolverContext {
    pub fn with_default_port(default_port: u16) -> Self {
        Self {
            default_port,
            ..Self::default()
        }
    }

    /// Validate resolver baselines
    pub fn validate(&self) -> Result<(), String> {
        if self.default_port == 0 {
            return Err("Default port cannot be 0".to_string());
        }
        if self.default_host.trim().is_empty() {
            return Err("Default host cannot be empty".to_string());
        }
        Ok(())
    }
}

/// Configuration validation errors
#[derive(Debug, Clone)]
pub enum ValidationError {
    Resolver(String),
    Logging(String),
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ValidationError::Resolver(msg) => write!(f, "Resolver: {}", msg),
            ValidationError::Logging(msg) => write!(f, "Logging: {}", msg),
        }
    }
}

impl std::error::Error for ValidationError {}

impl ServeConfig {
    /// Validate the entire configuration
    pub fn validate(&self) -> Result<(), Vec<ValidationError>> {
        let mut errors = Vec::new();

        if let Err(e) = self.resolver.validate() {
            errors.push(ValidationError::Resolver(e));
        }
        if let Err(e) = self.logging.validate() {
            errors.push(ValidationError::Logging(e));
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}
