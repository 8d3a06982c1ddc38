//! Config loading facade: builds the layered `config` stack and validates the result.

use super::merge::merge_policy;
use super::sources::{environment, global_file, workspace_file};
use super::ServeConfig;
use crate::error::ServeError;
use config::File;
use std::path::Path;
use tracing::debug;

/// Loads [`ServeConfig`] from the layered sources.
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration for a workspace.
    ///
    /// Precedence (lowest to highest): built-in defaults, global file,
    /// `serveconf.toml`, `serveconf.{SERVECONF_ENV}.toml`, environment.
    pub fn load(workspace_root: &Path) -> Result<ServeConfig, ServeError> {
        let builder = merge_policy::builder_with_defaults()?;
        let builder = global_file::add_to_builder(builder)?;
        let builder = workspace_file::add_to_builder(builder, workspace_root)?;
        let builder = environment::add_to_builder(builder);

        let config: ServeConfig = builder.build()?.try_deserialize()?;
        Self::validated(config)
    }

    /// Load configuration from a single explicit file over the built-in defaults.
    pub fn load_from_file(path: &Path) -> Result<ServeConfig, ServeError> {
        if !path.exists() {
            return Err(ServeError::ConfigError(format!(
                "Configuration file not found: {}",
                path.display()
            )));
        }

        let config: ServeConfig = merge_policy::builder_with_defaults()?
            .add_source(File::from(path))
            .build()?
            .try_deserialize()?;
        Self::validated(config)
    }

    fn validated(config: ServeConfig) -> Result<ServeConfig, ServeError> {
        config.validate().map_err(|errors| {
            let error_msgs: Vec<String> = errors.iter().map(|e| e.to_string()).collect();
            ServeError::ConfigError(format!(
                "Configuration validation failed:\n{}",
                error_msgs.join("\n")
            ))
        })?;
        debug!(
            default_port = config.resolver.default_port,
            default_host = %config.resolver.default_host,
            "Configuration loaded"
        );
        Ok(config)
    }
}
