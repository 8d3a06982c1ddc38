//! Build Configuration
//!
//! The declarative build configuration consulted by the resolver: one target
//! record or an ordered list of them. Only the first target takes part in a
//! merge. Keys the resolver has no use for are preserved verbatim.

use crate::error::ServeError;
use crate::options::{ServerOptions, StatsValue};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::path::Path;
use tracing::debug;

/// Build mode
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    #[default]
    Development,
    Production,
    None,
}

/// `output` section of a build target
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OutputConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub public_path: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub filename: Option<String>,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// One build target record
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BuildTarget {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mode: Option<Mode>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub output: Option<OutputConfig>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub watch_options: Option<Value>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stats: Option<StatsValue>,

    /// Embedded server options
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dev_server: Option<ServerOptions>,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl BuildTarget {
    pub fn output_public_path(&self) -> Option<&str> {
        self.output.as_ref()?.public_path.as_deref()
    }

    pub fn output_filename(&self) -> Option<&str> {
        self.output.as_ref()?.filename.as_deref()
    }
}

/// A single target or a multi-target build
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum BuildConfiguration {
    Multi(Vec<BuildTarget>),
    Single(BuildTarget),
}

impl Default for BuildConfiguration {
    fn default() -> Self {
        BuildConfiguration::Single(BuildTarget::default())
    }
}

impl From<BuildTarget> for BuildConfiguration {
    fn from(target: BuildTarget) -> Self {
        BuildConfiguration::Single(target)
    }
}

impl BuildConfiguration {
    /// The target consulted for merging.
    pub fn first(&self) -> Option<&BuildTarget> {
        match self {
            BuildConfiguration::Single(target) => Some(target),
            BuildConfiguration::Multi(targets) => targets.first(),
        }
    }

    /// Mutable access to the consulted target; an empty list gains a default target.
    pub fn first_mut(&mut self) -> &mut BuildTarget {
        match self {
            BuildConfiguration::Single(target) => target,
            BuildConfiguration::Multi(targets) => {
                if targets.is_empty() {
                    debug!("Empty target list; inserting a default target");
                    targets.push(BuildTarget::default());
                }
                &mut targets[0]
            }
        }
    }

    pub fn targets(&self) -> &[BuildTarget] {
        match self {
            BuildConfiguration::Single(target) => std::slice::from_ref(target),
            BuildConfiguration::Multi(targets) => targets,
        }
    }

    /// Load a build configuration from a `.json` or `.toml` file.
    ///
    /// Other extensions are read as JSON. In TOML a multi-target build is an
    /// array of `[[target]]` tables.
    pub fn load(path: &Path) -> Result<Self, ServeError> {
        let contents = std::fs::read_to_string(path).map_err(|e| ServeError::BuildConfigLoad {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;

        let is_toml = path
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| ext.eq_ignore_ascii_case("toml"));

        let parsed = if is_toml {
            Self::from_toml_str(&contents)
        } else {
            Self::from_json_str(&contents)
        };

        let config = parsed.map_err(|message| ServeError::BuildConfigLoad {
            path: path.to_path_buf(),
            message,
        })?;

        if config.targets().is_empty() {
            return Err(ServeError::EmptyBuildConfiguration);
        }

        debug!(
            path = %path.display(),
            targets = config.targets().len(),
            "Loaded build configuration"
        );
        Ok(config)
    }

    pub fn from_json_str(contents: &str) -> Result<Self, String> {
        serde_json::from_str(contents).map_err(|e| format!("JSON parse error: {}", e))
    }

    pub fn from_toml_str(contents: &str) -> Result<Self, String> {
        let mut table: toml::Table =
            toml::from_str(contents).map_err(|e| format!("TOML parse error: {}", e))?;

        let to_json = |value: toml::Value| {
            serde_json::to_value(value).map_err(|e| format!("TOML conversion error: {}", e))
        };

        let json = match table.remove("target") {
            Some(toml::Value::Array(targets)) if table.is_empty() => {
                to_json(toml::Value::Array(targets))?
            }
            Some(other) => {
                table.insert("target".to_string(), other);
                to_json(toml::Value::Table(table))?
            }
            None => to_json(toml::Value::Table(table))?,
        };

        serde_json::from_value(json).map_err(|e| format!("Invalid build configuration: {}", e))
    }
}
