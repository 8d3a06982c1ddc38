//! Server Options
//!
//! The record the resolver accumulates and hands to the server bootstrap. Every
//! field is optional so that "declared by configuration" is a checked fact rather
//! than a guess; keys without a typed field are kept in `extra` in load order.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};
use tracing::warn;

mod content_base;
mod open;
mod stats;

pub use content_base::ContentBase;
pub use open::OpenTarget;
pub use stats::{StatsRecord, StatsValue};

/// Fully-resolved (or partially declared) development server options.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServerOptions {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub host: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub allowed_hosts: Option<Vec<String>>,

    /// Static-content base: directory, directories, URL, port or disabled
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content_base: Option<ContentBase>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub public_path: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub filename: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub watch_options: Option<Value>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hot: Option<bool>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hot_only: Option<bool>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub client_log_level: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stats: Option<StatsValue>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub open: Option<OpenTarget>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub open_page: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub no_info: Option<bool>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub quiet: Option<bool>,

    #[serde(
        default,
        deserialize_with = "deserialize_port",
        skip_serializing_if = "Option::is_none"
    )]
    pub port: Option<u16>,

    /// Declared options without a dedicated field (`https`, `compress`, ...)
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl ServerOptions {
    /// Whether the option named `name` (wire spelling) currently holds a value.
    pub fn declares(&self, name: &str) -> bool {
        match name {
            "host" => self.host.is_some(),
            "allowedHosts" => self.allowed_hosts.is_some(),
            "contentBase" => self.content_base.is_some(),
            "publicPath" => self.public_path.is_some(),
            "filename" => self.filename.is_some(),
            "watchOptions" => self.watch_options.is_some(),
            "hot" => self.hot.is_some(),
            "hotOnly" => self.hot_only.is_some(),
            "clientLogLevel" => self.client_log_level.is_some(),
            "stats" => self.stats.is_some(),
            "open" => self.open.is_some(),
            "openPage" => self.open_page.is_some(),
            "noInfo" => self.no_info.is_some(),
            "quiet" => self.quiet.is_some(),
            "port" => self.port.is_some(),
            other => self.extra.contains_key(other),
        }
    }

    /// Replace the option named `name` with `value`, only if it is already declared.
    ///
    /// Returns whether the value was written. A value that does not fit the
    /// field's type leaves the declared value in place.
    pub fn overwrite_declared(&mut self, name: &str, value: Value) -> bool {
        if !self.declares(name) {
            return false;
        }
        match name {
            "host" => replace_typed(name, &mut self.host, value),
            "allowedHosts" => replace_typed(name, &mut self.allowed_hosts, value),
            "contentBase" => replace_typed(name, &mut self.content_base, value),
            "publicPath" => replace_typed(name, &mut self.public_path, value),
            "filename" => replace_typed(name, &mut self.filename, value),
            "watchOptions" => replace_typed(name, &mut self.watch_options, value),
            "hot" => replace_typed(name, &mut self.hot, value),
            "hotOnly" => replace_typed(name, &mut self.hot_only, value),
            "clientLogLevel" => replace_typed(name, &mut self.client_log_level, value),
            "stats" => replace_typed(name, &mut self.stats, value),
            "open" => replace_typed(name, &mut self.open, value),
            "openPage" => replace_typed(name, &mut self.open_page, value),
            "noInfo" => replace_typed(name, &mut self.no_info, value),
            "quiet" => replace_typed(name, &mut self.quiet, value),
            "port" => match port_from_value(&value) {
                Some(port) => {
                    self.port = Some(port);
                    true
                }
                None => {
                    warn!(option = name, value = %value, "Ignoring value that is not a port");
                    false
                }
            },
            other => {
                self.extra.insert(other.to_string(), value);
                true
            }
        }
    }

    /// Whether the browser should be opened on start.
    pub fn opens_on_start(&self) -> bool {
        self.open.as_ref().is_some_and(OpenTarget::is_enabled)
    }
}

fn replace_typed<T: DeserializeOwned>(name: &str, slot: &mut Option<T>, value: Value) -> bool {
    match serde_json::from_value::<T>(value) {
        Ok(typed) => {
            *slot = Some(typed);
            true
        }
        Err(e) => {
            warn!(option = name, error = %e, "Ignoring value of unexpected type");
            false
        }
    }
}

/// Port from a number or a numeric string; anything else is no port.
pub(crate) fn port_from_value(value: &Value) -> Option<u16> {
    match value {
        Value::Number(n) => n.as_u64().and_then(|n| u16::try_from(n).ok()),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

fn deserialize_port<'de, D>(deserializer: D) -> Result<Option<u16>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value.as_ref().and_then(port_from_value))
}

/// JavaScript truthiness of a JSON value.
pub(crate) fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0 && !f.is_nan()),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}
