//! Open-browser behavior

use super::is_truthy;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// `open` option: a flag, or the name of the browser to launch.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "Value", into = "Value")]
pub enum OpenTarget {
    Enabled(bool),
    Browser(String),
}

impl OpenTarget {
    pub fn is_enabled(&self) -> bool {
        match self {
            OpenTarget::Enabled(enabled) => *enabled,
            OpenTarget::Browser(name) => !name.is_empty(),
        }
    }
}

impl From<Value> for OpenTarget {
    fn from(value: Value) -> Self {
        match value {
            Value::String(name) => OpenTarget::Browser(name),
            other => OpenTarget::Enabled(is_truthy(&other)),
        }
    }
}

impl From<OpenTarget> for Value {
    fn from(open: OpenTarget) -> Self {
        match open {
            OpenTarget::Enabled(enabled) => Value::Bool(enabled),
            OpenTarget::Browser(name) => Value::String(name),
        }
    }
}
