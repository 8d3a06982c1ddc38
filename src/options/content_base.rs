//! Static-content base value

use crate::paths::is_absolute_url;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::path::PathBuf;

/// Where the server serves files the build did not produce.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "Value", into = "Value")]
pub enum ContentBase {
    /// A single directory
    Path(PathBuf),
    /// Several directories, searched in order
    Paths(Vec<PathBuf>),
    /// An absolute URL, proxied rather than read from disk
    Url(String),
    /// Serve from this port instead of a directory
    Port(u16),
    /// Content serving turned off
    Disabled,
    /// A value of no recognized shape, left for the consumer
    Opaque(Value),
}

impl ContentBase {
    pub fn is_disabled(&self) -> bool {
        matches!(self, ContentBase::Disabled)
    }
}

impl From<Value> for ContentBase {
    fn from(value: Value) -> Self {
        match value {
            Value::String(s) if is_absolute_url(&s) => ContentBase::Url(s),
            Value::String(s) => ContentBase::Path(PathBuf::from(s)),
            Value::Array(items) if items.iter().all(Value::is_string) => ContentBase::Paths(
                items
                    .into_iter()
                    .filter_map(|item| item.as_str().map(PathBuf::from))
                    .collect(),
            ),
            Value::Number(n) => match n.as_u64().and_then(|n| u16::try_from(n).ok()) {
                Some(port) => ContentBase::Port(port),
                None => ContentBase::Opaque(Value::Number(n)),
            },
            Value::Bool(false) => ContentBase::Disabled,
            other => ContentBase::Opaque(other),
        }
    }
}

impl From<ContentBase> for Value {
    fn from(base: ContentBase) -> Self {
        match base {
            ContentBase::Path(path) => Value::String(path.to_string_lossy().into_owned()),
            ContentBase::Paths(paths) => Value::Array(
                paths
                    .iter()
                    .map(|p| Value::String(p.to_string_lossy().into_owned()))
                    .collect(),
            ),
            ContentBase::Url(url) => Value::String(url),
            ContentBase::Port(port) => Value::from(port),
            ContentBase::Disabled => Value::Bool(false),
            ContentBase::Opaque(value) => value,
        }
    }
}
