//! Command-line arguments as seen by the resolver
//!
//! The flat name → value mapping produced by argument parsing. Names use the
//! dev-server's camelCase spelling (`allowedHosts`, `contentBase`).

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A single parsed argument value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CliValue {
    Bool(bool),
    Int(i64),
    Text(String),
    List(Vec<String>),
}

impl CliValue {
    pub fn to_json(&self) -> Value {
        match self {
            CliValue::Bool(b) => Value::Bool(*b),
            CliValue::Int(n) => Value::from(*n),
            CliValue::Text(s) => Value::String(s.clone()),
            CliValue::List(items) => Value::from(items.clone()),
        }
    }

    /// String form of the value; lists are comma-joined.
    pub fn to_text(&self) -> String {
        match self {
            CliValue::Bool(b) => b.to_string(),
            CliValue::Int(n) => n.to_string(),
            CliValue::Text(s) => s.clone(),
            CliValue::List(items) => items.join(","),
        }
    }

    pub fn is_truthy(&self) -> bool {
        match self {
            CliValue::Bool(b) => *b,
            CliValue::Int(n) => *n != 0,
            CliValue::Text(s) => !s.is_empty(),
            CliValue::List(_) => true,
        }
    }
}

impl From<bool> for CliValue {
    fn from(value: bool) -> Self {
        CliValue::Bool(value)
    }
}

impl From<i64> for CliValue {
    fn from(value: i64) -> Self {
        CliValue::Int(value)
    }
}

impl From<u16> for CliValue {
    fn from(value: u16) -> Self {
        CliValue::Int(i64::from(value))
    }
}

impl From<&str> for CliValue {
    fn from(value: &str) -> Self {
        CliValue::Text(value.to_string())
    }
}

impl From<String> for CliValue {
    fn from(value: String) -> Self {
        CliValue::Text(value)
    }
}

impl From<Vec<String>> for CliValue {
    fn from(value: Vec<String>) -> Self {
        CliValue::List(value)
    }
}

/// Argument names the resolver gives a dedicated rule, plus a catch-all.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ArgKey {
    Host,
    AllowedHosts,
    Stdin,
    OpenPage,
    Open,
    Color,
    ContentBase,
    Port,
    Hot,
    HotOnly,
    ClientLogLevel,
    Info,
    Quiet,
    /// Any other name: written only when the options already declare it
    Passthrough,
}

impl ArgKey {
    pub fn from_name(name: &str) -> Self {
        match name {
            "host" => ArgKey::Host,
            "allowedHosts" => ArgKey::AllowedHosts,
            "stdin" => ArgKey::Stdin,
            "openPage" => ArgKey::OpenPage,
            "open" => ArgKey::Open,
            "color" => ArgKey::Color,
            "contentBase" => ArgKey::ContentBase,
            "port" => ArgKey::Port,
            "hot" => ArgKey::Hot,
            "hotOnly" => ArgKey::HotOnly,
            "clientLogLevel" => ArgKey::ClientLogLevel,
            "info" => ArgKey::Info,
            "quiet" => ArgKey::Quiet,
            _ => ArgKey::Passthrough,
        }
    }
}

/// Ordered name → value mapping. Setting an existing name replaces its value in place.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CliArguments {
    entries: Vec<(String, CliValue)>,
}

impl CliArguments {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder form of [`CliArguments::set`].
    pub fn with(mut self, name: impl Into<String>, value: impl Into<CliValue>) -> Self {
        self.set(name, value);
        self
    }

    pub fn set(&mut self, name: impl Into<String>, value: impl Into<CliValue>) {
        let name = name.into();
        let value = value.into();
        match self.entries.iter_mut().find(|(existing, _)| *existing == name) {
            Some((_, slot)) => *slot = value,
            None => self.entries.push((name, value)),
        }
    }

    pub fn get(&self, name: &str) -> Option<&CliValue> {
        self.entries
            .iter()
            .find(|(existing, _)| existing == name)
            .map(|(_, value)| value)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &CliValue)> {
        self.entries.iter().map(|(name, value)| (name.as_str(), value))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// `port`, when it is a valid port number.
    pub fn port(&self) -> Option<u16> {
        match self.get("port")? {
            CliValue::Int(n) => u16::try_from(*n).ok(),
            CliValue::Text(s) => s.trim().parse().ok(),
            _ => None,
        }
    }

    pub fn hot(&self) -> Option<bool> {
        self.get("hot").map(CliValue::is_truthy)
    }

    pub fn hot_only(&self) -> Option<bool> {
        self.get("hotOnly").map(CliValue::is_truthy)
    }

    /// `clientLogLevel`, when supplied and non-empty.
    pub fn client_log_level(&self) -> Option<String> {
        self.get("clientLogLevel")
            .filter(|value| value.is_truthy())
            .map(CliValue::to_text)
    }

    /// Whether informational output was requested. Absent means no.
    pub fn info(&self) -> bool {
        self.get("info").is_some_and(CliValue::is_truthy)
    }

    pub fn quiet(&self) -> bool {
        self.get("quiet").is_some_and(CliValue::is_truthy)
    }
}

impl<K, V> FromIterator<(K, V)> for CliArguments
where
    K: Into<String>,
    V: Into<CliValue>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut args = CliArguments::new();
        for (name, value) in iter {
            args.set(name, value);
        }
        args
    }
}
