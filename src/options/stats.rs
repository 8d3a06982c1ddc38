//! Build-status reporting configuration

use super::is_truthy;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Stats display configuration: a plain toggle or a structured record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "Value", into = "Value")]
pub enum StatsValue {
    Toggle(bool),
    Record(StatsRecord),
}

/// Structured stats options. `cached` and `cachedAssets` are always present.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StatsRecord {
    pub cached: bool,
    pub cached_assets: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub colors: Option<Value>,
    #[serde(flatten)]
    pub rest: Map<String, Value>,
}

impl StatsRecord {
    /// `{cached: false, cachedAssets: false}`
    pub fn new() -> Self {
        Self::default()
    }

    fn from_map(mut map: Map<String, Value>) -> Self {
        let mut flag = |key: &str| map.remove(key).is_some_and(|v| is_truthy(&v));
        let cached = flag("cached");
        let cached_assets = flag("cachedAssets");
        let colors = map.remove("colors");
        Self {
            cached,
            cached_assets,
            colors,
            rest: map,
        }
    }
}

impl From<Value> for StatsValue {
    fn from(value: Value) -> Self {
        match value {
            Value::Bool(b) => StatsValue::Toggle(b),
            Value::Object(map) => StatsValue::Record(StatsRecord::from_map(map)),
            // Named presets ("minimal", "errors-only") keep their meaning as `preset`.
            Value::String(preset) => {
                let mut rest = Map::new();
                rest.insert("preset".to_string(), Value::String(preset));
                StatsValue::Record(StatsRecord {
                    rest,
                    ..StatsRecord::default()
                })
            }
            other => StatsValue::Toggle(is_truthy(&other)),
        }
    }
}

impl From<StatsValue> for Value {
    fn from(stats: StatsValue) -> Self {
        match stats {
            StatsValue::Toggle(b) => Value::Bool(b),
            StatsValue::Record(record) => {
                let mut map = Map::new();
                map.insert("cached".to_string(), Value::Bool(record.cached));
                map.insert("cachedAssets".to_string(), Value::Bool(record.cached_assets));
                if let Some(colors) = record.colors {
                    map.insert("colors".to_string(), colors);
                }
                map.extend(record.rest);
                Value::Object(map)
            }
        }
    }
}
