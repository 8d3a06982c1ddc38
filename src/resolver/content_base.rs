//! Content-base normalization

use crate::args::CliValue;
use crate::options::ContentBase;
use crate::paths::{is_absolute_url, resolve_from};
use serde_json::Value;
use std::path::Path;

/// Normalize a CLI content-base value.
///
/// Checks run in order: list of directories, single digit (a port), anything
/// that is not an absolute URL (a directory under `base_dir`), negated flag
/// (disabled). Absolute URLs and a bare `true` pass through unchanged.
pub fn normalize_content_base(value: &CliValue, base_dir: &Path) -> ContentBase {
    match value {
        CliValue::List(entries) => ContentBase::Paths(
            entries
                .iter()
                .map(|entry| resolve_from(base_dir, entry))
                .collect(),
        ),
        CliValue::Bool(false) => ContentBase::Disabled,
        CliValue::Bool(true) => ContentBase::Opaque(Value::Bool(true)),
        CliValue::Text(_) | CliValue::Int(_) => {
            let raw = value.to_text();
            if let Some(port) = single_digit(&raw) {
                ContentBase::Port(port)
            } else if !is_absolute_url(&raw) {
                ContentBase::Path(resolve_from(base_dir, &raw))
            } else {
                ContentBase::Url(raw)
            }
        }
    }
}

fn single_digit(raw: &str) -> Option<u16> {
    let mut chars = raw.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => c.to_digit(10).and_then(|d| u16::try_from(d).ok()),
        _ => None,
    }
}
