//! CLI presentation: text and json formatters for resolved options and context.

use crate::build::BuildConfiguration;
use crate::config::ResolverContext;
use crate::error::ServeError;
use crate::options::ServerOptions;
use comfy_table::presets::UTF8_FULL;
use comfy_table::Table;
use serde_json::Value;

pub fn format_options_json(options: &ServerOptions) -> Result<String, ServeError> {
    Ok(serde_json::to_string_pretty(options)?)
}

/// One row per resolved option, in wire order; values shown as compact JSON.
pub fn format_options_text(options: &ServerOptions) -> Result<String, ServeError> {
    let fields = match serde_json::to_value(options)? {
        Value::Object(fields) => fields,
        other => {
            return Err(ServeError::Serialization(format!(
                "Expected options object, got {}",
                other
            )))
        }
    };

    if fields.is_empty() {
        return Ok("No server options resolved.".to_string());
    }

    let mut table = Table::new();
    table.load_preset(UTF8_FULL);
    table.set_header(vec!["Option", "Value"]);
    for (name, value) in &fields {
        let shown = match value {
            Value::String(s) => s.clone(),
            other => other.to_string(),
        };
        table.add_row(vec![name.clone(), shown]);
    }
    Ok(table.to_string())
}

pub fn format_build_json(build: &BuildConfiguration) -> Result<String, ServeError> {
    Ok(serde_json::to_string_pretty(build)?)
}

pub fn format_context_json(context: &ResolverContext) -> Result<String, ServeError> {
    Ok(serde_json::to_string_pretty(context)?)
}

pub fn format_context_text(context: &ResolverContext) -> String {
    format!(
        "Resolver context:\n  Default port: {}\n  Default host: {}\n  Default mode: {:?}",
        context.default_port, context.default_host, context.default_mode
    )
}
