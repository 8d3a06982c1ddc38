//! Environment source: SERVECONF__RESOLVER__DEFAULT_PORT=9000 style overrides.

use config::builder::DefaultState;
use config::ConfigBuilder;
use config::Environment;

/// Add environment variable overrides to builder (highest file-independent precedence).
pub fn add_to_builder(builder: ConfigBuilder<DefaultState>) -> ConfigBuilder<DefaultState> {
    builder.add_source(
        Environment::with_prefix("SERVECONF")
            .prefix_separator("__")
            .separator("__")
            .try_parsing(true),
    )
}
