//! Merge rules: defaults, override order, conflict handling.

use config::Config;
use config::ConfigBuilder;
use config::ConfigError;

/// Create a Config builder with merge policy defaults applied.
pub fn builder_with_defaults() -> Result<ConfigBuilder<config::builder::DefaultState>, ConfigError>
{
    Config::builder()
        .set_default("resolver.default_port", i64::from(crate::config::default_port()))?
        .set_default("resolver.default_host", crate::config::default_host())?
        .set_default("resolver.default_mode", "development")
}
