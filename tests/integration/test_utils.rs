//! Shared helpers for integration tests.

use serde_json::Value;
use serveconf::{BuildConfiguration, CliArguments, Resolution, Resolver, ResolverContext};

/// Resolver with the conventional 8080 default port and a fixed base directory.
pub fn resolver() -> Resolver {
    Resolver::new(ResolverContext::with_default_port(8080)).with_base_dir("/work/site")
}

pub fn build_config(value: Value) -> BuildConfiguration {
    serde_json::from_value(value).expect("valid build configuration")
}

/// Merge a fresh copy of `build` with `args`.
pub fn merge(build: Value, args: &CliArguments) -> Resolution {
    let mut config = build_config(build);
    resolver().merge(&mut config, args)
}
