//! serveconf: Development Server Options Resolution
//!
//! Reconciles a build configuration (with its embedded server options) and
//! command-line arguments into the single options record a development server
//! consumes, under an explicit field-by-field precedence policy.

pub mod args;
pub mod build;
pub mod cli;
pub mod config;
pub mod error;
pub mod lifecycle;
pub mod logging;
pub mod options;
pub mod paths;
pub mod resolver;

pub use args::{ArgKey, CliArguments, CliValue};
pub use build::{BuildConfiguration, BuildTarget, Mode, OutputConfig};
pub use config::ResolverContext;
pub use error::ServeError;
pub use options::{ContentBase, OpenTarget, ServerOptions, StatsRecord, StatsValue};
pub use resolver::{Resolution, Resolver};
