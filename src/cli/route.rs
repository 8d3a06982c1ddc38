//! CLI route: single route table and run context. Dispatches to the resolver and presentation.

use crate::build::BuildConfiguration;
use crate::cli::command_name;
use crate::cli::parse::Commands;
use crate::cli::presentation::{
    format_build_json, format_context_json, format_context_text, format_options_json,
    format_options_text,
};
use crate::config::{ConfigLoader, ServeConfig};
use crate::error::ServeError;
use crate::resolver::Resolver;
use std::path::PathBuf;
use tracing::{debug, info};

/// Runtime context for CLI execution: workspace, config paths, and loaded configuration.
/// Built from workspace path and optional config path using ConfigLoader only.
pub struct RunContext {
    workspace_root: PathBuf,
    config: ServeConfig,
}

/// Text to print, plus follow-up the binary must perform after printing.
#[derive(Debug, Clone, PartialEq)]
pub struct CommandOutput {
    pub text: String,
    pub exit_on_stdin_end: bool,
}

impl CommandOutput {
    fn text(text: String) -> Self {
        Self {
            text,
            exit_on_stdin_end: false,
        }
    }
}

impl RunContext {
    /// Create run context from workspace root and optional config path. Uses ConfigLoader only.
    pub fn new(workspace_root: PathBuf, config_path: Option<PathBuf>) -> Result<Self, ServeError> {
        let config = if let Some(ref cfg_path) = config_path {
            ConfigLoader::load_from_file(cfg_path)?
        } else {
            ConfigLoader::load(&workspace_root)?
        };
        Ok(Self {
            workspace_root,
            config,
        })
    }

    pub fn config(&self) -> &ServeConfig {
        &self.config
    }

    /// Execute a parsed command.
    pub fn execute(&self, command: &Commands) -> Result<CommandOutput, ServeError> {
        debug!(
            command = command_name(command),
            workspace = %self.workspace_root.display(),
            "Executing command"
        );

        match command {
            Commands::Resolve {
                build_config,
                server,
                format,
                attach,
            } => {
                let mut build = BuildConfiguration::load(build_config)?;
                let args = server.to_cli_arguments(self.config.resolver.default_port);
                let resolution = Resolver::new(self.config.resolver.clone()).merge(&mut build, &args);

                let text = if *attach {
                    resolution.attach_to(&mut build);
                    format_build_json(&build)?
                } else if format == "text" {
                    format_options_text(&resolution.options)?
                } else {
                    format_options_json(&resolution.options)?
                };

                info!(
                    build_config = %build_config.display(),
                    exit_on_stdin_end = resolution.exit_on_stdin_end,
                    "Resolve completed"
                );
                Ok(CommandOutput {
                    text,
                    exit_on_stdin_end: resolution.exit_on_stdin_end,
                })
            }
            Commands::Context { format } => {
                let text = if format == "json" {
                    format_context_json(&self.config.resolver)?
                } else {
                    format_context_text(&self.config.resolver)
                };
                Ok(CommandOutput::text(text))
            }
        }
    }
}
