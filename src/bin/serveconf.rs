//! serveconf CLI Binary
//!
//! Command-line interface for the development server options resolver.

use clap::Parser;
use serveconf::cli::{Cli, RunContext};
use serveconf::config::ConfigLoader;
use serveconf::lifecycle::install_stdin_exit_hook;
use serveconf::logging::{init_logging, LoggingConfig};
use std::process;
use tracing::{error, info};

fn main() {
    let cli = Cli::parse();

    // Build logging config from CLI args, env vars, and config file
    let logging_config = build_logging_config(&cli);

    // Initialize logging early
    if let Err(e) = init_logging(Some(&logging_config)) {
        eprintln!("Failed to initialize logging: {}", e);
        process::exit(1);
    }

    info!("serveconf starting");

    let context = match RunContext::new(cli.workspace.clone(), cli.config.clone()) {
        Ok(ctx) => ctx,
        Err(e) => {
            error!("Error loading configuration: {}", e);
            eprintln!("{}", serveconf::cli::map_error(&e));
            process::exit(1);
        }
    };

    let output = match context.execute(&cli.command) {
        Ok(output) => output,
        Err(e) => {
            error!("Command failed: {}", e);
            eprintln!("{}", serveconf::cli::map_error(&e));
            process::exit(1);
        }
    };

    println!("{}", output.text);

    if output.exit_on_stdin_end {
        match install_stdin_exit_hook() {
            Ok(handle) => {
                info!("Waiting for stdin to close");
                if handle.join().is_err() {
                    error!("stdin exit hook panicked");
                    process::exit(1);
                }
            }
            Err(e) => {
                error!("Failed to install stdin exit hook: {}", e);
                process::exit(1);
            }
        }
    }
}

/// Build logging configuration from CLI args, environment, and config file.
/// Precedence: CLI flags override config file override defaults.
fn build_logging_config(cli: &Cli) -> LoggingConfig {
    let mut config = if let Some(ref config_path) = cli.config {
        ConfigLoader::load_from_file(config_path)
            .ok()
            .map(|c| c.logging)
            .unwrap_or_default()
    } else {
        ConfigLoader::load(&cli.workspace)
            .ok()
            .map(|c| c.logging)
            .unwrap_or_default()
    };

    if cli.quiet {
        config.enabled = false;
    }
    if cli.verbose {
        config.level = "debug".to_string();
    }
    if let Some(ref level) = cli.log_level {
        config.level = level.clone();
    }
    if let Some(ref format) = cli.log_format {
        config.format = format.clone();
    }
    if let Some(ref output) = cli.log_output {
        config.output = output.clone();
    }
    if let Some(ref file) = cli.log_file {
        config.file = Some(file.clone());
    }

    config
}
