//! CLI command-name contract for logging and routing.

use crate::cli::parse::Commands;

/// Command name string used in log fields (e.g. "resolve", "context").
pub fn command_name(command: &Commands) -> &'static str {
    match command {
        Commands::Resolve { .. } => "resolve",
        Commands::Context { .. } => "context",
    }
}
