//! CLI domain: parse, route, help, output, and presentation only.
//! No resolution logic; the route table dispatches to the resolver and formatters.

mod help;
mod output;
mod parse;
mod presentation;
mod route;

pub use help::command_name;
pub use output::map_error;
pub use parse::{Cli, Commands, ServerFlags};
pub use presentation::{
    format_build_json, format_context_json, format_context_text, format_options_json,
    format_options_text,
};
pub use route::{CommandOutput, RunContext};
