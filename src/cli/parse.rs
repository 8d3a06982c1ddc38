//! CLI parse: clap types for serveconf. Definitions plus the flag → argument mapping.

use crate::args::{CliArguments, CliValue};
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// serveconf - resolve development server options from build configuration and CLI flags
#[derive(Parser)]
#[command(name = "serveconf")]
#[command(about = "Resolve development server options from build configuration and CLI flags")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Workspace root directory (where serveconf.toml is looked up)
    #[arg(long, default_value = ".")]
    pub workspace: PathBuf,

    /// Configuration file path (overrides default config loading)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Enable verbose logging (default: off)
    #[arg(long, default_value = "false")]
    pub verbose: bool,

    /// Disable logging entirely
    #[arg(long, default_value = "false")]
    pub quiet: bool,

    /// Log level (trace, debug, info, warn, error, off)
    #[arg(long)]
    pub log_level: Option<String>,

    /// Log format (json, text)
    #[arg(long)]
    pub log_format: Option<String>,

    /// Log output (stdout, stderr, file)
    #[arg(long)]
    pub log_output: Option<String>,

    /// Log file path (if output is "file")
    #[arg(long)]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Merge a build configuration with dev-server flags and print the result
    Resolve {
        /// Build configuration file (.json or .toml)
        #[arg(long)]
        build_config: PathBuf,

        #[command(flatten)]
        server: ServerFlags,

        /// Output format (json or text)
        #[arg(long, default_value = "json")]
        format: String,

        /// Print the whole build configuration with the resolved options attached
        #[arg(long)]
        attach: bool,
    },
    /// Show the effective resolver baselines (default port, host, mode)
    Context {
        /// Output format (json or text)
        #[arg(long, default_value = "text")]
        format: String,
    },
}

/// Dev-server flags, converted into resolver arguments.
#[derive(Args, Debug, Default, Clone)]
pub struct ServerFlags {
    /// Host to bind to
    #[arg(long)]
    pub host: Option<String>,

    /// Port to listen on (defaults to the configured default port)
    #[arg(long)]
    pub port: Option<u16>,

    /// Comma-separated list of hosts allowed to access the server
    #[arg(long)]
    pub allowed_hosts: Option<String>,

    /// Exit once stdin closes
    #[arg(long)]
    pub stdin: bool,

    /// Open the default browser, or the named one
    #[arg(long, num_args = 0..=1, default_missing_value = "", value_name = "BROWSER")]
    pub open: Option<String>,

    /// Page to open in the browser
    #[arg(long, num_args = 0..=1, default_missing_value = "", value_name = "PAGE")]
    pub open_page: Option<String>,

    /// Colorize build status output
    #[arg(long, overrides_with = "no_color")]
    pub color: bool,

    /// Do not colorize build status output
    #[arg(long, overrides_with = "color")]
    pub no_color: bool,

    /// Directory (or URL, or single-digit port) to serve static content from; repeatable
    #[arg(long, num_args = 1.., value_name = "BASE")]
    pub content_base: Vec<String>,

    /// Disable static content serving
    #[arg(long, conflicts_with = "content_base")]
    pub no_content_base: bool,

    /// Enable hot module replacement
    #[arg(long)]
    pub hot: bool,

    /// Enable hot module replacement without page refresh fallback
    #[arg(long)]
    pub hot_only: bool,

    /// Log level shown in the browser console
    #[arg(long)]
    pub client_log_level: Option<String>,

    /// Suppress informational build output
    #[arg(long)]
    pub no_info: bool,

    /// Print nothing but errors from the dev server
    #[arg(long)]
    pub quiet_server: bool,

    /// Serve over HTTPS
    #[arg(long)]
    pub https: bool,

    /// Enable gzip compression
    #[arg(long)]
    pub compress: bool,

    /// Public address the browser should connect to
    #[arg(long)]
    pub public: Option<String>,

    /// Unix socket to listen on instead of a port
    #[arg(long)]
    pub socket: Option<String>,

    /// URL path prefix for built assets
    #[arg(long)]
    pub public_path: Option<String>,

    /// Output filename served in lazy mode
    #[arg(long)]
    pub filename: Option<String>,
}

impl ServerFlags {
    /// Build resolver arguments from the supplied flags.
    ///
    /// Unsupplied flags are omitted, except `port` (the default port when absent)
    /// and `info` (true unless `--no-info`), which the dev-server CLI always reports.
    pub fn to_cli_arguments(&self, default_port: u16) -> CliArguments {
        let mut args = CliArguments::new();

        if let Some(ref host) = self.host {
            args.set("host", host.as_str());
        }
        args.set("port", self.port.unwrap_or(default_port));
        if let Some(ref hosts) = self.allowed_hosts {
            args.set("allowedHosts", hosts.as_str());
        }
        if self.stdin {
            args.set("stdin", true);
        }
        if let Some(ref browser) = self.open {
            args.set("open", browser.as_str());
        }
        if let Some(ref page) = self.open_page {
            args.set("openPage", page.as_str());
        }
        if self.color {
            args.set("color", true);
        } else if self.no_color {
            args.set("color", false);
        }
        match self.content_base.as_slice() {
            [] if self.no_content_base => args.set("contentBase", false),
            [] => {}
            [single] => args.set("contentBase", single.as_str()),
            many => args.set("contentBase", CliValue::List(many.to_vec())),
        }
        if self.hot {
            args.set("hot", true);
        }
        if self.hot_only {
            args.set("hotOnly", true);
        }
        if let Some(ref level) = self.client_log_level {
            args.set("clientLogLevel", level.as_str());
        }
        args.set("info", !self.no_info);
        if self.quiet_server {
            args.set("quiet", true);
        }
        if self.https {
            args.set("https", true);
        }
        if self.compress {
            args.set("compress", true);
        }
        if let Some(ref public) = self.public {
            args.set("public", public.as_str());
        }
        if let Some(ref socket) = self.socket {
            args.set("socket", socket.as_str());
        }
        if let Some(ref public_path) = self.public_path {
            args.set("publicPath", public_path.as_str());
        }
        if let Some(ref filename) = self.filename {
            args.set("filename", filename.as_str());
        }

        args
    }
}
