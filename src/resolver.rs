//! Resolver
//!
//! Reconciles the build configuration's embedded server options with the CLI
//! arguments and produces the options record the server bootstrap consumes.
//!
//! A merge runs in three passes:
//! 1. Structural setup: default the build mode, copy the embedded options.
//! 2. Dispatch: every supplied argument goes through the rule its name selects.
//! 3. Derivation: fields still unset are filled from the build configuration,
//!    the remaining CLI flags and the port precedence rule.
//!
//! The merge is pure apart from logging. Requests that reach outside it (waiting
//! for stdin to close) come back as flags on [`Resolution`] for the caller to act on.

use crate::args::{ArgKey, CliArguments};
use crate::build::{BuildConfiguration, BuildTarget};
use crate::config::ResolverContext;
use crate::options::ServerOptions;
use crate::paths;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

mod content_base;
mod derive;
mod dispatch;

pub use content_base::normalize_content_base;
pub use derive::resolve_port;

/// Merges build configuration and CLI arguments under a fixed precedence policy.
#[derive(Debug, Clone, Default)]
pub struct Resolver {
    context: ResolverContext,
    base_dir: Option<PathBuf>,
}

/// Outcome of a merge.
#[derive(Debug, Clone, PartialEq)]
pub struct Resolution {
    /// Fully-resolved options
    pub options: ServerOptions,

    /// The CLI asked for the process to exit once stdin closes
    pub exit_on_stdin_end: bool,
}

impl Resolution {
    /// Store a copy of the resolved options as the first target's `devServer`.
    pub fn attach_to(&self, build: &mut BuildConfiguration) {
        build.first_mut().dev_server = Some(self.options.clone());
    }

    pub fn into_options(self) -> ServerOptions {
        self.options
    }
}

/// Working state for one merge call.
pub(crate) struct MergeState<'a> {
    pub(crate) options: ServerOptions,
    pub(crate) target: &'a BuildTarget,
    pub(crate) context: &'a ResolverContext,
    pub(crate) base_dir: &'a Path,
    pub(crate) exit_on_stdin_end: bool,
}

impl Resolver {
    pub fn new(context: ResolverContext) -> Self {
        Self {
            context,
            base_dir: None,
        }
    }

    /// Resolve relative content-base paths against `dir` instead of the working directory.
    pub fn with_base_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.base_dir = Some(dir.into());
        self
    }

    pub fn context(&self) -> &ResolverContext {
        &self.context
    }

    /// Merge `args` into the server options embedded in `build`.
    ///
    /// The first target's `mode` is defaulted in place; an empty target list
    /// gains a default target first. The embedded options are
    /// copied, not moved: call [`Resolution::attach_to`] to make the resolved
    /// record visible through the build configuration.
    pub fn merge(&self, build: &mut BuildConfiguration, args: &CliArguments) -> Resolution {
        let target = build.first_mut();
        if target.mode.is_none() {
            debug!(mode = ?self.context.default_mode, "Build mode defaulted");
            target.mode = Some(self.context.default_mode);
        }
        let target: &BuildTarget = target;

        let base_dir = self.base_dir.clone().unwrap_or_else(paths::current_dir);
        let mut state = MergeState {
            options: target.dev_server.clone().unwrap_or_default(),
            target,
            context: &self.context,
            base_dir: &base_dir,
            exit_on_stdin_end: false,
        };

        for (name, value) in args.iter() {
            let rule = dispatch::rule_for(ArgKey::from_name(name));
            rule(&mut state, name, value);
        }

        derive::apply(&mut state, args);

        info!(
            arguments = args.len(),
            port = ?state.options.port,
            host = ?state.options.host,
            public_path = ?state.options.public_path,
            "Server options resolved"
        );

        Resolution {
            options: state.options,
            exit_on_stdin_end: state.exit_on_stdin_end,
        }
    }
}
