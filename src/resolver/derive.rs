//! Derivation pass: fills fields the dispatch pass left unset.

use super::MergeState;
use crate::args::CliArguments;
use crate::build::BuildTarget;
use crate::options::{StatsRecord, StatsValue};
use crate::paths::is_absolute_url;
use tracing::debug;

pub(crate) fn apply(state: &mut MergeState<'_>, args: &CliArguments) {
    derive_public_path(state);
    derive_output_fields(state);
    derive_cli_flags(state, args);

    if state.options.stats.is_none() {
        state.options.stats = Some(default_stats(state.target));
    }

    if !args.info() {
        state.options.no_info = Some(true);
    }
    if args.quiet() {
        state.options.quiet = Some(true);
    }

    if state.options.opens_on_start() && state.options.open_page.is_none() {
        state.options.open_page = Some(String::new());
    }

    state.options.port = resolve_port(
        args.port(),
        state.options.port,
        state.context.default_port,
    );
}

/// Stats used when nothing declared them: the build's own, else `{cached: false, cachedAssets: false}`.
pub(crate) fn default_stats(target: &BuildTarget) -> StatsValue {
    target
        .stats
        .clone()
        .unwrap_or_else(|| StatsValue::Record(StatsRecord::new()))
}

/// An empty public path counts as unset.
fn derive_public_path(state: &mut MergeState<'_>) {
    if state
        .options
        .public_path
        .as_deref()
        .is_some_and(|path| !path.is_empty())
    {
        return;
    }

    let raw = state.target.output_public_path().unwrap_or("");
    let public_path = if is_absolute_url(raw) || raw.starts_with('/') {
        raw.to_string()
    } else {
        format!("/{}", raw)
    };
    debug!(public_path = %public_path, "Public path derived from build output");
    state.options.public_path = Some(public_path);
}

/// An empty filename counts as unset, as for the public path.
fn derive_output_fields(state: &mut MergeState<'_>) {
    if state.options.filename.as_deref().map_or(true, str::is_empty) {
        state.options.filename = state.target.output_filename().map(str::to_string);
    }
    if state.options.watch_options.is_none() {
        state.options.watch_options = state.target.watch_options.clone();
    }
}

/// Configured `hot` and `hotOnly` take precedence over the CLI. `clientLogLevel`
/// is only filled here when nothing declared it.
fn derive_cli_flags(state: &mut MergeState<'_>, args: &CliArguments) {
    if state.options.hot.is_none() {
        state.options.hot = args.hot();
    }
    if state.options.hot_only.is_none() {
        state.options.hot_only = args.hot_only();
    }
    if state.options.client_log_level.is_none() {
        state.options.client_log_level = args.client_log_level();
    }
}

/// Port precedence.
///
/// A CLI port equal to `default_port` is the CLI's own default, so a configured
/// port wins over it. Any other CLI port wins over configuration.
pub fn resolve_port(arg_port: Option<u16>, opt_port: Option<u16>, default_port: u16) -> Option<u16> {
    if arg_port == Some(default_port) {
        opt_port.or(arg_port)
    } else {
        arg_port.or(opt_port)
    }
}
