//! Argument dispatch table: one rule per recognized argument name.

use super::content_base::normalize_content_base;
use super::derive::default_stats;
use super::MergeState;
use crate::args::{ArgKey, CliValue};
use crate::options::{OpenTarget, StatsValue};
use tracing::debug;

/// A field-specific rule, applied once per supplied argument.
pub(crate) type Rule = fn(&mut MergeState<'_>, &str, &CliValue);

pub(crate) fn rule_for(key: ArgKey) -> Rule {
    match key {
        ArgKey::Host => apply_host,
        ArgKey::AllowedHosts => apply_allowed_hosts,
        ArgKey::Stdin => apply_stdin,
        ArgKey::OpenPage => apply_open_page,
        ArgKey::Open => apply_open,
        ArgKey::Color => apply_color,
        ArgKey::ContentBase => apply_content_base,
        // Read by the derivation pass.
        ArgKey::Port | ArgKey::Hot | ArgKey::HotOnly => deferred,
        // Overwrite when declared; the derivation pass fills them otherwise.
        ArgKey::ClientLogLevel | ArgKey::Info | ArgKey::Quiet | ArgKey::Passthrough => {
            apply_passthrough
        }
    }
}

/// The default loopback name only wins when no host is configured.
fn apply_host(state: &mut MergeState<'_>, name: &str, value: &CliValue) {
    let host = value.to_text();
    if host != state.context.default_host || state.options.host.is_none() {
        debug!(argument = name, host = %host, "Host taken from CLI");
        state.options.host = Some(host);
    } else {
        debug!(argument = name, "Configured host kept over default loopback name");
    }
}

fn apply_allowed_hosts(state: &mut MergeState<'_>, name: &str, value: &CliValue) {
    let hosts = match value {
        CliValue::List(items) => items.clone(),
        other => other.to_text().split(',').map(str::to_string).collect(),
    };
    debug!(argument = name, count = hosts.len(), "Allowed hosts taken from CLI");
    state.options.allowed_hosts = Some(hosts);
}

fn apply_stdin(state: &mut MergeState<'_>, name: &str, value: &CliValue) {
    if value.is_truthy() {
        debug!(argument = name, "Exit on stdin end requested");
        state.exit_on_stdin_end = true;
    }
}

fn apply_open_page(state: &mut MergeState<'_>, name: &str, value: &CliValue) {
    let page = value.to_text();
    debug!(argument = name, page = %page, "Open page taken from CLI");
    state.options.open = Some(OpenTarget::Enabled(true));
    state.options.open_page = Some(page);
}

fn apply_open(state: &mut MergeState<'_>, name: &str, value: &CliValue) {
    let open = match value {
        CliValue::Text(browser) if browser.is_empty() => OpenTarget::Enabled(true),
        CliValue::Text(browser) => OpenTarget::Browser(browser.clone()),
        CliValue::Bool(enabled) => OpenTarget::Enabled(*enabled),
        other => OpenTarget::Browser(other.to_text()),
    };
    debug!(argument = name, open = ?open, "Open taken from CLI");
    state.options.open = Some(open);
}

/// Colors layer onto a stats record only; a boolean `stats` is left alone.
fn apply_color(state: &mut MergeState<'_>, name: &str, value: &CliValue) {
    if state.options.stats.is_none() {
        state.options.stats = Some(default_stats(state.target));
    }
    match state.options.stats.as_mut() {
        Some(StatsValue::Record(record)) if record.colors.is_none() => {
            debug!(argument = name, "Stats colors taken from CLI");
            record.colors = Some(value.to_json());
        }
        _ => debug!(argument = name, "Stats colors already decided"),
    }
}

fn apply_content_base(state: &mut MergeState<'_>, name: &str, value: &CliValue) {
    let content_base = normalize_content_base(value, state.base_dir);
    debug!(argument = name, content_base = ?content_base, "Content base taken from CLI");
    state.options.content_base = Some(content_base);
}

fn deferred(_state: &mut MergeState<'_>, _name: &str, _value: &CliValue) {}

fn apply_passthrough(state: &mut MergeState<'_>, name: &str, value: &CliValue) {
    if state.options.overwrite_declared(name, value.to_json()) {
        debug!(argument = name, "Declared option overridden from CLI");
    } else {
        debug!(argument = name, "Argument dropped: option not declared");
    }
}
