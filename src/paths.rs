//! Path resolution and URL detection used when normalizing option values

use std::path::{Component, Path, PathBuf};
use tracing::warn;
use url::Url;

/// The process working directory, or the filesystem root when it is unavailable.
pub fn current_dir() -> PathBuf {
    std::env::current_dir().unwrap_or_else(|e| {
        warn!(error = %e, "Current directory unavailable, resolving from filesystem root");
        PathBuf::from(std::path::MAIN_SEPARATOR_STR)
    })
}

/// Resolve `raw` to an absolute path relative to the current working directory.
///
/// Resolution is lexical: the path does not need to exist.
pub fn resolve_path(raw: &str) -> PathBuf {
    resolve_from(&current_dir(), raw)
}

/// Resolve `raw` against `base` without touching the filesystem.
///
/// This function:
/// 1. Joins `raw` onto `base` (an absolute `raw` replaces `base`)
/// 2. Folds `.` and `..` segments (`..` never climbs above the root)
/// 3. Drops trailing separators
/// 4. Strips Windows verbatim prefixes where a plain form exists
pub fn resolve_from(base: &Path, raw: &str) -> PathBuf {
    let joined = base.join(raw);
    let mut resolved = PathBuf::new();

    for component in joined.components() {
        match component {
            Component::Prefix(prefix) => resolved.push(prefix.as_os_str()),
            Component::RootDir => resolved.push(Component::RootDir.as_os_str()),
            Component::CurDir => {}
            Component::ParentDir => {
                resolved.pop();
            }
            Component::Normal(name) => resolved.push(name),
        }
    }

    dunce::simplified(&resolved).to_path_buf()
}

/// Whether `raw` is an absolute URL (`scheme:` followed by anything).
///
/// Single-letter schemes are Windows drive letters (`C:\dir`), not URLs.
pub fn is_absolute_url(raw: &str) -> bool {
    match Url::parse(raw) {
        Ok(url) => url.scheme().len() > 1,
        Err(_) => false,
    }
}
