//! CLI output: error mapping from domain errors to stable CLI surface.

use crate::error::ServeError;

/// Map domain/service errors to a string for CLI output.
pub fn map_error(e: &ServeError) -> String {
    match e {
        ServeError::BuildConfigLoad { path, message } => {
            format!("Could not read build configuration {}: {}", path.display(), message)
        }
        other => other.to_string(),
    }
}
