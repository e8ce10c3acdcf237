//! Error types for building an AS names registry

use std::path::PathBuf;
use thiserror::Error;

/// Errors that abort loading a registry
///
/// Malformed lines are never reported here; they are skipped and logged.
#[derive(Debug, Error)]
pub enum LoadError {
    /// The source could not be opened or read
    #[error("failed to read AS names from {}: {source}", source_name(.path))]
    Io {
        /// Path of the source, if it was loaded from a file
        path: Option<PathBuf>,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// Invalid configuration provided
    #[error("Invalid configuration: {0}")]
    Config(String),
}

fn source_name(path: &Option<PathBuf>) -> String {
    match path {
        Some(path) => path.display().to_string(),
        None => "reader".to_string(),
    }
}
