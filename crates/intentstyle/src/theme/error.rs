//! Theme loading errors.

use std::path::PathBuf;

/// Error returned when a theme cannot be loaded.
#[derive(Debug, thiserror::Error)]
pub enum ThemeError {
    #[error("failed to read theme file '{}': {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid YAML theme: {0}")]
    Yaml(#[from] serde_yaml::Error),
    #[error("invalid JSON theme: {0}")]
    Json(#[from] serde_json::Error),
    #[error("unrecognized theme format for '{}' (expected .yaml, .yml or .json)", path.display())]
    UnknownFormat { path: PathBuf },
}
