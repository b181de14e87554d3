//! Error types for the report binary.
//!
//! [`ReportError`] wraps every failure between reading the inputs and
//! printing the report, giving `main` a single type to propagate with `?`.

use std::path::PathBuf;

/// Top-level error for the report binary.
#[derive(Debug, thiserror::Error)]
pub enum ReportError {
    /// The configuration file exists but could not be read.
    #[error("failed to read config file {}: {source}", .path.display())]
    ConfigRead {
        /// Path of the configuration file.
        path: PathBuf,
        /// The underlying I/O error.
        source: std::io::Error,
    },

    /// The configuration file is not valid.
    #[error("config error: {source}")]
    Config {
        /// The underlying config error.
        #[from]
        source: mapper_engine::ConfigError,
    },

    /// The person snapshot could not be read.
    #[error("failed to read {}: {source}", .path.display())]
    Snapshot {
        /// Path of the snapshot file.
        path: PathBuf,
        /// The underlying I/O error.
        source: std::io::Error,
    },

    /// The snapshot or the report could not be (de)serialized.
    #[error("JSON error: {source}")]
    Json {
        /// The underlying JSON error.
        #[from]
        source: serde_json::Error,
    },
}
