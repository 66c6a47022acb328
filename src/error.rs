//! Error types for Profile Card
//!
//! Centralized error handling using snafu for ergonomic error definitions.

use std::path::PathBuf;

use snafu::Snafu;

/// Main error type for the application
#[derive(Debug, Snafu)]
#[snafu(visibility(pub(crate)))]
pub enum Error {
    /// Invalid input or configuration
    #[snafu(display("Invalid: {message}"))]
    Invalid { message: String },

    /// A single roster entry that could not be decoded or failed validation
    #[snafu(display("Invalid profile #{index}: {message}"))]
    InvalidProfile { index: usize, message: String },

    /// IO error while reading a file
    #[snafu(display("IO error on {}: {source}", path.display()))]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    /// TOML deserialization error
    #[snafu(display("TOML parse error in {}: {source}", path.display()))]
    TomlDe {
        path: PathBuf,
        source: toml::de::Error,
    },
}

/// Result type alias for convenience
pub type Result<T, E = Error> = std::result::Result<T, E>;
