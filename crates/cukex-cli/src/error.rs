//! Error types for the command line front end.

use thiserror::Error;

/// Failures raised before any expression is translated.
#[derive(Debug, Error)]
pub enum CliError {
    /// An invalid configuration value was provided.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}
