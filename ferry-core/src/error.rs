//! Error types for ferry-core.

use thiserror::Error;

/// All errors that can arise while building configuration.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    /// A required environment variable was not set.
    #[error("missing required environment variable {name}")]
    MissingVar { name: &'static str },
}
