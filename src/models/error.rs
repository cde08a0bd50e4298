//! Error types for mathforge.
//!
//! The error model is propagate-and-abort: generator sampling and LaTeX
//! formatting are infallible given valid parameters, so fallible operations
//! are confined to configuration loading and file I/O.

use thiserror::Error;

/// Top-level error type for mathforge.
#[derive(Debug, Error)]
pub enum ForgeError {
    #[error("Configuration error: {0}")]
    Config(#[from] super::ConfigError),

    #[error("Unknown problem kind: {0}")]
    UnknownProblemKind(String),

    #[error("IO error: {context}")]
    Io {
        context: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Internal error: {0}")]
    Internal(String),
}

impl ForgeError {
    /// Create an IO error with context.
    pub fn io(context: impl Into<String>, source: std::io::Error) -> Self {
        Self::Io {
            context: context.into(),
            source,
        }
    }
}

/// Result type alias for mathforge.
pub type Result<T> = std::result::Result<T, ForgeError>;
