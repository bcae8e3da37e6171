//! Error definitions.
//!
//! Generation itself only fails on file-system errors, which are carried through
//! untouched. Loading or validating a configuration adds two more failure kinds.

use thiserror::Error;

/// Errors produced while configuring a generator or writing a trace.
#[derive(Debug, Error)]
pub enum TraceError {
    /// The output could not be created, written, or flushed.
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// A configuration document is not valid JSON for [`crate::Config`].
    #[error("failed to parse configuration: {0}")]
    Parse(#[from] serde_json::Error),

    /// A configuration value breaks a catalog invariant.
    #[error("invalid configuration: {0}")]
    Config(String),
}

impl TraceError {
    /// Builds a [`TraceError::Config`] from any displayable message.
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, TraceError>;
