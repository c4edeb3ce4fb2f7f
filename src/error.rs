//! Error types for forkful operations.
//!
//! This module defines [`ForkfulError`], the primary error type used throughout
//! the crate, and a [`Result`] type alias for convenience.
//!
//! # Error Handling Strategy
//!
//! - Persistence failures are absorbed at the store boundary and logged; they
//!   only surface from the fallible store primitives
//! - `InvalidArgument` is returned to callers of the favorites engine
//! - Use `anyhow::Error` (via `ForkfulError::Other`) for unexpected errors

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for forkful operations.
#[derive(Debug, Error)]
pub enum ForkfulError {
    /// The storage medium could not be read or written.
    #[error("Persistence unavailable for '{key}': {message}")]
    PersistenceUnavailable { key: String, message: String },

    /// Stored data is not valid JSON or does not have the expected shape.
    #[error("Malformed data under '{key}': {message}")]
    MalformedPersistedData { key: String, message: String },

    /// A caller passed input that would break an engine invariant.
    #[error("Invalid argument: {message}")]
    InvalidArgument { message: String },

    /// Configuration file not found at the requested location.
    #[error("Configuration not found: {path}")]
    ConfigNotFound { path: PathBuf },

    /// Failed to parse configuration file.
    #[error("Failed to parse config at {path}: {message}")]
    ConfigParseError { path: PathBuf, message: String },

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic wrapped error for anyhow interop.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl ForkfulError {
    /// Build an [`ForkfulError::InvalidArgument`] from a message.
    pub fn invalid_argument(message: impl Into<String>) -> Self {
        Self::InvalidArgument {
            message: message.into(),
        }
    }
}

/// Result type alias for forkful operations.
pub type Result<T> = std::result::Result<T, ForkfulError>;
