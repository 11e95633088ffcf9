//! Error types for polyver operations.
//!
//! This module defines [`PolyverError`], the error type used by the
//! configuration layer, the command runner and the CLI, and a [`Result`]
//! alias for convenience.
//!
//! # Error Handling Strategy
//!
//! - Configuration and I/O problems surface as `PolyverError` to the CLI
//! - External query failures are also `PolyverError`, but the resolver maps
//!   them into a [`FallbackReason`](crate::version::FallbackReason) instead
//!   of propagating them
//! - Use `anyhow::Error` (via `PolyverError::Other`) for unexpected errors

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for polyver operations.
#[derive(Debug, Error)]
pub enum PolyverError {
    /// Configuration file not found at expected location.
    #[error("Configuration not found: {path}")]
    ConfigNotFound { path: PathBuf },

    /// Failed to parse configuration file.
    #[error("Failed to parse config at {path}: {message}")]
    ConfigParseError { path: PathBuf, message: String },

    /// Invalid configuration structure or values.
    #[error("Invalid configuration: {message}")]
    ConfigValidationError { message: String },

    /// External command could not be spawned or exited non-zero.
    #[error("Command failed with exit code {code:?}: {command}")]
    CommandFailed { command: String, code: Option<i32> },

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic wrapped error for anyhow interop.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Result type alias for polyver operations.
pub type Result<T> = std::result::Result<T, PolyverError>;
