//! Error types for docenv operations.
//!
//! This module defines [`DocenvError`], the primary error type used throughout
//! the application, and a [`Result`] type alias for convenience.
//!
//! # Error Handling Strategy
//!
//! - Branch detection never produces an error; its failure is carried as
//!   [`BranchSource::Fallback`](crate::environment::BranchSource::Fallback)
//! - Everything else (config, lookup, filesystem) is fatal and propagates
//!   to the process boundary
//! - Use `anyhow::Error` (via `DocenvError::Other`) for unexpected errors

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for docenv operations.
#[derive(Debug, Error)]
pub enum DocenvError {
    /// Environment configuration file not found at expected location.
    #[error("Configuration not found: {path}")]
    ConfigNotFound { path: PathBuf },

    /// Failed to parse the environment configuration file.
    #[error("Failed to parse config at {path}: {message}")]
    ConfigParseError { path: PathBuf, message: String },

    /// The resolved environment has no entry in the configuration table.
    #[error("Environment '{name}' is not defined in the configuration")]
    UnknownEnvironment { name: String },

    /// Directory traversal failed.
    #[error("Failed to walk directory: {0}")]
    Walk(#[from] walkdir::Error),

    /// Reading or writing a documentation file failed.
    #[error("IO error on {path}: {source}")]
    FileIo {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic wrapped error for anyhow interop.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Result type alias for docenv operations.
pub type Result<T> = std::result::Result<T, DocenvError>;
