//! Error types for dotfacts operations.
//!
//! This module defines [`DotfactsError`], the error type used throughout
//! the crate, and a [`Result`] type alias for convenience.
//!
//! # Error Handling Strategy
//!
//! - Absence of a tool or path is never an error; probes return `false`
//! - Use `DotfactsError` for the few conditions callers handle distinctly
//! - Use `anyhow::Error` (via `DotfactsError::Other`) for unexpected errors

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for dotfacts operations.
#[derive(Debug, Error)]
pub enum DotfactsError {
    /// The current user's home directory could not be determined.
    #[error("Could not determine the home directory")]
    HomeDirUnavailable,

    /// Settings file not found at an explicitly requested location.
    #[error("Configuration not found: {path}")]
    ConfigNotFound { path: PathBuf },

    /// Failed to parse the settings file.
    #[error("Failed to parse config at {path}: {message}")]
    ConfigParseError { path: PathBuf, message: String },

    /// Failed to read or parse the module arguments file.
    #[error("Invalid module arguments in {path}: {message}")]
    ModuleArgsError { path: PathBuf, message: String },

    /// A configuration file exists but could not be read.
    ///
    /// The underlying IO error is kept as the source, unmodified.
    #[error("Failed to read {path}: {source}")]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The describe call returned no instance record.
    #[error("Instance not found: {instance_id}")]
    InstanceNotFound { instance_id: String },

    /// The remote describe call failed.
    ///
    /// The client error is kept as the source, so callers can downcast to
    /// the SDK error type.
    #[error("Failed to describe instance {instance_id}: {source:#}")]
    Describe {
        instance_id: String,
        #[source]
        source: anyhow::Error,
    },

    /// The remote publish call failed.
    #[error("Failed to publish to {topic}: {source:#}")]
    Publish {
        topic: String,
        #[source]
        source: anyhow::Error,
    },

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic wrapped error for anyhow interop.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Result type alias for dotfacts operations.
pub type Result<T> = std::result::Result<T, DotfactsError>;
