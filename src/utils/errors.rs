//! Error handling for ACDICE
//!
//! This module defines the main error types used throughout the
//! configuration subsystem and provides a unified error handling strategy.

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for the ACDICE configuration subsystem
#[derive(Error, Debug)]
pub enum AcdiceError {
    #[error("Configuration error: {field} = {value}: {constraint}")]
    Config {
        field: String,
        value: String,
        constraint: String,
    },

    #[error("Configuration source error: {0}")]
    ConfigSource(#[from] config::ConfigError),

    #[error("Failed to create directory {path}: {source}")]
    Filesystem {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl AcdiceError {
    /// Build a field-level constraint violation
    pub fn config(
        field: impl Into<String>,
        value: impl ToString,
        constraint: impl Into<String>,
    ) -> Self {
        AcdiceError::Config {
            field: field.into(),
            value: value.to_string(),
            constraint: constraint.into(),
        }
    }

    /// Field name of a constraint violation, if this is one
    pub fn field(&self) -> Option<&str> {
        match self {
            AcdiceError::Config { field, .. } => Some(field),
            _ => None,
        }
    }
}

/// Result type alias for ACDICE operations
pub type Result<T> = std::result::Result<T, AcdiceError>;
