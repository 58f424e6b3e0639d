//! Configuration error module.
//!
//! This module defines error types that may occur during configuration
//! loading, parsing, and validation.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur during configuration operations.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Error when the configuration file is missing.
    #[error("Configuration file not found: {0}")]
    FileNotFound(PathBuf),

    /// Error when the configuration file extension is not recognised.
    #[error("Unsupported configuration format: {0}")]
    UnsupportedFormat(PathBuf),

    /// Error when parsing or deserializing the configuration.
    #[error("Failed to parse configuration: {0}")]
    ParseError(String),

    /// Error when a configuration value fails validation.
    #[error("Invalid configuration value {key}: {message}")]
    ValidationError {
        /// Dotted path of the offending value
        key: String,
        /// Description of the valid range
        message: String,
    },
}

impl ConfigError {
    /// Shorthand for a [`ConfigError::ValidationError`].
    pub fn invalid<K: Into<String>, M: Into<String>>(key: K, message: M) -> Self {
        Self::ValidationError {
            key: key.into(),
            message: message.into(),
        }
    }
}
