//! Corpus error module.
//!
//! This module defines error types that may occur while reading a
//! word-frequency corpus into a dictionary.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur during corpus loading.
#[derive(Error, Debug)]
pub enum CorpusError {
    /// Error when the corpus file is missing.
    #[error("Corpus file not found: {0}")]
    NotFound(PathBuf),

    /// Error when the corpus cannot be read.
    #[error("Failed to read corpus: {0}")]
    Io(#[from] std::io::Error),

    /// Error when a corpus line is malformed.
    #[error("Malformed corpus line {line}: {message}")]
    Parse {
        /// 1-based line number
        line: usize,
        /// Description of the problem
        message: String,
    },
}
