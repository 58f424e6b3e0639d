//! Corpus configuration module.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use super::{ConfigResult, Validate};
use crate::error::config::ConfigError;

/// Corpus loading configuration.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct CorpusConfig {
    /// Word-frequency file loaded at startup
    pub path: Option<PathBuf>,

    /// Stop after this many words have been inserted (all when absent)
    pub max_entries: Option<usize>,
}

impl Validate for CorpusConfig {
    fn validate(&self) -> ConfigResult<()> {
        if self.max_entries == Some(0) {
            return Err(ConfigError::invalid(
                "corpus.max_entries",
                "must be greater than 0 when set",
            ));
        }
        Ok(())
    }
}
