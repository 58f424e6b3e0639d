//! Dictionary configuration module.
//!
//! This module defines how the ternary search tree is built and how queries
//! are answered when the caller does not say otherwise.

use serde::{Deserialize, Serialize};

use super::{ConfigResult, Validate};
use crate::data_structures::kaula_tst::{KaulaTstConfig, DEFAULT_WILDCARD};
use crate::error::config::ConfigError;

/// Dictionary configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DictionaryConfig {
    /// Pattern symbol matching any single character; exactly one character
    pub wildcard: String,

    /// Maximum stored word length in characters (unbounded when absent)
    pub max_word_len: Option<usize>,

    /// Result count used when a query does not specify one
    pub default_max_results: usize,
}

impl Default for DictionaryConfig {
    fn default() -> Self {
        Self {
            wildcard: DEFAULT_WILDCARD.to_string(),
            max_word_len: None,
            default_max_results: 10,
        }
    }
}

impl DictionaryConfig {
    /// Returns the wildcard as a single character.
    ///
    /// Falls back to the default wildcard if the value has not been validated.
    pub fn wildcard_char(&self) -> char {
        let mut chars = self.wildcard.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => c,
            _ => DEFAULT_WILDCARD,
        }
    }

    /// Builds the tree configuration described by these settings.
    pub fn tst_config(&self) -> KaulaTstConfig {
        KaulaTstConfig {
            wildcard: self.wildcard_char(),
            max_word_len: self.max_word_len,
        }
    }
}

impl Validate for DictionaryConfig {
    fn validate(&self) -> ConfigResult<()> {
        if self.wildcard.chars().count() != 1 {
            return Err(ConfigError::invalid(
                "dictionary.wildcard",
                format!("must be exactly one character, got {:?}", self.wildcard),
            ));
        }

        if self.max_word_len == Some(0) {
            return Err(ConfigError::invalid(
                "dictionary.max_word_len",
                "must be greater than 0 when set",
            ));
        }

        if self.default_max_results == 0 {
            return Err(ConfigError::invalid(
                "dictionary.default_max_results",
                "must be greater than 0",
            ));
        }

        Ok(())
    }
}
