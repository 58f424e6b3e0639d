//! Kaula Ternary Search Tree Implementation
//!
//! This module provides a dictionary of words, each tagged with a usage
//! frequency, stored in a ternary search tree. It supports exact lookup,
//! frequency-ranked prefix completion, and single-character wildcard
//! pattern completion.
//!
//! Every node branches three ways on a character comparison: `lesser` and
//! `greater` lead to siblings in the same column, `equal` to the next column.
//! A word is present when walking its characters ends on a terminal node.
//!
//! The tree is single-threaded: queries borrow it shared, insertion borrows
//! it exclusively. Use [`SharedKaulaTst`] when several threads need access.

mod completion;
mod error;
mod node;
mod shared;

use std::cmp::Ordering;

pub use error::KaulaTstError;
pub use shared::SharedKaulaTst;
use node::{Link, TstNode};

/// Result type for Kaula tree operations
pub type KaulaTstResult<T> = Result<T, KaulaTstError>;

/// Wildcard symbol used by [`KaulaTst::predict_underscores`] unless configured otherwise.
pub const DEFAULT_WILDCARD: char = '_';

/// Configuration options for the Kaula Ternary Search Tree
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KaulaTstConfig {
    /// Pattern symbol that matches any single character
    pub wildcard: char,

    /// Maximum word length in characters (`None` for unbounded)
    pub max_word_len: Option<usize>,
}

impl Default for KaulaTstConfig {
    fn default() -> Self {
        Self {
            wildcard: DEFAULT_WILDCARD,
            max_word_len: None,
        }
    }
}

/// Kaula Ternary Search Tree: a frequency-tagged word dictionary.
///
/// Key features:
/// * Exact lookup in `O(word length + column width)`
/// * Top-K completions by frequency with lexicographic tie-break
/// * Fixed-length wildcard patterns (`"g_t_"`)
/// * Duplicate inserts are rejected and never overwrite a frequency
#[derive(Debug, Clone, Default)]
pub struct KaulaTst {
    /// First character of the first word ever inserted
    root: Link,

    /// Number of stored words
    len: usize,

    /// Configuration options
    config: KaulaTstConfig,
}

impl KaulaTst {
    /// Creates a new empty `KaulaTst` with default configuration.
    pub fn new() -> Self {
        Self::with_config(KaulaTstConfig::default())
    }

    /// Creates a new empty `KaulaTst` with the specified configuration.
    ///
    /// # Arguments
    ///
    /// * `config` - Configuration for the tree.
    pub fn with_config(config: KaulaTstConfig) -> Self {
        Self {
            root: None,
            len: 0,
            config,
        }
    }

    /// Returns the configuration of this tree.
    pub fn config(&self) -> &KaulaTstConfig {
        &self.config
    }

    /// Inserts a word with the given frequency.
    ///
    /// # Returns
    ///
    /// * `true` - The word was stored.
    /// * `false` - The word is empty, too long, or already present. Nothing changed.
    pub fn insert(&mut self, word: &str, frequency: u32) -> bool {
        self.try_insert(word, frequency).is_ok()
    }

    /// Inserts a word with the given frequency, reporting why it was rejected.
    ///
    /// The tree is left untouched on error; in particular the frequency of an
    /// already stored word is never updated.
    ///
    /// # Errors
    ///
    /// * `KaulaTstError::EmptyWord` - `word` is empty.
    /// * `KaulaTstError::WordTooLong` - `word` exceeds `max_word_len`.
    /// * `KaulaTstError::DuplicateWord` - `word` is already stored.
    pub fn try_insert(&mut self, word: &str, frequency: u32) -> KaulaTstResult<()> {
        if word.is_empty() {
            return Err(KaulaTstError::EmptyWord);
        }

        let chars: Vec<char> = word.chars().collect();
        if let Some(max_len) = self.config.max_word_len {
            if chars.len() > max_len {
                return Err(KaulaTstError::WordTooLong {
                    word: word.to_string(),
                    max_len,
                });
            }
        }

        let last = chars.len() - 1;
        let mut index = 0;
        let mut link = &mut self.root;

        loop {
            let c = chars[index];
            let node = link.get_or_insert_with(|| Box::new(TstNode::new(c)));

            match c.cmp(&node.symbol) {
                Ordering::Less => link = &mut node.lesser,
                Ordering::Greater => link = &mut node.greater,
                Ordering::Equal if index < last => {
                    index += 1;
                    link = &mut node.equal;
                }
                Ordering::Equal => {
                    // A duplicate only walks existing nodes, so nothing was created.
                    if node.is_terminal {
                        return Err(KaulaTstError::DuplicateWord {
                            word: word.to_string(),
                        });
                    }
                    node.is_terminal = true;
                    node.frequency = frequency;
                    break;
                }
            }
        }

        self.len += 1;
        Ok(())
    }

    /// Checks whether a word is stored in the tree.
    ///
    /// An empty word or an empty tree always yields `false`.
    pub fn find(&self, word: &str) -> bool {
        self.locate(word).is_some_and(|node| node.is_terminal)
    }

    /// Returns the frequency stored with `word`, if present.
    pub fn frequency(&self, word: &str) -> Option<u32> {
        self.locate(word).and_then(TstNode::terminal_frequency)
    }

    /// Returns the number of stored words.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Checks if the tree stores no words.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Removes every word from the tree.
    pub fn clear(&mut self) {
        self.root = None;
        self.len = 0;
    }

    /// Walks `word` and returns the node its last character lands on.
    ///
    /// Returns `None` for an empty word or when an edge on the way is missing.
    /// The node is returned whether or not it is terminal.
    fn locate(&self, word: &str) -> Option<&TstNode> {
        let mut chars = word.chars();
        let mut c = chars.next()?;
        let mut node = self.root.as_deref()?;

        loop {
            match c.cmp(&node.symbol) {
                Ordering::Less => node = node.lesser.as_deref()?,
                Ordering::Greater => node = node.greater.as_deref()?,
                Ordering::Equal => match chars.next() {
                    Some(next) => {
                        c = next;
                        node = node.equal.as_deref()?;
                    }
                    None => return Some(node),
                },
            }
        }
    }
}
