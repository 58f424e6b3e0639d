//! Error types for the Kaula Ternary Search Tree.
//!
//! Only [`KaulaTst::try_insert`](super::KaulaTst::try_insert) surfaces these;
//! the boolean `insert` collapses them to `false`.

/// Errors that can occur when inserting into a Kaula tree.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum KaulaTstError {
    /// Error when an empty word is provided.
    #[error("Empty word not allowed")]
    EmptyWord,

    /// Error when the word is already stored. The stored frequency is kept.
    #[error("Word '{word}' is already present")]
    DuplicateWord {
        /// The word that was already present.
        word: String,
    },

    /// Error when a word exceeds the configured maximum length.
    #[error("Word '{word}' exceeds maximum length of {max_len}")]
    WordTooLong {
        /// The word that was too long.
        word: String,
        /// The maximum allowed length in characters.
        max_len: usize,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = KaulaTstError::EmptyWord;
        assert_eq!(err.to_string(), "Empty word not allowed");

        let err = KaulaTstError::DuplicateWord {
            word: "eat".to_string(),
        };
        assert_eq!(err.to_string(), "Word 'eat' is already present");

        let err = KaulaTstError::WordTooLong {
            word: "abcdef".to_string(),
            max_len: 4,
        };
        assert_eq!(err.to_string(), "Word 'abcdef' exceeds maximum length of 4");
    }
}
