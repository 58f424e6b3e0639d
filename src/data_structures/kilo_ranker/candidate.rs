//! Ranked completion candidates.
//!
//! A candidate is a `(frequency, word)` pair. Higher frequency ranks better;
//! on equal frequency the lexicographically earlier word ranks better.

use std::cmp::Ordering;

/// Compares two `(frequency, word)` pairs by rank.
///
/// Returns `Ordering::Greater` when `a` ranks better than `b`.
pub fn rank_order(a: (u32, &str), b: (u32, &str)) -> Ordering {
    a.0.cmp(&b.0).then_with(|| b.1.cmp(a.1))
}

/// A word offered to a ranker together with its frequency.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Candidate {
    /// Usage frequency of the word
    pub frequency: u32,

    /// The complete word
    pub word: String,
}

impl Candidate {
    /// Creates a new candidate.
    pub fn new<W: Into<String>>(frequency: u32, word: W) -> Self {
        Self {
            frequency,
            word: word.into(),
        }
    }

    /// Borrowed `(frequency, word)` key used by [`rank_order`].
    pub fn key(&self) -> (u32, &str) {
        (self.frequency, &self.word)
    }
}

impl Ord for Candidate {
    fn cmp(&self, other: &Self) -> Ordering {
        rank_order(self.key(), other.key())
    }
}

impl PartialOrd for Candidate {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
