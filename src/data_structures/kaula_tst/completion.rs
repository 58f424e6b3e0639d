//! Ranked completion queries over a Kaula tree.
//!
//! Both engines enumerate candidates in the same order: `lesser`, then the
//! node's own word, then `equal`, then `greater`. Within a subtree this is
//! lexicographic order, so among equal frequencies the ranker sees earlier
//! words first and keeps them.

use std::cmp::Ordering;

use tracing::trace;

use super::node::{Link, TstNode};
use super::KaulaTst;
use crate::data_structures::kilo_ranker::{rank_order, Candidate, KiloRanker};

impl KaulaTst {
    /// Finds up to `max_results` stored words starting with `prefix`.
    ///
    /// The prefix itself is included when it is a stored word. Results are
    /// ordered by descending frequency, ties broken lexicographically. An
    /// empty prefix completes over the whole dictionary.
    ///
    /// # Arguments
    ///
    /// * `prefix` - Literal prefix every result must start with.
    /// * `max_results` - Maximum number of words returned.
    pub fn predict_completions(&self, prefix: &str, max_results: usize) -> Vec<String> {
        if max_results == 0 {
            return Vec::new();
        }

        let mut ranker = KiloRanker::new(max_results);
        let mut word = String::from(prefix);

        if prefix.is_empty() {
            collect_completions(&self.root, &mut word, &mut ranker);
        } else {
            let Some(node) = self.locate(prefix) else {
                trace!(prefix, "no node for prefix");
                return Vec::new();
            };
            if let Some(frequency) = node.terminal_frequency() {
                offer(&mut ranker, frequency, &word);
            }
            collect_completions(&node.equal, &mut word, &mut ranker);
        }

        finish(ranker)
    }

    /// Finds up to `max_results` words matching `pattern`, using the
    /// configured wildcard.
    ///
    /// See [`KaulaTst::predict_pattern`].
    pub fn predict_underscores(&self, pattern: &str, max_results: usize) -> Vec<String> {
        self.predict_pattern(pattern, max_results, self.config.wildcard)
    }

    /// Finds up to `max_results` words matching `pattern`.
    ///
    /// Only words with exactly as many characters as `pattern` qualify. A
    /// `wildcard` position matches any character, every other position must
    /// match exactly. Results are ordered like
    /// [`KaulaTst::predict_completions`].
    pub fn predict_pattern(&self, pattern: &str, max_results: usize, wildcard: char) -> Vec<String> {
        let pattern: Vec<char> = pattern.chars().collect();
        if pattern.is_empty() || max_results == 0 {
            return Vec::new();
        }

        let mut ranker = KiloRanker::new(max_results);
        let mut matcher = PatternMatcher {
            pattern: &pattern,
            wildcard,
            word: String::with_capacity(pattern.len()),
            ranker: &mut ranker,
        };
        matcher.collect(&self.root, 0);

        finish(ranker)
    }
}

/// Offers `(frequency, word)`, allocating only if the ranker admits it.
fn offer(ranker: &mut KiloRanker<Candidate>, frequency: u32, word: &str) {
    let admitted =
        ranker.admits_by(|worst| rank_order((frequency, word), worst.key()) == Ordering::Greater);
    if admitted {
        ranker.offer(Candidate::new(frequency, word));
    }
}

fn finish(mut ranker: KiloRanker<Candidate>) -> Vec<String> {
    let results: Vec<String> = ranker.drain().into_iter().map(|c| c.word).collect();
    trace!(count = results.len(), "completion finished");
    results
}

/// Offers every word stored under `link`, each prefixed by `word`.
fn collect_completions(link: &Link, word: &mut String, ranker: &mut KiloRanker<Candidate>) {
    let Some(node) = link.as_deref() else { return };

    collect_completions(&node.lesser, word, ranker);

    word.push(node.symbol);
    if let Some(frequency) = node.terminal_frequency() {
        offer(ranker, frequency, word);
    }
    collect_completions(&node.equal, word, ranker);
    word.pop();

    collect_completions(&node.greater, word, ranker);
}

/// Traversal state for a fixed-length wildcard pattern.
struct PatternMatcher<'a> {
    pattern: &'a [char],
    wildcard: char,
    /// Characters matched so far.
    word: String,
    ranker: &'a mut KiloRanker<Candidate>,
}

impl PatternMatcher<'_> {
    fn collect(&mut self, link: &Link, index: usize) {
        let Some(node) = link.as_deref() else { return };
        let wanted = self.pattern[index];
        let any = wanted == self.wildcard;

        if any || wanted < node.symbol {
            self.collect(&node.lesser, index);
        }

        if any || wanted == node.symbol {
            self.visit_match(node, index);
        }

        if any || wanted > node.symbol {
            self.collect(&node.greater, index);
        }
    }

    fn visit_match(&mut self, node: &TstNode, index: usize) {
        self.word.push(node.symbol);
        if index + 1 == self.pattern.len() {
            if let Some(frequency) = node.terminal_frequency() {
                offer(self.ranker, frequency, &self.word);
            }
        } else {
            self.collect(&node.equal, index + 1);
        }
        self.word.pop();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tests::tst_from;

    #[test]
    fn test_predict_completions() {
        let tst = tst_from(&[("call", 5), ("me", 20), ("mind", 2), ("mid", 10)]);

        assert_eq!(tst.predict_completions("m", 10), vec!["me", "mid", "mind"]);
        assert_eq!(tst.predict_completions("m", 2), vec!["me", "mid"]);
        assert_eq!(tst.predict_completions("c", 10), vec!["call"]);
        assert!(tst.predict_completions("x", 10).is_empty());
        assert!(tst.predict_completions("mink", 10).is_empty());
    }

    #[test]
    fn test_tie_break_is_lexicographic() {
        let tst = tst_from(&[("and", 1), ("ant", 1), ("ana", 1)]);
        assert_eq!(tst.predict_completions("a", 2), vec!["ana", "and"]);
        assert_eq!(tst.predict_completions("an", 3), vec!["ana", "and", "ant"]);
    }

    #[test]
    fn test_prefix_word_is_a_completion() {
        let tst = tst_from(&[
            ("a", 5),
            ("at", 5),
            ("ate", 5),
            ("eba", 2),
            ("ear", 3),
            ("east", 1),
            ("eat", 4),
            ("eats", 2),
            ("ea", 20),
        ]);

        assert_eq!(tst.predict_completions("ea", 4), vec!["ea", "eat", "ear", "eats"]);
        assert_eq!(tst.predict_completions("a", 5), vec!["a", "at", "ate"]);
        assert_eq!(tst.predict_completions("ate", 5), vec!["ate"]);
    }

    #[test]
    fn test_empty_prefix_ranks_whole_dictionary() {
        let tst = tst_from(&[("b", 1), ("a", 1), ("c", 3)]);
        assert_eq!(tst.predict_completions("", 2), vec!["c", "a"]);
    }

    #[test]
    fn test_zero_results_and_empty_tree() {
        let tst = tst_from(&[("me", 20)]);
        assert!(tst.predict_completions("m", 0).is_empty());
        assert!(tst.predict_underscores("m_", 0).is_empty());

        let empty = KaulaTst::new();
        assert!(empty.predict_completions("ea", 5).is_empty());
        assert!(empty.predict_underscores("e_", 5).is_empty());
    }

    #[test]
    fn test_predict_underscores() {
        let tst = tst_from(&[
            ("gato", 5),
            ("gote", 5),
            ("goto", 10),
            ("gate", 5),
            ("gite", 3),
            ("gut", 50),
            ("gutsy", 40),
            ("mate", 9),
            ("g", 1),
        ]);

        assert_eq!(
            tst.predict_underscores("g_t_", 12),
            vec!["goto", "gate", "gato", "gote", "gite"]
        );
        assert_eq!(tst.predict_underscores("g_t_", 2), vec!["goto", "gate"]);
        assert_eq!(tst.predict_underscores("_ate", 10), vec!["mate", "gate"]);
        assert_eq!(tst.predict_underscores("g__", 10), vec!["gut"]);
        assert_eq!(tst.predict_underscores("_", 10), vec!["g"]);
        assert!(tst.predict_underscores("x_t_", 10).is_empty());
        assert!(tst.predict_underscores("", 10).is_empty());
    }

    #[test]
    fn test_pattern_without_wildcard_is_exact_lookup() {
        let tst = tst_from(&[("goto", 10), ("got", 4)]);
        assert_eq!(tst.predict_underscores("goto", 5), vec!["goto"]);
        assert_eq!(tst.predict_underscores("got", 5), vec!["got"]);
        assert!(tst.predict_underscores("gota", 5).is_empty());
    }

    #[test]
    fn test_custom_wildcard() {
        let tst = tst_from(&[("a_b", 2), ("axb", 7)]);
        // With '_' as wildcard the literal underscore is matched like anything else.
        assert_eq!(tst.predict_underscores("a_b", 5), vec!["axb", "a_b"]);
        assert_eq!(tst.predict_pattern("a_?", 5, '?'), vec!["a_b"]);
        assert_eq!(tst.predict_pattern("??b", 5, '?'), vec!["axb", "a_b"]);
    }
}
