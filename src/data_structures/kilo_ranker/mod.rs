//! Kilo Bounded Ranker Implementation
//!
//! This module provides a fixed-capacity best-K selector. Items are kept in a
//! min-heap keyed by their `Ord` implementation so the worst-ranked held item
//! is always on top and can be compared against (and evicted by) a newcomer
//! in `O(log K)`.
//!
//! # Key Features
//!
//! * Never holds more than `capacity` items, whatever the size of the input
//! * Generic over any `Ord` item; "greater" means "ranks better"
//! * Drains in best-to-worst order without sorting the full candidate set

mod candidate;

use std::cmp::Reverse;
use std::collections::BinaryHeap;

pub use candidate::{rank_order, Candidate};

/// Upper bound on the heap slots reserved up front; callers may ask for a
/// huge `K` against a small dictionary.
const MAX_PREALLOCATED: usize = 1024;

/// A bounded selector that retains the `capacity` best items offered to it.
///
/// # Type Parameters
///
/// * `T` - Item type. An item that compares greater ranks better.
#[derive(Debug, Clone)]
pub struct KiloRanker<T: Ord> {
    /// Min-heap of held items; the top is the worst-ranked one.
    heap: BinaryHeap<Reverse<T>>,

    /// Maximum number of items retained.
    capacity: usize,
}

impl<T: Ord> KiloRanker<T> {
    /// Creates an empty ranker that retains at most `capacity` items.
    ///
    /// A capacity of zero is allowed; such a ranker admits nothing.
    pub fn new(capacity: usize) -> Self {
        Self {
            heap: BinaryHeap::with_capacity(capacity.min(MAX_PREALLOCATED)),
            capacity,
        }
    }

    /// Returns the maximum number of items retained.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Returns the number of items currently held.
    pub fn len(&self) -> usize {
        self.heap.len()
    }

    /// Returns whether the ranker holds no items.
    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    /// Returns whether the ranker holds `capacity` items.
    pub fn is_full(&self) -> bool {
        self.heap.len() >= self.capacity
    }

    /// Returns the worst-ranked held item, if any.
    pub fn peek_worst(&self) -> Option<&T> {
        self.heap.peek().map(|Reverse(item)| item)
    }

    /// Checks whether a candidate would be admitted, without building it.
    ///
    /// `beats_worst` is only called when the ranker is full, with the
    /// worst-ranked held item; it must return `true` iff the candidate ranks
    /// strictly better than that item.
    pub fn admits_by<F>(&self, beats_worst: F) -> bool
    where
        F: FnOnce(&T) -> bool,
    {
        if self.capacity == 0 {
            return false;
        }
        match self.peek_worst() {
            Some(worst) if self.is_full() => beats_worst(worst),
            _ => true,
        }
    }

    /// Offers an item to the ranker.
    ///
    /// # Returns
    ///
    /// * `true` - The item is now held (possibly after evicting the worst item).
    /// * `false` - The item was discarded.
    pub fn offer(&mut self, item: T) -> bool {
        if self.capacity == 0 {
            return false;
        }

        if !self.is_full() {
            self.heap.push(Reverse(item));
            return true;
        }

        let better = match self.heap.peek() {
            Some(Reverse(worst)) => item > *worst,
            None => true,
        };
        if better {
            self.heap.pop();
            self.heap.push(Reverse(item));
        }
        better
    }

    /// Removes and returns every held item, best-ranked first.
    pub fn drain(&mut self) -> Vec<T> {
        // Ascending order of `Reverse<T>` is descending order of `T`.
        std::mem::take(&mut self.heap)
            .into_sorted_vec()
            .into_iter()
            .map(|Reverse(item)| item)
            .collect()
    }
}
