//! Data structures for the Lanai dictionary.
//!
//! This module contains the ternary search tree that stores the words and
//! the bounded ranker both completion queries select their results with.
//! All implementations adhere to the project requirements:
//! - No unsafe code
//! - No allocation for candidates that cannot make the result set
//! - Deterministic result order

pub mod kaula_tst;
pub mod kilo_ranker;

// Re-export common data structures
pub use kaula_tst::{KaulaTst, KaulaTstConfig, KaulaTstError, KaulaTstResult, SharedKaulaTst};
pub use kilo_ranker::{Candidate, KiloRanker};
