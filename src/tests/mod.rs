//! Test modules for the Lanai dictionary.
//!
//! This module contains the crate-internal test suites:
//! - Configuration loading and validation
//! - Error types and reporting
//! - Corpus loading
//! - Property-based tests for the ternary search tree using proptest
//! - Shared fixtures and strategies

pub mod config_tests;

// Re-export commonly used testing tools to simplify imports in test modules
pub use test_utils::{dictionary_strategy, tst_from, word_strategy, TestFixture};
