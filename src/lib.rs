//! Lanai Dictionary Library
//!
//! An in-memory word dictionary for autocomplete: every word carries a usage
//! frequency, and the dictionary answers exact lookups, top-K prefix
//! completions, and fixed-length wildcard patterns such as `"g_t_"`.
//!
//! # Architecture
//!
//! - [`data_structures::KaulaTst`]: the ternary search tree and both
//!   completion engines
//! - [`data_structures::KiloRanker`]: bounded best-K selection shared by
//!   the engines
//! - [`corpus`]: loads `<frequency> <word>` files into a tree
//! - [`config`] and [`error`]: layered configuration and error reporting
//!   for the command-line front end
//!
//! ```
//! use lanai_lib::data_structures::KaulaTst;
//!
//! let mut dict = KaulaTst::new();
//! dict.insert("me", 20);
//! dict.insert("mid", 10);
//! dict.insert("mind", 2);
//! assert_eq!(dict.predict_completions("mi", 5), vec!["mid", "mind"]);
//! ```

pub mod config;
pub mod corpus;
pub mod data_structures;
pub mod error;

// Internal modules that are not part of the public API
#[cfg(test)]
pub(crate) mod tests;

/// Version information for the Lanai dictionary.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library initialization function.
///
/// Installs the tracing-backed error reporter.
pub fn init() {
    error::set_error_reporter(std::sync::Arc::new(error::TracingErrorReporter));
}
