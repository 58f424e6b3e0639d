//! Word-frequency corpus loading.
//!
//! A corpus is plain text with one entry per line:
//!
//! ```text
//! 1203 the
//! 877 of the
//! 20 ea
//! ```
//!
//! The frequency comes first, then whitespace, then the word. The word is
//! the rest of the line with surrounding whitespace trimmed, so it may
//! contain inner spaces. Blank lines are skipped.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use tracing::{debug, info};

use crate::config::corpus::CorpusConfig;
use crate::data_structures::kaula_tst::{KaulaTst, KaulaTstError};
use crate::error::corpus::CorpusError;

/// Result type for corpus operations.
pub type CorpusResult<T> = Result<T, CorpusError>;

/// Summary of a completed load.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LoadReport {
    /// Non-blank lines read
    pub lines: usize,

    /// Words newly inserted into the dictionary
    pub inserted: usize,

    /// Entries skipped because the word was already present
    pub duplicates: usize,
}

/// Reads word-frequency corpora into a [`KaulaTst`].
#[derive(Debug, Clone, Default)]
pub struct CorpusLoader {
    config: CorpusConfig,
}

impl CorpusLoader {
    /// Creates a loader with the given settings.
    pub fn new(config: CorpusConfig) -> Self {
        Self { config }
    }

    /// Loads the corpus file at `path` into `tst`.
    ///
    /// # Errors
    ///
    /// * `CorpusError::NotFound` - `path` does not exist.
    /// * `CorpusError::Io` - The file could not be read.
    /// * `CorpusError::Parse` - A line is malformed. Entries before it stay inserted.
    pub fn load_path<P: AsRef<Path>>(&self, path: P, tst: &mut KaulaTst) -> CorpusResult<LoadReport> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(CorpusError::NotFound(path.to_path_buf()));
        }

        let report = self.load_reader(BufReader::new(File::open(path)?), tst)?;
        info!(
            path = %path.display(),
            lines = report.lines,
            inserted = report.inserted,
            duplicates = report.duplicates,
            "corpus loaded"
        );
        Ok(report)
    }

    /// Loads corpus entries from any buffered reader into `tst`.
    pub fn load_reader<R: BufRead>(&self, reader: R, tst: &mut KaulaTst) -> CorpusResult<LoadReport> {
        let mut report = LoadReport::default();

        for (index, line) in reader.lines().enumerate() {
            if self.config.max_entries.is_some_and(|max| report.inserted >= max) {
                debug!(max_entries = report.inserted, "entry limit reached");
                break;
            }

            let line = line?;
            if line.trim().is_empty() {
                continue;
            }
            report.lines += 1;

            let line_number = index + 1;
            let (frequency, word) = parse_line(&line, line_number)?;

            match tst.try_insert(word, frequency) {
                Ok(()) => report.inserted += 1,
                Err(KaulaTstError::DuplicateWord { word }) => {
                    debug!(line = line_number, %word, "duplicate word skipped");
                    report.duplicates += 1;
                }
                Err(e) => {
                    return Err(CorpusError::Parse {
                        line: line_number,
                        message: e.to_string(),
                    })
                }
            }
        }

        Ok(report)
    }
}

/// Splits a corpus line into its frequency and word.
fn parse_line(line: &str, line_number: usize) -> CorpusResult<(u32, &str)> {
    let line = line.trim();
    let (frequency, word) = line
        .split_once(char::is_whitespace)
        .ok_or_else(|| CorpusError::Parse {
            line: line_number,
            message: format!("expected '<frequency> <word>', got {line:?}"),
        })?;

    let frequency = frequency.parse::<u32>().map_err(|e| CorpusError::Parse {
        line: line_number,
        message: format!("invalid frequency {frequency:?}: {e}"),
    })?;

    Ok((frequency, word.trim()))
}
