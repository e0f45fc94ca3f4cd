//! Question loading error types.
//!
//! Both kinds are fatal at startup: the CLI reports them and exits before the
//! first prompt. Nothing in the quiz loop itself produces an error.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while loading questions.
#[derive(Debug, Error)]
pub enum QuizError {
    /// The question source could not be opened or read.
    #[error("failed to read question file {}: {source}", .path.display())]
    SourceUnreadable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A record did not have exactly two fields. `line` is the 1-based line
    /// the record starts on, counting skipped blank lines.
    #[error("invalid record on line {line}: expected 2 fields, found {}: {fields:?}", .fields.len())]
    Format { line: u64, fields: Vec<String> },

    /// The CSV layer could not tokenize the input.
    #[error("malformed CSV: {0}")]
    Csv(#[from] csv::Error),
}

impl QuizError {
    /// Returns `true` if the source was readable but its contents were not.
    pub fn is_format_error(&self) -> bool {
        matches!(self, QuizError::Format { .. } | QuizError::Csv(_))
    }
}
