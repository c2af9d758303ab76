//! Error types for csvm-core

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Failure to parse a single input document
#[derive(Debug, Error)]
#[error("'{name}': {kind}")]
pub struct ParseError {
    /// Display name of the document that failed
    pub name: String,
    /// Underlying cause
    pub kind: ParseErrorKind,
}

impl ParseError {
    pub fn new(name: impl Into<String>, kind: ParseErrorKind) -> Self {
        Self {
            name: name.into(),
            kind,
        }
    }
}

/// Cause of a per-document parse failure
#[derive(Debug, Error)]
pub enum ParseErrorKind {
    /// Content is not valid UTF-8
    #[error("content is not valid UTF-8: {0}")]
    Decode(#[from] std::str::Utf8Error),

    /// Error from the csv reader
    #[error("{0}")]
    Csv(#[from] csv::Error),

    /// Structural failure (empty header, row wider than header, ...)
    #[error("{0}")]
    Malformed(String),
}

/// Errors that can occur in csvm-core
#[derive(Debug, Error)]
pub enum Error {
    /// A single document failed to parse
    #[error("failed to parse {0}")]
    Parse(#[from] ParseError),

    /// One or more documents in a merge batch failed to parse.
    /// The whole batch is rejected; no partial merge is produced.
    #[error("{} file(s) could not be processed:\n{}", .failures.len(), format_failures(.failures))]
    MergeFailed { failures: Vec<ParseError> },

    /// A configured delimiter is not a single byte
    #[error("invalid delimiter {0:?}: must be a single character")]
    InvalidDelimiter(String),

    /// Failed to read a file
    #[error("failed to read file '{path}': {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Error from the csv writer
    #[error("failed to write CSV output: {0}")]
    CsvWrite(#[from] csv::Error),

    /// Directory traversal error
    #[error("failed to traverse directory: {0}")]
    WalkDir(#[from] walkdir::Error),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

fn format_failures(failures: &[ParseError]) -> String {
    failures
        .iter()
        .map(|f| format!("  - {}", f))
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_merge_failed_lists_every_document() {
        let err = Error::MergeFailed {
            failures: vec![
                ParseError::new("a.csv", ParseErrorKind::Malformed("no columns found".into())),
                ParseError::new(
                    "b.csv",
                    ParseErrorKind::Malformed("row 3 has 5 fields, expected 2".into()),
                ),
            ],
        };

        let msg = err.to_string();
        assert!(msg.contains("2 file(s) could not be processed"));
        assert!(msg.contains("'a.csv': no columns found"));
        assert!(msg.contains("'b.csv': row 3 has 5 fields, expected 2"));
    }

    #[test]
    fn test_invalid_delimiter_message() {
        let err = Error::InvalidDelimiter(";;".to_string());
        assert!(err.to_string().contains("\";;\""));
    }
}
