//! Merge configuration handed in by the form/config collaborator

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};

/// Settings for one merge request
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct MergeOptions {
    /// Delimiter used in the uploaded files
    pub input_delimiter: String,
    /// Delimiter for the merged output
    pub output_delimiter: String,
    /// Quote every output field, headers included
    pub quote_all: bool,
}

impl Default for MergeOptions {
    fn default() -> Self {
        Self {
            input_delimiter: ",".to_string(),
            output_delimiter: ";".to_string(),
            quote_all: true,
        }
    }
}

impl MergeOptions {
    /// Validate and convert the input delimiter to a byte
    pub fn input_delimiter_byte(&self) -> Result<u8> {
        delimiter_byte(&self.input_delimiter)
    }

    /// Validate and convert the output delimiter to a byte
    pub fn output_delimiter_byte(&self) -> Result<u8> {
        delimiter_byte(&self.output_delimiter)
    }
}

/// Convert a delimiter setting to a single byte
///
/// Accepts any one-byte string, plus the two-character escape `\t` for tab.
pub fn delimiter_byte(s: &str) -> Result<u8> {
    if s == "\\t" {
        return Ok(b'\t');
    }
    match s.as_bytes() {
        [b] => Ok(*b),
        _ => Err(Error::InvalidDelimiter(s.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let opts = MergeOptions::default();
        assert_eq!(opts.input_delimiter_byte().unwrap(), b',');
        assert_eq!(opts.output_delimiter_byte().unwrap(), b';');
        assert!(opts.quote_all);
    }

    #[test]
    fn test_tab_escape() {
        assert_eq!(delimiter_byte("\\t").unwrap(), b'\t');
        assert_eq!(delimiter_byte("\t").unwrap(), b'\t');
    }

    #[test]
    fn test_rejects_multi_byte() {
        assert!(delimiter_byte("").is_err());
        assert!(delimiter_byte(";;").is_err());
        assert!(delimiter_byte("→").is_err());
    }

    #[test]
    fn test_deserialize_partial_config() {
        let opts: MergeOptions = serde_json::from_str(r#"{"output_delimiter": "|"}"#).unwrap();
        assert_eq!(opts.input_delimiter, ",");
        assert_eq!(opts.output_delimiter, "|");
        assert!(opts.quote_all);
    }
}
