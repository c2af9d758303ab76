//! Input documents: named byte blobs handed to the merge engine

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// One uploaded or loaded delimited-text file, immutable once built
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InputDocument {
    /// Display name (the originating filename)
    pub name: String,
    /// Raw content bytes
    pub content: Vec<u8>,
}

impl InputDocument {
    /// Create a document from a name and raw bytes
    pub fn new(name: impl Into<String>, content: impl Into<Vec<u8>>) -> Self {
        Self {
            name: name.into(),
            content: content.into(),
        }
    }

    /// Read a document from disk, using the file name as its display name
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read(path).map_err(|e| Error::FileRead {
            path: path.to_path_buf(),
            source: e,
        })?;

        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());

        Ok(Self { name, content })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_document_from_bytes() {
        let doc = InputDocument::new("a.csv", "id,val\n1,x\n");
        assert_eq!(doc.name, "a.csv");
        assert_eq!(doc.content, b"id,val\n1,x\n");
    }

    #[test]
    fn test_from_path_missing_file() {
        let err = InputDocument::from_path("definitely/not/here.csv").unwrap_err();
        assert!(matches!(err, Error::FileRead { .. }));
    }
}
