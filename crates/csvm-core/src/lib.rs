//! csvm-core: Core library for merging delimited text files
//!
//! This library provides functionality to:
//! - Parse delimited documents into structured tables
//! - Union tables column-wise, tolerating differing column sets
//! - Tag every merged row with its originating document name
//! - Serialize the merged table with a configurable delimiter and quoting policy
//! - Load documents from files and directories

pub mod document;
pub mod error;
pub mod loader;
pub mod merger;
pub mod options;
pub mod parser;
pub mod table;
pub mod writer;

pub use document::InputDocument;
pub use error::{Error, ParseError, ParseErrorKind, Result};
pub use loader::collect_documents;
pub use merger::{merge_all, tag_source};
pub use options::{delimiter_byte, MergeOptions};
pub use parser::{parse_document, parse_str};
pub use table::{Column, MergedTable, Row, Table, SOURCE_COLUMN};
pub use writer::serialize;
