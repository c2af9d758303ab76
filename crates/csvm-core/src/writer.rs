//! Serializer for merged tables

use crate::error::{Error, Result};
use crate::table::MergedTable;
use csv::{QuoteStyle, WriterBuilder};

/// Serialize a merged table to UTF-8 bytes
///
/// Writes the header row then each data row, fields joined by `delimiter`,
/// lines terminated by `\n`, no byte-order mark. With `quote_all` every
/// field (header cells included) is quoted; otherwise only fields that
/// need escaping are quoted, with embedded quotes doubled.
pub fn serialize(table: &MergedTable, delimiter: u8, quote_all: bool) -> Result<Vec<u8>> {
    let quote_style = if quote_all {
        QuoteStyle::Always
    } else {
        QuoteStyle::Necessary
    };

    let mut writer = WriterBuilder::new()
        .delimiter(delimiter)
        .quote_style(quote_style)
        .from_writer(Vec::new());

    writer
        .write_record(table.columns.iter().map(|c| c.name.as_str()))
        .map_err(Error::CsvWrite)?;

    for row in &table.rows {
        writer.write_record(&row.cells).map_err(Error::CsvWrite)?;
    }

    writer
        .into_inner()
        .map_err(|e| Error::Io(e.into_error()))
}
