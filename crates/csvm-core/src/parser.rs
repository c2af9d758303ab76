//! Delimited-text parser for input documents

use crate::document::InputDocument;
use crate::error::{ParseError, ParseErrorKind};
use crate::table::{Column, Row, Table};

/// Parse an input document into a Table
///
/// The first line is the header; data rows are positionally mapped to the
/// header columns. Rows shorter than the header are padded with empty cells;
/// rows wider than the header fail with a tokenization error. A delimiter
/// that never appears yields a degenerate one-column table, which is valid.
pub fn parse_document(
    document: &InputDocument,
    delimiter: u8,
) -> std::result::Result<Table, ParseError> {
    let text = std::str::from_utf8(&document.content)
        .map_err(|e| ParseError::new(&document.name, e.into()))?;

    parse_str(text, &document.name, delimiter)
}

/// Parse delimited text from a string
pub fn parse_str(
    content: &str,
    source_name: &str,
    delimiter: u8,
) -> std::result::Result<Table, ParseError> {
    let mut reader = csv::ReaderBuilder::new()
        .delimiter(delimiter)
        .has_headers(true)
        .flexible(true) // allow varying field counts; width is checked below
        .from_reader(content.as_bytes());

    let headers = reader
        .headers()
        .map_err(|e| ParseError::new(source_name, e.into()))?;

    let columns: Vec<Column> = headers
        .iter()
        .enumerate()
        .map(|(i, name)| Column::new(name.to_string(), i))
        .collect();

    if columns.is_empty() {
        return Err(ParseError::new(
            source_name,
            ParseErrorKind::Malformed("no columns found".to_string()),
        ));
    }

    let mut rows = Vec::new();
    for (row_idx, result) in reader.records().enumerate() {
        let record = result.map_err(|e| ParseError::new(source_name, e.into()))?;

        if record.len() > columns.len() {
            return Err(ParseError::new(
                source_name,
                ParseErrorKind::Malformed(format!(
                    "row {} has {} fields, expected {}",
                    row_idx + 1,
                    record.len(),
                    columns.len()
                )),
            ));
        }

        // Pad with empty cells if the row is shorter than the header
        let mut cells: Vec<String> = record.iter().map(str::to_string).collect();
        cells.resize(columns.len(), String::new());

        rows.push(Row::new(cells));
    }

    Ok(Table {
        columns,
        rows,
        source_name: source_name.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_simple_csv() {
        let csv = "id,name,value\n1,foo,100\n2,bar,200\n";
        let table = parse_str(csv, "test.csv", b',').unwrap();

        assert_eq!(table.columns.len(), 3);
        assert_eq!(table.columns[0].name, "id");
        assert_eq!(table.columns[1].name, "name");
        assert_eq!(table.columns[2].name, "value");

        assert_eq!(table.rows.len(), 2);
        assert_eq!(table.rows[0].cells, vec!["1", "foo", "100"]);
        assert_eq!(table.rows[1].cells, vec!["2", "bar", "200"]);
        assert_eq!(table.source_name, "test.csv");
    }

    #[test]
    fn test_parse_semicolon_delimiter() {
        let csv = "id;name\n1;foo\n";
        let table = parse_str(csv, "test.csv", b';').unwrap();

        assert_eq!(table.columns[1].name, "name");
        assert_eq!(table.rows[0].cells, vec!["1", "foo"]);
    }

    #[test]
    fn test_parse_absent_delimiter_is_one_column() {
        // Delimiter never appears: degenerate single-column parse, not an error
        let csv = "id,name\n1,foo\n2,bar\n";
        let table = parse_str(csv, "test.csv", b';').unwrap();

        assert_eq!(table.columns.len(), 1);
        assert_eq!(table.columns[0].name, "id,name");
        assert_eq!(table.rows[0].cells, vec!["1,foo"]);
    }

    #[test]
    fn test_parse_short_row_padded() {
        let csv = "id,name,value\n1,foo\n";
        let table = parse_str(csv, "test.csv", b',').unwrap();

        assert_eq!(table.rows[0].cells, vec!["1", "foo", ""]);
    }

    #[test]
    fn test_parse_wide_row_fails() {
        let csv = "id,name\n1,foo,extra\n";
        let err = parse_str(csv, "test.csv", b',').unwrap_err();

        assert_eq!(err.name, "test.csv");
        assert!(err.to_string().contains("row 1 has 3 fields, expected 2"));
    }

    #[test]
    fn test_parse_empty_content_fails() {
        let err = parse_str("", "empty.csv", b',').unwrap_err();
        assert!(err.to_string().contains("no columns found"));
    }

    #[test]
    fn test_parse_invalid_utf8_fails() {
        let doc = InputDocument::new("bad.csv", vec![b'i', b'd', 0xff, 0xfe]);
        let err = parse_document(&doc, b',').unwrap_err();

        assert_eq!(err.name, "bad.csv");
        assert!(matches!(err.kind, ParseErrorKind::Decode(_)));
    }

    #[test]
    fn test_parse_quoted_fields() {
        let csv = "id,note\n1,\"a, quoted\"\n2,\"say \"\"hi\"\"\"\n";
        let table = parse_str(csv, "test.csv", b',').unwrap();

        assert_eq!(table.rows[0].cells[1], "a, quoted");
        assert_eq!(table.rows[1].cells[1], "say \"hi\"");
    }

    #[test]
    fn test_parse_empty_cells_stay_empty_strings() {
        let csv = "id,name,value\n1,,100\n2,bar,\n";
        let table = parse_str(csv, "test.csv", b',').unwrap();

        assert_eq!(table.rows[0].cells[1], "");
        assert_eq!(table.rows[1].cells[2], "");
    }
}
