//! Merge engine: union tables column-wise with provenance tagging

use crate::document::InputDocument;
use crate::error::{Error, ParseError, Result};
use crate::parser::parse_document;
use crate::table::{Column, MergedTable, Row, Table, SOURCE_COLUMN};
use std::collections::{BTreeMap, HashSet};

/// Add (or overwrite) the provenance column on every row of a table
///
/// Pure transform: the returned table carries a trailing [`SOURCE_COLUMN`]
/// whose value is `name` in every row.
pub fn tag_source(mut table: Table, name: &str) -> Table {
    match table.find_column(SOURCE_COLUMN) {
        Some(col) => {
            let index = col.index;
            for row in &mut table.rows {
                if row.cells.len() <= index {
                    row.cells.resize(index + 1, String::new());
                }
                row.cells[index] = name.to_string();
            }
        }
        None => {
            let index = table.columns.len();
            table
                .columns
                .push(Column::new(SOURCE_COLUMN.to_string(), index));
            for row in &mut table.rows {
                row.cells.push(name.to_string());
            }
        }
    }
    table
}

/// Merge a batch of documents into a single provenance-tagged table
///
/// Every document is parsed independently; parse failures are collected
/// rather than stopping at the first. Any failure rejects the whole batch
/// with [`Error::MergeFailed`] listing each failing document. An empty
/// batch merges to an empty table.
pub fn merge_all(documents: &[InputDocument], delimiter: u8) -> Result<MergedTable> {
    let mut tables: Vec<Table> = Vec::new();
    let mut failures: Vec<ParseError> = Vec::new();

    for document in documents {
        match parse_document(document, delimiter) {
            Ok(table) => tables.push(tag_source(table, &document.name)),
            Err(e) => failures.push(e),
        }
    }

    if !failures.is_empty() {
        return Err(Error::MergeFailed { failures });
    }

    Ok(union_tables(tables))
}

/// Union already-tagged tables: first-seen column order across tables,
/// provenance column last, rows concatenated in table order
fn union_tables(tables: Vec<Table>) -> MergedTable {
    let mut column_names: Vec<String> = Vec::new();
    let mut seen_columns: HashSet<String> = HashSet::new();
    let mut has_source = false;

    for table in &tables {
        for col in &table.columns {
            if col.name == SOURCE_COLUMN {
                has_source = true;
                continue;
            }
            if seen_columns.insert(col.name.clone()) {
                column_names.push(col.name.clone());
            }
        }
    }
    if has_source {
        column_names.push(SOURCE_COLUMN.to_string());
    }

    let columns: Vec<Column> = column_names
        .iter()
        .enumerate()
        .map(|(i, name)| Column::new(name.clone(), i))
        .collect();

    let col_index: BTreeMap<&str, usize> = columns
        .iter()
        .map(|c| (c.name.as_str(), c.index))
        .collect();

    let mut rows: Vec<Row> = Vec::new();
    let sources: Vec<String> = tables.iter().map(|t| t.source_name.clone()).collect();

    for table in &tables {
        for row in &table.rows {
            let mut cells = vec![String::new(); columns.len()];
            for col in &table.columns {
                if let (Some(&unified_idx), Some(value)) =
                    (col_index.get(col.name.as_str()), row.get(col.index))
                {
                    cells[unified_idx] = value.to_string();
                }
            }
            rows.push(Row::new(cells));
        }
    }

    MergedTable {
        columns,
        rows,
        sources,
    }
}
