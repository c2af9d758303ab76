//! C FFI bindings for csvm-core
//!
//! This crate provides a C-compatible API so a native UI (upload form,
//! table view, download button) can drive the merge engine over in-memory
//! documents.

use csvm_core::{merge_all, serialize, InputDocument, MergedTable, ParseError};
use std::ffi::{CStr, CString};
use std::os::raw::c_char;
use std::ptr;
use std::slice;

/// Opaque handle to a batch of documents pending a merge
pub struct CsvmBatch {
    delimiter: u8,
    documents: Vec<InputDocument>,
    failures: Vec<ParseError>,
}

/// Opaque handle to a merged table
pub struct CsvmTable {
    inner: MergedTable,
}

/// Create a new merge batch with the given input delimiter byte
#[no_mangle]
pub extern "C" fn csvm_batch_new(delimiter: u8) -> *mut CsvmBatch {
    Box::into_raw(Box::new(CsvmBatch {
        delimiter,
        documents: Vec::new(),
        failures: Vec::new(),
    }))
}

/// Free a batch
///
/// # Safety
/// - `batch` must be a valid pointer returned by `csvm_batch_new` or null
#[no_mangle]
pub unsafe extern "C" fn csvm_batch_free(batch: *mut CsvmBatch) {
    if !batch.is_null() {
        drop(Box::from_raw(batch));
    }
}

/// Add a document (name + raw bytes) to a batch
///
/// Returns false if any pointer is null or the name is not valid UTF-8.
///
/// # Safety
/// - `batch` must be a valid pointer returned by `csvm_batch_new`
/// - `name` must be a valid C string
/// - `data` must point to at least `len` readable bytes
#[no_mangle]
pub unsafe extern "C" fn csvm_batch_add(
    batch: *mut CsvmBatch,
    name: *const c_char,
    data: *const u8,
    len: usize,
) -> bool {
    if batch.is_null() || name.is_null() || (data.is_null() && len > 0) {
        return false;
    }

    let name = match CStr::from_ptr(name).to_str() {
        Ok(s) => s,
        Err(_) => return false,
    };

    let content = if len == 0 {
        Vec::new()
    } else {
        slice::from_raw_parts(data, len).to_vec()
    };

    (*batch).documents.push(InputDocument::new(name, content));
    true
}

/// Merge all documents in a batch
///
/// Returns null if any document failed to parse; the failures are then
/// readable via `csvm_batch_failure_count` / `_name` / `_message`.
///
/// # Safety
/// - `batch` must be a valid pointer returned by `csvm_batch_new`
#[no_mangle]
pub unsafe extern "C" fn csvm_batch_merge(batch: *mut CsvmBatch) -> *mut CsvmTable {
    if batch.is_null() {
        return ptr::null_mut();
    }

    let batch = &mut *batch;
    batch.failures.clear();

    match merge_all(&batch.documents, batch.delimiter) {
        Ok(table) => Box::into_raw(Box::new(CsvmTable { inner: table })),
        Err(csvm_core::Error::MergeFailed { failures }) => {
            batch.failures = failures;
            ptr::null_mut()
        }
        Err(_) => ptr::null_mut(),
    }
}

/// Get the number of per-document failures recorded by the last merge
///
/// # Safety
/// - `batch` must be a valid pointer returned by `csvm_batch_new`
#[no_mangle]
pub unsafe extern "C" fn csvm_batch_failure_count(batch: *const CsvmBatch) -> usize {
    if batch.is_null() {
        return 0;
    }
    (*batch).failures.len()
}

/// Get the document name of a recorded failure by index
///
/// # Safety
/// - `batch` must be a valid pointer returned by `csvm_batch_new`
/// - Returns null if index is out of bounds
/// - Caller must free the returned string with `csvm_string_free`
#[no_mangle]
pub unsafe extern "C" fn csvm_batch_failure_name(
    batch: *const CsvmBatch,
    index: usize,
) -> *mut c_char {
    if batch.is_null() {
        return ptr::null_mut();
    }

    (&(*batch).failures)
        .get(index)
        .and_then(|f| CString::new(f.name.as_str()).ok())
        .map(|s| s.into_raw())
        .unwrap_or(ptr::null_mut())
}

/// Get the message of a recorded failure by index
///
/// # Safety
/// - `batch` must be a valid pointer returned by `csvm_batch_new`
/// - Returns null if index is out of bounds
/// - Caller must free the returned string with `csvm_string_free`
#[no_mangle]
pub unsafe extern "C" fn csvm_batch_failure_message(
    batch: *const CsvmBatch,
    index: usize,
) -> *mut c_char {
    if batch.is_null() {
        return ptr::null_mut();
    }

    (&(*batch).failures)
        .get(index)
        .and_then(|f| CString::new(f.kind.to_string()).ok())
        .map(|s| s.into_raw())
        .unwrap_or(ptr::null_mut())
}

/// Free a merged table
///
/// # Safety
/// - `table` must be a valid pointer returned by `csvm_batch_merge` or null
#[no_mangle]
pub unsafe extern "C" fn csvm_table_free(table: *mut CsvmTable) {
    if !table.is_null() {
        drop(Box::from_raw(table));
    }
}

/// Get the row count of a merged table
///
/// # Safety
/// - `table` must be a valid pointer returned by `csvm_batch_merge`
#[no_mangle]
pub unsafe extern "C" fn csvm_table_row_count(table: *const CsvmTable) -> usize {
    if table.is_null() {
        return 0;
    }
    (*table).inner.row_count()
}

/// Get the column count of a merged table
///
/// # Safety
/// - `table` must be a valid pointer returned by `csvm_batch_merge`
#[no_mangle]
pub unsafe extern "C" fn csvm_table_column_count(table: *const CsvmTable) -> usize {
    if table.is_null() {
        return 0;
    }
    (*table).inner.column_count()
}

/// Get a column name by index
///
/// # Safety
/// - `table` must be a valid pointer returned by `csvm_batch_merge`
/// - Returns null if index is out of bounds
/// - Caller must free the returned string with `csvm_string_free`
#[no_mangle]
pub unsafe extern "C" fn csvm_table_column_name(
    table: *const CsvmTable,
    index: usize,
) -> *mut c_char {
    if table.is_null() {
        return ptr::null_mut();
    }

    (&(*table).inner.columns)
        .get(index)
        .and_then(|c| CString::new(c.name.as_str()).ok())
        .map(|s| s.into_raw())
        .unwrap_or(ptr::null_mut())
}

/// Get a cell value as a string
///
/// # Safety
/// - `table` must be a valid pointer returned by `csvm_batch_merge`
/// - Returns null if row or col is out of bounds
/// - Caller must free the returned string with `csvm_string_free`
#[no_mangle]
pub unsafe extern "C" fn csvm_table_cell(
    table: *const CsvmTable,
    row: usize,
    col: usize,
) -> *mut c_char {
    if table.is_null() {
        return ptr::null_mut();
    }

    (&(*table).inner.rows)
        .get(row)
        .and_then(|r| r.get(col))
        .and_then(|v| CString::new(v).ok())
        .map(|s| s.into_raw())
        .unwrap_or(ptr::null_mut())
}

/// Serialize a merged table to a delimited blob
///
/// On success the returned buffer holds `*out_len` bytes (not NUL
/// terminated). Returns null on failure.
///
/// # Safety
/// - `table` must be a valid pointer returned by `csvm_batch_merge`
/// - `out_len` must be a valid pointer to a usize
/// - Caller must free the returned buffer with `csvm_string_free`
#[no_mangle]
pub unsafe extern "C" fn csvm_table_to_csv(
    table: *const CsvmTable,
    delimiter: u8,
    quote_all: bool,
    out_len: *mut usize,
) -> *mut c_char {
    if table.is_null() || out_len.is_null() {
        return ptr::null_mut();
    }

    match serialize(&(*table).inner, delimiter, quote_all) {
        Ok(bytes) => {
            *out_len = bytes.len();
            match CString::new(bytes) {
                Ok(s) => s.into_raw(),
                Err(_) => ptr::null_mut(),
            }
        }
        Err(_) => ptr::null_mut(),
    }
}

/// Free a string or buffer returned by other FFI functions
///
/// # Safety
/// - `s` must be a valid pointer returned by a csvm_* function or null
#[no_mangle]
pub unsafe extern "C" fn csvm_string_free(s: *mut c_char) {
    if !s.is_null() {
        drop(CString::from_raw(s));
    }
}
