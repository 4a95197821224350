use std::collections::HashMap;
use std::path::Path;

use crate::errors::EvalError;

/// Cell values read as missing.
const NULL_MARKERS: [&str; 6] = ["", "null", "NULL", "NaN", "nan", "None"];

pub fn is_null(value: &str) -> bool {
    NULL_MARKERS.contains(&value.trim())
}

/// A CSV table loaded by header, with no schema applied.
///
/// Columns are whatever the file declares, so a check can ask whether a
/// column exists before relying on it.
#[derive(Debug, Clone)]
pub struct TableData {
    pub name: String,
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
    column_lookup: HashMap<String, usize>,
}

impl TableData {
    pub fn new(name: impl Into<String>, headers: Vec<String>, rows: Vec<Vec<String>>) -> Self {
        let column_lookup = headers
            .iter()
            .enumerate()
            .map(|(idx, header)| (header.trim().to_string(), idx))
            .collect();
        Self {
            name: name.into(),
            headers,
            rows,
            column_lookup,
        }
    }

    /// (rows, columns), header excluded.
    pub fn shape(&self) -> (usize, usize) {
        (self.rows.len(), self.headers.len())
    }

    pub fn column_index(&self, column: &str) -> Option<usize> {
        self.column_lookup.get(column).copied()
    }

    pub fn has_column(&self, column: &str) -> bool {
        self.column_index(column).is_some()
    }

    /// Cell values of `column`, `None` for nulls. Returns `None` when the
    /// column is absent.
    pub fn column(&self, column: &str) -> Option<Vec<Option<&str>>> {
        let idx = self.column_index(column)?;
        Some(
            self.rows
                .iter()
                .map(|row| {
                    row.get(idx)
                        .map(String::as_str)
                        .filter(|value| !is_null(value))
                })
                .collect(),
        )
    }

    pub fn null_count(&self, column: &str) -> Option<u64> {
        self.column(column)
            .map(|values| values.iter().filter(|value| value.is_none()).count() as u64)
    }
}

/// Load a CSV file with a header row. Short rows are padded with nulls.
pub fn load_table(path: &Path, name: &str) -> Result<TableData, EvalError> {
    if !path.is_file() {
        return Err(EvalError::MissingFile(path.to_path_buf()));
    }

    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_path(path)?;

    let headers = reader
        .headers()?
        .iter()
        .map(|h| h.to_string())
        .collect::<Vec<_>>();

    let mut rows = Vec::new();
    for result in reader.records() {
        let record = result?;
        let mut row = record.iter().map(|v| v.to_string()).collect::<Vec<_>>();
        row.resize(headers.len(), String::new());
        rows.push(row);
    }

    Ok(TableData::new(name, headers, rows))
}
