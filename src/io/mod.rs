//! CSV input for raw tables.
//!
//! Thin wrapper over the `csv` crate. The header row is part of the raw
//! table (the orchestrators consume it for feature names), so the reader
//! runs with headers disabled. The reader is also flexible about record
//! widths: ragged rows are reported by [`RawTable::from_rows`] validation
//! so the error matches the in-memory construction path.

use std::path::Path;

use crate::data::{RawTable, TableError};

/// CSV input error.
#[derive(Debug, thiserror::Error)]
pub enum CsvReadError {
    /// The file could not be opened or parsed as CSV.
    #[error(transparent)]
    Csv(#[from] csv::Error),

    /// The parsed rows do not form a valid raw table.
    #[error(transparent)]
    Table(#[from] TableError),
}

/// Read a CSV file into a validated [`RawTable`].
///
/// # Errors
///
/// Returns [`CsvReadError::Csv`] for file or CSV-syntax problems and
/// [`CsvReadError::Table`] when the rows fail shape validation (fewer
/// than two rows, ragged rows).
pub fn read_csv(path: impl AsRef<Path>) -> Result<RawTable, CsvReadError> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_path(path)?;

    let mut rows: Vec<Vec<String>> = Vec::new();
    for record in reader.records() {
        let record = record?;
        rows.push(record.iter().map(str::to_owned).collect());
    }
    Ok(RawTable::from_rows(rows)?)
}
