//! Error types for raw table validation.

/// Raw table shape validation error.
///
/// Raised before any matrix or statistics output is built; there is no
/// partial-success mode. Per-cell parse failures are not errors. They
/// become `NAN` markers in the feature matrix.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TableError {
    /// A table needs a header row and at least one data row.
    #[error("table must have a header row and at least one data row, got {0} row(s)")]
    TooFewRows(usize),

    /// Every row must have the same number of cells as the header.
    #[error("row {row} has {found} cells, expected {expected}")]
    RaggedRow {
        /// Zero-based row index, counting the header as row 0.
        row: usize,
        /// Header width.
        expected: usize,
        /// Offending row width.
        found: usize,
    },
}
