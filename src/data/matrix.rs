//! Numeric feature matrix with explicit missing-value markers.
//!
//! Storage is feature-major: each feature column occupies one contiguous
//! slice, which is exactly what the column reducers consume. Loading never
//! fails: an unparsable cell is stored as `f64::NAN`, so every (row,
//! feature) position always holds a value.

use super::raw::{RawTable, METADATA_COLUMNS};

/// Dense feature-major matrix of `f64` values.
///
/// One row per data row of the source table, one column per feature
/// column. Missing values are `f64::NAN`.
///
/// # Example
///
/// ```
/// use tablestat::{FeatureMatrix, RawTable};
///
/// let raw = RawTable::from_rows(vec![
///     vec!["id", "grp", "a", "b", "c", "d", "f1"],
///     vec!["1", "H", "-", "-", "-", "-", "5"],
///     vec!["2", "H", "-", "-", "-", "-", "oops"],
/// ])
/// .unwrap();
///
/// let matrix = FeatureMatrix::from_raw(&raw);
/// assert_eq!(matrix.n_rows(), 2);
/// assert_eq!(matrix.feature(0)[0], 5.0);
/// assert!(matrix.feature(0)[1].is_nan()); // unparsable cell, not an error
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct FeatureMatrix {
    /// Feature-major storage: `values[feature * n_rows + row]`.
    values: Box<[f64]>,
    n_rows: usize,
    n_features: usize,
}

/// Parse one feature cell, substituting the missing-value marker on
/// failure. This is the expected "empty field" state, never an error.
#[inline]
fn parse_cell(cell: &str) -> f64 {
    cell.parse::<f64>().unwrap_or(f64::NAN)
}

impl FeatureMatrix {
    /// Load the feature columns of every data row.
    ///
    /// The result has exactly `raw.n_data_rows()` rows and
    /// `raw.n_features()` columns.
    pub fn from_raw(raw: &RawTable) -> Self {
        let n_rows = raw.n_data_rows();
        let n_features = raw.n_features();
        let mut values = vec![f64::NAN; n_rows * n_features];
        for (row, cells) in raw.data_rows().enumerate() {
            for feature in 0..n_features {
                values[feature * n_rows + row] = parse_cell(&cells[METADATA_COLUMNS + feature]);
            }
        }
        Self {
            values: values.into_boxed_slice(),
            n_rows,
            n_features,
        }
    }

    /// Load the feature columns of a row subset, in the given order.
    ///
    /// Used to build per-group sub-matrices for distribution analysis.
    ///
    /// # Panics
    ///
    /// Panics if any index is `>= raw.n_data_rows()`.
    pub fn from_raw_rows(raw: &RawTable, rows: &[usize]) -> Self {
        let n_rows = rows.len();
        let n_features = raw.n_features();
        let mut values = vec![f64::NAN; n_rows * n_features];
        for (row, &index) in rows.iter().enumerate() {
            let cells = raw.data_row(index);
            for feature in 0..n_features {
                values[feature * n_rows + row] = parse_cell(&cells[METADATA_COLUMNS + feature]);
            }
        }
        Self {
            values: values.into_boxed_slice(),
            n_rows,
            n_features,
        }
    }

    /// Number of rows.
    #[inline]
    pub fn n_rows(&self) -> usize {
        self.n_rows
    }

    /// Number of feature columns.
    #[inline]
    pub fn n_features(&self) -> usize {
        self.n_features
    }

    /// One feature column as a contiguous slice. O(1).
    ///
    /// # Panics
    ///
    /// Panics if `feature >= n_features()`.
    #[inline]
    pub fn feature(&self, feature: usize) -> &[f64] {
        assert!(
            feature < self.n_features,
            "Feature index {} out of bounds",
            feature
        );
        let start = feature * self.n_rows;
        &self.values[start..start + self.n_rows]
    }

    /// Get the value at (row, feature).
    ///
    /// Returns `None` if out of bounds. A present-but-missing cell returns
    /// `Some(NAN)`.
    #[inline]
    pub fn get(&self, row: usize, feature: usize) -> Option<f64> {
        if row >= self.n_rows || feature >= self.n_features {
            return None;
        }
        Some(self.values[feature * self.n_rows + row])
    }

    /// Whether any cell holds the missing-value marker.
    pub fn has_missing(&self) -> bool {
        self.values.iter().any(|v| v.is_nan())
    }

    /// Fraction of non-missing cells, 1.0 for an empty matrix.
    pub fn density(&self) -> f64 {
        if self.n_rows == 0 || self.n_features == 0 {
            return 1.0;
        }
        let non_missing = self.values.iter().filter(|v| !v.is_nan()).count();
        non_missing as f64 / (self.n_rows * self.n_features) as f64
    }
}
