//! Raw text table with shape validation.

use super::error::TableError;

/// Number of leading metadata columns (identifiers, labels, birthdays and
/// the like) excluded from the numeric feature range.
pub const METADATA_COLUMNS: usize = 6;

/// Index of the column holding the categorical group key used by
/// distribution analysis.
pub const GROUP_COLUMN: usize = 1;

/// An ordered table of text cells. Row 0 is the header naming the columns.
///
/// The shape is validated once at construction: at least one data row, and
/// every row as wide as the header. A malformed shape is fatal and aborts
/// before any output is built; everything downstream can rely on uniform
/// width. Cell contents are not inspected here; numeric parsing happens
/// in [`FeatureMatrix`](super::FeatureMatrix), where failures become
/// missing-value markers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawTable {
    rows: Vec<Vec<String>>,
}

impl RawTable {
    /// Build a table from rows of cells, validating its shape.
    ///
    /// # Errors
    ///
    /// Returns [`TableError::TooFewRows`] when there is no data row below
    /// the header, and [`TableError::RaggedRow`] when any row's width
    /// differs from the header's.
    pub fn from_rows<R, C>(rows: R) -> Result<Self, TableError>
    where
        R: IntoIterator<Item = C>,
        C: IntoIterator,
        C::Item: Into<String>,
    {
        let rows: Vec<Vec<String>> = rows
            .into_iter()
            .map(|row| row.into_iter().map(Into::into).collect())
            .collect();

        if rows.len() < 2 {
            return Err(TableError::TooFewRows(rows.len()));
        }
        let expected = rows[0].len();
        for (i, row) in rows.iter().enumerate().skip(1) {
            if row.len() != expected {
                return Err(TableError::RaggedRow {
                    row: i,
                    expected,
                    found: row.len(),
                });
            }
        }

        Ok(Self { rows })
    }

    /// The header row.
    #[inline]
    pub fn header(&self) -> &[String] {
        &self.rows[0]
    }

    /// Total number of rows, header included.
    #[inline]
    pub fn n_rows(&self) -> usize {
        self.rows.len()
    }

    /// Number of data rows (everything below the header).
    #[inline]
    pub fn n_data_rows(&self) -> usize {
        self.rows.len() - 1
    }

    /// Number of columns, as given by the header.
    #[inline]
    pub fn n_columns(&self) -> usize {
        self.rows[0].len()
    }

    /// Number of feature columns (columns past the metadata prefix).
    #[inline]
    pub fn n_features(&self) -> usize {
        self.n_columns().saturating_sub(METADATA_COLUMNS)
    }

    /// Header names of the feature columns, untruncated.
    pub fn feature_names(&self) -> &[String] {
        let header = self.header();
        &header[METADATA_COLUMNS.min(header.len())..]
    }

    /// Data row by zero-based index (0 is the first row below the header).
    ///
    /// # Panics
    ///
    /// Panics if `index >= n_data_rows()`.
    #[inline]
    pub fn data_row(&self, index: usize) -> &[String] {
        &self.rows[index + 1]
    }

    /// Iterate over the data rows in order.
    pub fn data_rows(&self) -> impl Iterator<Item = &[String]> {
        self.rows[1..].iter().map(Vec::as_slice)
    }

    /// Group key of a data row: the text at [`GROUP_COLUMN`].
    ///
    /// Empty keys mark rows excluded from distribution analysis.
    #[inline]
    pub fn group_key(&self, index: usize) -> &str {
        &self.rows[index + 1][GROUP_COLUMN]
    }
}
