//! The describe orchestrator: eight statistics for every feature column.

use ndarray::{Array2, ArrayView1, ArrayView2};
use serde::Serialize;

use crate::data::{FeatureMatrix, RawTable};
use crate::stats::reducers;
use crate::utils::Parallelism;

/// Maximum display width of a feature name in reports. Longer names are
/// shortened to the first `MAX_NAME_WIDTH - 1` characters plus a `.`.
const MAX_NAME_WIDTH: usize = 10;

/// The named statistics of a [`StatsTable`], in fixed report order.
///
/// The order also encodes the computation dependencies: Mean needs Count,
/// Std needs Mean and Count, the quantiles need Count.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum Statistic {
    Count,
    Mean,
    Std,
    Min,
    Q25,
    Q50,
    Q75,
    Max,
}

impl Statistic {
    /// All statistics in report order.
    pub const ALL: [Statistic; 8] = [
        Statistic::Count,
        Statistic::Mean,
        Statistic::Std,
        Statistic::Min,
        Statistic::Q25,
        Statistic::Q50,
        Statistic::Q75,
        Statistic::Max,
    ];

    /// Display name used in rendered reports.
    pub fn name(self) -> &'static str {
        match self {
            Statistic::Count => "Count",
            Statistic::Mean => "Mean",
            Statistic::Std => "Std",
            Statistic::Min => "Min",
            Statistic::Q25 => "25%",
            Statistic::Q50 => "50%",
            Statistic::Q75 => "75%",
            Statistic::Max => "Max",
        }
    }

    /// Row index of this statistic in a [`StatsTable`].
    #[inline]
    pub fn index(self) -> usize {
        self as usize
    }
}

/// Statistics-by-feature table produced by [`describe`].
///
/// Rows are the eight statistics in [`Statistic::ALL`] order, columns are
/// the feature columns. The table owns its display feature names; there is
/// no process-wide name state, so concurrent `describe` calls are
/// independent. Read-only after construction.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StatsTable {
    feature_names: Vec<String>,
    /// Shape: `[Statistic::ALL.len(), n_features]`.
    values: Array2<f64>,
}

impl StatsTable {
    /// Display names of the feature columns, shortened to at most
    /// 10 characters.
    #[inline]
    pub fn feature_names(&self) -> &[String] {
        &self.feature_names
    }

    /// Number of feature columns.
    #[inline]
    pub fn n_features(&self) -> usize {
        self.feature_names.len()
    }

    /// Value of one statistic for one feature column.
    ///
    /// # Panics
    ///
    /// Panics if `feature >= n_features()`.
    #[inline]
    pub fn get(&self, statistic: Statistic, feature: usize) -> f64 {
        self.values[[statistic.index(), feature]]
    }

    /// One statistic across all feature columns, in column order.
    #[inline]
    pub fn row(&self, statistic: Statistic) -> ArrayView1<'_, f64> {
        self.values.row(statistic.index())
    }

    /// The full `8 x n_features` value matrix.
    #[inline]
    pub fn values(&self) -> ArrayView2<'_, f64> {
        self.values.view()
    }
}

/// Compute the eight descriptive statistics for every feature column.
///
/// Loads the numeric matrix (unparsable cells become `NAN` markers),
/// derives display names from the header, then reduces each column:
/// Count first, Mean from Count, Std from Mean and Count, quantiles from
/// Count. Columns are independent and each quantile sorts its own copy,
/// so the reduction fans out one rayon task per feature column when
/// `parallelism` allows; results are identical either way.
///
/// # Example
///
/// ```
/// use tablestat::{describe, Parallelism, RawTable, Statistic};
///
/// let raw = RawTable::from_rows(vec![
///     vec!["id", "grp", "a", "b", "c", "d", "f1"],
///     vec!["1", "H", "-", "-", "-", "-", "3"],
///     vec!["2", "H", "-", "-", "-", "-", "5"],
///     vec!["3", "G", "-", "-", "-", "-", "7"],
/// ])
/// .unwrap();
///
/// let table = describe(&raw, Parallelism::Sequential);
/// assert_eq!(table.get(Statistic::Count, 0), 3.0);
/// assert_eq!(table.get(Statistic::Min, 0), 3.0);
/// assert_eq!(table.get(Statistic::Max, 0), 7.0);
/// ```
pub fn describe(raw: &RawTable, parallelism: Parallelism) -> StatsTable {
    let matrix = FeatureMatrix::from_raw(raw);
    let feature_names: Vec<String> = raw.feature_names().iter().map(|n| shorten(n)).collect();

    let per_column =
        parallelism.maybe_par_map(0..matrix.n_features(), |f| column_stats(matrix.feature(f)));

    let mut values = Array2::zeros((Statistic::ALL.len(), feature_names.len()));
    for (feature, stats) in per_column.into_iter().enumerate() {
        for (row, value) in stats.into_iter().enumerate() {
            values[[row, feature]] = value;
        }
    }

    StatsTable {
        feature_names,
        values,
    }
}

/// All eight statistics of one column, in [`Statistic::ALL`] order.
fn column_stats(column: &[f64]) -> [f64; Statistic::ALL.len()] {
    let count = reducers::count(column);
    let mean = reducers::sum(column) / count;
    [
        count,
        mean,
        reducers::sample_std(column, mean, count),
        reducers::min(column),
        reducers::quantile(column, count, 25.0),
        reducers::quantile(column, count, 50.0),
        reducers::quantile(column, count, 75.0),
        reducers::max(column),
    ]
}

/// Shorten a feature name for report layout.
fn shorten(name: &str) -> String {
    if name.chars().count() > MAX_NAME_WIDTH {
        let mut short: String = name.chars().take(MAX_NAME_WIDTH - 1).collect();
        short.push('.');
        short
    } else {
        name.to_owned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn statistic_order_is_fixed() {
        let names: Vec<_> = Statistic::ALL.iter().map(|s| s.name()).collect();
        assert_eq!(
            names,
            ["Count", "Mean", "Std", "Min", "25%", "50%", "75%", "Max"]
        );
        for (i, stat) in Statistic::ALL.into_iter().enumerate() {
            assert_eq!(stat.index(), i);
        }
    }

    #[test]
    fn short_names_are_kept() {
        assert_eq!(shorten("Arithmancy"), "Arithmancy");
        assert_eq!(shorten("Charms"), "Charms");
    }

    #[test]
    fn long_names_get_a_marker() {
        assert_eq!(shorten("Astronomy101"), "Astronomy.");
        assert_eq!(shorten("Defense Against the Dark Arts"), "Defense A.");
    }

    #[test]
    fn shorten_counts_characters_not_bytes() {
        // 11 two-byte characters: byte slicing would split the name
        // mid-character.
        assert_eq!(shorten("ééééééééééé"), "ééééééééé.");
    }

    #[test]
    fn table_dimensions_are_fixed() {
        let raw = RawTable::from_rows(vec![
            vec!["id", "grp", "a", "b", "c", "d", "f1", "f2", "f3"],
            vec!["1", "H", "-", "-", "-", "-", "1", "2", "3"],
        ])
        .unwrap();
        let table = describe(&raw, Parallelism::Sequential);
        assert_eq!(table.n_features(), 3);
        assert_eq!(table.values().dim(), (8, 3));
    }
}
