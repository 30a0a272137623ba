//! Per-group frequency distributions for histogram rendering.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::data::{FeatureMatrix, RawTable};
use crate::stats::reducers;

/// Per-group, per-feature bucket frequencies over equal-width ranges.
///
/// Groups are keyed by the raw text of the group column and held in
/// lexicographic order so repeated runs produce identical output. Each
/// frequency vector has exactly `bucket_count` entries and is aligned with
/// [`feature_names`](GroupDistribution::feature_names), which carries the
/// untruncated header names the chart consumer keys its images by.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GroupDistribution {
    feature_names: Vec<String>,
    bucket_count: usize,
    /// `groups[key][feature]` = frequencies, one per bucket.
    groups: BTreeMap<String, Vec<Vec<f64>>>,
}

impl GroupDistribution {
    /// Untruncated feature column names, in column order.
    #[inline]
    pub fn feature_names(&self) -> &[String] {
        &self.feature_names
    }

    /// Number of buckets per (group, feature) pair.
    #[inline]
    pub fn bucket_count(&self) -> usize {
        self.bucket_count
    }

    /// Group keys in lexicographic order.
    pub fn group_names(&self) -> impl Iterator<Item = &str> {
        self.groups.keys().map(String::as_str)
    }

    /// Bucket frequencies for one group and one feature column.
    ///
    /// Returns `None` for an unknown group or an out-of-range feature
    /// index.
    pub fn frequencies(&self, group: &str, feature: usize) -> Option<&[f64]> {
        self.groups
            .get(group)
            .and_then(|features| features.get(feature))
            .map(Vec::as_slice)
    }
}

/// Partition data rows by the group column and bucket every feature column
/// of every group into `bucket_count` equal-width ranges spanning that
/// group's observed `[min, max]`.
///
/// Rows with an empty group value are dropped. Bucket boundaries are
/// inclusive on both ends, so a value sitting exactly on an interior
/// boundary is counted in both adjacent buckets; this double count is a
/// reproduced property of the reference behavior.
///
/// # Panics
///
/// Panics if `bucket_count` is zero or `group_column` is out of range for
/// the table.
///
/// # Example
///
/// ```
/// use tablestat::{group_distribution, RawTable, GROUP_COLUMN};
///
/// let raw = RawTable::from_rows(vec![
///     vec!["id", "grp", "a", "b", "c", "d", "f1"],
///     vec!["1", "H", "-", "-", "-", "-", "0"],
///     vec!["2", "H", "-", "-", "-", "-", "5"],
///     vec!["3", "H", "-", "-", "-", "-", "10"],
/// ])
/// .unwrap();
///
/// let dist = group_distribution(&raw, GROUP_COLUMN, 2);
/// // 5 sits on the shared bucket edge and counts on both sides.
/// assert_eq!(dist.frequencies("H", 0), Some(&[2.0, 2.0][..]));
/// ```
pub fn group_distribution(
    raw: &RawTable,
    group_column: usize,
    bucket_count: usize,
) -> GroupDistribution {
    assert!(bucket_count > 0, "bucket_count must be positive");
    assert!(
        group_column < raw.n_columns(),
        "group column {} out of bounds",
        group_column
    );

    // Collect matching row indices per key, then load each group's rows as
    // one sub-matrix.
    let mut row_groups: BTreeMap<String, Vec<usize>> = BTreeMap::new();
    for (index, row) in raw.data_rows().enumerate() {
        let key = &row[group_column];
        if !key.is_empty() {
            row_groups.entry(key.clone()).or_default().push(index);
        }
    }

    let mut groups = BTreeMap::new();
    for (key, rows) in row_groups {
        let matrix = FeatureMatrix::from_raw_rows(raw, &rows);
        let per_feature: Vec<Vec<f64>> = (0..matrix.n_features())
            .map(|f| bucket_frequencies(&strip_missing(matrix.feature(f)), bucket_count))
            .collect();
        groups.insert(key, per_feature);
    }

    GroupDistribution {
        feature_names: raw.feature_names().to_vec(),
        bucket_count,
        groups,
    }
}

/// Sort a column ascending with markers first and drop the marker prefix.
fn strip_missing(column: &[f64]) -> Vec<f64> {
    let mut sorted = column.to_vec();
    sorted.sort_by(reducers::nan_first);
    let n_missing = sorted.iter().take_while(|v| v.is_nan()).count();
    sorted.split_off(n_missing)
}

/// Count marker-free values into `bucket_count` equal-width buckets
/// spanning `[min, max]`, both boundaries inclusive.
fn bucket_frequencies(values: &[f64], bucket_count: usize) -> Vec<f64> {
    let mut frequencies = vec![0.0; bucket_count];
    if values.is_empty() {
        return frequencies;
    }

    let min = reducers::min(values);
    let max = reducers::max(values);
    let portion = (max - min) / bucket_count as f64;
    if portion == 0.0 {
        // Zero-width span: every value equals `min` and belongs to the
        // first bucket only.
        frequencies[0] = values.len() as f64;
        return frequencies;
    }

    for (p, frequency) in frequencies.iter_mut().enumerate() {
        let low = min + portion * p as f64;
        let high = min + portion * (p + 1) as f64;
        *frequency = values.iter().filter(|&&v| v >= low && v <= high).count() as f64;
    }
    frequencies
}

#[cfg(test)]
mod tests {
    use super::*;

    const NAN: f64 = f64::NAN;

    #[test]
    fn strip_missing_drops_marker_prefix() {
        assert_eq!(strip_missing(&[3.0, NAN, 1.0, NAN, 2.0]), [1.0, 2.0, 3.0]);
        assert!(strip_missing(&[NAN, NAN]).is_empty());
        assert!(strip_missing(&[]).is_empty());
    }

    #[test]
    fn boundary_values_count_in_both_buckets() {
        // Edges are [0, 5] and [5, 10]; 5 lands in both.
        assert_eq!(bucket_frequencies(&[0.0, 5.0, 10.0], 2), [2.0, 2.0]);
    }

    #[test]
    fn interior_values_count_once() {
        assert_eq!(
            bucket_frequencies(&[0.0, 1.0, 2.0, 9.0, 10.0], 2),
            [3.0, 2.0]
        );
    }

    #[test]
    fn empty_column_yields_all_zero_buckets() {
        assert_eq!(bucket_frequencies(&[], 4), [0.0, 0.0, 0.0, 0.0]);
    }

    #[test]
    fn zero_width_span_fills_first_bucket_only() {
        assert_eq!(bucket_frequencies(&[7.0, 7.0, 7.0], 3), [3.0, 0.0, 0.0]);
    }

    #[test]
    fn single_value_column() {
        assert_eq!(bucket_frequencies(&[4.2], 2), [1.0, 0.0]);
    }
}
