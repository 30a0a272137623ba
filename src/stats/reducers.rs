//! NaN-skipping column reductions.
//!
//! Every reducer takes a feature column as a float slice that may contain
//! `NAN` missing-value markers and skips the markers while reducing. The
//! conventions here are fixed: downstream report comparisons depend on the
//! unguarded IEEE divisions, the infinity sentinels for all-missing
//! columns, and the nearest-rank quantile that returns the largest value
//! observed below the computed rank. Reducers are pure and deterministic;
//! none of them mutates its input.

use std::cmp::Ordering;

/// Number of non-missing entries, as a float so it can feed the mean and
/// standard deviation directly.
pub fn count(values: &[f64]) -> f64 {
    values.iter().filter(|v| !v.is_nan()).count() as f64
}

/// Number of missing-value markers.
pub fn count_missing(values: &[f64]) -> f64 {
    values.iter().filter(|v| v.is_nan()).count() as f64
}

/// Sum of the non-missing entries.
pub fn sum(values: &[f64]) -> f64 {
    values.iter().filter(|v| !v.is_nan()).sum()
}

/// Arithmetic mean, `sum / count`.
///
/// The division is not guarded: an all-missing column yields `NAN` (0/0).
pub fn mean(values: &[f64]) -> f64 {
    sum(values) / count(values)
}

/// Bessel-corrected sample standard deviation,
/// `sqrt(sum((x - mean)^2) / (count - 1))`.
///
/// `mean` and `count` are passed in so callers computing several
/// statistics per column reuse them. The division by `count - 1` is not
/// guarded: a single-value column yields `NAN` (0/0), and an all-missing
/// column yields `-0.0` (an empty sum divided by -1, then square-rooted).
pub fn sample_std(values: &[f64], mean: f64, count: f64) -> f64 {
    let mut variance = 0.0;
    for &v in values {
        if !v.is_nan() {
            variance += (v - mean).powi(2);
        }
    }
    (variance / (count - 1.0)).sqrt()
}

/// Smallest non-missing entry, or positive infinity for an all-missing
/// column (documented sentinel, not an error).
pub fn min(values: &[f64]) -> f64 {
    let mut min = f64::INFINITY;
    for &v in values {
        if !v.is_nan() && min > v {
            min = v;
        }
    }
    min
}

/// Largest non-missing entry, or negative infinity for an all-missing
/// column.
pub fn max(values: &[f64]) -> f64 {
    let mut max = f64::NEG_INFINITY;
    for &v in values {
        if !v.is_nan() && max < v {
            max = v;
        }
    }
    max
}

/// Total ordering that places missing-value markers before every number.
///
/// Used only for ordering inside the quantile scan and the distribution
/// cleaner; markers are never folded into counts or sums.
pub fn nan_first(a: &f64, b: &f64) -> Ordering {
    match (a.is_nan(), b.is_nan()) {
        (true, true) => Ordering::Equal,
        (true, false) => Ordering::Less,
        (false, true) => Ordering::Greater,
        (false, false) => a.partial_cmp(b).unwrap_or(Ordering::Equal),
    }
}

/// Nearest-rank quantile with the reference tie-break.
///
/// Sorts an owned copy of the column with markers first, computes
/// `rank = leading_markers + round(percentile * count / 100)`, then
/// returns the largest non-missing value among the first `rank` sorted
/// entries. Downstream report comparisons depend on this "maximum below
/// the rank" rule, so it is kept exactly rather than replaced with a
/// textbook order statistic.
///
/// Returns negative infinity when no non-missing value precedes the rank.
pub fn quantile(values: &[f64], count: f64, percentile: f64) -> f64 {
    let mut sorted = values.to_vec();
    sorted.sort_by(nan_first);

    let n_missing = sorted.iter().take_while(|v| v.is_nan()).count();
    let rank = n_missing + (percentile * count / 100.0).round() as usize;

    let mut quantile = f64::NEG_INFINITY;
    for &v in sorted.iter().take(rank) {
        if !v.is_nan() && quantile < v {
            quantile = v;
        }
    }
    quantile
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;

    const NAN: f64 = f64::NAN;

    #[test]
    fn count_skips_markers() {
        assert_eq!(count(&[1.0, NAN, 3.0]), 2.0);
        assert_eq!(count(&[]), 0.0);
        assert_eq!(count(&[NAN, NAN]), 0.0);
    }

    #[test]
    fn count_and_missing_partition_column() {
        let col = [1.0, NAN, 3.0, NAN, 5.0];
        assert_eq!(count(&col) + count_missing(&col), col.len() as f64);
    }

    #[test]
    fn sum_skips_markers() {
        assert_eq!(sum(&[1.0, NAN, 3.0]), 4.0);
        assert_eq!(sum(&[NAN]), 0.0);
    }

    #[test]
    fn mean_of_empty_column_is_nan() {
        assert!(mean(&[NAN, NAN]).is_nan());
        assert!(mean(&[]).is_nan());
        assert_eq!(mean(&[2.0, 4.0]), 3.0);
    }

    #[test]
    fn sample_std_matches_textbook() {
        // Sample std of [2, 4, 4, 4, 5, 5, 7, 9] is sqrt(32/7).
        let col = [2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0];
        let c = count(&col);
        let m = mean(&col);
        assert_relative_eq!(
            sample_std(&col, m, c),
            (32.0f64 / 7.0).sqrt(),
            max_relative = 1e-9
        );
    }

    #[test]
    fn sample_std_single_value_is_nan() {
        let col = [42.0, NAN];
        assert!(sample_std(&col, mean(&col), count(&col)).is_nan());
    }

    #[test]
    fn extrema_sentinels_for_all_missing() {
        assert_eq!(min(&[NAN, NAN]), f64::INFINITY);
        assert_eq!(max(&[NAN, NAN]), f64::NEG_INFINITY);
    }

    #[test]
    fn extrema_skip_markers() {
        let col = [NAN, 3.0, NAN, -1.0, 7.0];
        assert_eq!(min(&col), -1.0);
        assert_eq!(max(&col), 7.0);
    }

    #[test]
    fn nan_first_orders_markers_before_numbers() {
        let mut col = [2.0, NAN, 1.0, NAN, 3.0];
        col.sort_by(nan_first);
        assert!(col[0].is_nan());
        assert!(col[1].is_nan());
        assert_eq!(&col[2..], &[1.0, 2.0, 3.0]);
    }

    #[test]
    fn quantile_median_of_odd_column() {
        // Sorted [3, 5, 7], count 3: rank for 50% is round(1.5) = 2, and
        // the largest value below index 2 is 5.
        let col = [3.0, 5.0, 7.0];
        assert_eq!(quantile(&col, 3.0, 50.0), 5.0);
    }

    #[test]
    fn quantile_quartiles_of_clean_column() {
        let col = [1.0, 2.0, 3.0, 4.0];
        let c = count(&col);
        assert_eq!(quantile(&col, c, 25.0), 1.0);
        assert_eq!(quantile(&col, c, 50.0), 2.0);
        assert_eq!(quantile(&col, c, 75.0), 3.0);
        assert_eq!(quantile(&col, c, 100.0), 4.0);
    }

    #[test]
    fn quantile_skips_leading_markers() {
        // count 2, so 50% rank is 1 + round(1.0) = 2: the scan sees the
        // marker and 10.0 only.
        let col = [10.0, NAN, 20.0];
        assert_eq!(quantile(&col, 2.0, 50.0), 10.0);
    }

    #[test]
    fn quantile_of_all_missing_is_negative_infinity() {
        assert_eq!(quantile(&[NAN, NAN], 0.0, 50.0), f64::NEG_INFINITY);
    }

    #[test]
    fn quantile_zero_percentile_is_negative_infinity() {
        // rank = round(0) = 0: nothing precedes it.
        let col = [1.0, 2.0, 3.0];
        assert_eq!(quantile(&col, 3.0, 0.0), f64::NEG_INFINITY);
    }

    #[test]
    fn quantile_does_not_mutate_input() {
        let col = [3.0, 1.0, 2.0];
        let _ = quantile(&col, 3.0, 50.0);
        assert_eq!(col, [3.0, 1.0, 2.0]);
    }
}
