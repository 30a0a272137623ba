//! Synthetic raw-table builders for tests.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::data::{RawTable, METADATA_COLUMNS};

/// Build a raw table from string literals.
///
/// # Panics
///
/// Panics if the rows fail shape validation; test tables are expected to
/// be well formed.
pub fn raw_table(rows: &[&[&str]]) -> RawTable {
    RawTable::from_rows(rows.iter().map(|row| row.iter().copied()))
        .expect("test table must be well formed")
}

/// Generate a seeded random raw table.
///
/// The table has the standard layout: `METADATA_COLUMNS` metadata columns
/// (an index, a group label cycling through `groups`, and filler), then
/// `n_features` numeric feature columns. Each feature cell is left empty
/// (a missing value after loading) with probability `missing_rate`;
/// otherwise it holds a number in `[-100, 100)` printed with 6 decimals.
///
/// Deterministic for a given seed, so generated-data tests are
/// reproducible.
pub fn random_raw_table(
    n_rows: usize,
    n_features: usize,
    missing_rate: f64,
    groups: &[&str],
    seed: u64,
) -> RawTable {
    assert!(n_rows >= 1, "need at least one data row");
    assert!(!groups.is_empty(), "need at least one group label");

    let mut rng = StdRng::seed_from_u64(seed);
    let mut rows: Vec<Vec<String>> = Vec::with_capacity(n_rows + 1);

    let mut header = vec!["index".to_owned(), "group".to_owned()];
    header.extend((2..METADATA_COLUMNS).map(|i| format!("meta{i}")));
    header.extend((0..n_features).map(|f| format!("feature{f}")));
    rows.push(header);

    for r in 0..n_rows {
        let mut row = vec![r.to_string(), groups[r % groups.len()].to_owned()];
        row.extend((2..METADATA_COLUMNS).map(|_| "-".to_owned()));
        for _ in 0..n_features {
            if missing_rate > 0.0 && rng.gen_bool(missing_rate) {
                row.push(String::new());
            } else {
                row.push(format!("{:.6}", rng.gen_range(-100.0..100.0)));
            }
        }
        rows.push(row);
    }

    RawTable::from_rows(rows).expect("generated table is well formed")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generated_table_has_requested_shape() {
        let raw = random_raw_table(20, 3, 0.0, &["A", "B"], 42);
        assert_eq!(raw.n_data_rows(), 20);
        assert_eq!(raw.n_features(), 3);
        assert_eq!(raw.group_key(0), "A");
        assert_eq!(raw.group_key(1), "B");
    }

    #[test]
    fn same_seed_same_table() {
        let a = random_raw_table(10, 2, 0.3, &["A"], 7);
        let b = random_raw_table(10, 2, 0.3, &["A"], 7);
        assert_eq!(a, b);
    }
}
