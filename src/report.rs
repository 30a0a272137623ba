//! Fixed-width text rendering of a statistics table.

use crate::stats::{Statistic, StatsTable};

/// Width of one feature value column in the rendered report.
const VALUE_WIDTH: usize = 15;

/// Width of the statistic-name gutter.
const STAT_WIDTH: usize = 10;

/// Render a statistics table as fixed-width text.
///
/// Layout: a header row of feature names (each left-justified to 15
/// columns) behind a 10-column gutter, a blank line, then one row per
/// statistic with its name left-justified to 10 columns and every value
/// printed to 4 decimal places. Sentinel values render as `NaN`, `inf`
/// and `-inf` rather than failing.
///
/// # Example
///
/// ```
/// use tablestat::{describe, report, Parallelism, RawTable};
///
/// let raw = RawTable::from_rows(vec![
///     vec!["id", "grp", "a", "b", "c", "d", "f1"],
///     vec!["1", "H", "-", "-", "-", "-", "3"],
///     vec!["2", "H", "-", "-", "-", "-", "5"],
/// ])
/// .unwrap();
///
/// let text = report::render(&describe(&raw, Parallelism::Sequential));
/// assert!(text.lines().nth(2).unwrap().starts_with("Count"));
/// ```
pub fn render(table: &StatsTable) -> String {
    let mut out = String::new();

    out.push_str(&" ".repeat(STAT_WIDTH));
    for name in table.feature_names() {
        out.push_str(&format!("{:<width$}", name, width = VALUE_WIDTH));
    }
    out.push_str("\n\n");

    for statistic in Statistic::ALL {
        out.push_str(&format!("{:<width$}", statistic.name(), width = STAT_WIDTH));
        for value in table.row(statistic) {
            out.push_str(&format!("{:<width$.4}", value, width = VALUE_WIDTH));
        }
        out.push('\n');
    }
    out
}
