//! tablestat: column-wise descriptive statistics for numeric CSV tables.
//!
//! The crate turns a raw text table (header row plus data rows) into a
//! numeric feature matrix with explicit missing-value markers, then reduces
//! each feature column into the eight classic descriptive statistics, or
//! into per-group frequency distributions for histogram rendering.
//!
//! # Key Types
//!
//! - [`RawTable`] - Validated text table (header + data rows)
//! - [`FeatureMatrix`] - Feature-major numeric matrix, `NAN` marks missing cells
//! - [`StatsTable`] / [`Statistic`] - Statistics-by-feature output of [`describe`]
//! - [`GroupDistribution`] - Per-group bucket frequencies from [`group_distribution`]
//!
//! # Conventions
//!
//! Unparsable cells are an expected "empty field" state, never an error:
//! they become `f64::NAN` and every reducer skips them. Degenerate columns
//! produce sentinel values (`NAN` means, infinite extrema) instead of
//! failing. Only a malformed table shape (fewer than two rows, ragged rows)
//! aborts, at [`RawTable`] construction.
//!
//! # Quick Start
//!
//! ```
//! use tablestat::{describe, Parallelism, RawTable, Statistic};
//!
//! let raw = RawTable::from_rows(vec![
//!     vec!["id", "group", "a", "b", "c", "d", "score"],
//!     vec!["1", "H", "-", "-", "-", "-", "5.0"],
//!     vec!["2", "G", "-", "-", "-", "-", "7.0"],
//! ])
//! .unwrap();
//!
//! let table = describe(&raw, Parallelism::Sequential);
//! assert_eq!(table.get(Statistic::Count, 0), 2.0);
//! assert_eq!(table.get(Statistic::Mean, 0), 6.0);
//! ```

// Re-export approx traits for users who want to compare statistics output
pub use approx;

pub mod data;
pub mod io;
pub mod report;
pub mod stats;
pub mod testing;
pub mod utils;

// High-level entry points
pub use stats::{describe, group_distribution};

// Data types
pub use data::{FeatureMatrix, RawTable, TableError, GROUP_COLUMN, METADATA_COLUMNS};

// Output types
pub use stats::{GroupDistribution, Statistic, StatsTable};

// Shared utilities
pub use utils::Parallelism;
