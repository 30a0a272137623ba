//! Tabular data model: raw text tables and the numeric feature matrix.
//!
//! # Overview
//!
//! [`RawTable`] holds the text cells as read from CSV, validated for shape
//! (header plus at least one data row, uniform width). [`FeatureMatrix`]
//! is the numeric view of its feature columns, stored feature-major so
//! each column is one contiguous slice for the reducers.
//!
//! # Column Conventions
//!
//! The first [`METADATA_COLUMNS`] columns are non-numeric metadata
//! (identifiers, labels) and are excluded from the feature range. Column
//! [`GROUP_COLUMN`] carries the categorical key used to partition rows
//! for distribution analysis.
//!
//! # Missing Values
//!
//! Missing values are represented as `f64::NAN`. A cell that fails numeric
//! parsing is stored as the marker, never as zero or dropped, so matrix
//! dimensions are always exactly (data rows) x (feature columns).

mod error;
mod matrix;
mod raw;

pub use error::TableError;
pub use matrix::FeatureMatrix;
pub use raw::{RawTable, GROUP_COLUMN, METADATA_COLUMNS};
