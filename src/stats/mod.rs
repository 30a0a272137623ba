//! Statistics engine: column reducers, the describe orchestrator, and
//! grouped frequency distributions.
//!
//! Everything here is pure batch computation over an already-loaded
//! table: no I/O, no shared mutable state, and each call returns its own
//! owned output. Degenerate inputs produce sentinel values (`NAN`, ±∞)
//! per the reducer contracts, never errors.

pub mod reducers;

mod describe;
mod distribution;

pub use describe::{describe, StatsTable, Statistic};
pub use distribution::{group_distribution, GroupDistribution};
