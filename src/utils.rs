//! Parallelism configuration shared by the statistics engine.

use rayon::prelude::*;

/// Whether per-column work may fan out across rayon's thread pool.
///
/// Column reductions take an explicit column argument and return a value
/// with no shared mutable state, and the quantile reducer sorts its own
/// copy of the column, so parallelizing across feature columns needs no
/// locking. Sequential and parallel runs produce bit-identical tables.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Parallelism {
    Sequential,
    Parallel,
}

impl Parallelism {
    /// Create from thread count semantics.
    ///
    /// - 0 = auto (parallel if rayon's pool has multiple threads)
    /// - 1 = sequential
    /// - >1 = parallel
    #[inline]
    pub fn from_threads(n_threads: usize) -> Self {
        if n_threads == 1 || (n_threads == 0 && rayon::current_num_threads() == 1) {
            Parallelism::Sequential
        } else {
            Parallelism::Parallel
        }
    }

    /// Returns `true` if parallel execution is allowed.
    #[inline]
    pub fn is_parallel(self) -> bool {
        matches!(self, Parallelism::Parallel)
    }

    /// Map over items, in parallel when allowed. Results come back in
    /// input order either way.
    #[inline]
    pub fn maybe_par_map<T, B, I, F>(self, iter: I, f: F) -> Vec<B>
    where
        T: Send,
        B: Send,
        I: IntoIterator<Item = T> + IntoParallelIterator<Item = T>,
        F: Fn(T) -> B + Sync + Send,
    {
        if self.is_parallel() {
            iter.into_par_iter().map(f).collect()
        } else {
            iter.into_iter().map(f).collect()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_threads_semantics() {
        assert_eq!(Parallelism::from_threads(1), Parallelism::Sequential);
        assert_eq!(Parallelism::from_threads(2), Parallelism::Parallel);
        assert_eq!(Parallelism::from_threads(8), Parallelism::Parallel);
    }

    #[test]
    fn maybe_par_map_preserves_order() {
        let doubled = Parallelism::Parallel.maybe_par_map(0..100usize, |i| i * 2);
        assert_eq!(doubled, (0..100).map(|i| i * 2).collect::<Vec<_>>());

        let sequential = Parallelism::Sequential.maybe_par_map(0..100usize, |i| i * 2);
        assert_eq!(doubled, sequential);
    }
}
