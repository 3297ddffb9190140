//! Rayon-based batch execution.
//!
//! Work over `n` items is split into contiguous, fixed-size batches. Batch
//! boundaries depend only on `n` and the batch size, and results are returned
//! in batch order, so the output is identical whether the batches run on one
//! thread or many.

use std::ops::Range;

use rayon::prelude::*;

/// Trials per batch.
pub const DEFAULT_BATCH_SIZE: usize = 1_000;

/// Item count below which batches run on the calling thread.
pub const DEFAULT_PARALLEL_THRESHOLD: usize = 2_000;

/// Configuration for parallel execution.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ParallelConfig {
    /// Items per batch
    pub batch_size: usize,
    /// Minimum items before using parallelism
    pub parallel_threshold: usize,
}

impl Default for ParallelConfig {
    fn default() -> Self {
        Self {
            batch_size: DEFAULT_BATCH_SIZE,
            parallel_threshold: DEFAULT_PARALLEL_THRESHOLD,
        }
    }
}

impl ParallelConfig {
    /// Creates a new parallel configuration.
    pub fn new(batch_size: usize, parallel_threshold: usize) -> Self {
        Self {
            batch_size: batch_size.max(1),
            parallel_threshold,
        }
    }

    /// Returns whether to use parallel processing for the given item count.
    #[inline]
    pub fn should_parallelize(&self, n_items: usize) -> bool {
        n_items >= self.parallel_threshold
    }
}

/// Splits `0..n_items` into consecutive ranges of at most `batch_size` items.
///
/// # Examples
///
/// ```
/// use finaml_risk::parallel::batch_ranges;
///
/// assert_eq!(batch_ranges(7, 3), vec![0..3, 3..6, 6..7]);
/// ```
pub fn batch_ranges(n_items: usize, batch_size: usize) -> Vec<Range<usize>> {
    let batch_size = batch_size.max(1);
    (0..n_items)
        .step_by(batch_size)
        .map(|start| start..(start + batch_size).min(n_items))
        .collect()
}

/// Runs `processor(batch_index, range)` for every batch and returns the
/// results in batch order.
pub fn process_in_batches<R, F>(n_items: usize, config: &ParallelConfig, processor: F) -> Vec<R>
where
    R: Send,
    F: Fn(usize, Range<usize>) -> R + Sync + Send,
{
    let ranges = batch_ranges(n_items, config.batch_size);
    if config.should_parallelize(n_items) {
        ranges
            .into_par_iter()
            .enumerate()
            .map(|(index, range)| processor(index, range))
            .collect()
    } else {
        ranges
            .into_iter()
            .enumerate()
            .map(|(index, range)| processor(index, range))
            .collect()
    }
}
