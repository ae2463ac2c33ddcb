//! Execution strategies for batches of texts
//!
//! Every text gets its own cursor and candidate ring; the engine is shared
//! read-only, so texts can be segmented on any number of threads.

use crate::error::Result;
use crate::segmenter::{Segmentation, Segmenter};

#[cfg(feature = "parallel")]
pub mod parallel;
pub mod sequential;

// Re-export executors
#[cfg(feature = "parallel")]
pub use parallel::ParallelExecutor;
pub use sequential::SequentialExecutor;

/// Execution mode selector
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExecutionMode {
    /// Single-threaded sequential processing
    Sequential,
    /// Multi-threaded parallel processing
    Parallel,
}

/// Trait for execution strategies
pub trait Executor: Send + Sync {
    /// Segment every text, returning results in input order
    fn segment_batch<S>(&self, segmenter: &Segmenter, texts: &[S]) -> Result<Vec<Segmentation>>
    where
        S: AsRef<str> + Sync;

    /// Get the execution mode
    fn mode(&self) -> ExecutionMode;
}

/// Automatically select execution mode based on batch size
pub fn auto_select(batch_len: usize, threshold: usize) -> ExecutionMode {
    if batch_len < 2 || batch_len < threshold {
        ExecutionMode::Sequential
    } else {
        #[cfg(feature = "parallel")]
        return ExecutionMode::Parallel;

        #[cfg(not(feature = "parallel"))]
        ExecutionMode::Sequential
    }
}

/// Segment a batch with the executor for `mode`.
///
/// Without the `parallel` feature every mode runs sequentially.
pub fn execute<S>(
    mode: ExecutionMode,
    segmenter: &Segmenter,
    texts: &[S],
) -> Result<Vec<Segmentation>>
where
    S: AsRef<str> + Sync,
{
    match mode {
        #[cfg(feature = "parallel")]
        ExecutionMode::Parallel => ParallelExecutor::new(None)?.segment_batch(segmenter, texts),
        _ => SequentialExecutor.segment_batch(segmenter, texts),
    }
}
