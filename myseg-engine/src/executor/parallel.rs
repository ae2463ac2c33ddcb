//! Parallel execution strategy

use crate::{
    error::{EngineError, Result},
    executor::{ExecutionMode, Executor},
    segmenter::{Segmentation, Segmenter},
};
use rayon::prelude::*;

/// Parallel multi-threaded executor
#[derive(Debug)]
pub struct ParallelExecutor {
    /// Dedicated pool; `None` uses rayon's global pool
    pool: Option<rayon::ThreadPool>,
}

impl ParallelExecutor {
    /// Create a parallel executor with `threads` workers, or the global pool
    pub fn new(threads: Option<usize>) -> Result<Self> {
        let pool = match threads {
            Some(n) => Some(
                rayon::ThreadPoolBuilder::new()
                    .num_threads(n)
                    .build()
                    .map_err(|e| EngineError::ParallelError(e.to_string()))?,
            ),
            None => None,
        };
        Ok(Self { pool })
    }

    fn segment_all<S>(segmenter: &Segmenter, texts: &[S]) -> Vec<Segmentation>
    where
        S: AsRef<str> + Sync,
    {
        texts
            .par_iter()
            .map(|text| segmenter.segment(text.as_ref()))
            .collect()
    }
}

impl Executor for ParallelExecutor {
    fn segment_batch<S>(&self, segmenter: &Segmenter, texts: &[S]) -> Result<Vec<Segmentation>>
    where
        S: AsRef<str> + Sync,
    {
        let results = match &self.pool {
            Some(pool) => pool.install(|| Self::segment_all(segmenter, texts)),
            None => Self::segment_all(segmenter, texts),
        };
        log::debug!("segmented {} texts in parallel", results.len());
        Ok(results)
    }

    fn mode(&self) -> ExecutionMode {
        ExecutionMode::Parallel
    }
}
