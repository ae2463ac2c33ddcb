//! Sequential execution strategy

use crate::{
    error::Result,
    executor::{ExecutionMode, Executor},
    segmenter::{Segmentation, Segmenter},
};

/// Sequential single-threaded executor
#[derive(Debug, Clone)]
pub struct SequentialExecutor;

impl Executor for SequentialExecutor {
    fn segment_batch<S>(&self, segmenter: &Segmenter, texts: &[S]) -> Result<Vec<Segmentation>>
    where
        S: AsRef<str> + Sync,
    {
        Ok(texts
            .iter()
            .map(|text| segmenter.segment(text.as_ref()))
            .collect())
    }

    fn mode(&self) -> ExecutionMode {
        ExecutionMode::Sequential
    }
}
