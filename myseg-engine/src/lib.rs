//! Engine lookup and whole-text segmentation
//!
//! This crate sits on top of `myseg-core`: it builds engines once per
//! script, drives them over whole texts, and runs batches of texts
//! sequentially or in parallel.

#![warn(missing_docs)]

pub mod error;
pub mod executor;
pub mod registry;
pub mod segmenter;

// Re-export key types
pub use error::{EngineError, Result};
pub use executor::{auto_select, execute, ExecutionMode, Executor, SequentialExecutor};
#[cfg(feature = "parallel")]
pub use executor::ParallelExecutor;
pub use registry::{EngineRegistry, EngineRegistryBuilder};
pub use segmenter::{Boundary, Segmentation, Segmenter};

// Re-export from core for convenience
pub use myseg_core::{DictionaryBreakEngine, ScriptConfig, ScriptTag};
