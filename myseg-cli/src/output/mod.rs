//! Output formatting module

use anyhow::Result;
use myseg_engine::Segmentation;

/// Trait for output formatters
pub trait OutputFormatter: Send + Sync {
    /// Format and output one segmented document
    fn format_document(&mut self, name: &str, text: &str, segmentation: &Segmentation)
        -> Result<()>;

    /// Finalize output (e.g., close JSON array)
    fn finish(&mut self) -> Result<()>;
}

pub mod json;
pub mod text;

pub use json::JsonFormatter;
pub use text::TextFormatter;
