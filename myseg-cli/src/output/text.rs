//! Plain text output formatter

use super::OutputFormatter;
use anyhow::Result;
use myseg_engine::Segmentation;
use std::io::Write;

/// Plain text formatter - reproduces the input with a separator at word breaks.
///
/// No separator is written next to whitespace, which already separates.
pub struct TextFormatter<W: Write> {
    writer: W,
    separator: String,
}

impl<W: Write> TextFormatter<W> {
    /// Create a new text formatter
    pub fn new(writer: W, separator: String) -> Self {
        Self { writer, separator }
    }
}

impl<W: Write + Send + Sync> OutputFormatter for TextFormatter<W> {
    fn format_document(
        &mut self,
        _name: &str,
        text: &str,
        segmentation: &Segmentation,
    ) -> Result<()> {
        let mut previous: Option<&str> = None;
        for segment in segmentation.segments(text) {
            if let Some(prev) = previous {
                if joins_without_space(prev, segment) {
                    self.writer.write_all(self.separator.as_bytes())?;
                }
            }
            self.writer.write_all(segment.as_bytes())?;
            previous = Some(segment);
        }
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }
}

fn joins_without_space(before: &str, after: &str) -> bool {
    let last = before.chars().next_back();
    let first = after.chars().next();
    matches!((last, first), (Some(a), Some(b)) if !a.is_whitespace() && !b.is_whitespace())
}
