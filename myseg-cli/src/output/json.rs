//! JSON output formatter

use super::OutputFormatter;
use anyhow::Result;
use myseg_engine::Segmentation;
use serde::{Deserialize, Serialize};
use std::io::Write;

/// JSON formatter - outputs documents with their segments as a JSON array
pub struct JsonFormatter<W: Write> {
    writer: W,
    documents: Vec<DocumentData>,
}

/// One input file in JSON output
#[derive(Debug, Serialize, Deserialize)]
pub struct DocumentData {
    /// Input file name
    pub file: String,
    /// Segments in text order
    pub segments: Vec<SegmentData>,
    /// Words counted by the engine
    pub words_found: usize,
}

/// Data structure for one segment
#[derive(Debug, Serialize, Deserialize)]
pub struct SegmentData {
    /// The segment text
    pub text: String,
    /// Starting byte offset in the original text
    pub offset: usize,
    /// Starting character offset in the original text
    pub char_offset: usize,
    /// Length of the segment in bytes
    pub length: usize,
}

impl<W: Write> JsonFormatter<W> {
    /// Create a new JSON formatter
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            documents: Vec::new(),
        }
    }
}

impl<W: Write + Send + Sync> OutputFormatter for JsonFormatter<W> {
    fn format_document(
        &mut self,
        name: &str,
        text: &str,
        segmentation: &Segmentation,
    ) -> Result<()> {
        let mut offset = 0;
        let mut char_offset = 0;
        let segments = segmentation
            .segments(text)
            .into_iter()
            .map(|segment| {
                let data = SegmentData {
                    text: segment.to_string(),
                    offset,
                    char_offset,
                    length: segment.len(),
                };
                offset += segment.len();
                char_offset += segment.chars().count();
                data
            })
            .collect();

        self.documents.push(DocumentData {
            file: name.to_string(),
            segments,
            words_found: segmentation.words_found,
        });
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        serde_json::to_writer_pretty(&mut self.writer, &self.documents)?;
        writeln!(self.writer)?;
        self.writer.flush()?;
        Ok(())
    }
}
