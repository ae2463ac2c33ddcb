//! Whole-text segmentation with a single engine
//!
//! The segmenter finds each maximal run of the engine's characters, lets the
//! engine divide it, and marks both edges of the run. Text outside the runs
//! is passed through untouched as segments of its own.

use crate::error::Result;
use crate::registry::EngineRegistry;
use myseg_core::{BreakCollector, DictionaryBreakEngine, ScriptTag, TextCursor};
use std::sync::Arc;

/// A break position in both offset units
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Boundary {
    /// Offset in Unicode scalar values
    pub char_offset: usize,
    /// Offset in UTF-8 bytes
    pub byte_offset: usize,
}

/// Breaks found in one text
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Segmentation {
    /// Word breaks and run edges, in increasing order. Never 0 or the text length.
    pub boundaries: Vec<Boundary>,
    /// Words the engine counted inside the runs
    pub words_found: usize,
}

impl Segmentation {
    /// Split `text` at every boundary.
    ///
    /// `text` must be the text this segmentation was computed for.
    pub fn segments<'a>(&self, text: &'a str) -> Vec<&'a str> {
        let mut segments = Vec::with_capacity(self.boundaries.len() + 1);
        let mut start = 0;
        for boundary in &self.boundaries {
            segments.push(&text[start..boundary.byte_offset]);
            start = boundary.byte_offset;
        }
        if start < text.len() {
            segments.push(&text[start..]);
        }
        segments
    }

    /// Boundary offsets in Unicode scalar values
    pub fn char_offsets(&self) -> impl Iterator<Item = usize> + '_ {
        self.boundaries.iter().map(|b| b.char_offset)
    }

    /// Boundary offsets in UTF-8 bytes
    pub fn byte_offsets(&self) -> impl Iterator<Item = usize> + '_ {
        self.boundaries.iter().map(|b| b.byte_offset)
    }
}

/// Segments whole texts with one engine
#[derive(Debug, Clone)]
pub struct Segmenter {
    engine: Arc<DictionaryBreakEngine>,
}

impl Segmenter {
    /// Create a segmenter around an engine
    pub fn new(engine: Arc<DictionaryBreakEngine>) -> Self {
        Self { engine }
    }

    /// Create a segmenter from the embedded engine for `script`
    pub fn for_script(script: ScriptTag) -> Result<Self> {
        Ok(Self::new(EngineRegistry::embedded().engine_for(script)?))
    }

    /// The engine doing the work
    pub fn engine(&self) -> &DictionaryBreakEngine {
        &self.engine
    }

    /// Find the breaks in `text`
    pub fn segment(&self, text: &str) -> Segmentation {
        let chars: Vec<char> = text.chars().collect();
        let len = chars.len();
        let characters = self.engine.characters();

        let mut cursor = TextCursor::new(&chars);
        let mut breaks = BreakCollector::new();
        let mut words_found = 0;

        while let Some(ch) = cursor.current() {
            if !characters.contains(ch) {
                cursor.next();
                continue;
            }

            let run_start = cursor.index();
            if run_start > 0 {
                breaks.push(run_start);
            }
            words_found += self.engine.find_breaks(&mut cursor, len, &mut breaks);
            if cursor.index() < len {
                breaks.push(cursor.index());
            }
        }

        Segmentation {
            boundaries: to_boundaries(text, breaks.as_slice()),
            words_found,
        }
    }
}

/// Pair each char offset with its byte offset. `breaks` must be increasing.
fn to_boundaries(text: &str, breaks: &[usize]) -> Vec<Boundary> {
    let mut boundaries = Vec::with_capacity(breaks.len());
    let mut pending = breaks.iter().copied().peekable();

    for (char_offset, (byte_offset, _)) in text.char_indices().enumerate() {
        if pending.peek() == Some(&char_offset) {
            boundaries.push(Boundary {
                char_offset,
                byte_offset,
            });
            pending.next();
        }
    }

    boundaries
}
