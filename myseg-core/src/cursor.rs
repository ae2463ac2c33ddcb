//! Position-addressable cursor over a code point buffer

/// A seekable cursor over text stored as code points.
///
/// Offsets are code point indices into the whole buffer, so a caller can hand
/// the same cursor to several engines, each working on its own sub-range.
#[derive(Debug, Clone)]
pub struct TextCursor<'a> {
    text: &'a [char],
    pos: usize,
}

impl<'a> TextCursor<'a> {
    /// Create a cursor positioned at the start of `text`
    pub fn new(text: &'a [char]) -> Self {
        Self { text, pos: 0 }
    }

    /// Current absolute offset
    #[inline]
    pub fn index(&self) -> usize {
        self.pos
    }

    /// Move to an absolute offset, clamped to the end of the text
    #[inline]
    pub fn set_index(&mut self, index: usize) {
        self.pos = index.min(self.text.len());
    }

    /// Advance by one code point. Stays put at the end of the text.
    #[inline]
    pub fn next(&mut self) {
        if self.pos < self.text.len() {
            self.pos += 1;
        }
    }

    /// Code point at the current offset, `None` once the end is reached
    #[inline]
    pub fn current(&self) -> Option<char> {
        self.text.get(self.pos).copied()
    }

    /// Code points from the current offset up to (not including) `end`
    #[inline]
    pub fn slice_to(&self, end: usize) -> &'a [char] {
        let end = end.min(self.text.len());
        if self.pos >= end {
            &[]
        } else {
            &self.text[self.pos..end]
        }
    }

    /// The whole underlying buffer
    #[inline]
    pub fn text(&self) -> &'a [char] {
        self.text
    }

    /// Length of the underlying buffer in code points
    #[inline]
    pub fn len(&self) -> usize {
        self.text.len()
    }

    /// Whether the underlying buffer is empty
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }
}
