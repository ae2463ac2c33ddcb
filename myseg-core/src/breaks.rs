//! Collected word boundaries

/// Growable stack of absolute break offsets.
///
/// Engines push in increasing order; the caller may reuse one collector
/// across several ranges of the same text.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BreakCollector {
    breaks: Vec<usize>,
}

impl BreakCollector {
    /// Create an empty collector
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty collector with room for `capacity` breaks
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            breaks: Vec::with_capacity(capacity),
        }
    }

    /// Push a break. Offsets must arrive in increasing order.
    #[inline]
    pub fn push(&mut self, offset: usize) {
        debug_assert!(
            self.breaks.last().map_or(true, |&last| last < offset),
            "break {offset} pushed out of order"
        );
        self.breaks.push(offset);
    }

    /// The most recently pushed break
    #[inline]
    pub fn peek(&self) -> Option<usize> {
        self.breaks.last().copied()
    }

    /// Remove and return the most recently pushed break
    #[inline]
    pub fn pop(&mut self) -> Option<usize> {
        self.breaks.pop()
    }

    /// Number of breaks
    #[inline]
    pub fn len(&self) -> usize {
        self.breaks.len()
    }

    /// Whether no breaks were collected
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.breaks.is_empty()
    }

    /// Drop every break
    pub fn clear(&mut self) {
        self.breaks.clear();
    }

    /// Breaks in push order
    pub fn as_slice(&self) -> &[usize] {
        &self.breaks
    }

    /// Iterate over breaks in push order
    pub fn iter(&self) -> impl Iterator<Item = usize> + '_ {
        self.breaks.iter().copied()
    }

    /// Consume the collector
    pub fn into_vec(self) -> Vec<usize> {
        self.breaks
    }
}
