//! Immutable code point sets
//!
//! Sets are assembled with [`CharSetBuilder`] and frozen into an ICU
//! inversion list. Lookups are a binary search and never allocate.

use icu_collections::codepointinvlist::{CodePointInversionList, CodePointInversionListBuilder};
use std::ops::RangeInclusive;

/// Frozen set of code points
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CharSet {
    inner: CodePointInversionList<'static>,
}

impl Default for CharSet {
    fn default() -> Self {
        CharSetBuilder::default().build()
    }
}

impl CharSet {
    /// Start building a new set
    pub fn builder() -> CharSetBuilder {
        CharSetBuilder::default()
    }

    /// Whether `ch` is a member
    #[inline]
    pub fn contains(&self, ch: char) -> bool {
        self.inner.contains(ch)
    }

    /// Membership test that treats the end-of-text sentinel as absent
    #[inline]
    pub fn contains_opt(&self, ch: Option<char>) -> bool {
        ch.is_some_and(|c| self.contains(c))
    }

    /// Number of code points in the set
    pub fn len(&self) -> usize {
        self.inner.size()
    }

    /// Whether the set has no members
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// The coalesced ranges, ascending
    pub fn ranges(&self) -> impl Iterator<Item = RangeInclusive<u32>> + '_ {
        self.inner.iter_ranges()
    }
}

/// Mutable accumulator for a [`CharSet`]
pub struct CharSetBuilder {
    inner: CodePointInversionListBuilder,
}

impl Default for CharSetBuilder {
    fn default() -> Self {
        Self {
            inner: CodePointInversionListBuilder::new(),
        }
    }
}

impl CharSetBuilder {
    /// Add a single code point
    pub fn add(&mut self, ch: char) -> &mut Self {
        self.inner.add_char(ch);
        self
    }

    /// Add an inclusive range of code points. Empty ranges are ignored.
    pub fn add_range(&mut self, start: u32, end: u32) -> &mut Self {
        if start <= end {
            self.inner.add_range32(start..=end);
        }
        self
    }

    /// Add every code point of `other`
    pub fn add_set(&mut self, other: &CharSet) -> &mut Self {
        self.inner.add_set(&other.inner);
        self
    }

    /// Freeze the accumulated code points, leaving the builder empty
    pub fn build(&mut self) -> CharSet {
        let inner = std::mem::take(self).inner.build();
        CharSet { inner }
    }
}
