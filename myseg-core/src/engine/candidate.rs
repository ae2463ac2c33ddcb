//! Candidate words at one text position and the lookahead ring

use crate::cursor::TextCursor;
use crate::dictionary::DictionaryMatcher;
use smallvec::SmallVec;

/// The dictionary words starting at one offset, walked longest to shortest.
///
/// `current` is the candidate being explored, `mark` the one that will be
/// committed by [`CandidateSlot::accept_marked`]. Both start at the longest
/// candidate after each query.
#[derive(Debug, Clone, Default)]
pub(crate) struct CandidateSlot {
    /// Candidate lengths, shortest first
    lengths: SmallVec<[usize; 8]>,
    /// Code points the last query examined
    prefix: usize,
    /// Offset the candidates were queried from
    start: Option<usize>,
    mark: usize,
    current: usize,
}

impl CandidateSlot {
    /// Query the dictionary at the cursor and park the cursor after the
    /// longest candidate. With no candidates the cursor stays put.
    ///
    /// Repeating a query from the same offset reuses the stored candidates.
    pub(crate) fn candidates(
        &mut self,
        cursor: &mut TextCursor<'_>,
        dictionary: &dyn DictionaryMatcher,
        range_end: usize,
    ) -> usize {
        let start = cursor.index();
        if self.start != Some(start) {
            let found = dictionary.matches(cursor, range_end);
            self.start = Some(start);
            self.lengths = found.lengths;
            self.prefix = found.prefix;
        }

        let count = self.lengths.len();
        self.current = count.saturating_sub(1);
        self.mark = self.current;
        if let Some(&longest) = self.lengths.last() {
            cursor.set_index(start + longest);
        }
        count
    }

    /// Commit the marked candidate: move the cursor after it and return its length
    pub(crate) fn accept_marked(&self, cursor: &mut TextCursor<'_>) -> usize {
        let start = self.start.unwrap_or_else(|| cursor.index());
        let length = self.lengths.get(self.mark).copied().unwrap_or(0);
        cursor.set_index(start + length);
        length
    }

    /// Step to the next shorter candidate and park the cursor after it.
    /// Returns false once the shortest candidate has been tried.
    pub(crate) fn back_up(&mut self, cursor: &mut TextCursor<'_>) -> bool {
        match self.start {
            Some(start) if self.current > 0 => {
                self.current -= 1;
                cursor.set_index(start + self.lengths[self.current]);
                true
            }
            _ => false,
        }
    }

    /// Prefer the candidate currently being explored
    pub(crate) fn mark_current(&mut self) {
        self.mark = self.current;
    }

    /// How far the last query walked into the dictionary
    pub(crate) fn longest_prefix(&self) -> usize {
        self.prefix
    }
}

/// Three candidate slots addressed by role.
///
/// Slot 0 holds the word being decided, slots 1 and 2 the words that may
/// follow it. Counting a word rotates the roles by one.
#[derive(Debug, Default)]
pub(crate) struct SlotRing {
    slots: [CandidateSlot; 3],
}

impl SlotRing {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Slot for the word being decided
    #[inline]
    pub(crate) fn current(&mut self) -> &mut CandidateSlot {
        &mut self.slots[0]
    }

    /// Slot for the word after it
    #[inline]
    pub(crate) fn next(&mut self) -> &mut CandidateSlot {
        &mut self.slots[1]
    }

    /// Slot for the word after that
    #[inline]
    pub(crate) fn after_next(&mut self) -> &mut CandidateSlot {
        &mut self.slots[2]
    }

    /// A word was counted: the next slot becomes the current one
    #[inline]
    pub(crate) fn rotate(&mut self) {
        self.slots.rotate_left(1);
    }
}
