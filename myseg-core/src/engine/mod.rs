//! Dictionary-driven word segmentation
//!
//! [`DictionaryBreakEngine`] divides a range of text that is entirely in its
//! script into words. At each position it asks the dictionary for words
//! starting there. When several lengths are possible it looks up to two words
//! ahead and prefers the first candidate, longest first, that starts a chain
//! of three dictionary words. Text the dictionary does not know is absorbed
//! by a resynchronization scan that stops where a known word could start.

mod candidate;

use crate::breaks::BreakCollector;
use crate::config::{ScriptConfig, Thresholds};
use crate::cursor::TextCursor;
use crate::dictionary::{load_dictionary_for, DictionaryMatcher};
use crate::error::Result;
use crate::script::{ScriptClasses, ScriptTag};
use candidate::SlotRing;
use std::hash::{Hash, Hasher};
use std::sync::Arc;

/// Word segmentation engine for one script.
///
/// Engines are immutable once built and can be shared across threads; every
/// call owns its own cursor and lookahead state. Two engines compare equal
/// when they serve the same script.
#[derive(Debug, Clone)]
pub struct DictionaryBreakEngine {
    script: ScriptTag,
    classes: Arc<ScriptClasses>,
    dictionary: Arc<dyn DictionaryMatcher>,
    thresholds: Thresholds,
}

impl DictionaryBreakEngine {
    /// Assemble an engine from prebuilt parts.
    ///
    /// Fails if any threshold is zero.
    pub fn new(
        script: ScriptTag,
        classes: ScriptClasses,
        dictionary: Arc<dyn DictionaryMatcher>,
        thresholds: Thresholds,
    ) -> Result<Self> {
        thresholds.validate()?;
        Ok(Self {
            script,
            classes: Arc::new(classes),
            dictionary,
            thresholds,
        })
    }

    /// Build an engine from a script configuration, loading its dictionary.
    ///
    /// Fails if the dictionary cannot be loaded; there is no engine without one.
    pub fn from_config(config: &ScriptConfig) -> Result<Self> {
        config.validate()?;
        let dictionary = load_dictionary_for(config)?;
        Self::with_dictionary(config, Arc::new(dictionary))
    }

    /// Build an engine from a script configuration and an already loaded dictionary
    pub fn with_dictionary(
        config: &ScriptConfig,
        dictionary: Arc<dyn DictionaryMatcher>,
    ) -> Result<Self> {
        config.validate()?;
        let script = config.script()?;
        let classes = ScriptClasses::new(script, &config.classes);
        log::debug!(
            "built {} engine: {} word-ending code points, {} marks",
            script,
            classes.end_word.len(),
            classes.marks.len()
        );
        Self::new(script, classes, dictionary, config.thresholds)
    }

    /// Script this engine segments
    pub fn script(&self) -> ScriptTag {
        self.script
    }

    /// Whether `ch` belongs to this engine's script
    pub fn handles(&self, ch: char) -> bool {
        self.script.handles(ch)
    }

    /// Code points this engine will divide when spanning a run
    pub fn characters(&self) -> &crate::charset::CharSet {
        &self.classes.end_word
    }

    /// Classification sets
    pub fn classes(&self) -> &ScriptClasses {
        &self.classes
    }

    /// Heuristic thresholds
    pub fn thresholds(&self) -> Thresholds {
        self.thresholds
    }

    /// The dictionary backing this engine
    pub fn dictionary(&self) -> &dyn DictionaryMatcher {
        self.dictionary.as_ref()
    }

    /// Span the run of this engine's characters starting at the cursor, up to
    /// `end`, and divide it. The cursor is left at the end of the run.
    pub fn find_breaks(
        &self,
        cursor: &mut TextCursor<'_>,
        end: usize,
        breaks: &mut BreakCollector,
    ) -> usize {
        let run_start = cursor.index();
        while cursor.index() < end && self.classes.end_word.contains_opt(cursor.current()) {
            cursor.next();
        }
        let run_end = cursor.index();

        self.divide_range(cursor, run_start, run_end, breaks)
    }

    /// Divide `[range_start, range_end)` into words, pushing the offset after
    /// each word onto `breaks`, and return the number of words found.
    ///
    /// No break is pushed at `range_end` itself; the boundary between ranges
    /// belongs to the caller. The cursor is left at `range_end`.
    pub fn divide_range(
        &self,
        cursor: &mut TextCursor<'_>,
        range_start: usize,
        range_end: usize,
        breaks: &mut BreakCollector,
    ) -> usize {
        debug_assert!(range_start <= range_end, "inverted range");
        debug_assert!(range_end <= cursor.len(), "range past end of text");

        if range_end - range_start < self.thresholds.min_word {
            cursor.set_index(range_end);
            return 0;
        }

        let dictionary = self.dictionary.as_ref();
        let classes = self.classes.as_ref();
        let Thresholds {
            root_combine,
            prefix_combine,
            ..
        } = self.thresholds;

        let pushed_before = breaks.len();
        let mut words_found = 0usize;
        let mut ring = SlotRing::new();

        cursor.set_index(range_start);
        loop {
            let current = cursor.index();
            if current >= range_end {
                break;
            }
            let mut word_length = 0;

            let candidates = ring.current().candidates(cursor, dictionary, range_end);
            if candidates > 0 {
                if candidates > 1 {
                    select_by_lookahead(&mut ring, cursor, dictionary, range_end);
                }
                word_length = ring.current().accept_marked(cursor);
                words_found += 1;
                ring.rotate();
            }

            // A short word or no word at all: if no dictionary word follows,
            // glue the unknown text onto this one up to a plausible boundary.
            // With no word here the resync always runs, so the loop advances.
            if cursor.index() < range_end && (word_length == 0 || word_length < root_combine) {
                let next_is_word = ring.current().candidates(cursor, dictionary, range_end) > 0;
                if !next_is_word
                    && (word_length == 0 || ring.current().longest_prefix() < prefix_combine)
                {
                    let resync_start = current + word_length;
                    let mut remaining = range_end - resync_start;
                    let mut prev = cursor.current();
                    let mut chars = 0;
                    loop {
                        cursor.next();
                        let next = cursor.current();
                        chars += 1;
                        remaining -= 1;
                        if remaining == 0 {
                            break;
                        }
                        if classes.end_word.contains_opt(prev)
                            && classes.begin_word.contains_opt(next)
                        {
                            let found = ring.next().candidates(cursor, dictionary, range_end);
                            cursor.set_index(resync_start + chars);
                            if found > 0 {
                                break;
                            }
                        }
                        prev = next;
                    }

                    if word_length == 0 {
                        words_found += 1;
                        ring.rotate();
                    }
                    word_length += chars;
                } else {
                    cursor.set_index(current + word_length);
                }
            }

            // Never stop before a combining mark.
            while cursor.index() < range_end && classes.marks.contains_opt(cursor.current()) {
                cursor.next();
                word_length += 1;
            }

            if word_length > 0 {
                breaks.push(current + word_length);
            }
        }

        if breaks.len() > pushed_before && breaks.peek().is_some_and(|b| b >= range_end) {
            breaks.pop();
            words_found = words_found.saturating_sub(1);
        }

        log::trace!(
            "{} range {}..{}: {} words",
            self.script,
            range_start,
            range_end,
            words_found
        );

        words_found
    }
}

/// Choose among several candidates for the current word.
///
/// Candidates are tried longest first. One followed by a second dictionary
/// word is marked; the first one followed by two more words wins outright.
fn select_by_lookahead(
    ring: &mut SlotRing,
    cursor: &mut TextCursor<'_>,
    dictionary: &dyn DictionaryMatcher,
    range_end: usize,
) {
    if cursor.index() >= range_end {
        return;
    }

    let mut found_chain = false;
    loop {
        if ring.next().candidates(cursor, dictionary, range_end) > 0 {
            ring.current().mark_current();
            if cursor.index() >= range_end {
                break;
            }

            loop {
                if ring.after_next().candidates(cursor, dictionary, range_end) > 0 {
                    ring.current().mark_current();
                    found_chain = true;
                    break;
                }
                if !ring.next().back_up(cursor) {
                    break;
                }
            }
        }

        if !ring.current().back_up(cursor) || found_chain {
            break;
        }
    }
}

impl PartialEq for DictionaryBreakEngine {
    fn eq(&self, other: &Self) -> bool {
        self.script == other.script
    }
}

impl Eq for DictionaryBreakEngine {}

impl Hash for DictionaryBreakEngine {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.script.hash(state);
    }
}
