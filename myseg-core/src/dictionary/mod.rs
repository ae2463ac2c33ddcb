//! Dictionary lookups for word candidates
//!
//! The segmentation engine only needs one question answered: which
//! dictionary words start at this position and end before the range does.

mod trie;

pub use trie::TrieDictionary;

use crate::config::ScriptConfig;
use crate::cursor::TextCursor;
use crate::error::Result;
use smallvec::SmallVec;
use std::fmt::Debug;

/// Upper bound on the candidate lengths reported by one query
pub const MAX_CANDIDATES: usize = 20;

/// Result of one dictionary query
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DictionaryMatch {
    /// Lengths in code points of the words found, shortest first
    pub lengths: SmallVec<[usize; 8]>,
    /// Code points examined before the walk stopped, including the one that
    /// failed to match. Signals how close the text came to a dictionary word.
    pub prefix: usize,
}

impl DictionaryMatch {
    /// No words and nothing examined
    pub fn empty() -> Self {
        Self::default()
    }

    /// Number of words found
    #[inline]
    pub fn count(&self) -> usize {
        self.lengths.len()
    }
}

/// Read-only word lookup shared across threads once built
pub trait DictionaryMatcher: Send + Sync + Debug {
    /// Find the dictionary words starting at the cursor's offset.
    ///
    /// Only code points before `range_end` may be read, so a word the range
    /// truncates is never reported. The cursor is not moved.
    fn matches(&self, cursor: &TextCursor<'_>, range_end: usize) -> DictionaryMatch;

    /// Number of words in the dictionary, if known
    fn word_count(&self) -> Option<usize> {
        None
    }
}

/// Seed word lists compiled into the library, keyed by script code
fn embedded_word_list(config: &ScriptConfig) -> Option<&'static str> {
    match config.metadata.code.to_ascii_lowercase().as_str() {
        "mymr" => Some(include_str!("../../configs/dictionaries/myanmar.txt")),
        _ => None,
    }
}

/// Load the dictionary a script configuration asks for.
///
/// A configured path wins over the embedded word list. Any failure is
/// returned so the caller never builds an engine around an empty dictionary.
pub fn load_dictionary_for(config: &ScriptConfig) -> Result<TrieDictionary> {
    let dictionary = match &config.dictionary.path {
        Some(path) => TrieDictionary::from_path(path)?,
        None => {
            let words = embedded_word_list(config).ok_or_else(|| {
                crate::error::CoreError::DictionaryLoad {
                    source_name: config.metadata.code.clone(),
                    reason: "no embedded word list for this script".to_string(),
                }
            })?;
            TrieDictionary::from_word_list(words)?
        }
    };

    log::debug!(
        "loaded {} dictionary with {} words",
        config.metadata.code,
        dictionary.len()
    );

    Ok(dictionary)
}
