//! Dictionary-driven word segmentation for scripts written without spaces
//!
//! Burmese and related scripts do not separate words, so line breaking and
//! text analysis need word boundaries recovered from a dictionary. This
//! crate implements the recovery as a greedy longest-match search with a
//! bounded lookahead: at each position it prefers the candidate word that is
//! followed by two more dictionary words, and it folds text the dictionary
//! does not know into neighbouring segments.
//!
//! # Architecture
//!
//! - [`TextCursor`]: position-addressable view over the code points of a text
//! - [`CharSet`] and [`ScriptClasses`]: frozen code point predicates
//! - [`DictionaryMatcher`] and [`TrieDictionary`]: candidate word lookup
//! - [`DictionaryBreakEngine`]: the segmentation algorithm
//! - [`BreakCollector`]: where boundary offsets accumulate
//!
//! # Example
//!
//! ```rust
//! use myseg_core::{BreakCollector, DictionaryBreakEngine, ScriptConfig, ScriptTag, TextCursor};
//!
//! let config = ScriptConfig::embedded(ScriptTag::Myanmar)?;
//! let engine = DictionaryBreakEngine::from_config(&config)?;
//!
//! // "Myanmar" followed by "country"
//! let text: Vec<char> = "မြန်မာနိုင်ငံ".chars().collect();
//! let mut cursor = TextCursor::new(&text);
//! let mut breaks = BreakCollector::new();
//! let words = engine.divide_range(&mut cursor, 0, text.len(), &mut breaks);
//!
//! assert_eq!(words, 1);
//! assert_eq!(breaks.as_slice(), &[6]);
//! # Ok::<(), myseg_core::CoreError>(())
//! ```

pub mod breaks;
pub mod charset;
pub mod config;
pub mod cursor;
pub mod dictionary;
pub mod engine;
pub mod error;
pub mod script;

pub use breaks::BreakCollector;
pub use charset::{CharSet, CharSetBuilder};
pub use config::{ScriptConfig, Thresholds};
pub use cursor::TextCursor;
pub use dictionary::{
    load_dictionary_for, DictionaryMatch, DictionaryMatcher, TrieDictionary, MAX_CANDIDATES,
};
pub use engine::DictionaryBreakEngine;
pub use error::{CoreError, Result};
pub use script::{ScriptClasses, ScriptTag};
