//! Word trie for prefix matching
//!
//! Nodes live in one contiguous vector and refer to their children by
//! index. The trie is built once and only read afterwards.

use super::{DictionaryMatch, DictionaryMatcher, MAX_CANDIDATES};
use crate::cursor::TextCursor;
use crate::error::{CoreError, Result};
use std::collections::HashMap;
use std::path::Path;

/// Compact trie node using array indices instead of pointers
#[derive(Debug, Clone, Default)]
struct TrieNode {
    /// Child nodes: char -> node index
    children: HashMap<char, u32>,
    /// Whether a word ends at this node
    is_end: bool,
}

/// Dictionary of words stored as a character trie
#[derive(Debug, Clone)]
pub struct TrieDictionary {
    nodes: Vec<TrieNode>,
    words: usize,
}

impl TrieDictionary {
    fn empty() -> Self {
        Self {
            nodes: vec![TrieNode::default()],
            words: 0,
        }
    }

    /// Build from an iterator of words. Duplicates are counted once.
    pub fn from_words<I, S>(words: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut trie = Self::empty();
        for word in words {
            trie.insert(word.as_ref());
        }

        if trie.words == 0 {
            return Err(CoreError::EmptyDictionary);
        }
        trie.nodes.shrink_to_fit();
        Ok(trie)
    }

    /// Parse a word list: one word per line, `#` comments and blank lines
    /// ignored, anything after a tab ignored.
    pub fn from_word_list(list: &str) -> Result<Self> {
        let mut words = Vec::new();

        for (idx, raw) in list.lines().enumerate() {
            let line = raw.trim_start_matches('\u{FEFF}').trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }

            let word = line.split('\t').next().unwrap_or_default().trim();
            if word.is_empty() || word.chars().any(char::is_whitespace) {
                return Err(CoreError::MalformedEntry {
                    line: idx + 1,
                    entry: line.to_string(),
                });
            }
            words.push(word);
        }

        Self::from_words(words)
    }

    /// Read a UTF-8 word list from disk
    pub fn from_path(path: &Path) -> Result<Self> {
        let bytes = std::fs::read(path).map_err(|e| CoreError::DictionaryLoad {
            source_name: path.display().to_string(),
            reason: e.to_string(),
        })?;
        let list = String::from_utf8(bytes).map_err(|e| CoreError::DictionaryLoad {
            source_name: path.display().to_string(),
            reason: e.to_string(),
        })?;
        Self::from_word_list(&list)
    }

    /// Number of distinct words
    pub fn len(&self) -> usize {
        self.words
    }

    /// Whether the dictionary holds no words
    pub fn is_empty(&self) -> bool {
        self.words == 0
    }

    /// Whether `word` is in the dictionary
    pub fn contains(&self, word: &str) -> bool {
        let mut idx = 0u32;
        for ch in word.chars() {
            match self.nodes[idx as usize].children.get(&ch) {
                Some(&next) => idx = next,
                None => return false,
            }
        }
        idx != 0 && self.nodes[idx as usize].is_end
    }

    fn insert(&mut self, word: &str) {
        if word.is_empty() {
            return;
        }

        let mut current_idx = 0u32;
        for ch in word.chars() {
            let next_idx = match self.nodes[current_idx as usize].children.get(&ch) {
                Some(&child_idx) => child_idx,
                None => {
                    let new_idx = self.nodes.len() as u32;
                    self.nodes.push(TrieNode::default());
                    self.nodes[current_idx as usize]
                        .children
                        .insert(ch, new_idx);
                    new_idx
                }
            };
            current_idx = next_idx;
        }

        let node = &mut self.nodes[current_idx as usize];
        if !node.is_end {
            node.is_end = true;
            self.words += 1;
        }
    }
}

impl DictionaryMatcher for TrieDictionary {
    fn matches(&self, cursor: &TextCursor<'_>, range_end: usize) -> DictionaryMatch {
        let mut result = DictionaryMatch::empty();
        let mut idx = 0u32;

        for &ch in cursor.slice_to(range_end) {
            result.prefix += 1;
            let node = match self.nodes[idx as usize].children.get(&ch) {
                Some(&next) => {
                    idx = next;
                    &self.nodes[next as usize]
                }
                None => break,
            };

            if node.is_end && result.lengths.len() < MAX_CANDIDATES {
                result.lengths.push(result.prefix);
            }
            if node.children.is_empty() {
                break;
            }
        }

        result
    }

    fn word_count(&self) -> Option<usize> {
        Some(self.words)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chars(s: &str) -> Vec<char> {
        s.chars().collect()
    }

    #[test]
    fn test_all_prefix_words_reported_shortest_first() {
        let dict = TrieDictionary::from_words(["ab", "abc", "abcde", "x"]).unwrap();
        let text = chars("abcdef");
        let cursor = TextCursor::new(&text);

        let m = dict.matches(&cursor, text.len());
        assert_eq!(m.lengths.as_slice(), &[2, 3, 5]);
        // "abcde" is a leaf, so 'f' is never examined
        assert_eq!(m.prefix, 5);
    }

    #[test]
    fn test_range_end_truncates_words() {
        let dict = TrieDictionary::from_words(["ab", "abcd"]).unwrap();
        let text = chars("abcd");
        let cursor = TextCursor::new(&text);

        let m = dict.matches(&cursor, 3);
        assert_eq!(m.lengths.as_slice(), &[2]);
        assert_eq!(m.prefix, 3);
    }

    #[test]
    fn test_prefix_counts_failing_code_point() {
        let dict = TrieDictionary::from_words(["abcd"]).unwrap();
        let text = chars("abxd");
        let cursor = TextCursor::new(&text);

        let m = dict.matches(&cursor, text.len());
        assert_eq!(m.count(), 0);
        assert_eq!(m.prefix, 3);

        let text = chars("zz");
        let cursor = TextCursor::new(&text);
        assert_eq!(dict.matches(&cursor, 2).prefix, 1);
    }

    #[test]
    fn test_walk_stops_at_leaf() {
        let dict = TrieDictionary::from_words(["ab"]).unwrap();
        let text = chars("abab");
        let cursor = TextCursor::new(&text);

        let m = dict.matches(&cursor, text.len());
        assert_eq!(m.lengths.as_slice(), &[2]);
        assert_eq!(m.prefix, 2);
    }

    #[test]
    fn test_matches_from_cursor_offset() {
        let dict = TrieDictionary::from_words(["cd"]).unwrap();
        let text = chars("abcd");
        let mut cursor = TextCursor::new(&text);
        cursor.set_index(2);

        assert_eq!(dict.matches(&cursor, 4).lengths.as_slice(), &[2]);
        assert_eq!(cursor.index(), 2);
        assert_eq!(dict.matches(&cursor, 2), DictionaryMatch::empty());
    }

    #[test]
    fn test_candidate_cap() {
        let words: Vec<String> = (1..=30).map(|n| "a".repeat(n)).collect();
        let dict = TrieDictionary::from_words(&words).unwrap();
        let text = chars(&"a".repeat(30));
        let cursor = TextCursor::new(&text);

        assert_eq!(dict.matches(&cursor, 30).count(), MAX_CANDIDATES);
    }

    #[test]
    fn test_word_list_parsing() {
        let list = "\u{FEFF}# seed list\nမြန်မာ\t120\n\nနိုင်ငံ\nမြန်မာ\n";
        let dict = TrieDictionary::from_word_list(list).unwrap();
        assert_eq!(dict.len(), 2);
        assert!(dict.contains("မြန်မာ"));
        assert!(dict.contains("နိုင်ငံ"));
        assert!(!dict.contains("မြန်"));
        assert!(!dict.contains(""));
    }

    #[test]
    fn test_malformed_line_reported() {
        let err = TrieDictionary::from_word_list("ok\ntwo words\n").unwrap_err();
        assert!(matches!(err, CoreError::MalformedEntry { line: 2, .. }));
    }

    #[test]
    fn test_empty_list_rejected() {
        let err = TrieDictionary::from_word_list("# nothing\n\n").unwrap_err();
        assert!(matches!(err, CoreError::EmptyDictionary));
    }

    #[test]
    fn test_missing_file_is_load_error() {
        let err = TrieDictionary::from_path(Path::new("/nonexistent/words.txt")).unwrap_err();
        assert!(matches!(err, CoreError::DictionaryLoad { .. }));
    }

    #[test]
    fn test_non_utf8_file_is_load_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("words.txt");
        std::fs::write(&path, [0x66, 0xFF, 0x0A]).unwrap();

        let err = TrieDictionary::from_path(&path).unwrap_err();
        assert!(matches!(err, CoreError::DictionaryLoad { .. }));
    }
}
