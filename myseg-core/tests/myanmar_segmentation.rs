//! End-to-end segmentation of Myanmar text with the embedded dictionary

use myseg_core::{
    BreakCollector, DictionaryBreakEngine, DictionaryMatcher, ScriptConfig, ScriptTag,
    TextCursor, TrieDictionary,
};
use std::sync::Arc;

fn embedded_engine() -> DictionaryBreakEngine {
    let config = ScriptConfig::embedded(ScriptTag::Myanmar).unwrap();
    DictionaryBreakEngine::from_config(&config).unwrap()
}

fn breaks_of(engine: &DictionaryBreakEngine, text: &str) -> (usize, Vec<usize>) {
    let chars: Vec<char> = text.chars().collect();
    let mut cursor = TextCursor::new(&chars);
    let mut breaks = BreakCollector::new();
    let words = engine.divide_range(&mut cursor, 0, chars.len(), &mut breaks);
    (words, breaks.into_vec())
}

#[test]
fn test_two_word_phrase() {
    let engine = embedded_engine();
    // မြန်မာ | နိုင်ငံ
    assert_eq!(breaks_of(&engine, "မြန်မာနိုင်ငံ"), (1, vec![6]));
}

#[test]
fn test_greeting() {
    let engine = embedded_engine();
    // မင်္ဂလာ | ပါ
    assert_eq!(breaks_of(&engine, "မင်္ဂလာပါ"), (1, vec![7]));
}

#[test]
fn test_thank_you() {
    let engine = embedded_engine();
    // ကျေးဇူး | တင် | ပါ | တယ်
    assert_eq!(breaks_of(&engine, "ကျေးဇူးတင်ပါတယ်"), (3, vec![7, 10, 12]));
}

#[test]
fn test_compound_filling_range_stays_whole() {
    let engine = embedded_engine();
    // ကျောင်း and ကျောင်းသား are both words; the longer reaches the range end
    assert_eq!(breaks_of(&engine, "ကျောင်းသား"), (0, vec![]));
}

#[test]
fn test_find_breaks_stops_at_latin_text() {
    let engine = embedded_engine();
    let chars: Vec<char> = "မြန်မာနိုင်ငံ Myanmar".chars().collect();
    let mut cursor = TextCursor::new(&chars);
    let mut breaks = BreakCollector::new();

    let words = engine.find_breaks(&mut cursor, chars.len(), &mut breaks);
    // The trailing space is not a Myanmar character, so the run ends before it
    assert_eq!(cursor.index(), 13);
    assert_eq!(words, 1);
    assert_eq!(breaks.as_slice(), &[6]);
}

#[test]
fn test_custom_dictionary_file() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("words.txt"), "# two words\nမြန်\nမာ\n").unwrap();
    let config_path = dir.path().join("myanmar.toml");
    std::fs::write(
        &config_path,
        r#"
[metadata]
code = "Mymr"
name = "Myanmar"

[classes]
begin_word = [{ start = 0x1000, end = 0x102A }]
extra_marks = [0x20]

[dictionary]
path = "words.txt"
"#,
    )
    .unwrap();

    let config = ScriptConfig::from_file(&config_path).unwrap();
    let engine = DictionaryBreakEngine::from_config(&config).unwrap();
    assert_eq!(engine.dictionary().word_count(), Some(2));
    // မြန် | မာ
    assert_eq!(breaks_of(&engine, "မြန်မာ"), (1, vec![4]));
}

#[test]
fn test_missing_dictionary_file_fails_construction() {
    let dir = tempfile::tempdir().unwrap();
    let toml_str = format!(
        r#"
[metadata]
code = "Mymr"
name = "Myanmar"

[classes]
begin_word = [{{ start = 0x1000, end = 0x102A }}]

[dictionary]
path = "{}"
"#,
        dir.path().join("absent.txt").display()
    );

    let config = ScriptConfig::from_toml_str(&toml_str).unwrap();
    let err = DictionaryBreakEngine::from_config(&config).unwrap_err();
    assert!(err.to_string().contains("failed to load dictionary"));
}

#[test]
fn test_engine_shared_across_threads() {
    let dictionary = TrieDictionary::from_word_list(include_str!(
        "../configs/dictionaries/myanmar.txt"
    ))
    .unwrap();
    let config = ScriptConfig::embedded(ScriptTag::Myanmar).unwrap();
    let engine = Arc::new(
        DictionaryBreakEngine::with_dictionary(&config, Arc::new(dictionary)).unwrap(),
    );

    let handles: Vec<_> = (0..4)
        .map(|_| {
            let engine = Arc::clone(&engine);
            std::thread::spawn(move || breaks_of(&engine, "ကျေးဇူးတင်ပါတယ်"))
        })
        .collect();

    for handle in handles {
        assert_eq!(handle.join().unwrap(), (3, vec![7, 10, 12]));
    }
}
