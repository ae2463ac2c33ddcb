//! Script identity and character classification sets

use crate::charset::{CharSet, CharSetBuilder};
use crate::config::Classes;
use icu_properties::props::{GeneralCategory, GeneralCategoryGroup, LineBreak, Script};
use icu_properties::CodePointMapData;
use std::fmt;

/// Scripts with a dictionary segmentation engine
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ScriptTag {
    /// Myanmar (Burmese)
    Myanmar,
}

impl ScriptTag {
    /// Every supported script
    pub const ALL: &'static [ScriptTag] = &[ScriptTag::Myanmar];

    /// ISO 15924 code
    pub fn code(&self) -> &'static str {
        match self {
            ScriptTag::Myanmar => "Mymr",
        }
    }

    /// Human readable name
    pub fn name(&self) -> &'static str {
        match self {
            ScriptTag::Myanmar => "Myanmar",
        }
    }

    /// Look up a script by ISO 15924 code or English name, case-insensitively
    pub fn from_code(code: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|tag| {
            tag.code().eq_ignore_ascii_case(code) || tag.name().eq_ignore_ascii_case(code)
        })
    }

    fn icu_script(&self) -> Script {
        match self {
            ScriptTag::Myanmar => Script::Myanmar,
        }
    }

    /// Whether `ch` has this script property
    #[inline]
    pub fn handles(&self, ch: char) -> bool {
        CodePointMapData::<Script>::new().get(ch) == self.icu_script()
    }
}

impl fmt::Display for ScriptTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// The three frozen predicates the segmentation engine consults
#[derive(Debug, Clone)]
pub struct ScriptClasses {
    /// Code points that can begin a word
    pub begin_word: CharSet,
    /// Script code points with line break class SA; a word may end on these
    pub end_word: CharSet,
    /// Combining marks (plus configured extras) that never start a segment
    pub marks: CharSet,
}

impl ScriptClasses {
    /// Build the sets for `script` from Unicode property data and `classes`
    pub fn new(script: ScriptTag, classes: &Classes) -> Self {
        let scripts = CodePointMapData::<Script>::new();
        let line_breaks = CodePointMapData::<LineBreak>::new();
        let categories = CodePointMapData::<GeneralCategory>::new();

        let mut end_word = CharSetBuilder::default();
        let mut marks = CharSetBuilder::default();

        for range in scripts.iter_ranges_for_value(script.icu_script()) {
            for ch in range.filter_map(char::from_u32) {
                if line_breaks.get(ch) != LineBreak::ComplexContext {
                    continue;
                }
                end_word.add(ch);
                if GeneralCategoryGroup::Mark.contains(categories.get(ch)) {
                    marks.add(ch);
                }
            }
        }

        for ch in classes.extra_marks.iter().copied().filter_map(char::from_u32) {
            marks.add(ch);
        }

        let mut begin_word = CharSetBuilder::default();
        for range in &classes.begin_word {
            begin_word.add_range(range.start, range.end);
        }

        Self {
            begin_word: begin_word.build(),
            end_word: end_word.build(),
            marks: marks.build(),
        }
    }
}
