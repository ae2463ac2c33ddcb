//! Configuration structures and validation
//!
//! This module defines the TOML schema for script configuration.

use crate::error::{CoreError, Result};
use crate::script::ScriptTag;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Root script configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScriptConfig {
    pub metadata: Metadata,
    #[serde(default)]
    pub thresholds: Thresholds,
    pub classes: Classes,
    #[serde(default)]
    pub dictionary: DictionarySource,
}

/// Script metadata
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Metadata {
    /// ISO 15924 script code, e.g. `Mymr`
    pub code: String,
    pub name: String,
}

/// Heuristic thresholds of the segmentation engine
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Thresholds {
    /// Will not combine a non-word with a preceding dictionary word this long or longer
    #[serde(default = "default_root_combine")]
    pub root_combine: usize,
    /// Will not combine a non-word sharing at least this much prefix with a dictionary word
    #[serde(default = "default_prefix_combine")]
    pub prefix_combine: usize,
    /// Ranges shorter than this are left undivided
    #[serde(default = "default_min_word")]
    pub min_word: usize,
}

impl Default for Thresholds {
    fn default() -> Self {
        Self {
            root_combine: default_root_combine(),
            prefix_combine: default_prefix_combine(),
            min_word: default_min_word(),
        }
    }
}

impl Thresholds {
    /// Every threshold must be at least 1
    pub fn validate(&self) -> Result<()> {
        if self.root_combine == 0 || self.prefix_combine == 0 || self.min_word == 0 {
            return Err(CoreError::InvalidConfig(
                "thresholds must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}

fn default_root_combine() -> usize {
    3
}

fn default_prefix_combine() -> usize {
    3
}

fn default_min_word() -> usize {
    2
}

/// Character class configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Classes {
    /// Ranges of code points that can begin a word
    pub begin_word: Vec<CodePointRange>,
    /// Code points added to the mark set, never preceded by a break
    #[serde(default)]
    pub extra_marks: Vec<u32>,
}

/// Inclusive code point range
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CodePointRange {
    pub start: u32,
    pub end: u32,
}

/// Where the word list comes from
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DictionarySource {
    /// Word list file. Relative paths resolve against the config file's directory.
    pub path: Option<PathBuf>,
}

impl ScriptConfig {
    /// Parse and validate a TOML document
    pub fn from_toml_str(toml_str: &str) -> Result<Self> {
        let config: ScriptConfig = toml::from_str(toml_str)?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a config file.
    ///
    /// A relative dictionary path is rewritten relative to the file's directory.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let mut config = Self::from_toml_str(&content)?;

        if let (Some(dict), Some(parent)) = (config.dictionary.path.as_mut(), path.parent()) {
            if dict.is_relative() {
                *dict = parent.join(&*dict);
            }
        }

        Ok(config)
    }

    /// The configuration compiled into the library for `script`
    pub fn embedded(script: ScriptTag) -> Result<Self> {
        let toml_str = match script {
            ScriptTag::Myanmar => include_str!("../configs/scripts/myanmar.toml"),
        };
        Self::from_toml_str(toml_str)
    }

    /// Script named by the metadata code
    pub fn script(&self) -> Result<ScriptTag> {
        ScriptTag::from_code(&self.metadata.code).ok_or_else(|| {
            CoreError::InvalidConfig(format!("unsupported script code '{}'", self.metadata.code))
        })
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        self.script()?;

        if self.metadata.name.trim().is_empty() {
            return Err(CoreError::InvalidConfig(
                "metadata.name must not be empty".to_string(),
            ));
        }

        self.thresholds.validate()?;

        if self.classes.begin_word.is_empty() {
            return Err(CoreError::InvalidConfig(
                "classes.begin_word must name at least one range".to_string(),
            ));
        }

        for range in &self.classes.begin_word {
            if range.start > range.end {
                return Err(CoreError::InvalidConfig(format!(
                    "begin_word range {:#X}..={:#X} is inverted",
                    range.start, range.end
                )));
            }
            if char::from_u32(range.start).is_none() || char::from_u32(range.end).is_none() {
                return Err(CoreError::InvalidConfig(format!(
                    "begin_word range {:#X}..={:#X} is not made of scalar values",
                    range.start, range.end
                )));
            }
        }

        if let Some(bad) = self
            .classes
            .extra_marks
            .iter()
            .find(|&&cp| char::from_u32(cp).is_none())
        {
            return Err(CoreError::InvalidConfig(format!(
                "extra mark {bad:#X} is not a scalar value"
            )));
        }

        Ok(())
    }
}
