//! Core error types
//!
//! Segmentation itself never fails; every error here is raised while
//! building a dictionary or reading a script configuration.

use thiserror::Error;

/// Construction-time errors for dictionaries, classification sets and configs
#[derive(Error, Debug)]
pub enum CoreError {
    /// A dictionary source could not be read or parsed
    #[error("failed to load dictionary from {source_name}: {reason}")]
    DictionaryLoad {
        /// Path or name of the dictionary source
        source_name: String,
        /// Why loading failed
        reason: String,
    },

    /// The dictionary source parsed but contained no words
    #[error("dictionary contains no words")]
    EmptyDictionary,

    /// A word list line could not be used as a dictionary entry
    #[error("malformed dictionary entry on line {line}: {entry:?}")]
    MalformedEntry {
        /// 1-based line number in the word list
        line: usize,
        /// The offending line, trimmed
        entry: String,
    },

    /// A script configuration failed validation
    #[error("invalid script configuration: {0}")]
    InvalidConfig(String),

    /// A script configuration was not valid TOML for the schema
    #[error("failed to parse script configuration: {0}")]
    ConfigParse(#[from] toml::de::Error),

    /// I/O error while reading a dictionary or configuration
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for core operations
pub type Result<T> = std::result::Result<T, CoreError>;
