//! Layered error types
//!
//! Engine errors wrap core construction errors and add the failures that
//! only arise when engines are looked up or batches are executed.

use myseg_core::{CoreError, ScriptTag};
use thiserror::Error;

/// Engine-level errors
#[derive(Error, Debug)]
pub enum EngineError {
    /// Core construction error
    #[error("core error: {0}")]
    Core(#[from] CoreError),

    /// No engine exists for the requested script
    #[error("script '{code}' not supported")]
    UnsupportedScript {
        /// The script code that was asked for
        code: String,
    },

    /// The script is supported but its engine could not be built
    #[error("no {script} engine available: {reason}")]
    EngineUnavailable {
        /// The script whose engine failed to build
        script: ScriptTag,
        /// Why construction failed
        reason: String,
    },

    /// Parallel execution error
    #[cfg(feature = "parallel")]
    #[error("parallel execution failed: {0}")]
    ParallelError(String),
}

/// Result type for engine operations
pub type Result<T> = std::result::Result<T, EngineError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_core_error_converts() {
        let err: EngineError = CoreError::EmptyDictionary.into();
        assert!(matches!(err, EngineError::Core(_)));
        assert_eq!(err.to_string(), "core error: dictionary contains no words");
    }

    #[test]
    fn test_unavailable_names_script() {
        let err = EngineError::EngineUnavailable {
            script: ScriptTag::Myanmar,
            reason: "word list missing".to_string(),
        };
        assert_eq!(err.to_string(), "no Mymr engine available: word list missing");
    }
}
