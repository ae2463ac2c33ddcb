//! Engines keyed by script
//!
//! Building an engine loads a dictionary, so engines are built once and
//! shared. The embedded registry holds one engine per script whose
//! configuration and word list are compiled into `myseg-core`.

use crate::error::{EngineError, Result};
use myseg_core::{DictionaryBreakEngine, ScriptConfig, ScriptTag};
use std::collections::HashMap;
use std::sync::{Arc, OnceLock};

/// Registry of embedded engines, built on first access
static EMBEDDED: OnceLock<EngineRegistry> = OnceLock::new();

/// Read-only map from script to its segmentation engine
#[derive(Debug, Default)]
pub struct EngineRegistry {
    engines: HashMap<ScriptTag, Arc<DictionaryBreakEngine>>,
    /// Scripts whose engine failed to build, with the reason
    failures: HashMap<ScriptTag, String>,
}

impl EngineRegistry {
    /// Start an empty registry
    pub fn builder() -> EngineRegistryBuilder {
        EngineRegistryBuilder::default()
    }

    /// The process-wide registry of embedded engines
    pub fn embedded() -> &'static EngineRegistry {
        EMBEDDED.get_or_init(|| {
            ScriptTag::ALL
                .iter()
                .fold(Self::builder(), |builder, &script| builder.with_embedded(script))
                .build()
        })
    }

    /// Engine for `script`.
    ///
    /// A script whose dictionary failed to load has no engine; the load
    /// failure is reported instead.
    pub fn engine_for(&self, script: ScriptTag) -> Result<Arc<DictionaryBreakEngine>> {
        if let Some(engine) = self.engines.get(&script) {
            return Ok(Arc::clone(engine));
        }

        let reason = self
            .failures
            .get(&script)
            .cloned()
            .unwrap_or_else(|| "not registered".to_string());
        Err(EngineError::EngineUnavailable { script, reason })
    }

    /// Engine for a script given by ISO 15924 code or name
    pub fn engine_for_code(&self, code: &str) -> Result<Arc<DictionaryBreakEngine>> {
        let script = ScriptTag::from_code(code).ok_or_else(|| EngineError::UnsupportedScript {
            code: code.to_string(),
        })?;
        self.engine_for(script)
    }

    /// Engine whose script `ch` belongs to
    pub fn engine_for_char(&self, ch: char) -> Option<Arc<DictionaryBreakEngine>> {
        self.engines
            .values()
            .find(|engine| engine.handles(ch))
            .cloned()
    }

    /// Scripts with a usable engine, in a stable order
    pub fn scripts(&self) -> Vec<ScriptTag> {
        let mut scripts: Vec<_> = self.engines.keys().copied().collect();
        scripts.sort();
        scripts
    }

    /// Number of usable engines
    pub fn len(&self) -> usize {
        self.engines.len()
    }

    /// Whether no engine is usable
    pub fn is_empty(&self) -> bool {
        self.engines.is_empty()
    }
}

/// Builder for [`EngineRegistry`]
#[derive(Debug, Default)]
pub struct EngineRegistryBuilder {
    registry: EngineRegistry,
}

impl EngineRegistryBuilder {
    /// Register the embedded engine for `script`.
    ///
    /// A failure is logged and remembered so later lookups can report it.
    pub fn with_embedded(mut self, script: ScriptTag) -> Self {
        let built = ScriptConfig::embedded(script)
            .and_then(|config| DictionaryBreakEngine::from_config(&config));

        match built {
            Ok(engine) => {
                log::debug!("registered embedded {script} engine");
                self.registry.failures.remove(&script);
                self.registry.engines.insert(script, Arc::new(engine));
            }
            Err(e) => {
                log::warn!("failed to build embedded {script} engine: {e}");
                self.registry.engines.remove(&script);
                self.registry.failures.insert(script, e.to_string());
            }
        }
        self
    }

    /// Build and register an engine from a custom configuration.
    ///
    /// Replaces any engine already registered for the same script.
    pub fn with_config(self, config: &ScriptConfig) -> Result<Self> {
        let engine = DictionaryBreakEngine::from_config(config)?;
        Ok(self.with_engine(engine))
    }

    /// Register a prebuilt engine
    pub fn with_engine(mut self, engine: DictionaryBreakEngine) -> Self {
        let script = engine.script();
        self.registry.failures.remove(&script);
        self.registry.engines.insert(script, Arc::new(engine));
        self
    }

    /// Freeze the registry
    pub fn build(self) -> EngineRegistry {
        self.registry
    }
}
