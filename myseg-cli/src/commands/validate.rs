//! Validate command implementation

use anyhow::Result;
use clap::Args;
use myseg_core::{DictionaryBreakEngine, ScriptConfig};
use std::path::PathBuf;

/// Arguments for the validate command
#[derive(Debug, Args)]
pub struct ValidateArgs {
    /// Path to script configuration file to validate
    #[arg(short = 'c', long, value_name = "FILE", required = true)]
    pub script_config: PathBuf,
}

impl ValidateArgs {
    /// Execute the validate command
    pub fn execute(&self) -> Result<()> {
        println!(
            "Validating script configuration: {}",
            self.script_config.display()
        );

        // The dictionary is loaded too: a config whose word list fails is unusable
        match ScriptConfig::from_file(&self.script_config)
            .and_then(|config| DictionaryBreakEngine::from_config(&config).map(|e| (config, e)))
        {
            Ok((config, engine)) => {
                let source = match &config.dictionary.path {
                    Some(path) => path.display().to_string(),
                    None => "embedded".to_string(),
                };
                println!("✓ Configuration is valid!");
                println!("  Script code: {}", config.metadata.code);
                println!("  Script name: {}", config.metadata.name);
                println!(
                    "  Dictionary: {} ({} words)",
                    source,
                    engine.dictionary().word_count().unwrap_or(0)
                );
                Ok(())
            }
            Err(e) => {
                println!("✗ Configuration is invalid!");
                println!("  Error: {e}");
                Err(anyhow::anyhow!("Validation failed: {}", e))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_validate_args_debug() {
        let args = ValidateArgs {
            script_config: PathBuf::from("test.toml"),
        };

        let debug_str = format!("{:?}", args);
        assert!(debug_str.contains("ValidateArgs"));
        assert!(debug_str.contains("test.toml"));
    }

    #[test]
    fn test_validate_valid_config() {
        let toml_content = r#"
[metadata]
code = "Mymr"
name = "Myanmar"

[classes]
begin_word = [{ start = 0x1000, end = 0x102A }]
"#;

        let mut temp_file = NamedTempFile::new().unwrap();
        write!(temp_file, "{}", toml_content).unwrap();

        let args = ValidateArgs {
            script_config: temp_file.path().to_path_buf(),
        };

        assert!(args.execute().is_ok());
    }

    #[test]
    fn test_validate_invalid_config() {
        let toml_content = r#"
[metadata]
code = "Mymr"
name = ""

[classes]
begin_word = [{ start = 0x1000, end = 0x102A }]
"#;

        let mut temp_file = NamedTempFile::new().unwrap();
        write!(temp_file, "{}", toml_content).unwrap();

        let args = ValidateArgs {
            script_config: temp_file.path().to_path_buf(),
        };

        assert!(args.execute().is_err());
    }
}
