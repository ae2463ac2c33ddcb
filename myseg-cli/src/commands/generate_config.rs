//! Generate config command implementation

use crate::error::CliError;
use anyhow::{Context, Result};
use clap::Args;
use myseg_core::{ScriptConfig, ScriptTag};
use std::path::PathBuf;

/// Arguments for the generate-config command
#[derive(Debug, Args)]
pub struct GenerateConfigArgs {
    /// Script whose built-in configuration seeds the template
    #[arg(long, value_name = "CODE", default_value = "mymr")]
    pub script: String,

    /// Output file path
    #[arg(short, long, value_name = "FILE", required = true)]
    pub output: PathBuf,
}

impl GenerateConfigArgs {
    /// Execute the generate-config command
    pub fn execute(&self) -> Result<()> {
        use std::fs;

        let script = ScriptTag::from_code(&self.script).ok_or_else(|| {
            CliError::ConfigError(format!("unsupported script '{}'", self.script))
        })?;

        println!("Generating script configuration template...");
        println!("  Script: {} ({})", script.name(), script.code());
        println!("  Output file: {}", self.output.display());

        let template = generate_template(script)?;
        fs::write(&self.output, template)
            .with_context(|| format!("Failed to write to {}", self.output.display()))?;

        println!("✓ Configuration template generated successfully!");
        println!();
        println!("Next steps:");
        println!("1. Point [dictionary] path at your word list, one word per line");
        println!("2. Validate your configuration:");
        println!("   myseg validate --script-config {}", self.output.display());
        println!("3. Use it for segmentation:");
        println!(
            "   myseg segment -i input.txt --script-config {}",
            self.output.display()
        );

        Ok(())
    }
}

/// Render the built-in configuration for `script` as an editable TOML file
fn generate_template(script: ScriptTag) -> Result<String> {
    let config = ScriptConfig::embedded(script)?;
    let body = toml::to_string_pretty(&config).context("Failed to render configuration")?;

    Ok(format!(
        r#"# Script configuration for {name}
#
# [thresholds]   root_combine, prefix_combine and min_word tune the segmenter
# [classes]      begin_word ranges and extra_marks are code points
# [dictionary]   path = "words.txt" loads a word list relative to this file;
#                without it the built-in word list is used

{body}"#,
        name = script.name()
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_template_round_trips_through_validation() {
        let template = generate_template(ScriptTag::Myanmar).unwrap();
        let config = ScriptConfig::from_toml_str(&template).unwrap();
        assert_eq!(config.script().unwrap(), ScriptTag::Myanmar);
        assert_eq!(config.classes.extra_marks, vec![0x20]);
    }

    #[test]
    fn test_generate_writes_file() {
        let dir = tempfile::tempdir().unwrap();
        let args = GenerateConfigArgs {
            script: "Myanmar".to_string(),
            output: dir.path().join("custom.toml"),
        };

        args.execute().unwrap();
        let written = std::fs::read_to_string(dir.path().join("custom.toml")).unwrap();
        assert!(written.starts_with("# Script configuration for Myanmar"));
        assert!(written.contains("[metadata]"));
    }

    #[test]
    fn test_unknown_script_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let args = GenerateConfigArgs {
            script: "latn".to_string(),
            output: dir.path().join("custom.toml"),
        };
        assert!(args.execute().is_err());
    }
}
