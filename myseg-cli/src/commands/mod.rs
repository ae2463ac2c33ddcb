//! CLI command implementations

use clap::Subcommand;
use myseg_engine::EngineRegistry;

pub mod generate_config;
pub mod segment;
pub mod validate;

/// Available CLI commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Insert word breaks into text files
    Segment(segment::SegmentArgs),

    /// Validate a script configuration file
    Validate(validate::ValidateArgs),

    /// Write a script configuration template
    GenerateConfig(generate_config::GenerateConfigArgs),

    /// List available components
    List {
        #[command(subcommand)]
        subcommand: ListCommands,
    },
}

/// List subcommands
#[derive(Debug, Subcommand)]
pub enum ListCommands {
    /// List scripts with a built-in engine
    Scripts,

    /// List available output formats
    Formats,
}

/// Print the scripts with a usable embedded engine
pub fn list_scripts() {
    let registry = EngineRegistry::embedded();
    println!("Available scripts:");
    for script in registry.scripts() {
        let words = registry
            .engine_for(script)
            .ok()
            .and_then(|engine| engine.dictionary().word_count())
            .unwrap_or(0);
        println!("  {:<6} {} ({} dictionary words)", script.code(), script.name(), words);
    }
}

/// Print the output formats
pub fn list_formats() {
    println!("Available output formats:");
    println!("  text   Input text with a separator at every word break");
    println!("  json   Segments with byte and character offsets per file");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_list_commands_variants() {
        let debug_str = format!("{:?}", ListCommands::Scripts);
        assert!(debug_str.contains("Scripts"));

        let debug_str = format!("{:?}", ListCommands::Formats);
        assert!(debug_str.contains("Formats"));
    }

    #[test]
    fn test_commands_debug_format() {
        let list_cmd = Commands::List {
            subcommand: ListCommands::Scripts,
        };

        let debug_str = format!("{:?}", list_cmd);
        assert!(debug_str.contains("List"));
        assert!(debug_str.contains("Scripts"));
    }
}
