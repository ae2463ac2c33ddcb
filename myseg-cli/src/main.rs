//! myseg command-line entry point

use anyhow::Result;
use clap::Parser;
use myseg_cli::commands::{Commands, ListCommands};

#[derive(Debug, Parser)]
#[command(name = "myseg")]
#[command(about = "Dictionary-driven word segmentation for Myanmar text")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Segment(args) => args.execute(),
        Commands::Validate(args) => args.execute(),
        Commands::GenerateConfig(args) => args.execute(),
        Commands::List { subcommand } => {
            match subcommand {
                ListCommands::Scripts => myseg_cli::commands::list_scripts(),
                ListCommands::Formats => myseg_cli::commands::list_formats(),
            }
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_segment_defaults() {
        let cli = Cli::try_parse_from(["myseg", "segment", "-i", "a.txt"]).unwrap();
        match cli.command {
            Commands::Segment(args) => {
                assert_eq!(args.input, vec!["a.txt".to_string()]);
                assert_eq!(args.separator, "\u{200B}");
                assert_eq!(args.script, "mymr");
                assert!(!args.parallel);
            }
            other => panic!("expected segment, got {other:?}"),
        }
    }

    #[test]
    fn test_segment_requires_input() {
        assert!(Cli::try_parse_from(["myseg", "segment"]).is_err());
    }
}
