//! Segment command implementation

use crate::error::CliError;
use crate::input::{resolve_patterns, FileReader};
use crate::output::{JsonFormatter, OutputFormatter, TextFormatter};
use crate::progress::ProgressReporter;
use anyhow::{Context, Result};
use clap::Args;
use myseg_core::{DictionaryBreakEngine, ScriptConfig, ScriptTag};
use myseg_engine::{auto_select, execute, ExecutionMode, Segmenter};
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;
use std::sync::Arc;

/// Batches with at least this many files are segmented in parallel
const PARALLEL_FILE_THRESHOLD: usize = 8;

/// Arguments for the segment command
#[derive(Debug, Args)]
pub struct SegmentArgs {
    /// Input files or patterns (supports glob)
    #[arg(short, long, value_name = "FILE/PATTERN", required = true)]
    pub input: Vec<String>,

    /// Output file (default: stdout)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "text")]
    pub format: OutputFormat,

    /// Separator inserted at word breaks in text output
    #[arg(short, long, value_name = "SEP", default_value = "\u{200B}")]
    pub separator: String,

    /// Script to segment, by ISO 15924 code or name
    #[arg(long, value_name = "CODE", default_value = "mymr")]
    pub script: String,

    /// Word list replacing the script's dictionary
    #[arg(long, value_name = "FILE")]
    pub dictionary: Option<PathBuf>,

    /// Script configuration file; takes precedence over --script
    #[arg(long, value_name = "FILE")]
    pub script_config: Option<PathBuf>,

    /// Force parallel processing even for few files
    #[arg(short, long)]
    pub parallel: bool,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,

    /// Increase verbosity
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

/// Supported output formats
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// The input text with a separator at every word break
    Text,
    /// JSON array of documents with their segments
    Json,
}

impl SegmentArgs {
    /// Execute the segment command
    pub fn execute(&self) -> Result<()> {
        self.init_logging()?;

        log::info!("Starting segmentation");
        log::debug!("Arguments: {:?}", self);

        let files = resolve_patterns(&self.input)?;
        let segmenter = self.build_segmenter()?;

        let texts = files
            .iter()
            .map(|path| FileReader::read_text(path))
            .collect::<Result<Vec<_>>>()?;

        let mode = if self.parallel {
            ExecutionMode::Parallel
        } else {
            auto_select(texts.len(), PARALLEL_FILE_THRESHOLD)
        };
        log::info!("Segmenting {} files ({:?})", texts.len(), mode);

        let results = execute(mode, &segmenter, &texts)?;

        let mut formatter = self.create_formatter()?;
        let mut progress = ProgressReporter::new(self.quiet);
        progress.init_files(files.len() as u64);

        for ((path, text), segmentation) in files.iter().zip(&texts).zip(&results) {
            let name = path.display().to_string();
            formatter.format_document(&name, text, segmentation)?;
            log::debug!("{}: {} words", name, segmentation.words_found);
            progress.file_completed(&name);
        }

        formatter.finish()?;
        progress.finish();
        Ok(())
    }

    /// Build the segmenter named by the script options
    fn build_segmenter(&self) -> Result<Segmenter> {
        let mut config = match &self.script_config {
            Some(path) => ScriptConfig::from_file(path).with_context(|| {
                format!("Failed to load script configuration: {}", path.display())
            })?,
            None => {
                let script = ScriptTag::from_code(&self.script).ok_or_else(|| {
                    CliError::ConfigError(format!("unsupported script '{}'", self.script))
                })?;
                if self.dictionary.is_none() {
                    return Ok(Segmenter::for_script(script)?);
                }
                ScriptConfig::embedded(script)?
            }
        };

        if let Some(dictionary) = &self.dictionary {
            config.dictionary.path = Some(dictionary.clone());
        }

        let engine = DictionaryBreakEngine::from_config(&config)
            .with_context(|| format!("Failed to build {} engine", config.metadata.name))?;
        Ok(Segmenter::new(Arc::new(engine)))
    }

    fn create_formatter(&self) -> Result<Box<dyn OutputFormatter>> {
        let writer: Box<dyn Write + Send + Sync> = match &self.output {
            Some(path) => Box::new(BufWriter::new(File::create(path).with_context(|| {
                format!("Failed to create output file: {}", path.display())
            })?)),
            None => Box::new(io::stdout()),
        };

        Ok(match self.format {
            OutputFormat::Text => Box::new(TextFormatter::new(writer, self.separator.clone())),
            OutputFormat::Json => Box::new(JsonFormatter::new(writer)),
        })
    }

    /// Initialize logging based on verbosity level
    fn init_logging(&self) -> Result<()> {
        let log_level = match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        };

        if !self.quiet {
            env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level))
                .try_init()
                .ok();
        }

        Ok(())
    }
}
