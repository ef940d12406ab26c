//! Analyze command implementation

use crate::error::CliError;
use crate::input::{resolve_patterns, FileReader, STDIN_MARKER};
use crate::output::{JsonFormatter, MarkdownFormatter, OutputFormatter, TextFormatter};
use anyhow::{Context, Result};
use clap::Args;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;
use textbreak_api::{AttributeOptions, Config, Input, Output, SegmentKind, Segmenter};

/// Arguments for the analyze command
#[derive(Debug, Args)]
pub struct AnalyzeArgs {
    /// Input files or patterns (supports glob); `-` reads standard input
    #[arg(short, long, value_name = "FILE/PATTERN", required = true)]
    pub input: Vec<String>,

    /// Output file (default: stdout)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "text")]
    pub format: OutputFormat,

    /// What to print for each input
    #[arg(short, long, value_enum, default_value = "sentences")]
    pub unit: Unit,

    /// Embedded tailoring to apply (see `textbreak list tailorings`)
    #[arg(
        short,
        long,
        value_name = "CODE",
        env = "TEXTBREAK_TAILORING",
        conflicts_with = "tailoring_config"
    )]
    pub tailoring: Option<String>,

    /// Tailoring configuration file (TOML)
    #[arg(long, value_name = "FILE")]
    pub tailoring_config: Option<PathBuf>,

    /// Ignore the tailoring and use the default algorithms only
    #[arg(long)]
    pub default_only: bool,

    /// Suppress log output
    #[arg(short, long)]
    pub quiet: bool,

    /// Increase verbosity
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

/// Supported output formats
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Plain text with one segment per line
    Text,
    /// JSON array with one document per input
    Json,
    /// Markdown list or table
    Markdown,
}

impl OutputFormat {
    fn formatter(self, writer: Box<dyn Write + Send + Sync>) -> Box<dyn OutputFormatter> {
        match self {
            OutputFormat::Text => Box::new(TextFormatter::new(writer)),
            OutputFormat::Json => Box::new(JsonFormatter::new(writer)),
            OutputFormat::Markdown => Box::new(MarkdownFormatter::new(writer)),
        }
    }
}

/// Segmentation units
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum Unit {
    /// Grapheme clusters
    Graphemes,
    /// Words and the runs between them
    Words,
    /// Sentences
    Sentences,
    /// Spans between line-break opportunities
    Lines,
    /// Raw attributes of every UTF-16 code unit
    Attributes,
}

impl Unit {
    /// Segment kind printed for this unit; `None` for raw attributes
    pub fn segment_kind(self) -> Option<SegmentKind> {
        match self {
            Unit::Graphemes => Some(SegmentKind::Grapheme),
            Unit::Words => Some(SegmentKind::Word),
            Unit::Sentences => Some(SegmentKind::Sentence),
            Unit::Lines => Some(SegmentKind::Line),
            Unit::Attributes => None,
        }
    }

    /// Attribute passes this unit needs
    pub fn options(self) -> AttributeOptions {
        self.segment_kind()
            .map_or(AttributeOptions::DEFAULT, SegmentKind::option)
    }
}

impl AnalyzeArgs {
    /// Execute the analyze command
    pub fn execute(&self) -> Result<()> {
        self.init_logging()?;

        log::info!("Starting analysis");
        log::debug!("Arguments: {self:?}");

        let segmenter = self.build_segmenter()?;
        let (sources, inputs): (Vec<String>, Vec<Input>) = self
            .read_sources()?
            .into_iter()
            .map(|(source, text)| (source, Input::from_text(text)))
            .unzip();

        let outputs = segmenter
            .analyze_batch(inputs)
            .map_err(|e| CliError::AnalysisError(e.to_string()))?;

        let writer: Box<dyn Write + Send + Sync> = match &self.output {
            Some(path) => Box::new(BufWriter::new(File::create(path).with_context(|| {
                format!("Failed to create output file: {}", path.display())
            })?)),
            None => Box::new(io::stdout()),
        };
        let mut formatter = self.format.formatter(writer);

        for (source, output) in sources.iter().zip(&outputs) {
            write_output(formatter.as_mut(), source, output, self.unit)?;
        }
        formatter.finish()?;

        log::info!("Analyzed {} inputs", outputs.len());
        Ok(())
    }

    fn build_segmenter(&self) -> Result<Segmenter> {
        let mut builder = Config::builder()
            .options(self.unit.options())
            .default_algorithm_only(self.default_only);

        if let Some(code) = &self.tailoring {
            builder = builder.tailoring(code);
        }
        if let Some(path) = &self.tailoring_config {
            builder = builder.tailoring_file(path);
        }
        if self.default_only && self.tailoring.is_none() && self.tailoring_config.is_none() {
            log::warn!("--default-only has no effect without a tailoring");
        }

        let config = builder
            .build()
            .map_err(|e| CliError::ConfigError(e.to_string()))?;
        let segmenter =
            Segmenter::with_config(config).map_err(|e| CliError::ConfigError(e.to_string()))?;

        if let Some(code) = segmenter.active_tailoring() {
            log::info!("Using tailoring '{code}'");
        }
        Ok(segmenter)
    }

    /// Read every input as `(source name, text)`, stdin first
    fn read_sources(&self) -> Result<Vec<(String, String)>> {
        let mut sources = Vec::new();

        if self.input.iter().any(|p| p == STDIN_MARKER) {
            sources.push(("<stdin>".to_string(), FileReader::read_stdin()?));
        }

        let patterns: Vec<String> = self
            .input
            .iter()
            .filter(|p| p.as_str() != STDIN_MARKER)
            .cloned()
            .collect();
        if !patterns.is_empty() {
            for path in resolve_patterns(&patterns)? {
                let text = FileReader::read_text(&path)?;
                sources.push((path.display().to_string(), text));
            }
        }

        Ok(sources)
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
                .context("Failed to initialize logging")?;
        }

        Ok(())
    }
}

fn write_output(
    formatter: &mut dyn OutputFormatter,
    source: &str,
    output: &Output,
    unit: Unit,
) -> Result<()> {
    formatter.begin_source(source)?;
    match unit.segment_kind() {
        Some(kind) => {
            for segment in output.segments(kind) {
                formatter.format_segment(&segment)?;
            }
        }
        None => {
            let units = output.text.encode_utf16();
            for (index, (code_unit, attributes)) in units.zip(&output.attributes).enumerate() {
                formatter.format_attributes(index, code_unit, attributes)?;
            }
        }
    }
    Ok(())
}
