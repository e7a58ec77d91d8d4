//! Reduce command implementation

use crate::config::CliConfig;
use crate::error::CliError;
use crate::input::{resolve_patterns, InputFile};
use crate::output::{FileReport, JsonFormatter, OutputFormatter, ReducedValue, TextFormatter};
use crate::progress::ProgressReporter;
use anyhow::{Context, Result};
use clap::{Args, ValueEnum};
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;
use tally_api::reducers::{CharToString, Counting, Summarizing, Summing, TryMapping};
use tally_api::{ApiError, Collector, Config, ExecutionMode, Metadata, SequenceReducer};

/// Arguments for the reduce command
#[derive(Debug, Args)]
pub struct ReduceArgs {
    /// Input files or patterns (supports glob)
    #[arg(short, long, value_name = "FILE/PATTERN", required = true)]
    pub input: Vec<String>,

    /// Output file (default: stdout)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Reducer to run over each file [default: words]
    #[arg(short, long, value_enum)]
    pub reducer: Option<ReducerKind>,

    /// Output format [default: text]
    #[arg(short, long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Force parallel reduction even for small inputs
    #[arg(short, long, conflicts_with = "sequential")]
    pub parallel: bool,

    /// Never leave the calling thread
    #[arg(short, long)]
    pub sequential: bool,

    /// Number of worker threads
    #[arg(short, long, value_name = "COUNT", env = "TALLY_THREADS")]
    pub threads: Option<usize>,

    /// Elements per shard for parallel reduction
    #[arg(long, value_name = "ELEMENTS")]
    pub shard_size: Option<usize>,

    /// Configuration file
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Include processing metadata in the output
    #[arg(long)]
    pub metadata: bool,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,

    /// Increase verbosity
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

/// Reducers available from the command line
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ReducerKind {
    /// Rebuild the text character by character
    Chars,
    /// Count whitespace-separated words
    Words,
    /// Count lines
    Lines,
    /// Sum whitespace-separated integers
    Sum,
    /// Count, sum, min, max and average of whitespace-separated integers
    Stats,
}

/// Supported output formats
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// One line per file
    Text,
    /// JSON array of file reports
    Json,
}

impl ReducerKind {
    /// Command-line name
    pub fn name(self) -> &'static str {
        match self {
            ReducerKind::Chars => "chars",
            ReducerKind::Words => "words",
            ReducerKind::Lines => "lines",
            ReducerKind::Sum => "sum",
            ReducerKind::Stats => "stats",
        }
    }

    /// Reduce `text` and return the value with its processing metadata
    pub fn reduce(
        self,
        collector: &Collector,
        text: &str,
    ) -> tally_api::error::Result<(ReducedValue, Metadata)> {
        let parse = |token: &str| token.parse::<i64>();

        Ok(match self {
            ReducerKind::Chars => {
                let (value, metadata) = run(collector, &CharToString, text.chars())?;
                (ReducedValue::Text(value), metadata)
            }
            ReducerKind::Words => {
                let (count, metadata) = run(collector, &Counting, text.split_whitespace())?;
                (ReducedValue::Count(count), metadata)
            }
            ReducerKind::Lines => {
                let (count, metadata) = run(collector, &Counting, text.lines())?;
                (ReducedValue::Count(count), metadata)
            }
            ReducerKind::Sum => {
                let reducer = TryMapping::new(parse, Summing);
                let (sum, metadata) = run(collector, &reducer, text.split_whitespace())?;
                (ReducedValue::Sum(sum), metadata)
            }
            ReducerKind::Stats => {
                let reducer = TryMapping::new(parse, Summarizing::new());
                let (stats, metadata) = run(collector, &reducer, text.split_whitespace())?;
                (ReducedValue::Stats(stats.into()), metadata)
            }
        })
    }
}

fn run<T, R, I>(
    collector: &Collector,
    reducer: &R,
    items: I,
) -> tally_api::error::Result<(R::Output, Metadata)>
where
    T: Send,
    R: SequenceReducer<T>,
    I: IntoIterator<Item = T>,
{
    let collected = collector.collect_with_metadata(reducer, items)?;
    Ok((collected.value, collected.metadata))
}

impl ReduceArgs {
    /// Execute the reduce command
    pub fn execute(&self) -> Result<()> {
        // Initialize logging based on verbosity
        self.init_logging();

        log::info!("Starting reduction");
        log::debug!("Arguments: {:?}", self);

        let config = CliConfig::load_or_default(self.config.as_deref())?;
        let reducer = self.reducer_kind(&config)?;
        let format = self.output_format(&config)?;
        let collector = self.build_collector(&config)?;
        let include_metadata = self.metadata || config.output.include_metadata;

        let files = resolve_patterns(&self.input)?;
        let mut formatter = self.formatter(format, config.output.pretty_json)?;
        let mut progress = ProgressReporter::new(self.quiet);
        progress.init_files(files.len() as u64);

        for path in &files {
            let input = InputFile::load(path)?;
            let file = input.name();
            log::info!("Reducing {} with '{}'", file, reducer.name());

            let (value, metadata) = reducer
                .reduce(&collector, input.text())
                .map_err(|e| CliError::ProcessingError(format!("{file}: {e}")))?;
            log::debug!(
                "{}: {} mode, {:.3} ms",
                file,
                metadata.mode_used,
                metadata.processing_time_ms
            );

            formatter.write_report(&FileReport {
                file: file.clone(),
                reducer: reducer.name().to_string(),
                value,
                metadata: include_metadata.then_some(metadata),
            })?;
            progress.file_completed(&file);
        }

        progress.finish();
        formatter.finish()?;

        Ok(())
    }

    /// Reducer from the flag, falling back to the configuration file
    fn reducer_kind(&self, config: &CliConfig) -> Result<ReducerKind, CliError> {
        match self.reducer {
            Some(kind) => Ok(kind),
            None => ReducerKind::from_str(&config.processing.default_reducer, true).map_err(|_| {
                CliError::ConfigError(format!(
                    "unknown reducer '{}'",
                    config.processing.default_reducer
                ))
            }),
        }
    }

    /// Output format from the flag, falling back to the configuration file
    fn output_format(&self, config: &CliConfig) -> Result<OutputFormat, CliError> {
        match self.format {
            Some(format) => Ok(format),
            None => OutputFormat::from_str(&config.output.default_format, true).map_err(|_| {
                CliError::ConfigError(format!(
                    "unknown output format '{}'",
                    config.output.default_format
                ))
            }),
        }
    }

    /// Execution mode from the flags, falling back to the configuration file
    fn execution_mode(&self, config: &CliConfig) -> Result<ExecutionMode, CliError> {
        if self.parallel {
            return Ok(ExecutionMode::Parallel);
        }
        if self.sequential {
            return Ok(ExecutionMode::Sequential);
        }

        match config.processing.execution_mode.to_ascii_lowercase().as_str() {
            "adaptive" => Ok(ExecutionMode::Adaptive),
            "sequential" => Ok(ExecutionMode::Sequential),
            "parallel" => Ok(ExecutionMode::Parallel),
            other => Err(CliError::ConfigError(format!(
                "unknown execution mode '{other}'"
            ))),
        }
    }

    /// Build the collector, command-line flags taking precedence over the file
    fn build_collector(&self, config: &CliConfig) -> Result<Collector> {
        let mut builder = Config::builder()
            .execution_mode(self.execution_mode(config)?)
            .threads(self.threads.or(config.performance.threads()))
            .parallel_threshold(config.performance.parallel_threshold);

        if let Some(size) = self.shard_size.or(config.performance.shard_size()) {
            builder = builder.shard_size(size);
        }

        let collector = builder.build_collector().map_err(|e| match e {
            ApiError::Config(msg) => CliError::ConfigError(msg),
            other => CliError::ConfigError(other.to_string()),
        })?;
        Ok(collector)
    }

    fn formatter(&self, format: OutputFormat, pretty_json: bool) -> Result<Box<dyn OutputFormatter>> {
        let writer: Box<dyn Write + Send + Sync> = match &self.output {
            Some(path) => Box::new(BufWriter::new(File::create(path).with_context(|| {
                format!("Failed to create output file: {}", path.display())
            })?)),
            None => Box::new(io::stdout()),
        };

        Ok(match format {
            OutputFormat::Text => Box::new(TextFormatter::new(writer)),
            OutputFormat::Json => Box::new(JsonFormatter::new(writer, pretty_json)),
        })
    }

    /// Initialize logging based on verbosity level; returns whether this
    /// call installed the logger
    fn init_logging(&self) -> bool {
        if self.quiet {
            return false;
        }

        let log_level = match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        };

        match env_logger::Builder::from_env(
            env_logger::Env::default().default_filter_or(log_level),
        )
        .try_init()
        {
            Ok(()) => true,
            Err(e) => {
                log::debug!("Keeping the existing logger: {e}");
                false
            }
        }
    }
}
