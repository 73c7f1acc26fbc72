//! Analyze command implementation

use anyhow::{Context, Result};
use clap::{Args, ValueEnum};
use rayon::prelude::*;
use scriptstat_api::{Config, CountingUnit, Input, LanguageAnalyzer, LanguageReport};
use std::fs::File;
use std::io::{self, BufWriter};
use std::path::PathBuf;

use crate::config::CliConfig;
use crate::error::CliError;
use crate::input::{resolve_patterns, FileReader, InputSource};
use crate::output::{create_formatter, BoxedWriter, OutputFormat};
use crate::progress::ProgressReporter;

/// Arguments for the analyze command
#[derive(Debug, Args)]
pub struct AnalyzeArgs {
    /// Input files or patterns (supports glob)
    #[arg(short, long, value_name = "FILE/PATTERN", conflicts_with = "text")]
    pub input: Vec<String>,

    /// Analyze this text instead of files or stdin
    #[arg(short, long, value_name = "STRING")]
    pub text: Option<String>,

    /// Output file (default: stdout)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Output format (default: from config, else text)
    #[arg(short, long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Configuration file
    #[arg(short, long, value_name = "FILE", env = "SCRIPTSTAT_CONFIG")]
    pub config: Option<PathBuf>,

    /// What `total_characters` counts
    #[arg(long, value_enum, value_name = "UNIT")]
    pub counting: Option<CountingArg>,

    /// Skip the encoding heuristic
    #[arg(long)]
    pub no_encoding: bool,

    /// Replace invalid UTF-8 with U+FFFD instead of failing
    #[arg(long)]
    pub lossy: bool,

    /// Worker threads for multi-file runs (default: config, else CPU count)
    #[arg(long, value_name = "N")]
    pub threads: Option<usize>,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,

    /// Increase verbosity
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

/// Counting unit as spelled on the command line
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum CountingArg {
    /// Raw 16-bit code units; astral characters count twice
    CodeUnits,
    /// Unicode scalar values; counts always add up to the total
    ScalarValues,
}

impl From<CountingArg> for CountingUnit {
    fn from(arg: CountingArg) -> Self {
        match arg {
            CountingArg::CodeUnits => CountingUnit::CodeUnits,
            CountingArg::ScalarValues => CountingUnit::ScalarValues,
        }
    }
}

impl AnalyzeArgs {
    /// Execute the analyze command
    pub fn execute(&self) -> Result<()> {
        self.init_logging();

        log::info!("Starting language analysis");
        log::debug!("Arguments: {:?}", self);

        let file_config = match &self.config {
            Some(path) => CliConfig::from_file(path)?,
            None => CliConfig::default(),
        };
        let format = match self.format {
            Some(format) => format,
            None => file_config.default_format()?,
        };
        let analyzer = LanguageAnalyzer::with_config(self.api_config(&file_config)?);

        let sources = self.sources()?;
        let reports = self.analyze_sources(&analyzer, &sources, &file_config)?;

        let writer: BoxedWriter = match &self.output {
            Some(path) => {
                let file = File::create(path)
                    .with_context(|| format!("Failed to create output file: {}", path.display()))?;
                Box::new(BufWriter::new(file))
            }
            None => Box::new(io::stdout()),
        };
        let mut formatter = create_formatter(format, writer, file_config.output.pretty_json);
        for (source, report) in sources.iter().zip(&reports) {
            formatter.format_report(&source.label(), report)?;
        }
        formatter.finish()?;

        log::info!("Analyzed {} source(s)", reports.len());
        Ok(())
    }

    /// Merge command-line overrides into the file configuration
    fn api_config(&self, file_config: &CliConfig) -> Result<Config, CliError> {
        let base = file_config.api_config()?;
        let counting_unit = self
            .counting
            .map(CountingUnit::from)
            .unwrap_or_else(|| base.counting_unit());

        Ok(Config::builder()
            .counting_unit(counting_unit)
            .detect_encoding(base.detect_encoding() && !self.no_encoding)
            .lossy_utf8(base.lossy_utf8() || self.lossy)
            .build())
    }

    fn sources(&self) -> Result<Vec<InputSource>> {
        if let Some(text) = &self.text {
            return Ok(vec![InputSource::Inline(text.clone())]);
        }
        if self.input.is_empty() {
            log::debug!("No input given, reading stdin");
            return Ok(vec![InputSource::Stdin]);
        }

        let files = resolve_patterns(&self.input)?;
        for path in &files {
            if let Ok(size) = FileReader::file_size(path) {
                log::debug!("{}: {size} bytes", path.display());
            }
        }
        Ok(files.into_iter().map(InputSource::File).collect())
    }

    fn analyze_sources(
        &self,
        analyzer: &LanguageAnalyzer,
        sources: &[InputSource],
        file_config: &CliConfig,
    ) -> Result<Vec<LanguageReport>> {
        if sources.len() <= 1 {
            return sources
                .iter()
                .map(|source| analyze_source(analyzer, source))
                .collect();
        }

        let threads = self
            .threads
            .or(match file_config.performance.worker_threads {
                0 => None,
                n => Some(n),
            })
            .unwrap_or_else(num_cpus::get);
        log::info!("Analyzing {} files on {threads} thread(s)", sources.len());

        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(threads)
            .build()
            .context("Failed to build worker pool")?;

        let mut progress = ProgressReporter::new(self.quiet);
        progress.init_files(sources.len() as u64);

        let progress = &progress;
        let results = pool.install(|| {
            sources
                .par_iter()
                .map(|source| {
                    let report = analyze_source(analyzer, source)?;
                    progress.file_completed(&source.label());
                    Ok(report)
                })
                .collect::<Result<Vec<_>>>()
        });
        progress.finish();

        results
    }

    /// Initialize logging based on verbosity level
    fn init_logging(&self) {
        if self.quiet {
            return;
        }

        let log_level = match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        };

        // A logger may already be installed when commands run in-process.
        let env = env_logger::Env::default().default_filter_or(log_level);
        let _ = env_logger::Builder::from_env(env).try_init();
    }
}

fn analyze_source(analyzer: &LanguageAnalyzer, source: &InputSource) -> Result<LanguageReport> {
    let input = match source {
        InputSource::File(path) => Input::from_bytes(FileReader::read_bytes(path)?),
        InputSource::Inline(text) => Input::from_text(text.as_str()),
        InputSource::Stdin => Input::from_reader(io::stdin()),
    };

    analyzer
        .analyze(input)
        .map_err(CliError::from)
        .with_context(|| format!("Failed to analyze {}", source.label()))
}
