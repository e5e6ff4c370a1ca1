//! Command-line front end for the MindTrack analysis engine.
//!
//! # Responsibility
//! - Load a JSON record batch and print the emotion analysis.
//! - Resolve ad-hoc labels for taxonomy debugging.
//!
//! # Invariants
//! - A malformed record is skipped with a warning; it never aborts the batch.
//! - Output goes to stdout; diagnostics go to the log file when `--log-dir` is set.

use clap::{Parser, Subcommand};
use log::{info, warn};
use mindtrack_core::{
    Correlator, EmotionAnalysis, EmotionResolver, JournalEntry, MoodEntry, ResolverConfig,
    ResolverConfigError, ThoughtRecord,
};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::Value;
use std::fmt::{Display, Formatter};
use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

/// MindTrack emotion analysis CLI
#[derive(Debug, Parser)]
#[command(name = "mindtrack_cli")]
#[command(about = "Correlate mood, journal and thought records through the emotion taxonomy", long_about = None)]
#[command(version)]
struct Cli {
    /// Similarity acceptance threshold in [0, 1]
    #[arg(long, global = true)]
    threshold: Option<f64>,

    /// Absolute directory for rolling log files
    #[arg(long, global = true)]
    log_dir: Option<String>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, global = true)]
    log_level: Option<String>,

    #[command(subcommand)]
    command: Command,
}

/// Available commands
#[derive(Debug, Subcommand)]
enum Command {
    /// Analyze a JSON batch of records and print the result as JSON
    Analyze {
        /// Batch file with mood_entries, journal_entries and thought_records
        batch: PathBuf,
    },
    /// Resolve labels and print their taxonomy path
    Resolve {
        #[arg(required = true)]
        labels: Vec<String>,
    },
    /// Print the core library version
    Version,
}

#[derive(Debug)]
enum CliError {
    Config(ResolverConfigError),
    Logging(mindtrack_core::LoggingError),
    Io { path: PathBuf, source: std::io::Error },
    Json(serde_json::Error),
    Output(std::io::Error),
}

impl Display for CliError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Config(err) => write!(f, "{err}"),
            Self::Logging(err) => write!(f, "{err}"),
            Self::Io { path, source } => {
                write!(f, "failed to read `{}`: {source}", path.display())
            }
            Self::Json(err) => write!(f, "invalid batch json: {err}"),
            Self::Output(err) => write!(f, "failed to write output: {err}"),
        }
    }
}

impl std::error::Error for CliError {}

#[derive(Debug, Default, Deserialize)]
struct RawBatch {
    #[serde(default)]
    mood_entries: Vec<Value>,
    #[serde(default)]
    journal_entries: Vec<Value>,
    #[serde(default)]
    thought_records: Vec<Value>,
}

struct Batch {
    mood_entries: Vec<MoodEntry>,
    journal_entries: Vec<JournalEntry>,
    thought_records: Vec<ThoughtRecord>,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    let stdout = std::io::stdout();
    match run(&cli, &mut stdout.lock()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli, out: &mut impl Write) -> Result<(), CliError> {
    if let Some(log_dir) = &cli.log_dir {
        let level = cli
            .log_level
            .as_deref()
            .unwrap_or(mindtrack_core::default_log_level());
        mindtrack_core::init_logging(level, log_dir).map_err(CliError::Logging)?;
    }

    let resolver = build_resolver(cli.threshold)?;
    match &cli.command {
        Command::Analyze { batch } => {
            let batch = load_batch(batch)?;
            let analysis = EmotionAnalysis::build(
                &Correlator::new(resolver),
                &batch.mood_entries,
                &batch.journal_entries,
                &batch.thought_records,
            );
            info!(
                "event=cli_analyze module=cli status=ok insights={} unresolved={}",
                analysis.insights.len(),
                analysis.unresolved_labels.len()
            );
            serde_json::to_writer_pretty(&mut *out, &analysis).map_err(CliError::Json)?;
            writeln!(out).map_err(CliError::Output)
        }
        Command::Resolve { labels } => {
            for label in labels {
                writeln!(out, "{}", describe_resolution(&resolver, label))
                    .map_err(CliError::Output)?;
            }
            Ok(())
        }
        Command::Version => {
            writeln!(out, "mindtrack_core {}", mindtrack_core::core_version())
                .map_err(CliError::Output)
        }
    }
}

fn build_resolver(threshold: Option<f64>) -> Result<EmotionResolver, CliError> {
    let config = match threshold {
        Some(value) => ResolverConfig::new(value).map_err(CliError::Config)?,
        None => ResolverConfig::default(),
    };
    Ok(EmotionResolver::new(config))
}

fn describe_resolution(resolver: &EmotionResolver, label: &str) -> String {
    let traced = resolver.resolve_core_traced(label);
    let path = resolver.resolve_path(label);
    match (traced, path) {
        (Some(resolution), Some(path)) => format!(
            "{label}\t{}/{}/{}\t{}",
            path.core.as_str(),
            path.secondary.name(),
            path.tertiary.name(),
            resolution.strategy.as_str()
        ),
        (Some(resolution), None) => format!(
            "{label}\t{}\t{}",
            resolution.core.as_str(),
            resolution.strategy.as_str()
        ),
        _ => format!("{label}\tunresolved"),
    }
}

fn load_batch(path: &Path) -> Result<Batch, CliError> {
    let raw = std::fs::read_to_string(path).map_err(|source| CliError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    parse_batch(&raw)
}

fn parse_batch(raw: &str) -> Result<Batch, CliError> {
    let batch: RawBatch = serde_json::from_str(raw).map_err(CliError::Json)?;
    Ok(Batch {
        mood_entries: decode_records("mood_entry", batch.mood_entries),
        journal_entries: decode_records("journal_entry", batch.journal_entries),
        thought_records: decode_records("thought_record", batch.thought_records),
    })
}

fn decode_records<T: DeserializeOwned>(kind: &str, values: Vec<Value>) -> Vec<T> {
    values
        .into_iter()
        .enumerate()
        .filter_map(|(index, value)| match serde_json::from_value(value) {
            Ok(record) => Some(record),
            Err(err) => {
                warn!(
                    "event=record_skip module=cli status=error kind={kind} index={index} line={} column={}",
                    err.line(),
                    err.column()
                );
                None
            }
        })
        .collect()
}
