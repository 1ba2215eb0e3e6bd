use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use plagiscan::{AnsiRenderer, PlagiscanConfig, PlainRenderer, Renderer, TextReport};
use tracing::info;

/// Plagiscan: multi-level plagiarism detection.
///
/// Compares a target document against a reference document at word, phrase
/// and sentence granularity and classifies how much of the target was copied.
#[derive(Parser)]
#[command(name = "plagiscan", version, about)]
struct Cli {
    /// Reference (source) document
    reference: PathBuf,

    /// Target document to check
    target: PathBuf,

    /// YAML configuration file
    #[arg(long)]
    config: Option<PathBuf>,

    /// Lower bound of the low-similarity band, in percent
    #[arg(long)]
    low: Option<f64>,

    /// Lower bound of the moderate-similarity band, in percent
    #[arg(long)]
    moderate: Option<f64>,

    /// Lower bound of the high-similarity band, in percent
    #[arg(long)]
    high: Option<f64>,

    /// Lower bound of the critical band, in percent
    #[arg(long)]
    very_high: Option<f64>,

    /// Output format
    #[arg(long, value_enum, default_value = "text")]
    format: OutputFormat,

    /// Force colored output even when stdout is not a terminal
    #[arg(long)]
    color: bool,

    /// Write the report to this file instead of stdout
    #[arg(long)]
    output: Option<PathBuf>,

    /// Format of diagnostic logs on stderr (filtered by RUST_LOG)
    #[arg(long, value_enum, default_value = "text")]
    log_format: LogFormat,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum LogFormat {
    Text,
    Json,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

fn init_tracing(format: LogFormat) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn"));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr);
    match format {
        LogFormat::Text => builder.init(),
        LogFormat::Json => builder.with_target(false).json().init(),
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.log_format);

    let mut config = match &cli.config {
        Some(path) => PlagiscanConfig::from_file(path)
            .with_context(|| format!("loading config {}", path.display()))?,
        None => PlagiscanConfig::default(),
    };
    apply_threshold_overrides(&mut config, &cli);
    config.validate().context("invalid threshold override")?;

    let reference = read_document(&cli.reference)?;
    let target = read_document(&cli.target)?;

    let report = plagiscan::detect_with_config(&config, &reference, &target)
        .context("detection failed")?;

    let rendered = match cli.format {
        OutputFormat::Json => serde_json::to_string_pretty(&report)?,
        OutputFormat::Text => {
            // Colors only make sense on a terminal; a file always gets plain text.
            let ansi = cli.color && cli.output.is_none();
            if ansi {
                colored::control::set_override(true);
            }
            let renderer: &dyn Renderer = if ansi { &AnsiRenderer } else { &PlainRenderer };
            let thresholds = config.threshold_config();
            let reference_name = cli.reference.display().to_string();
            let target_name = cli.target.display().to_string();
            let text = TextReport::new(&report, &thresholds, renderer)
                .with_sources(&reference_name, &target_name)
                .to_string();
            text
        }
    };

    match &cli.output {
        Some(path) => {
            fs::write(path, &rendered)
                .with_context(|| format!("writing report to {}", path.display()))?;
            info!(path = %path.display(), "report saved");
            println!("Report saved successfully to {}", path.display());
        }
        None => println!("{rendered}"),
    }

    Ok(())
}

fn apply_threshold_overrides(config: &mut PlagiscanConfig, cli: &Cli) {
    if let Some(low) = cli.low {
        config.thresholds.low = low;
    }
    if let Some(moderate) = cli.moderate {
        config.thresholds.moderate = moderate;
    }
    if let Some(high) = cli.high {
        config.thresholds.high = high;
    }
    if let Some(very_high) = cli.very_high {
        config.thresholds.very_high = very_high;
    }
}

fn read_document(path: &Path) -> Result<String> {
    fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))
}
