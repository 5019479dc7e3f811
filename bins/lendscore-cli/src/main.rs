//! lendscore — wallet credit scores from lending-protocol transaction history.
//!
//! Reads an exported JSON array of transactions, engineers per-wallet
//! features, and writes a `wallet,credit_score` table. Optionally prints the
//! score distribution.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::PathBuf;
use std::process;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand, ValueEnum};
use lendscore_batch::report::ScoreDistribution;
use lendscore_batch::source::JsonRecordSource;
use lendscore_batch::{load_scoring_config, run, run_batch, sink_for_path};
use lendscore_core::constants::DEFAULT_REPORT_BUCKETS;
use lendscore_core::traits::RecordSource;
use lendscore_engine::ScoreEngine;
use tracing::{error, info};

/// Lendscore command-line interface.
#[derive(Parser, Debug)]
#[command(name = "lendscore")]
#[command(version, about = "Score wallets by observed repayment behavior")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    #[command(flatten)]
    log: LogArgs,
}

#[derive(Args, Debug)]
struct LogArgs {
    /// Log level (trace, debug, info, warn, error)
    #[arg(long, global = true, default_value = "info")]
    log_level: String,

    /// Log output format
    #[arg(long, global = true, value_enum, default_value_t = LogFormat::Text)]
    log_format: LogFormat,
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
enum LogFormat {
    /// Human-readable lines
    Text,
    /// One JSON object per event
    Json,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Score every wallet in a transaction export.
    Score(ScoreArgs),
    /// Dump per-wallet counters, features, and score breakdown as JSON.
    Features(FeaturesArgs),
}

#[derive(Args, Debug)]
struct ConfigArgs {
    /// Scoring config file (TOML/JSON/YAML). Defaults to
    /// `<config_dir>/lendscore/config.toml` when present.
    #[arg(short, long)]
    config: Option<PathBuf>,
}

#[derive(Args, Debug)]
struct ScoreArgs {
    /// Path to the input JSON file.
    #[arg(short, long)]
    input: PathBuf,

    /// Path for the score table (`.json` for JSON, CSV otherwise).
    #[arg(short, long)]
    output: PathBuf,

    #[command(flatten)]
    config: ConfigArgs,

    /// Print the score distribution after scoring.
    #[arg(long)]
    report: bool,

    /// Number of buckets in the distribution report.
    #[arg(long, default_value_t = DEFAULT_REPORT_BUCKETS)]
    buckets: usize,
}

#[derive(Args, Debug)]
struct FeaturesArgs {
    /// Path to the input JSON file.
    #[arg(short, long)]
    input: PathBuf,

    /// Write JSON here instead of stdout.
    #[arg(short, long)]
    output: Option<PathBuf>,

    #[command(flatten)]
    config: ConfigArgs,
}

fn main() {
    let cli = Cli::parse();
    init_logging(&cli.log.log_level, cli.log.log_format);

    let result = match cli.command {
        Commands::Score(args) => cmd_score(args),
        Commands::Features(args) => cmd_features(args),
    };

    if let Err(e) = result {
        error!("{e:#}");
        process::exit(1);
    }
}

fn load_engine(args: &ConfigArgs) -> Result<ScoreEngine> {
    let config = load_scoring_config(args.config.as_deref()).context("loading scoring config")?;
    info!(
        repay = config.weights.repay,
        redeem = config.weights.redeem,
        liquid = config.weights.liquid,
        activity = config.weights.activity,
        range_min = config.range.min,
        range_max = config.range.max,
        "scoring config"
    );
    Ok(ScoreEngine::new(config)?)
}

fn cmd_score(args: ScoreArgs) -> Result<()> {
    let engine = load_engine(&args.config)?;

    let mut source = JsonRecordSource::from_path(&args.input);
    info!(input = %source.path().display(), "loading data");
    let mut sink = sink_for_path(&args.output);
    let scores = run(&mut source, sink.as_mut(), &engine)
        .with_context(|| format!("scoring {}", args.input.display()))?;
    info!(output = %args.output.display(), wallets = scores.len(), "scores saved");

    if args.report {
        let distribution =
            ScoreDistribution::from_scores(&scores, &engine.config().range, args.buckets);
        println!("Wallet credit score distribution");
        print!("{}", distribution.render());
    }
    Ok(())
}

fn cmd_features(args: FeaturesArgs) -> Result<()> {
    let engine = load_engine(&args.config)?;

    let mut source = JsonRecordSource::from_path(&args.input);
    let records = source
        .read_records()
        .with_context(|| format!("reading {}", args.input.display()))?;
    let outcome = run_batch(&records, &engine);
    info!(
        records = records.len(),
        wallets = outcome.features.len(),
        "features engineered"
    );

    match args.output {
        Some(path) => {
            let file = File::create(&path)
                .with_context(|| format!("creating {}", path.display()))?;
            let mut writer = BufWriter::new(file);
            serde_json::to_writer_pretty(&mut writer, &outcome)?;
            writer.flush()?;
            info!(output = %path.display(), "features saved");
        }
        None => {
            let stdout = std::io::stdout();
            let mut lock = stdout.lock();
            serde_json::to_writer_pretty(&mut lock, &outcome)?;
            writeln!(lock)?;
        }
    }
    Ok(())
}

/// Initialize tracing subscriber with the given log level and output format.
///
/// `RUST_LOG` takes precedence over `level`. Logs go to stderr so stdout
/// stays clean for data.
fn init_logging(level: &str, format: LogFormat) {
    use tracing_subscriber::filter::EnvFilter;
    use tracing_subscriber::fmt;
    use tracing_subscriber::prelude::*;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    let registry = tracing_subscriber::registry().with(filter);
    match format {
        LogFormat::Json => registry
            .with(fmt::layer().json().with_writer(std::io::stderr))
            .init(),
        LogFormat::Text => registry
            .with(fmt::layer().with_target(true).with_writer(std::io::stderr))
            .init(),
    }
}
