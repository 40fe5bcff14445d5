//! StreakLab CLI - decline-streak analysis over daily return tables.
//!
//! Commands:
//! - `analyze` - scan a return CSV, print the summary and chart, save artifacts
//! - `generate` - write a synthetic return CSV for demos and benchmarks
//! - `report` - re-print the summary and chart of a saved `result.json`

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use streaklab_core::MissingPolicy;
use streaklab_runner::reporting::export::load_result;
use streaklab_runner::reporting::format_pct;
use streaklab_runner::{
    export_run_with_report, run_analysis, synthetic_table, write_table_csv, AnalysisConfig,
    AnalysisResult, ChartRenderer, ChartStyle, SummaryStats, TextBarChart,
};

#[derive(Parser)]
#[command(
    name = "streaklab",
    about = "StreakLab CLI - what happens the day after N down days"
)]
struct Cli {
    /// Emit logs as JSON lines instead of human-readable text.
    #[arg(long, global = true, default_value_t = false)]
    json_logs: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Clone, Copy, ValueEnum)]
enum MissingArg {
    Drop,
    Interpolate,
}

impl From<MissingArg> for MissingPolicy {
    fn from(arg: MissingArg) -> Self {
        match arg {
            MissingArg::Drop => MissingPolicy::Drop,
            MissingArg::Interpolate => MissingPolicy::Interpolate,
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Scan a return CSV for N-day decline streaks.
    Analyze {
        /// Return table: Date column followed by one column per company.
        #[arg(long)]
        input: PathBuf,

        /// Path to a TOML config file. Flags below override it.
        #[arg(long)]
        config: Option<PathBuf>,

        /// Consecutive non-positive days that make a streak (>= 3).
        #[arg(long, short = 'n')]
        streak_length: Option<usize>,

        /// How missing returns are handled.
        #[arg(long, value_enum)]
        missing: Option<MissingArg>,

        /// Scan companies in parallel.
        #[arg(long, default_value_t = false)]
        parallel: bool,

        /// Number of companies shown in the chart.
        #[arg(long)]
        top: Option<usize>,

        /// Output directory for artifacts.
        #[arg(long, default_value = "results")]
        output_dir: PathBuf,

        /// Print only; do not write artifacts.
        #[arg(long, default_value_t = false)]
        no_artifacts: bool,
    },
    /// Write a synthetic return CSV.
    Generate {
        /// Number of company columns.
        #[arg(long, default_value_t = 950)]
        companies: usize,

        /// Number of trading days.
        #[arg(long, default_value_t = 250)]
        days: usize,

        /// RNG seed.
        #[arg(long, default_value_t = 42)]
        seed: u64,

        /// Destination CSV path.
        #[arg(long)]
        output: PathBuf,
    },
    /// Print the summary and chart of a saved result.
    Report {
        /// Path to a `result.json` written by `analyze`.
        #[arg(long)]
        result: PathBuf,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.json_logs);

    match cli.command {
        Commands::Analyze {
            input,
            config,
            streak_length,
            missing,
            parallel,
            top,
            output_dir,
            no_artifacts,
        } => {
            let config = build_config(config, streak_length, missing, parallel, top)?;
            run_analyze(&config, input, output_dir, no_artifacts)
        }
        Commands::Generate {
            companies,
            days,
            seed,
            output,
        } => run_generate(companies, days, seed, output),
        Commands::Report { result } => {
            let result = load_result(&result)?;
            print_summary(&result);
            Ok(())
        }
    }
}

/// Logs go to stderr so stdout carries only the report.
fn init_logging(json: bool) {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    if json {
        tracing_subscriber::registry()
            .with(env_filter)
            .with(fmt::layer().json().with_target(true).with_writer(std::io::stderr))
            .init();
    } else {
        tracing_subscriber::registry()
            .with(env_filter)
            .with(fmt::layer().with_target(false).with_writer(std::io::stderr))
            .init();
    }
}

fn build_config(
    path: Option<PathBuf>,
    streak_length: Option<usize>,
    missing: Option<MissingArg>,
    parallel: bool,
    top: Option<usize>,
) -> Result<AnalysisConfig> {
    let mut config = match path {
        Some(path) => AnalysisConfig::from_file(&path)?,
        None => AnalysisConfig::default(),
    };

    if let Some(n) = streak_length {
        config.analysis.streak_length = n;
    }
    if let Some(missing) = missing {
        config.analysis.missing = missing.into();
    }
    if parallel {
        config.analysis.parallel = true;
    }
    if let Some(top) = top {
        config.report.top = top;
    }

    config.validate()?;
    Ok(config)
}

fn run_analyze(
    config: &AnalysisConfig,
    input: PathBuf,
    output_dir: PathBuf,
    no_artifacts: bool,
) -> Result<()> {
    let result = run_analysis(config, &input)
        .with_context(|| format!("analysis of {} failed", input.display()))?;

    print_summary(&result);

    if !no_artifacts {
        let paths = export_run_with_report(&output_dir, &result, true)?;
        println!("Artifacts saved to: {}", paths.run_dir.display());
    }
    Ok(())
}

fn run_generate(companies: usize, days: usize, seed: u64, output: PathBuf) -> Result<()> {
    if companies == 0 || days == 0 {
        bail!("--companies and --days must both be at least 1");
    }
    let loaded = synthetic_table(companies, days, seed)?;
    write_table_csv(&loaded.table, &output)?;
    tracing::info!(companies, days, seed, path = %output.display(), "synthetic table written");
    println!(
        "Wrote {companies} companies x {days} days to {} (dataset {})",
        output.display(),
        &loaded.dataset_hash[..16]
    );
    Ok(())
}

fn print_summary(result: &AnalysisResult) {
    let stats = SummaryStats::from_result(result);

    println!();
    println!("=== Streak Analysis ===");
    println!("Run:            {}", result.run_id);
    println!("Streak length:  {} days", stats.streak_length);
    println!(
        "Table:          {} companies x {} days",
        result.company_count, result.row_count
    );
    println!(
        "Matched:        {} ({:.1}%)",
        stats.events,
        stats.hit_rate() * 100.0
    );
    println!();
    println!("--- Next Day ---");
    println!("Up:             {}", stats.positive_count);
    println!("Flat or down:   {}", stats.negative_count);
    println!("Rebound ratio:  {:.1}%", stats.ratio * 100.0);
    println!("Average return: {:+.2}%", stats.average_next_day_return_pct);
    if let Some(worst) = stats.worst_decline_pct {
        println!("Steepest:       {}", format_pct(worst));
    }
    println!();

    let chart = TextBarChart::new(ChartStyle {
        bar_width: result.config.report.bar_width,
        ..ChartStyle::default()
    });
    print!("{}", chart.render(result.top(), stats.streak_length));

    if result.is_synthetic() {
        println!();
        println!("WARNING: Results based on SYNTHETIC data");
    }
    println!();
}
