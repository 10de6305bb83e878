//! Launch Dash CLI
//!
//! Query the launch records table from the terminal:
//! - Dataset summary
//! - Success pie counts for a site
//! - Payload/outcome points for a site and payload range
//! - Success-rate breakdowns
//! - Default config generation

use anyhow::Context;
use clap::{Parser, Subcommand, ValueEnum};
use launch_dash::chart::{PieFigure, ScatterFigure};
use launch_dash::config::{generate_default_config, Config};
use launch_dash::dataset::Dataset;
use launch_dash::query::{
    best_by_success_rate, most_successes, success_rate_by_booster,
    success_rate_by_payload_bucket, success_rate_by_site, worst_by_success_rate, OutcomeRate,
    PayloadRange, QueryEngine, SiteSelector, PAYLOAD_SLIDER_STEP,
};
use serde::Serialize;
use std::path::PathBuf;
use std::sync::Arc;

#[derive(Parser)]
#[command(name = "launch-dash-cli")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Query the launch records table")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Launch records CSV (default: from config)
    #[arg(short, long, global = true)]
    pub dataset: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Table, global = true)]
    pub format: OutputFormat,
}

#[derive(Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Table,
    Json,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Show dataset size, sites and payload bounds
    Summary,

    /// Success/failure counts for a site
    Pie {
        /// Launch site, or ALL
        #[arg(default_value = "ALL")]
        site: String,
    },

    /// Launches within a payload range
    Scatter {
        /// Launch site, or ALL
        #[arg(default_value = "ALL")]
        site: String,
        /// Lower payload bound in kg (default: dataset minimum)
        #[arg(long)]
        low: Option<f64>,
        /// Upper payload bound in kg (default: dataset maximum)
        #[arg(long)]
        high: Option<f64>,
    },

    /// Success rate breakdown
    Stats {
        /// What to group launches by
        #[arg(value_enum, default_value_t = GroupBy::Site)]
        by: GroupBy,
        /// Payload bucket width in kg
        #[arg(long, default_value_t = PAYLOAD_SLIDER_STEP)]
        bucket_kg: f64,
    },

    /// Generate default config file
    Config {
        /// Output path (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

#[derive(Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum GroupBy {
    Site,
    Booster,
    Payload,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    if let Commands::Config { output } = &cli.command {
        let content = generate_default_config();
        match output {
            Some(path) => {
                std::fs::write(path, content)
                    .with_context(|| format!("failed to write {}", path.display()))?;
                println!("Config written to {}", path.display());
            }
            None => print!("{}", content),
        }
        return Ok(());
    }

    let (config, source) = Config::load_default()?;
    launch_dash::logging::init(&config.logging);
    if let Some(path) = &source {
        tracing::debug!("Loaded config from {:?}", path);
    }

    let path = cli
        .dataset
        .clone()
        .unwrap_or_else(|| PathBuf::from(&config.dataset.path));
    let dataset = Dataset::load(&path)
        .with_context(|| format!("failed to load launch dataset {}", path.display()))?;
    let engine = QueryEngine::new(Arc::new(dataset));

    match cli.command {
        Commands::Summary => print_summary(&engine, cli.format)?,
        Commands::Pie { site } => {
            let selector = SiteSelector::parse(&site)?;
            let figure = PieFigure::success_by_site(&engine.aggregate_by_site(&selector), &selector);
            print_pie(&figure, cli.format)?;
        }
        Commands::Scatter { site, low, high } => {
            let selector = SiteSelector::parse(&site)?;
            let dataset = engine.dataset();
            let range = PayloadRange::new(
                low.unwrap_or(dataset.min_payload()),
                high.unwrap_or(dataset.max_payload()),
            );
            let records = engine.select_by_payload_and_site(&selector, range);
            print_scatter(&ScatterFigure::payload_vs_outcome(&records), cli.format)?;
        }
        Commands::Stats { by, bucket_kg } => {
            let dataset = engine.dataset();
            let rates = match by {
                GroupBy::Site => success_rate_by_site(dataset),
                GroupBy::Booster => success_rate_by_booster(dataset),
                GroupBy::Payload => success_rate_by_payload_bucket(dataset, bucket_kg)?,
            };
            print_rates(&rates, cli.format)?;
        }
        Commands::Config { .. } => unreachable!("handled above"),
    }

    Ok(())
}

fn print_json<T: Serialize>(value: &T) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

#[derive(Serialize)]
struct Summary<'a> {
    records: usize,
    launch_sites: Vec<&'a str>,
    min_payload_kg: f64,
    max_payload_kg: f64,
    successes: usize,
    failures: usize,
}

fn print_summary(engine: &QueryEngine, format: OutputFormat) -> anyhow::Result<()> {
    let dataset = engine.dataset();
    let totals = engine.aggregate_by_site(&SiteSelector::All);
    let summary = Summary {
        records: dataset.len(),
        launch_sites: dataset.launch_sites(),
        min_payload_kg: dataset.min_payload(),
        max_payload_kg: dataset.max_payload(),
        successes: totals.success,
        failures: totals.failure,
    };

    if format == OutputFormat::Json {
        return print_json(&summary);
    }

    println!("Launch records:  {}", summary.records);
    println!("Successes:       {}", summary.successes);
    println!("Failures:        {}", summary.failures);
    println!(
        "Payload range:   {} - {} kg",
        summary.min_payload_kg, summary.max_payload_kg
    );
    println!("Launch sites:");
    for site in &summary.launch_sites {
        println!("  {}", site);
    }
    Ok(())
}

fn print_pie(figure: &PieFigure, format: OutputFormat) -> anyhow::Result<()> {
    if format == OutputFormat::Json {
        return print_json(figure);
    }

    println!("{}", figure.title);
    if figure.is_empty() {
        println!("  (no launches)");
        return Ok(());
    }
    for slice in &figure.slices {
        let share = slice.value as f64 / figure.total as f64 * 100.0;
        println!("  {:<8} {:>5}  {:>5.1}%", slice.label, slice.value, share);
    }
    Ok(())
}

fn print_scatter(figure: &ScatterFigure, format: OutputFormat) -> anyhow::Result<()> {
    if format == OutputFormat::Json {
        return print_json(figure);
    }

    println!("{}", figure.title);
    println!(
        "  {:<16} {:>12}  {:>5}  {}",
        "Site", "Payload (kg)", "Class", "Booster"
    );
    for point in &figure.points {
        println!(
            "  {:<16} {:>12.1}  {:>5}  {}",
            point.launch_site, point.payload_mass_kg, point.class, point.booster_version_category
        );
    }
    println!("  {} launches", figure.points.len());
    Ok(())
}

fn print_rates(rates: &[OutcomeRate], format: OutputFormat) -> anyhow::Result<()> {
    if format == OutputFormat::Json {
        return print_json(&rates);
    }

    println!(
        "  {:<16} {:>6} {:>9} {:>8}",
        "Group", "Total", "Successes", "Rate"
    );
    for rate in rates {
        println!(
            "  {:<16} {:>6} {:>9} {:>7.1}%",
            rate.key,
            rate.total,
            rate.successes,
            rate.success_rate * 100.0
        );
    }

    if let Some(best) = best_by_success_rate(rates) {
        println!("Highest success rate: {}", best.key);
    }
    if let Some(worst) = worst_by_success_rate(rates) {
        println!("Lowest success rate:  {}", worst.key);
    }
    if let Some(top) = most_successes(rates) {
        println!("Most successes:       {}", top.key);
    }
    Ok(())
}
