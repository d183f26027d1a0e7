//! Savings Tracker CLI
//!
//! Projects the savings plan and writes the checklist and calendar reminders

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

use savings_tracker::plan::loader::load_config;
use savings_tracker::render::{group_thousands, write_outputs};
use savings_tracker::{ProjectionEngine, TrackerConfig};

#[derive(Parser)]
#[command(about = "Project a monthly compounding savings plan and write a checklist and calendar reminders.")]
struct Args {
    /// JSON config file. Built-in defaults are used when omitted.
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Directory to write output files into. Overrides the config.
    #[arg(long, value_name = "DIR")]
    output_dir: Option<String>,

    /// Per-period interest rate (e.g. 0.025). Overrides the config.
    #[arg(long)]
    rate: Option<f64>,

    /// Currency display symbol. Overrides the config.
    #[arg(long)]
    currency: Option<String>,

    /// Also write the projection as CSV
    #[arg(long)]
    csv: bool,
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let mut config = match &args.config {
        Some(path) => load_config(path).with_context(|| format!("loading config {}", path.display()))?,
        None => TrackerConfig::default(),
    };

    if let Some(rate) = args.rate {
        config.plan.interest_rate = rate;
    }
    if let Some(dir) = args.output_dir {
        config.output.output_dir = dir;
    }
    if let Some(symbol) = args.currency {
        config.output.currency_symbol = symbol;
    }
    config.validate().context("invalid configuration")?;

    let engine = ProjectionEngine::new(config.plan.clone());
    let result = engine.project();

    let written = write_outputs(
        &config.plan,
        &result,
        &config.output,
        chrono::Utc::now().naive_utc(),
        args.csv,
    )
    .with_context(|| format!("writing output to {}", config.output.output_dir))?;

    let summary = result.summary();
    let symbol = &config.output.currency_symbol;
    println!("Projection Summary:");
    println!("  Months: {}", summary.total_months);
    println!("  Total Contributed: {}{}", symbol, group_thousands(summary.total_contributed));
    println!("  Final Monthly Saving: {}{}", symbol, group_thousands(summary.final_contribution));
    println!("  Closing Balance: {}{:.2}", symbol, summary.closing_balance);
    println!("  Interest Earned: {}{:.2}", symbol, summary.interest_earned);

    println!("\nFiles generated in '{}' directory:", config.output.output_dir);
    for path in written {
        println!("  {}", path.display());
    }

    Ok(())
}
