//! Compare closing balances for the savings plan across several interest rates
//!
//! Usage: cargo run --bin compare_rates -- --rates 0.01,0.02,0.025

use std::fs::File;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

use savings_tracker::plan::loader::load_config;
use savings_tracker::scenario::write_scenarios_csv;
use savings_tracker::{ScenarioRunner, TrackerConfig};

#[derive(Parser)]
#[command(about = "Project the savings plan under several interest rates and write a comparison CSV.")]
struct Args {
    /// JSON config file. Built-in defaults are used when omitted.
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Comma-separated per-period interest rates
    #[arg(long, value_delimiter = ',', default_values_t = vec![0.01, 0.015, 0.02, 0.025, 0.03])]
    rates: Vec<f64>,

    /// Output CSV path
    #[arg(long, default_value = "rate_comparison.csv")]
    output: PathBuf,
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let config = match &args.config {
        Some(path) => load_config(path).with_context(|| format!("loading config {}", path.display()))?,
        None => TrackerConfig::default(),
    };
    for &rate in &args.rates {
        config
            .plan
            .with_interest_rate(rate)
            .validate()
            .with_context(|| format!("invalid rate {}", rate))?;
    }

    let runner = ScenarioRunner::new(config.plan);
    let summaries = runner.run_rates(&args.rates);

    println!("{:>8} {:>8} {:>16} {:>18} {:>18}", "Rate", "Months", "Contributed", "Closing", "Interest");
    println!("{}", "-".repeat(72));
    for s in &summaries {
        println!(
            "{:>8.4} {:>8} {:>16} {:>18.2} {:>18.2}",
            s.interest_rate, s.total_months, s.total_contributed, s.closing_balance, s.interest_earned
        );
    }

    let file = File::create(&args.output).with_context(|| format!("creating {}", args.output.display()))?;
    write_scenarios_csv(file, &summaries)?;
    println!("\nComparison written to: {}", args.output.display());

    Ok(())
}
