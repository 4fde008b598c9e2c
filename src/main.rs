//! Tax incentive CLI
//!
//! Computes incentive cash flows for a parameter bag, or compares states for a
//! plant profile. Tax defaults and the discount rate are read from the
//! environment (see `TaxConfig::from_env`).

use std::fs;
use std::io;
use std::path::PathBuf;
use std::time::Instant;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use log::info;
use serde::Serialize;

use tax_incentives::incentives::{catalog, determine_tax_incentives, IncentiveParams, IncentiveSummary};
use tax_incentives::scenario::{load_state_table, PlantProfile, ScenarioRunner, StateResult, StateTable};
use tax_incentives::TaxConfig;

/// Top-level CLI.
#[derive(Debug, Parser)]
#[command(name = "tax-incentives", version, about = "State tax incentive cash flows for biorefinery TEA")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Compute exemptions, deductions, credits and refunds for a parameter bag.
    Compute(ComputeArgs),
    /// Compare incentive regimes across states for one plant profile.
    States(StatesArgs),
    /// List the incentive programs and their required parameters.
    List,
}

#[derive(Debug, Args)]
struct ComputeArgs {
    /// Incentive numbers (1-20), comma separated.
    #[arg(short, long, value_delimiter = ',')]
    incentives: Vec<i64>,

    /// JSON parameter bag (keys as in the formula parameter names).
    #[arg(short, long)]
    params: PathBuf,

    /// Emit JSON instead of CSV.
    #[arg(long)]
    json: bool,
}

#[derive(Debug, Args)]
struct StatesArgs {
    /// JSON plant profile.
    #[arg(short, long)]
    plant: PathBuf,

    /// CSV state tax table; without it only the configured baseline is run.
    #[arg(short, long)]
    table: Option<PathBuf>,

    /// States to evaluate, comma separated (default: every state in the table).
    #[arg(short, long, value_delimiter = ',')]
    states: Vec<String>,

    /// Emit JSON instead of CSV.
    #[arg(long)]
    json: bool,
}

#[derive(Serialize)]
struct ComputeResponse {
    incentive_numbers: Vec<i64>,
    summary: IncentiveSummary,
    present_value: f64,
    discount_rate: f64,
    exemptions: Vec<f64>,
    deductions: Vec<f64>,
    credits: Vec<f64>,
    refunds: Vec<f64>,
}

#[derive(Serialize)]
struct StateRow<'a> {
    state: &'a str,
    incentives: String,
    total_exemptions: f64,
    total_deductions: f64,
    total_credits: f64,
    total_refunds: f64,
    total: f64,
    present_value: f64,
}

fn main() {
    env_logger::init();

    if let Err(err) = run(Cli::parse()) {
        eprintln!("Error: {:#}", err);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    let config = TaxConfig::from_env();
    match cli.command {
        Command::Compute(args) => compute(args, &config),
        Command::States(args) => states(args, config),
        Command::List => list(),
    }
}

fn compute(args: ComputeArgs, config: &TaxConfig) -> Result<()> {
    let json = fs::read_to_string(&args.params)
        .with_context(|| format!("reading parameter bag {}", args.params.display()))?;
    let params = IncentiveParams::from_json(&json)
        .with_context(|| format!("parsing parameter bag {}", args.params.display()))?;

    let start = Instant::now();
    let incentives = determine_tax_incentives(args.incentives.iter().copied(), &params)
        .context("computing tax incentives")?;
    info!("computed {:?} over {} years in {:?}", args.incentives, params.plant_years, start.elapsed());

    if args.json {
        let response = ComputeResponse {
            incentive_numbers: args.incentives,
            summary: incentives.summary(),
            present_value: incentives.present_value(config.discount_rate),
            discount_rate: config.discount_rate,
            exemptions: incentives.exemptions,
            deductions: incentives.deductions,
            credits: incentives.credits,
            refunds: incentives.refunds,
        };
        serde_json::to_writer_pretty(io::stdout().lock(), &response)?;
        println!();
    } else {
        incentives.write_csv(io::stdout().lock())?;
    }
    Ok(())
}

fn states(args: StatesArgs, config: TaxConfig) -> Result<()> {
    let json = fs::read_to_string(&args.plant)
        .with_context(|| format!("reading plant profile {}", args.plant.display()))?;
    let plant: PlantProfile = serde_json::from_str(&json)
        .with_context(|| format!("parsing plant profile {}", args.plant.display()))?;

    let table = match &args.table {
        Some(path) => load_state_table(path).with_context(|| format!("loading state table {}", path.display()))?,
        None => StateTable::default(),
    };
    info!("loaded {} states", table.len());

    let runner = ScenarioRunner::new(plant, table, config);
    let mut results = vec![runner.run_baseline()?];
    if !runner.table().is_empty() {
        let evaluated = if args.states.is_empty() {
            runner.run_all()?
        } else {
            runner.run_states(args.states.as_slice())?
        };
        results.extend(evaluated);
    }

    if args.json {
        serde_json::to_writer_pretty(io::stdout().lock(), &results)?;
        println!();
    } else {
        write_state_rows(&results)?;
    }
    Ok(())
}

fn write_state_rows(results: &[StateResult]) -> Result<()> {
    let mut writer = csv::Writer::from_writer(io::stdout().lock());
    for result in results {
        let numbers: Vec<String> = result.incentive_numbers.iter().map(|n| n.to_string()).collect();
        writer.serialize(StateRow {
            state: &result.state,
            incentives: numbers.join(" "),
            total_exemptions: result.summary.total_exemptions,
            total_deductions: result.summary.total_deductions,
            total_credits: result.summary.total_credits,
            total_refunds: result.summary.total_refunds,
            total: result.summary.total,
            present_value: result.present_value,
        })?;
    }
    writer.flush()?;
    Ok(())
}

fn list() -> Result<()> {
    for incentive in catalog() {
        let required: Vec<&str> = incentive.required.iter().map(|p| p.name()).collect();
        println!(
            "{:>2}  {:<9}  {}  [{}]",
            incentive.number,
            incentive.family.name(),
            incentive.program,
            required.join(", ")
        );
    }
    Ok(())
}
