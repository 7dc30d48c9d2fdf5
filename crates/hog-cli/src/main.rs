// ABOUTME: Command-line interface for the hog simulator.
// ABOUTME: Runs roll-count and strategy win-rate experiments with optional JSON output.

use clap::Parser;
use hog::{
    average_win_rate_vs_baseline, max_scoring_num_rolls, FairDice, StandardDice, StrategySpec,
    DEFAULT_TRIALS,
};
use serde::Serialize;

#[derive(Parser)]
#[command(name = "hog")]
#[command(about = "Play Hog")]
#[command(version)]
struct Cli {
    /// Runs strategy experiments
    #[arg(short, long, alias = "run_experiments")]
    run_experiments: bool,

    /// Also report win rates against always rolling 5
    #[arg(long)]
    win_rates: bool,

    /// Strategy to evaluate (e.g., "always:8", "bacon", "swap:8:5"); repeatable
    #[arg(short, long = "strategy", value_name = "SPEC")]
    strategies: Vec<StrategySpec>,

    /// Number of trials per experiment
    #[arg(short = 'n', long, default_value_t = DEFAULT_TRIALS)]
    trials: usize,

    /// Seed the dice for reproducible results
    #[arg(long)]
    seed: Option<u64>,

    /// Output as JSON
    #[arg(long)]
    json: bool,
}

#[derive(Serialize)]
struct Report {
    trials: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    seed: Option<u64>,
    max_scoring_num_rolls: u32,
    win_rates: Vec<WinRate>,
}

#[derive(Serialize)]
struct WinRate {
    strategy: String,
    win_rate: f64,
}

fn main() {
    let cli = Cli::parse();

    if !cli.run_experiments {
        return;
    }

    match run_experiments(&cli) {
        Ok(report) => {
            if cli.json {
                print_report_json(&report);
            } else {
                print_report(&report);
            }
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}

fn run_experiments(cli: &Cli) -> hog::Result<Report> {
    let mut six_sided = match cli.seed {
        Some(seed) => FairDice::with_seed(6, seed)?,
        None => FairDice::six_sided(),
    };
    let max_scoring_num_rolls = max_scoring_num_rolls(&mut six_sided, cli.trials)?;

    let mut win_rates = Vec::new();
    if cli.win_rates || !cli.strategies.is_empty() {
        let mut dice = match cli.seed {
            Some(seed) => StandardDice::with_seed(seed),
            None => StandardDice::new(),
        };
        for strategy in experiment_strategies(cli)? {
            let win_rate = average_win_rate_vs_baseline(&strategy, cli.trials, &mut dice)?;
            win_rates.push(WinRate {
                strategy: strategy.to_string(),
                win_rate,
            });
        }
    }

    Ok(Report {
        trials: cli.trials,
        seed: cli.seed,
        max_scoring_num_rolls,
        win_rates,
    })
}

fn experiment_strategies(cli: &Cli) -> hog::Result<Vec<StrategySpec>> {
    if !cli.strategies.is_empty() {
        return Ok(cli.strategies.clone());
    }
    ["always:8", "bacon", "swap"]
        .iter()
        .map(|spec| spec.parse())
        .collect()
}

fn print_report_json(report: &Report) {
    match serde_json::to_string_pretty(report) {
        Ok(output) => println!("{}", output),
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}

fn print_report(report: &Report) {
    println!(
        "Max scoring num rolls for six-sided dice: {}",
        report.max_scoring_num_rolls
    );
    for rate in &report.win_rates {
        println!("{} win rate: {:.4}", rate.strategy, rate.win_rate);
    }
}
