//! Runs a single battle from a JSON setup file and prints the result as JSON.
//!
//! Usage:
//!   duel-sim setup.json
//!   duel-sim -v setup.json

use std::{
    fs,
    path::PathBuf,
    process::ExitCode,
};

use anyhow::{
    Context,
    Result,
};
use clap::Parser;
use duel::{
    Battle,
    BattleEngineOptions,
    BattleOptions,
    BattleResult,
    CombatantData,
};
use log::error;
use serde::Deserialize;

#[derive(Parser)]
#[command(name = "duel-sim", about = "Runs a battle between two combatants")]
struct Cli {
    /// Path to the battle setup, as JSON.
    setup: PathBuf,

    /// Print engine diagnostics.
    #[arg(short, long)]
    verbose: bool,
}

/// A battle setup file.
#[derive(Deserialize)]
struct SimulationInput {
    #[serde(default)]
    seed: Option<u64>,
    side_1: CombatantData,
    side_2: CombatantData,
    #[serde(default)]
    engine: BattleEngineOptions,
}

fn setup_logging(verbose: bool) {
    let level = if verbose {
        tracing_core::Level::DEBUG
    } else {
        tracing_core::Level::WARN
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();
}

fn simulate(input: SimulationInput) -> Result<BattleResult> {
    let battle = Battle::new(
        BattleOptions {
            seed: input.seed,
            side_1: input.side_1,
            side_2: input.side_2,
        },
        input.engine,
    )?;
    battle.run()
}

fn run(cli: &Cli) -> Result<()> {
    let setup = fs::read_to_string(&cli.setup)
        .with_context(|| format!("failed to read {}", cli.setup.display()))?;
    let input = serde_json::from_str::<SimulationInput>(&setup)
        .with_context(|| format!("failed to parse {}", cli.setup.display()))?;
    let result = simulate(input)?;
    println!("{}", serde_json::to_string_pretty(&result)?);
    Ok(())
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    setup_logging(cli.verbose);
    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!("{err:#}");
            eprintln!("error: {err:#}");
            ExitCode::FAILURE
        }
    }
}
