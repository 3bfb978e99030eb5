//! Headless press-turn match driver.
//!
//! Loads catalogs and a roster from a data directory, then plays the match
//! with an automatic policy and prints the combat log.
//!
//! # Examples
//!
//! ```bash
//! # Every roster under data/rosters
//! cargo run -p pressturn-sim
//!
//! # One roster, verbose engine logs
//! RUST_LOG=debug cargo run -p pressturn-sim -- --roster 001-classic.txt
//! ```

mod policy;

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Parser;
use pressturn_content::{ContentFactory, MatchSetup};
use pressturn_core::BattleEngine;

const SEPARATOR: &str = "----------------------------------------";

/// Plays press-turn matches without a human in the loop
#[derive(Parser, Debug)]
#[command(name = "pressturn-sim", version, long_about = None)]
struct Cli {
    /// Directory holding the catalogs, battle.toml and rosters/
    #[arg(long, env = "PRESSTURN_DATA_DIR", default_value = "data")]
    data_dir: PathBuf,

    /// Roster file to play (defaults to every file under rosters/)
    #[arg(long, env = "PRESSTURN_ROSTER")]
    roster: Option<PathBuf>,

    /// Stop a match after this many accepted commands
    #[arg(long, env = "PRESSTURN_MAX_ACTIONS", default_value_t = 500)]
    max_actions: usize,
}

fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let factory = ContentFactory::new(&cli.data_dir);

    let rosters = match cli.roster {
        Some(roster) => vec![roster],
        None => factory.roster_files()?,
    };
    if rosters.is_empty() {
        anyhow::bail!("No roster files under {}", cli.data_dir.join("rosters").display());
    }

    for roster in rosters {
        let setup = factory
            .prepare_match(&roster)
            .with_context(|| format!("Failed to prepare match {}", roster.display()))?;
        play(&roster, setup, cli.max_actions)?;
    }
    Ok(())
}

fn play(roster: &Path, setup: MatchSetup, max_actions: usize) -> Result<()> {
    let MatchSetup {
        config,
        skills,
        first,
        second,
    } = setup;

    println!("{SEPARATOR}");
    println!("Match: {}", roster.display());

    let mut engine = BattleEngine::new(config);
    engine.initialize(first, second);

    let mut actions = 0;
    while !engine.is_finished() && actions < max_actions {
        let command = policy::choose(&engine, &skills);
        let outcome = engine
            .execute(command)
            .with_context(|| format!("Command {command:?} rejected"))?;
        actions += 1;

        println!("{SEPARATOR}");
        for line in outcome.lines() {
            println!("{line}");
        }
    }

    println!("{SEPARATOR}");
    match engine.result() {
        Some(result) => {
            tracing::info!(actions, winner = %result.player, reason = %result.reason, "match finished");
        }
        None => {
            tracing::warn!(actions, "match stopped without a winner");
            println!("No winner after {actions} actions");
        }
    }
    Ok(())
}
