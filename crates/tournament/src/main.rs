//! Tournament CLI
//!
//! Register players, report results, and show standings and pairings.

use anyhow::Context;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use swiss_core::PlayerId;
use tournament::{
    pairings_report, standings_report, ReportOutcome, SqliteStore, Tournament, TournamentConfig,
};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "tournament", about = "Swiss-system tournament tracker")]
struct Cli {
    /// TOML configuration file
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Database file (overrides the configuration)
    #[arg(long, global = true)]
    database: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Register a new player
    Register { name: String },
    /// Report the result of a match
    Report {
        winner: i64,
        loser: i64,
        /// Record the match as a tie
        #[arg(long)]
        tie: bool,
    },
    /// Show current standings
    Standings {
        #[arg(long)]
        json: bool,
    },
    /// Show pairings for the next round
    Pairings {
        #[arg(long)]
        json: bool,
    },
    /// Show the number of registered players
    Count,
    /// Delete all matches, and players unless --matches-only is given
    Reset {
        #[arg(long)]
        matches_only: bool,
    },
}

fn load_config(cli: &Cli) -> anyhow::Result<TournamentConfig> {
    let mut config = match &cli.config {
        Some(path) => TournamentConfig::load(path)
            .with_context(|| format!("failed to load config {}", path.display()))?,
        None => TournamentConfig::default(),
    };
    if let Some(database) = &cli.database {
        config.database = database.clone();
    }
    Ok(config)
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = load_config(&cli)?;
    let store = SqliteStore::from_config(&config)
        .with_context(|| format!("failed to open database {}", config.database.display()))?;
    let tournament = Tournament::new(store);

    match cli.command {
        Command::Register { name } => {
            let id = tournament.register_player(&name)?;
            println!("Registered {} with id {}", name, id);
        }
        Command::Report { winner, loser, tie } => {
            match tournament.report_match(PlayerId(winner), PlayerId(loser), tie)? {
                ReportOutcome::Recorded => println!("Match recorded"),
                ReportOutcome::Duplicate => {
                    println!("Players {} and {} have already met; nothing recorded", winner, loser)
                }
            }
        }
        Command::Standings { json } => {
            let standings = tournament.player_standings()?;
            if json {
                println!("{}", serde_json::to_string_pretty(&standings)?);
            } else {
                print!("{}", standings_report(&standings));
            }
        }
        Command::Pairings { json } => {
            let pairings = tournament.swiss_pairings()?;
            if json {
                println!("{}", serde_json::to_string_pretty(&pairings)?);
            } else {
                print!("{}", pairings_report(&pairings));
            }
        }
        Command::Count => println!("{}", tournament.count_players()?),
        Command::Reset { matches_only } => {
            tournament.reset_matches()?;
            if !matches_only {
                tournament.reset_players()?;
            }
        }
    }

    Ok(())
}
