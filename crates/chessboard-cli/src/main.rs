//! Terminal front end for the chessboard engine.

mod config;
mod console;
mod session;

use anyhow::Context;
use clap::{Parser, Subcommand};
use config::CliConfig;
use rand::rngs::StdRng;
use rand::SeedableRng;
use session::Session;
use std::io::Write;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "chessboard")]
#[command(about = "Two-player chess on the terminal")]
struct Cli {
    /// Configuration file (defaults to ./chessboard.toml)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Log engine activity at debug level
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Play a game interactively on stdin
    Play,
    /// Apply coordinate moves (e.g. e2e4) and print the result
    Replay {
        /// Moves in order, one per argument
        #[arg(required = true)]
        moves: Vec<String>,
        /// Print the game as JSON instead of a diagram
        #[arg(long)]
        json: bool,
    },
    /// Play random legal moves for both sides
    Selfplay {
        /// Seed for the move picker; random when omitted
        #[arg(long)]
        seed: Option<u64>,
        /// Stop after this many moves
        #[arg(long, default_value = "200")]
        max_plies: usize,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config = CliConfig::load(cli.config.as_deref()).context("loading configuration")?;
    let level = if cli.verbose {
        tracing::Level::DEBUG
    } else {
        config.tracing_level()?
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    let mut session = Session::new(config);

    match cli.command {
        Commands::Play => {
            let stdin = std::io::stdin();
            session.run(stdin.lock(), &mut out)?;
        }
        Commands::Replay { moves, json } => {
            session.replay(&moves).context("replay stopped")?;
            if json {
                serde_json::to_writer_pretty(&mut out, &session.summary())?;
                writeln!(out)?;
            } else {
                session.finish(&mut out)?;
            }
        }
        Commands::Selfplay { seed, max_plies } => {
            let mut rng = match seed {
                Some(seed) => StdRng::seed_from_u64(seed),
                None => StdRng::from_entropy(),
            };
            tracing::info!(?seed, max_plies, "starting self-play");
            session.self_play(&mut rng, max_plies)?;
            session.finish(&mut out)?;
        }
    }
    Ok(())
}
