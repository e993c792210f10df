//! Auto-Quest CLI - play the battler in a terminal, by hand or on autopilot.

mod cli;

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Context;
use auto_quest::{BattleConfig, GameRng, World, WorldConfig};
use clap::Parser;
use tracing_subscriber::EnvFilter;

/// A simple JRPG designed to be played by both humans and programs.
#[derive(Parser, Debug)]
#[command(name = "auto-quest")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// World file (default: bundled world)
    #[arg(short, long)]
    world: Option<PathBuf>,

    /// How the player is controlled
    #[arg(long, value_enum, default_value = "user")]
    logic: cli::Logic,

    /// Randomize species attributes and learnsets
    #[arg(long)]
    randomize: bool,

    /// Random seed (default: random)
    #[arg(short, long)]
    seed: Option<u64>,

    /// Turns before a battle is called a stalemate (0 = unlimited)
    #[arg(long, default_value = "100")]
    max_turns: u32,
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e:#}");
            ExitCode::FAILURE
        }
    }
}

fn run(args: &Args) -> anyhow::Result<()> {
    let mut rng = args.seed.map_or_else(GameRng::from_entropy, GameRng::new);
    tracing::info!(seed = rng.seed(), "session seed");

    let mut world = match &args.world {
        Some(path) => World::load(path).with_context(|| format!("loading world {}", path.display()))?,
        None => World::from_config(WorldConfig::from_json(cli::DEFAULT_WORLD)?)
            .context("loading bundled world")?,
    };
    if args.randomize {
        world = world.randomized(&mut rng).context("randomizing world")?;
    }

    let config = BattleConfig::default().with_max_turns(args.max_turns);
    cli::Session::new(&world, config, cli::Controller::new(args.logic)).run(&mut rng)
}
