use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use env_logger::Env;
use log::info;
use rand::{rngs::StdRng, SeedableRng};

use tilt2048::{engine, spawn, GameConfig, GameSession, Side};

/// Sides tried each turn, first one that changes the board wins.
const PRIORITY: [Side; 4] = [Side::South, Side::West, Side::East, Side::North];

#[derive(Parser, Debug)]
#[command(name = "tilt2048", version, about = "Autoplay a game of 2048 with random tile spawns")]
struct Args {
    /// Optional TOML config (size, target_tile)
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,
    /// Board size, overrides the config file
    #[arg(long)]
    size: Option<usize>,
    /// Winning tile value, overrides the config file
    #[arg(long)]
    target: Option<u32>,
    /// RNG seed for tile spawns (random if omitted)
    #[arg(long)]
    seed: Option<u64>,
    /// Stop after this many moves
    #[arg(long, value_name = "N")]
    max_moves: Option<u64>,
    /// Only print the final board
    #[arg(short, long)]
    quiet: bool,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();
    let args = Args::parse();

    let mut cfg = match &args.config {
        Some(path) => GameConfig::from_toml(path)
            .map_err(|e| anyhow::anyhow!("failed to load config {}: {e}", path.display()))?,
        None => GameConfig::default(),
    };
    if let Some(size) = args.size {
        cfg.size = size;
    }
    if let Some(target) = args.target {
        cfg.target_tile = target;
    }

    let seed = args.seed.unwrap_or_else(rand::random);
    info!("size={} target={} seed={seed}", cfg.size, cfg.target_tile);
    let mut rng = StdRng::seed_from_u64(seed);
    let mut game = GameSession::with_config(&cfg)?;
    for _ in 0..2 {
        if let Some(tile) = spawn::random_tile(game.board(), &mut rng) {
            game.add_tile(tile)?;
        }
    }
    if !args.quiet {
        println!("{game}");
    }

    let mut move_count: u64 = 0;
    while !game.game_over() {
        if args.max_moves.is_some_and(|limit| move_count >= limit) {
            break;
        }
        let Some(side) = PRIORITY
            .into_iter()
            .find(|&side| engine::tilt(&mut game.board().clone(), side).changed)
        else {
            break;
        };
        game.tilt(side);
        move_count += 1;
        if let Some(tile) = spawn::random_tile(game.board(), &mut rng) {
            game.add_tile(tile)?;
        }
        if !args.quiet {
            println!("{side}{game}");
        }
    }

    if args.quiet {
        println!("{game}");
    }
    info!(
        "moves={} score={} max_score={} highest_tile={}",
        move_count,
        game.score(),
        game.max_score(),
        game.board().highest_tile()
    );
    Ok(())
}
