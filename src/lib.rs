//! tilt2048: the rules engine of the 2048 sliding-tile puzzle.
//!
//! This crate provides:
//! - A `Board` of optional power-of-two tiles with reoriented views (`engine`)
//! - One slide-and-merge algorithm reused for all four sides (`engine::tilt`)
//! - Game-over predicates (`engine::rules`)
//! - A `GameSession` holding score, best score and the terminal flag
//! - TOML configuration (`config`) and a random tile spawner for drivers (`spawn`)
//!
//! Quick start:
//! ```
//! use tilt2048::{GameSession, Side, Tile};
//!
//! let mut game = GameSession::new(4);
//! game.add_tile(Tile::new(2, 0, 0).unwrap()).unwrap();
//! game.add_tile(Tile::new(2, 0, 3).unwrap()).unwrap();
//! assert!(game.tilt(Side::North));
//! assert_eq!(game.score(), 4);
//! assert_eq!(game.tile(0, 3).unwrap().map(|t| t.value()), Some(4));
//! assert!(!game.game_over());
//! ```
//!
//! Tile placement is always explicit. To drive a game with random spawns,
//! pair a session with `spawn::random_tile` and a seeded RNG:
//! ```
//! use rand::{rngs::StdRng, SeedableRng};
//! use tilt2048::{spawn, GameSession, Side};
//!
//! let mut rng = StdRng::seed_from_u64(42);
//! let mut game = GameSession::new(4);
//! for _ in 0..2 {
//!     let t = spawn::random_tile(game.board(), &mut rng).unwrap();
//!     game.add_tile(t).unwrap();
//! }
//! if game.tilt(Side::West) {
//!     if let Some(t) = spawn::random_tile(game.board(), &mut rng) {
//!         game.add_tile(t).unwrap();
//!     }
//! }
//! assert!(game.board().count_empty() <= 14);
//! ```

pub mod config;
pub mod engine;
pub mod error;
pub mod session;
pub mod spawn;

pub use config::GameConfig;
pub use engine::{Board, Side, Tile, MAX_PIECE};
pub use error::EngineError;
pub use session::GameSession;
