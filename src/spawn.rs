//! Random tile placement for drivers of a [`GameSession`](crate::GameSession).
//!
//! The engine itself never spawns tiles; callers decide where new tiles go.
//! This is the classic policy: a uniformly chosen empty cell gets a 2 (90%)
//! or a 4 (10%).

use rand::Rng;

use crate::engine::{Board, Tile};

/// Pick a new tile for a random empty cell of `board`, or `None` if the board is full.
pub fn random_tile<R: Rng + ?Sized>(board: &Board, rng: &mut R) -> Option<Tile> {
    let empty = board.count_empty();
    if empty == 0 {
        return None;
    }
    let mut index = rng.gen_range(0..empty);
    let value = generate_random_value(rng);
    let size = board.size();
    for row in 0..size {
        for col in 0..size {
            if matches!(board.tile(col, row), Ok(None)) {
                if index == 0 {
                    return Tile::new(value, col, row).ok();
                }
                index -= 1;
            }
        }
    }
    None
}

fn generate_random_value<R: Rng + ?Sized>(rng: &mut R) -> u32 {
    if rng.gen_range(0..10) < 9 { 2 } else { 4 }
}
