//! Engine module: the board, its reoriented views, the tilt algorithm and
//! the game-over predicates.
//!
//! - `Board` owns the N×N cells and, inside the crate, hands out reoriented
//!   views in which any side looks like "up".
//! - One slide algorithm runs on those views; `tilt` wires it to a side.
//! - `rules` holds the terminal-state checks.

mod board;
pub mod rules;
mod side;
mod tile;
mod tilt;

pub use board::{Board, Tiles};
pub use rules::{at_least_one_move_exists, empty_space_exists, is_game_over, max_tile_exists, MAX_PIECE};
pub use side::{reorient, Side};
pub use tile::Tile;
pub use tilt::TiltOutcome;
use tilt::tilt_up;

/// Slide/merge every tile of `board` toward `side`.
pub fn tilt(board: &mut Board, side: Side) -> TiltOutcome {
    let outcome = tilt_up(&mut board.view_from(side));
    log::debug!(
        "tilt {side}: changed={} score_delta={}",
        outcome.changed,
        outcome.score_delta
    );
    outcome
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board() -> Board {
        // row 0 at the bottom
        Board::from_grid(&[
            [2, 2, 4, 0],
            [0, 0, 4, 8],
            [2, 0, 0, 8],
            [0, 4, 0, 0],
        ])
        .unwrap()
    }

    #[test]
    fn tilt_north() {
        let mut b = board();
        let out = tilt(&mut b, Side::North);
        assert!(out.changed);
        assert_eq!(out.score_delta, 4 + 8 + 16);
        assert_eq!(
            b.to_grid(),
            vec![vec![0, 0, 0, 0], vec![0, 0, 0, 0], vec![0, 2, 0, 0], vec![4, 4, 8, 16]]
        );
    }

    #[test]
    fn tilt_south() {
        let mut b = board();
        let out = tilt(&mut b, Side::South);
        assert_eq!(out.score_delta, 4 + 8 + 16);
        assert_eq!(
            b.to_grid(),
            vec![vec![4, 2, 8, 16], vec![0, 4, 0, 0], vec![0, 0, 0, 0], vec![0, 0, 0, 0]]
        );
    }

    #[test]
    fn tilt_east() {
        let mut b = board();
        let out = tilt(&mut b, Side::East);
        assert_eq!(out.score_delta, 4);
        assert_eq!(
            b.to_grid(),
            vec![vec![0, 0, 4, 4], vec![0, 0, 4, 8], vec![0, 0, 2, 8], vec![0, 0, 0, 4]]
        );
    }

    #[test]
    fn tilt_west() {
        let mut b = board();
        let out = tilt(&mut b, Side::West);
        assert_eq!(out.score_delta, 4);
        assert_eq!(
            b.to_grid(),
            vec![vec![4, 4, 0, 0], vec![4, 8, 0, 0], vec![2, 8, 0, 0], vec![4, 0, 0, 0]]
        );
    }

    #[test]
    fn no_op_tilt_leaves_board_alone() {
        let mut b = Board::from_grid(&[[2, 4], [0, 0]]).unwrap();
        let before = b.clone();
        assert_eq!(tilt(&mut b, Side::South), TiltOutcome::default());
        assert_eq!(b, before);
    }
}
