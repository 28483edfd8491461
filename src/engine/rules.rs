//! Terminal-state predicates. All of these are pure reads of a [`Board`].

use super::board::Board;

/// Default winning tile value.
pub const MAX_PIECE: u32 = 2048;

/// True if the game is over: `target` has been reached or no tilt can change the board.
pub fn is_game_over(board: &Board, target: u32) -> bool {
    max_tile_exists(board, target) || !at_least_one_move_exists(board)
}

/// True if any cell is empty.
pub fn empty_space_exists(board: &Board) -> bool {
    board.count_empty() > 0
}

/// True if any tile has exactly the value `target`.
pub fn max_tile_exists(board: &Board, target: u32) -> bool {
    board.tiles().any(|t| t.value() == target)
}

/// True if some cell is empty or two orthogonal neighbours share a value.
pub fn at_least_one_move_exists(board: &Board) -> bool {
    if empty_space_exists(board) {
        return true;
    }
    let grid = board.to_grid();
    let size = board.size();
    for row in 0..size {
        for col in 0..size {
            let v = grid[row][col];
            if col + 1 < size && grid[row][col + 1] == v {
                return true;
            }
            if row + 1 < size && grid[row + 1][col] == v {
                return true;
            }
        }
    }
    false
}
