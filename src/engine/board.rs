use std::fmt;

use super::side::Side;
use super::tile::Tile;
use crate::error::EngineError;

/// An N×N grid of optional tiles.
///
/// Cells hold the tile exponent (`0` for empty, `1` for 2, `2` for 4, ...) in
/// row-major order starting at row 0, the lower edge. Storage coordinates are
/// fixed; tilts read and write it through crate-internal reoriented views.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Board {
    size: usize,
    cells: Vec<u8>,
}

impl Board {
    /// An empty board with `size` cells per side.
    ///
    /// # Panics
    /// If `size` is 0.
    pub fn new(size: usize) -> Self {
        assert!(size > 0, "board size must be at least 1");
        Board { size, cells: vec![0; size * size] }
    }

    /// Build a board from `grid[row][col]` values, `0` meaning empty and
    /// row 0 being the lower edge.
    pub fn from_grid<R: AsRef<[u32]>>(grid: &[R]) -> Result<Self, EngineError> {
        let size = grid.len();
        if size == 0 {
            return Err(EngineError::InvalidGrid { rows: 0, bad_row: 0, len: 0 });
        }
        let mut board = Board::new(size);
        for (row, line) in grid.iter().enumerate() {
            let line = line.as_ref();
            if line.len() != size {
                return Err(EngineError::InvalidGrid { rows: size, bad_row: row, len: line.len() });
            }
            for (col, &value) in line.iter().enumerate() {
                if value != 0 {
                    board.add_tile(Tile::new(value, col, row)?)?;
                }
            }
        }
        Ok(board)
    }

    /// Inverse of [`Board::from_grid`].
    pub fn to_grid(&self) -> Vec<Vec<u32>> {
        (0..self.size)
            .map(|row| {
                (0..self.size)
                    .map(|col| match self.cells[self.index(col, row)] {
                        0 => 0,
                        exp => 1 << exp,
                    })
                    .collect::<Vec<u32>>()
            })
            .collect()
    }

    #[inline]
    pub fn size(&self) -> usize {
        self.size
    }

    /// The tile at `(col, row)`, or `None` for an empty cell.
    pub fn tile(&self, col: usize, row: usize) -> Result<Option<Tile>, EngineError> {
        self.check_bounds(col, row)?;
        Ok(self.tile_unchecked(col, row))
    }

    /// Place `tile` at its own position. The cell must be empty.
    pub fn add_tile(&mut self, tile: Tile) -> Result<(), EngineError> {
        let (col, row) = (tile.col(), tile.row());
        self.check_bounds(col, row)?;
        let idx = self.index(col, row);
        if self.cells[idx] != 0 {
            return Err(EngineError::CellOccupied { col, row });
        }
        self.cells[idx] = tile.exponent();
        Ok(())
    }

    /// Remove every tile.
    pub fn clear(&mut self) {
        self.cells.fill(0);
    }

    /// Iterate occupied cells row by row, starting at row 0.
    pub fn tiles(&self) -> Tiles<'_> {
        Tiles { board: self, idx: 0 }
    }

    pub fn count_empty(&self) -> usize {
        self.cells.iter().filter(|&&exp| exp == 0).count()
    }

    /// Highest tile value on the board, 0 when empty.
    pub fn highest_tile(&self) -> u32 {
        match self.cells.iter().copied().max() {
            Some(exp) if exp > 0 => 1 << exp,
            _ => 0,
        }
    }

    /// A read/write view in which "up" (increasing row) points toward `side`.
    ///
    /// The view borrows the board mutably, so canonical coordinates are back
    /// in effect as soon as it is dropped.
    pub(crate) fn view_from(&mut self, side: Side) -> BoardView<'_> {
        BoardView { board: self, side }
    }

    #[inline]
    fn index(&self, col: usize, row: usize) -> usize {
        row * self.size + col
    }

    fn check_bounds(&self, col: usize, row: usize) -> Result<(), EngineError> {
        if col >= self.size || row >= self.size {
            return Err(EngineError::OutOfBounds { col, row, size: self.size });
        }
        Ok(())
    }

    fn tile_unchecked(&self, col: usize, row: usize) -> Option<Tile> {
        match self.cells[self.index(col, row)] {
            0 => None,
            exp => Some(Tile::from_exponent(exp, col, row)),
        }
    }
}

/// Renders rows from the top edge down, each cell as `|` plus a width-4 value.
impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in (0..self.size).rev() {
            for col in 0..self.size {
                match self.tile_unchecked(col, row) {
                    Some(t) => write!(f, "|{:4}", t.value())?,
                    None => write!(f, "|    ")?,
                }
            }
            writeln!(f, "|")?;
        }
        Ok(())
    }
}

/// Iterator over the occupied cells of a [`Board`].
#[derive(Debug)]
pub struct Tiles<'a> {
    board: &'a Board,
    idx: usize,
}

impl Iterator for Tiles<'_> {
    type Item = Tile;

    fn next(&mut self) -> Option<Tile> {
        let size = self.board.size;
        while self.idx < self.board.cells.len() {
            let idx = self.idx;
            self.idx += 1;
            if let Some(t) = self.board.tile_unchecked(idx % size, idx / size) {
                return Some(t);
            }
        }
        None
    }
}

/// A reoriented window onto a [`Board`], scoped to a single tilt.
///
/// Coordinates passed in and tiles handed out are in view space; the
/// underlying storage is translated through [`Side::reorient`].
#[derive(Debug)]
pub(crate) struct BoardView<'a> {
    board: &'a mut Board,
    side: Side,
}

impl BoardView<'_> {
    #[inline]
    pub fn size(&self) -> usize {
        self.board.size
    }

    #[inline]
    pub fn side(&self) -> Side {
        self.side
    }

    /// The tile at view coordinates `(col, row)`, positioned in view space.
    pub fn tile(&self, col: usize, row: usize) -> Option<Tile> {
        let (sc, sr) = self.side.reorient(col, row, self.board.size);
        match self.board.cells[self.board.index(sc, sr)] {
            0 => None,
            exp => Some(Tile::from_exponent(exp, col, row)),
        }
    }

    /// Move `tile` (a tile previously read through this view) to `(col, row)`.
    ///
    /// If the destination holds a tile of the same value the two merge into one
    /// tile of double value and `true` is returned.
    ///
    /// # Panics
    /// If `tile` is not what the view holds at its position, or the
    /// destination holds a tile it cannot merge with.
    pub fn move_tile(&mut self, col: usize, row: usize, tile: Tile) -> bool {
        let size = self.board.size;
        let (fc, fr) = self.side.reorient(tile.col(), tile.row(), size);
        let (tc, tr) = self.side.reorient(col, row, size);
        let from = self.board.index(fc, fr);
        let to = self.board.index(tc, tr);
        if from == to {
            return false;
        }
        let exp = self.board.cells[from];
        assert_eq!(exp, tile.exponent(), "tile does not match its cell");
        let dest = self.board.cells[to];
        if dest != 0 {
            assert!(dest == exp && tile.can_merge(), "cannot merge {} into ({col}, {row})", tile.value());
        }
        self.board.cells[from] = 0;
        if dest == 0 {
            self.board.cells[to] = exp;
            false
        } else {
            self.board.cells[to] = exp + 1;
            true
        }
    }
}
