use std::fmt;
use std::str::FromStr;

use crate::error::EngineError;

/// A direction to tilt the board toward.
///
/// Storage coordinates are `(col, row)` with `(0, 0)` in the lower-left corner,
/// so `North` is toward increasing row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    North,
    East,
    South,
    West,
}

impl Side {
    pub const ALL: [Side; 4] = [Side::North, Side::East, Side::South, Side::West];

    /// Map a coordinate in the view where `self` is "up" to storage coordinates.
    ///
    /// Each side is a rotation of the canonical view, so the mapping is a
    /// bijection on the `size`x`size` grid.
    ///
    /// # Panics
    /// If `col` or `row` is not below `size`.
    #[inline]
    pub fn reorient(self, col: usize, row: usize, size: usize) -> (usize, usize) {
        assert!(col < size && row < size, "({col}, {row}) outside a {size}x{size} view");
        let last = size - 1;
        match self {
            Side::North => (col, row),
            Side::South => (last - col, last - row),
            Side::East => (row, last - col),
            Side::West => (last - row, col),
        }
    }
}

/// Free-function form of [`Side::reorient`].
#[inline]
pub fn reorient(side: Side, col: usize, row: usize, size: usize) -> (usize, usize) {
    side.reorient(col, row, size)
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Side::North => "NORTH",
            Side::East => "EAST",
            Side::South => "SOUTH",
            Side::West => "WEST",
        };
        f.write_str(s)
    }
}

impl FromStr for Side {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "NORTH" | "N" | "UP" => Ok(Side::North),
            "EAST" | "E" | "RIGHT" => Ok(Side::East),
            "SOUTH" | "S" | "DOWN" => Ok(Side::South),
            "WEST" | "W" | "LEFT" => Ok(Side::West),
            _ => Err(EngineError::InvalidSide(s.to_string())),
        }
    }
}

impl TryFrom<u8> for Side {
    type Error = EngineError;

    /// 0=North, 1=East, 2=South, 3=West.
    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Side::North),
            1 => Ok(Side::East),
            2 => Ok(Side::South),
            3 => Ok(Side::West),
            other => Err(EngineError::InvalidSide(other.to_string())),
        }
    }
}
