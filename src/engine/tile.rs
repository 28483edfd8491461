use crate::error::EngineError;

/// A value-bearing tile at a board cell. Values are powers of two >= 2.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Tile {
    value: u32,
    col: usize,
    row: usize,
}

impl Tile {
    /// Largest representable value. Tiles of this value never merge.
    pub const MAX_VALUE: u32 = 1 << 31;

    /// Create a tile, rejecting values that are not a power of two >= 2.
    pub fn new(value: u32, col: usize, row: usize) -> Result<Self, EngineError> {
        if value < 2 || !value.is_power_of_two() {
            return Err(EngineError::InvalidTileValue(value));
        }
        Ok(Tile { value, col, row })
    }

    pub(crate) fn from_exponent(exp: u8, col: usize, row: usize) -> Self {
        Tile { value: 1 << exp, col, row }
    }

    #[inline]
    pub fn value(&self) -> u32 {
        self.value
    }

    #[inline]
    pub fn col(&self) -> usize {
        self.col
    }

    #[inline]
    pub fn row(&self) -> usize {
        self.row
    }

    /// True if two tiles of this value can combine without overflowing.
    #[inline]
    pub fn can_merge(&self) -> bool {
        self.value < Self::MAX_VALUE
    }

    /// log2 of the value, as stored in the board cells.
    #[inline]
    pub(crate) fn exponent(&self) -> u8 {
        self.value.trailing_zeros() as u8
    }
}
