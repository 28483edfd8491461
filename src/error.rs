use std::io;

/// Errors raised by the board, the session and config loading.
///
/// Every variant except `Io`/`Config` signals a caller bug: the engine never
/// retries or repairs state on its own.
#[derive(thiserror::Error, Debug)]
pub enum EngineError {
    #[error("cell ({col}, {row}) is outside a {size}x{size} board")]
    OutOfBounds { col: usize, row: usize, size: usize },
    #[error("cell ({col}, {row}) already holds a tile")]
    CellOccupied { col: usize, row: usize },
    #[error("invalid side: {0}")]
    InvalidSide(String),
    #[error("tile value {0} is not a power of two >= 2")]
    InvalidTileValue(u32),
    #[error("grid must be square and non-empty (got {rows} rows, row {bad_row} has {len} cells)")]
    InvalidGrid { rows: usize, bad_row: usize, len: usize },
    #[error("invalid config: {0}")]
    InvalidConfig(String),
    #[error("config parse error: {0}")]
    Config(#[from] toml::de::Error),
    #[error("io error: {0}")]
    Io(#[from] io::Error),
}
