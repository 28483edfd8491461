use std::fmt;

use crate::config::{self, GameConfig};
use crate::engine::{self, Board, Side, Tile, MAX_PIECE};
use crate::error::EngineError;

/// One game of 2048: a board, the running score, the best score seen at the
/// end of a game, and the terminal flag.
///
/// Sessions compare structurally; the `Display` rendering is for diagnostics.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameSession {
    board: Board,
    score: u64,
    max_score: u64,
    game_over: bool,
    target: u32,
}

impl GameSession {
    /// An empty `size`×`size` game with score 0, played to [`MAX_PIECE`].
    ///
    /// # Panics
    /// If `size` is 0. [`GameSession::with_config`] returns an error instead.
    pub fn new(size: usize) -> Self {
        GameSession { board: Board::new(size), score: 0, max_score: 0, game_over: false, target: MAX_PIECE }
    }

    /// An empty game with the board size and target tile from `cfg`.
    pub fn with_config(cfg: &GameConfig) -> Result<Self, EngineError> {
        cfg.validate()?;
        let mut session = Self::new(cfg.size);
        session.target = cfg.target_tile;
        Ok(session)
    }

    /// A game seeded from `grid[row][col]` values (`0` = empty, row 0 at the
    /// bottom). The flags are taken as given, not recomputed.
    pub fn from_grid<R: AsRef<[u32]>>(
        grid: &[R],
        score: u64,
        max_score: u64,
        game_over: bool,
    ) -> Result<Self, EngineError> {
        Ok(GameSession { board: Board::from_grid(grid)?, score, max_score, game_over, target: MAX_PIECE })
    }

    /// Play to `target` instead of [`MAX_PIECE`]. The terminal flag is left
    /// as it was; the next check applies the new target.
    pub fn with_target(mut self, target: u32) -> Result<Self, EngineError> {
        config::check_target(target)?;
        self.target = target;
        Ok(self)
    }

    pub fn tile(&self, col: usize, row: usize) -> Result<Option<Tile>, EngineError> {
        self.board.tile(col, row)
    }

    #[inline]
    pub fn size(&self) -> usize {
        self.board.size()
    }

    #[inline]
    pub fn score(&self) -> u64 {
        self.score
    }

    /// Best score so far; refreshed whenever the game is observed to be over.
    #[inline]
    pub fn max_score(&self) -> u64 {
        self.max_score
    }

    #[inline]
    pub fn target(&self) -> u32 {
        self.target
    }

    #[inline]
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// The cached terminal flag, without re-checking the board.
    #[inline]
    pub fn is_over(&self) -> bool {
        self.game_over
    }

    /// Re-check the board and report whether the game is over.
    pub fn game_over(&mut self) -> bool {
        self.check_game_over();
        self.game_over
    }

    /// Empty the board and reset score and terminal flag. `max_score` is kept.
    pub fn clear(&mut self) {
        self.score = 0;
        self.game_over = false;
        self.board.clear();
    }

    /// Place `tile` on the board. Fails if its cell is occupied or off the board.
    pub fn add_tile(&mut self, tile: Tile) -> Result<(), EngineError> {
        self.board.add_tile(tile)?;
        self.check_game_over();
        Ok(())
    }

    /// Tilt toward `side`. Returns true iff any tile moved or merged.
    pub fn tilt(&mut self, side: Side) -> bool {
        let outcome = engine::tilt(&mut self.board, side);
        self.score += outcome.score_delta;
        self.check_game_over();
        outcome.changed
    }

    fn check_game_over(&mut self) {
        let over = engine::is_game_over(&self.board, self.target);
        if over {
            if !self.game_over {
                log::info!("game over: score={} highest={}", self.score, self.board.highest_tile());
            }
            self.max_score = self.max_score.max(self.score);
        }
        self.game_over = over;
    }
}

impl fmt::Display for GameSession {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f)?;
        writeln!(f, "[")?;
        write!(f, "{}", self.board)?;
        let over = if self.game_over { "over" } else { "not over" };
        writeln!(f, "] {} (max: {}) (game is {}) ", self.score, self.max_score, over)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_session_is_empty() {
        let mut s = GameSession::new(4);
        assert_eq!(s.size(), 4);
        assert_eq!(s.score(), 0);
        assert_eq!(s.max_score(), 0);
        assert!(!s.game_over());
        assert_eq!(s.tile(3, 3).unwrap(), None);
        assert!(matches!(s.tile(4, 0), Err(EngineError::OutOfBounds { .. })));
    }

    #[test]
    fn tilt_adds_merge_values_to_score() {
        let mut s = GameSession::from_grid(&[[2, 2, 0], [0, 0, 0], [0, 0, 0]], 10, 0, false).unwrap();
        assert!(s.tilt(Side::West));
        assert_eq!(s.score(), 14);
        assert_eq!(s.tile(0, 0).unwrap().map(|t| t.value()), Some(4));
        assert!(!s.tilt(Side::West));
        assert_eq!(s.score(), 14);
    }

    #[test]
    fn clear_keeps_max_score() {
        let mut s = GameSession::from_grid(&[[2, 4], [4, 2]], 30, 12, false).unwrap();
        assert!(s.game_over());
        assert_eq!(s.max_score(), 30);
        s.clear();
        assert_eq!(s.score(), 0);
        assert_eq!(s.max_score(), 30);
        assert!(!s.is_over());
        assert_eq!(s.board().count_empty(), 4);
    }

    #[test]
    fn add_tile_refreshes_terminal_flag() {
        let mut s = GameSession::from_grid(&[[2, 4], [4, 0]], 8, 0, false).unwrap();
        assert!(!s.is_over());
        s.add_tile(Tile::new(16, 1, 1).unwrap()).unwrap();
        assert!(s.is_over());
        assert_eq!(s.max_score(), 8);
        let err = s.add_tile(Tile::new(2, 0, 0).unwrap()).unwrap_err();
        assert!(matches!(err, EngineError::CellOccupied { col: 0, row: 0 }));
    }

    #[test]
    fn config_sets_target() {
        let cfg = GameConfig { size: 3, target_tile: 8 };
        let mut s = GameSession::with_config(&cfg).unwrap();
        assert_eq!(s.target(), 8);
        s.add_tile(Tile::new(4, 0, 0).unwrap()).unwrap();
        s.add_tile(Tile::new(4, 0, 2).unwrap()).unwrap();
        assert!(!s.is_over());
        assert!(s.tilt(Side::North));
        assert!(s.is_over());
        assert!(GameSession::with_config(&GameConfig { size: 0, target_tile: 8 }).is_err());
    }

    #[test]
    fn fixture_with_custom_target() {
        let mut s = GameSession::from_grid(&[[0, 0, 0], [0, 8, 0], [0, 0, 0]], 12, 0, false)
            .unwrap()
            .with_target(16)
            .unwrap();
        assert_eq!(s.target(), 16);
        assert!(!s.game_over());
        s.add_tile(Tile::new(8, 1, 0).unwrap()).unwrap();
        assert!(s.tilt(Side::South));
        assert!(s.is_over());
        assert_eq!(s.max_score(), 28);

        let fixture = GameSession::from_grid(&[[2]], 0, 0, false).unwrap();
        assert!(matches!(fixture.clone().with_target(12), Err(EngineError::InvalidConfig(_))));
        assert!(matches!(fixture.with_target(1), Err(EngineError::InvalidConfig(_))));
    }

    #[test]
    #[should_panic(expected = "board size must be at least 1")]
    fn zero_size_session_panics() {
        let _ = GameSession::new(0);
    }

    #[test]
    fn renders_like_a_scoreboard() {
        let s = GameSession::from_grid(&[[2, 0], [0, 2048]], 5, 9, true).unwrap();
        assert_eq!(s.to_string(), "\n[\n|    |2048|\n|   2|    |\n] 5 (max: 9) (game is over) \n");
    }

    #[test]
    fn equality_is_structural() {
        let a = GameSession::from_grid(&[[2, 0], [0, 0]], 0, 0, false).unwrap();
        let mut b = GameSession::new(2);
        b.add_tile(Tile::new(2, 0, 0).unwrap()).unwrap();
        assert_eq!(a, b);
        b.tilt(Side::North);
        assert_ne!(a, b);
    }
}
