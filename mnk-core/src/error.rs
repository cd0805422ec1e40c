//! Error types for board placement and game setup

/// Errors raised by board construction and cell placement
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum BoardError {
    #[error("board size must be between 1 and {max}, got {0}", max = crate::board::MAX_BOARD_SIZE)]
    InvalidSize(usize),

    #[error("winning value {winning_value} must be between 1 and the board size {size}")]
    InvalidWinningValue { winning_value: usize, size: usize },

    #[error("position ({row}, {col}) exceeds board size {size}")]
    OutOfBounds { row: usize, col: usize, size: usize },

    #[error("position ({row}, {col}) is already occupied")]
    Occupied { row: usize, col: usize },
}

impl BoardError {
    /// Placement errors the caller can recover from by choosing another cell
    pub fn is_recoverable(&self) -> bool {
        matches!(self, BoardError::OutOfBounds { .. } | BoardError::Occupied { .. })
    }
}

/// Errors raised while setting up a game session
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum SetupError {
    #[error(transparent)]
    Board(#[from] BoardError),

    #[error("player {0} already exists")]
    DuplicatePlayer(char),

    #[error("a game holds exactly two players")]
    RosterFull,

    #[error("a game needs two players, {0} registered")]
    IncompleteRoster(usize),

    #[error("search depth must be at least 1, got {0}")]
    InvalidSearchDepth(u32),
}
