//! Errors raised while running self-play games

use mnk_core::SetupError;

#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum MatchError {
    #[error(transparent)]
    Setup(#[from] SetupError),

    /// The AI to move returned no cell on an unresolved board
    #[error("game {game_index} stalled after {plies} plies: no move on an unresolved board")]
    NoMove { game_index: usize, plies: usize },
}
