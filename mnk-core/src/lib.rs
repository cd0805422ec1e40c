//! MNK Core - Game engine and AI
//!
//! This crate provides the core logic for m,n,k connect games on a square board:
//! - Board state with K-in-a-row detection on rows, columns and diagonals
//! - Streak-based line evaluation
//! - Alpha-beta move search over a radius-limited candidate neighborhood
//! - Game sessions and configuration

pub mod error;
pub mod player;
pub mod lines;
pub mod board;
pub mod eval;
pub mod ai;
pub mod game;
pub mod config;

// Re-exports for convenient access
pub use error::{BoardError, SetupError};
pub use player::{Player, PlayerId, Roster};
pub use lines::{Direction, Line};
pub use board::{Board, GameResult, MAX_BOARD_SIZE};
pub use eval::{Payoff, StreakEvaluator};
pub use ai::{MoveSearch, SearchOutcome, LOSS_SCORE, WIN_SCORE};
pub use game::Game;
pub use config::{AiConfig, EngineConfig, GameConfig};
