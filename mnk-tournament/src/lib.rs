//! MNK Tournament - AI self-play matches
//!
//! This crate pits two AI configurations against each other:
//! - Single games with optional random openings
//! - Matches alternating who moves first, run in parallel with rayon
//!
//! ## Architecture (4-layer granularity)
//!
//! - Level 2: play_match, play_match_parallel (phases)
//! - Level 3: GameRunner::play_game, aggregation (steps)
//! - Level 4: configuration

mod config;
mod error;
mod game_runner;
mod match_play;

pub use config::{MatchConfig, Seat};
pub use error::MatchError;
pub use game_runner::{replay, GameOutcome, GameRunner};
pub use match_play::{play_match, play_match_parallel, MatchResult};
