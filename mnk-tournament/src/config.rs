//! Configuration types for self-play matches
//!
//! Level 4 - Utilities and configuration

use mnk_core::{AiConfig, GameConfig, SetupError};
use serde::{Deserialize, Serialize};

/// Which of the two configured AIs
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Seat {
    First,
    Second,
}

impl Seat {
    pub fn other(self) -> Self {
        match self {
            Seat::First => Seat::Second,
            Seat::Second => Seat::First,
        }
    }
}

/// Match configuration: board, both AIs and seeding
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchConfig {
    /// Board parameters shared by every game
    pub game: GameConfig,
    /// AI occupying the first seat
    pub first: AiConfig,
    /// AI occupying the second seat
    pub second: AiConfig,
    /// Number of games; seats alternate who moves first
    pub games: usize,
    /// Random plies played before the AIs take over
    pub opening_plies: usize,
    /// Base seed; game `i` uses `seed + i`
    pub seed: u64,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            game: GameConfig::default(),
            first: AiConfig::default(),
            second: AiConfig::default(),
            games: 10,
            opening_plies: 2,
            seed: 42,
        }
    }
}

impl MatchConfig {
    /// Same AI in both seats
    pub fn symmetric(game: GameConfig, ai: AiConfig, games: usize) -> Self {
        Self {
            game,
            first: ai,
            second: ai,
            games,
            ..Default::default()
        }
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    pub fn with_opening_plies(mut self, opening_plies: usize) -> Self {
        self.opening_plies = opening_plies;
        self
    }

    /// Check the board and both seats
    pub fn validate(&self) -> Result<(), SetupError> {
        self.game.validate()?;
        self.first.validate()?;
        self.second.validate()
    }
}
