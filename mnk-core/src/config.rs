//! Game and AI configuration

use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::board;
use crate::error::{BoardError, SetupError};

/// Board parameters
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Side length of the square board
    pub board_size: usize,
    /// Marks in a row needed to win
    pub winning_value: usize,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            board_size: 5,
            winning_value: 4,
        }
    }
}

impl GameConfig {
    pub fn new(board_size: usize, winning_value: usize) -> Self {
        Self {
            board_size,
            winning_value,
        }
    }

    /// Check the parameters without building a board
    pub fn validate(&self) -> Result<(), BoardError> {
        board::check_dimensions(self.board_size, self.winning_value)
    }
}

/// Search and evaluation parameters for the computer player
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AiConfig {
    /// Growth base for the searching player's own streaks
    pub offensive_base: u32,
    /// Growth base for the opponent's streaks
    pub defensive_base: u32,
    /// Plies searched below the root
    pub search_depth: u32,
    /// Chebyshev radius around occupied cells for candidate moves
    pub radius: usize,
    /// Alpha-beta pruning; off gives exhaustive minimax with the same scores
    pub pruning: bool,
}

impl Default for AiConfig {
    fn default() -> Self {
        Self {
            offensive_base: 10,
            defensive_base: 9,
            search_depth: 3,
            radius: 1,
            pruning: true,
        }
    }
}

impl AiConfig {
    /// Default evaluation weights at a given depth
    pub fn with_depth(search_depth: u32) -> Self {
        Self {
            search_depth,
            ..Default::default()
        }
    }

    pub fn with_radius(mut self, radius: usize) -> Self {
        self.radius = radius;
        self
    }

    pub fn with_bases(mut self, offensive_base: u32, defensive_base: u32) -> Self {
        self.offensive_base = offensive_base;
        self.defensive_base = defensive_base;
        self
    }

    pub fn without_pruning(mut self) -> Self {
        self.pruning = false;
        self
    }

    /// A zero-depth search never picks a move
    pub fn validate(&self) -> Result<(), SetupError> {
        if self.search_depth == 0 {
            return Err(SetupError::InvalidSearchDepth(self.search_depth));
        }
        Ok(())
    }
}

/// Complete engine setup, loadable from JSON
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    pub game: GameConfig,
    pub ai: AiConfig,
}

impl EngineConfig {
    /// Load from a JSON file; missing fields fall back to defaults
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        let config: EngineConfig = serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse config JSON: {}", path.display()))?;
        Ok(config)
    }

    /// Save to a JSON file
    pub fn save(&self, path: &Path) -> anyhow::Result<()> {
        let content = serde_json::to_string_pretty(self).context("Failed to serialize config")?;
        std::fs::write(path, content)
            .with_context(|| format!("Failed to write config file: {}", path.display()))?;
        Ok(())
    }

    pub fn validate(&self) -> anyhow::Result<()> {
        self.game.validate()?;
        self.ai.validate()?;
        if self.ai.offensive_base < 2 || self.ai.defensive_base < 2 {
            tracing::warn!(
                "base values below 2 flatten streak scoring (offensive={}, defensive={})",
                self.ai.offensive_base,
                self.ai.defensive_base
            );
        }
        Ok(())
    }
}
