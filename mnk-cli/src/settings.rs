//! Engine flags shared by the subcommands

use std::path::Path;

use anyhow::{Context, Result};
use clap::Args;

use mnk_core::EngineConfig;

/// Overrides applied on top of the defaults or a `--config` file
#[derive(Args, Clone, Debug, Default)]
pub struct EngineArgs {
    /// Board side length
    #[arg(long)]
    pub size: Option<usize>,

    /// Marks in a row needed to win
    #[arg(long)]
    pub win: Option<usize>,

    /// AI search depth in plies
    #[arg(long)]
    pub depth: Option<u32>,

    /// Candidate radius around occupied cells
    #[arg(long)]
    pub radius: Option<usize>,

    /// Growth base for the AI's own streaks
    #[arg(long)]
    pub offensive_base: Option<u32>,

    /// Growth base for the opponent's streaks
    #[arg(long)]
    pub defensive_base: Option<u32>,

    /// Disable alpha-beta pruning (exhaustive minimax)
    #[arg(long)]
    pub no_pruning: bool,
}

impl EngineArgs {
    /// Load the base configuration and apply flag overrides
    pub fn resolve(&self, config_path: Option<&Path>) -> Result<EngineConfig> {
        let mut config = match config_path {
            Some(path) => EngineConfig::load(path)
                .with_context(|| format!("Failed to load config: {}", path.display()))?,
            None => EngineConfig::default(),
        };

        if let Some(size) = self.size {
            config.game.board_size = size;
        }
        if let Some(win) = self.win {
            config.game.winning_value = win;
        }
        if let Some(depth) = self.depth {
            config.ai.search_depth = depth;
        }
        if let Some(radius) = self.radius {
            config.ai.radius = radius;
        }
        if let Some(base) = self.offensive_base {
            config.ai.offensive_base = base;
        }
        if let Some(base) = self.defensive_base {
            config.ai.defensive_base = base;
        }
        if self.no_pruning {
            config.ai.pruning = false;
        }

        config.validate()?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_without_flags() {
        let config = EngineArgs::default().resolve(None).unwrap();
        assert_eq!(config, EngineConfig::default());
    }

    #[test]
    fn test_flags_override() {
        let args = EngineArgs {
            size: Some(7),
            win: Some(5),
            depth: Some(2),
            no_pruning: true,
            ..Default::default()
        };
        let config = args.resolve(None).unwrap();
        assert_eq!(config.game.board_size, 7);
        assert_eq!(config.game.winning_value, 5);
        assert_eq!(config.ai.search_depth, 2);
        assert!(!config.ai.pruning);
    }

    #[test]
    fn test_invalid_override_rejected() {
        let args = EngineArgs {
            size: Some(3),
            win: Some(4),
            ..Default::default()
        };
        assert!(args.resolve(None).is_err());
    }

    #[test]
    fn test_missing_config_file() {
        let err = EngineArgs::default()
            .resolve(Some(Path::new("/nonexistent/mnk.json")))
            .unwrap_err();
        assert!(err.to_string().contains("Failed to load config"));
    }
}
