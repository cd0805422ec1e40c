//! Match play - multiple games between the two seats
//!
//! Level 2 - Phase-level implementation

use rayon::prelude::*;
use serde::Serialize;

use crate::config::MatchConfig;
use crate::error::MatchError;
use crate::game_runner::{GameOutcome, GameRunner};

/// Result of a match (multiple games)
#[derive(Clone, Debug, Serialize)]
pub struct MatchResult {
    /// Wins for the first seat
    pub first_wins: u32,
    /// Wins for the second seat
    pub second_wins: u32,
    /// Games that filled the board without a winner
    pub draws: u32,
    /// Average game length in plies
    pub avg_plies: f32,
    /// Total games played
    pub games_played: u32,
    /// Individual game outcomes, ordered by game index
    pub outcomes: Vec<GameOutcome>,
}

impl MatchResult {
    /// Create empty result
    pub fn empty() -> Self {
        Self {
            first_wins: 0,
            second_wins: 0,
            draws: 0,
            avg_plies: 0.0,
            games_played: 0,
            outcomes: Vec::new(),
        }
    }

    pub fn first_win_rate(&self) -> f32 {
        self.rate(self.first_wins)
    }

    pub fn second_win_rate(&self) -> f32 {
        self.rate(self.second_wins)
    }

    pub fn draw_rate(&self) -> f32 {
        self.rate(self.draws)
    }

    /// Wins = 1.0, Draws = 0.5, Losses = 0.0
    pub fn score_for_first(&self) -> f32 {
        self.first_wins as f32 + 0.5 * self.draws as f32
    }

    pub fn score_for_second(&self) -> f32 {
        self.second_wins as f32 + 0.5 * self.draws as f32
    }

    fn rate(&self, count: u32) -> f32 {
        if self.games_played == 0 {
            0.0
        } else {
            count as f32 / self.games_played as f32
        }
    }
}

/// Play every game of the match on the current thread
pub fn play_match(config: &MatchConfig) -> Result<MatchResult, MatchError> {
    config.validate()?;
    let runner = GameRunner::new(*config);
    let outcomes = (0..config.games)
        .map(|index| runner.play_game(index))
        .collect::<Result<Vec<_>, _>>()?;
    Ok(aggregate_results(outcomes))
}

/// Play the match with games spread over the rayon pool
pub fn play_match_parallel(config: &MatchConfig) -> Result<MatchResult, MatchError> {
    config.validate()?;
    let runner = GameRunner::new(*config);
    let outcomes = (0..config.games)
        .into_par_iter()
        .map(|index| runner.play_game(index))
        .collect::<Result<Vec<_>, _>>()?;
    Ok(aggregate_results(outcomes))
}

// ============================================================================
// Level 3 - Steps
// ============================================================================

fn aggregate_results(outcomes: Vec<GameOutcome>) -> MatchResult {
    if outcomes.is_empty() {
        return MatchResult::empty();
    }

    let first_wins = outcomes.iter().filter(|o| o.first_wins()).count() as u32;
    let second_wins = outcomes.iter().filter(|o| o.second_wins()).count() as u32;
    let draws = outcomes.iter().filter(|o| o.is_draw()).count() as u32;
    let total_plies: usize = outcomes.iter().map(|o| o.plies).sum();
    let games_played = outcomes.len() as u32;

    tracing::info!(
        "match finished: first={} second={} draws={} ({} games)",
        first_wins,
        second_wins,
        draws,
        games_played
    );

    MatchResult {
        first_wins,
        second_wins,
        draws,
        avg_plies: total_plies as f32 / games_played as f32,
        games_played,
        outcomes,
    }
}
