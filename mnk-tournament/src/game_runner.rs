//! Game runner - executes single games
//!
//! Level 3 - Step-level implementation

use mnk_core::{Board, Game, GameResult, MoveSearch, PlayerId, SetupError};
use rand::seq::IteratorRandom;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use serde::Serialize;

use crate::config::{MatchConfig, Seat};
use crate::error::MatchError;

/// Symbols used for the two seats on the board
const SYMBOLS: [char; 2] = ['O', 'X'];

/// Outcome of a single game
#[derive(Clone, Debug, Serialize)]
pub struct GameOutcome {
    /// Index within the match (also the seed offset)
    pub game_index: usize,
    /// Seat that made the first move
    pub first_mover: Seat,
    /// Winning seat, `None` for a draw
    pub winner: Option<Seat>,
    /// Plies played, random openings included
    pub plies: usize,
    /// Cells in the order they were claimed
    pub moves: Vec<(usize, usize)>,
}

impl GameOutcome {
    pub fn first_wins(&self) -> bool {
        self.winner == Some(Seat::First)
    }

    pub fn second_wins(&self) -> bool {
        self.winner == Some(Seat::Second)
    }

    pub fn is_draw(&self) -> bool {
        self.winner.is_none()
    }
}

/// Plays games between the two configured AIs
#[derive(Clone, Debug)]
pub struct GameRunner {
    config: MatchConfig,
}

impl GameRunner {
    pub fn new(config: MatchConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &MatchConfig {
        &self.config
    }

    /// Play game `game_index`: even games start with the first seat.
    /// Fails with [`MatchError::NoMove`] rather than stopping on an unresolved board.
    pub fn play_game(&self, game_index: usize) -> Result<GameOutcome, MatchError> {
        let (mut game, roster) = Game::with_players(self.config.game, SYMBOLS)?;
        let winning_value = self.config.game.winning_value;

        let first_mover = if game_index % 2 == 0 {
            Seat::First
        } else {
            Seat::Second
        };
        // The roster's first player always moves first
        let first_seat_id = match first_mover {
            Seat::First => roster.first(),
            Seat::Second => roster.second(),
        };

        let first_ai = MoveSearch::new(&self.config.first, winning_value, roster);
        let second_ai = MoveSearch::new(&self.config.second, winning_value, roster);
        let mut rng = ChaCha8Rng::seed_from_u64(self.config.seed.wrapping_add(game_index as u64));

        let mut mover = roster.first();
        let mut moves = Vec::new();

        while !game.result().is_resolved() {
            let cell = if moves.len() < self.config.opening_plies {
                let cell = random_cell(game.board(), &mut rng);
                if let Some((row, col)) = cell {
                    game.place(mover, row, col).map_err(SetupError::from)?;
                }
                cell
            } else {
                let ai = if mover == first_seat_id {
                    &first_ai
                } else {
                    &second_ai
                };
                game.play_ai(ai, mover).chosen
            };

            match cell {
                Some(cell) => moves.push(cell),
                None => {
                    tracing::warn!(
                        "game {}: {} produced no move after {} plies",
                        game_index,
                        mover,
                        moves.len()
                    );
                    return Err(MatchError::NoMove {
                        game_index,
                        plies: moves.len(),
                    });
                }
            }
            mover = roster.opponent(mover);
        }

        let winner = game
            .result()
            .winner()
            .map(|id| seat_of(id, first_seat_id));

        tracing::debug!(
            "game {}: {:?} after {} plies ({:?} moved first)",
            game_index,
            game.result(),
            moves.len(),
            first_mover
        );

        Ok(GameOutcome {
            game_index,
            first_mover,
            winner,
            plies: moves.len(),
            moves,
        })
    }
}

/// Uniformly random empty cell
fn random_cell(board: &Board, rng: &mut ChaCha8Rng) -> Option<(usize, usize)> {
    board.empty_cells().choose(rng)
}

fn seat_of(id: PlayerId, first_seat_id: PlayerId) -> Seat {
    if id == first_seat_id {
        Seat::First
    } else {
        Seat::Second
    }
}

/// Result of replaying recorded moves, used to audit outcomes
pub fn replay(config: &MatchConfig, moves: &[(usize, usize)]) -> Result<GameResult, SetupError> {
    let (mut game, roster) = Game::with_players(config.game, SYMBOLS)?;
    let mut mover = roster.first();
    for &(row, col) in moves {
        game.place(mover, row, col)?;
        mover = roster.opponent(mover);
    }
    Ok(game.result())
}

#[cfg(test)]
mod tests {
    use super::*;
    use mnk_core::{AiConfig, GameConfig};

    fn small_config() -> MatchConfig {
        MatchConfig::symmetric(GameConfig::new(4, 3), AiConfig::with_depth(2), 4)
    }

    #[test]
    fn test_game_runner_creation() {
        let runner = GameRunner::new(small_config());
        assert_eq!(runner.config().first.search_depth, 2);
    }

    #[test]
    fn test_play_game_finishes() {
        let runner = GameRunner::new(small_config());
        let outcome = runner.play_game(0).unwrap();

        assert_eq!(outcome.first_mover, Seat::First);
        assert_eq!(outcome.plies, outcome.moves.len());
        assert!(outcome.plies >= 5);
        assert!(outcome.plies <= 16);

        let result = replay(runner.config(), &outcome.moves).unwrap();
        assert!(result.is_resolved());
        assert_eq!(outcome.is_draw(), result == GameResult::Draw);
    }

    #[test]
    fn test_seats_alternate() {
        let runner = GameRunner::new(small_config());
        assert_eq!(runner.play_game(0).unwrap().first_mover, Seat::First);
        assert_eq!(runner.play_game(1).unwrap().first_mover, Seat::Second);
    }

    #[test]
    fn test_same_seed_same_game() {
        let runner = GameRunner::new(small_config().with_opening_plies(3));
        let a = runner.play_game(2).unwrap();
        let b = runner.play_game(2).unwrap();
        assert_eq!(a.moves, b.moves);
        assert_eq!(a.winner, b.winner);
    }

    #[test]
    fn test_opening_plies_are_random() {
        let config = small_config().with_opening_plies(2);
        let openings: Vec<_> = (0..8u64)
            .map(|seed| {
                let runner = GameRunner::new(config.with_seed(seed));
                runner.play_game(0).unwrap().moves[..2].to_vec()
            })
            .collect();
        assert!(openings.iter().any(|o| o != &openings[0]));
    }

    #[test]
    fn test_without_openings_first_move_is_center() {
        let runner = GameRunner::new(small_config().with_opening_plies(0));
        let outcome = runner.play_game(0).unwrap();
        assert_eq!(outcome.moves[0], (2, 2));
    }

    #[test]
    fn test_zero_depth_seat_is_an_error_not_a_draw() {
        let config = MatchConfig {
            game: GameConfig::new(3, 3),
            first: AiConfig::with_depth(2),
            second: AiConfig::with_depth(0),
            games: 1,
            opening_plies: 0,
            seed: 42,
        };
        let runner = GameRunner::new(config);
        assert_eq!(
            runner.play_game(0).unwrap_err(),
            MatchError::NoMove {
                game_index: 0,
                plies: 1
            }
        );
    }

    #[test]
    fn test_game_outcome_winner() {
        let outcome = GameOutcome {
            game_index: 0,
            first_mover: Seat::First,
            winner: Some(Seat::Second),
            plies: 7,
            moves: vec![],
        };
        assert!(outcome.second_wins());
        assert!(!outcome.first_wins());
        assert!(!outcome.is_draw());
        assert_eq!(Seat::Second.other(), Seat::First);
    }
}
