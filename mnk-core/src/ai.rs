//! Alpha-beta move search over a pruned candidate neighborhood

use rustc_hash::FxHashSet;

use crate::board::{Board, GameResult};
use crate::config::AiConfig;
use crate::eval::{Payoff, StreakEvaluator};
use crate::player::{PlayerId, Roster};

// ============================================================================
// CONSTANTS
// ============================================================================

/// Score of a won position (divided by ply count at terminal nodes)
pub const WIN_SCORE: i64 = i64::MAX;

/// Score of a lost position (divided by ply count at terminal nodes)
pub const LOSS_SCORE: i64 = i64::MIN;

// ============================================================================
// MOVE SEARCH
// ============================================================================

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum NodeType {
    Max,
    Min,
}

/// Result of one root search
#[derive(Clone, Debug)]
pub struct SearchOutcome {
    /// Board after the chosen move (unchanged if the root was already resolved)
    pub board: Board,
    /// Chosen cell, `None` when no move was made
    pub chosen: Option<(usize, usize)>,
    /// Root score from the searching player's point of view
    pub score: i64,
    /// Nodes visited
    pub nodes: u64,
}

/// Computer player: depth-limited alpha-beta guided by streak evaluators
#[derive(Clone, Debug)]
pub struct MoveSearch {
    /// Rewards the searching player's own streaks
    offensive: StreakEvaluator,
    /// Looks for opponent runs one short of winning
    defensive: StreakEvaluator,
    /// Opponent scoring at true winning length, used on drawn terminals
    final_defensive: StreakEvaluator,
    roster: Roster,
    search_depth: u32,
    radius: usize,
    pruning: bool,
}

impl MoveSearch {
    /// Build a search from `config`. A zero `search_depth` (rejected by
    /// [`AiConfig::validate`]) returns every non-empty board unchanged.
    pub fn new(config: &AiConfig, winning_value: usize, roster: Roster) -> Self {
        Self {
            offensive: StreakEvaluator::new(config.offensive_base, winning_value),
            defensive: StreakEvaluator::new(
                config.defensive_base,
                winning_value.saturating_sub(1).max(1),
            ),
            final_defensive: StreakEvaluator::new(config.defensive_base, winning_value),
            roster,
            search_depth: config.search_depth,
            radius: config.radius,
            pruning: config.pruning,
        }
    }

    pub fn roster(&self) -> &Roster {
        &self.roster
    }

    pub fn search_depth(&self) -> u32 {
        self.search_depth
    }

    /// The other player on the roster
    pub fn opponent(&self, player: PlayerId) -> PlayerId {
        self.roster.opponent(player)
    }

    /// Board after `player`'s chosen move
    pub fn get_move(&self, board: &Board, player: PlayerId) -> Board {
        self.search(board, player).board
    }

    /// Pick a move for `player`, reporting the root score and search effort
    pub fn search(&self, board: &Board, player: PlayerId) -> SearchOutcome {
        if board.is_empty() {
            return self.opening_move(board, player);
        }

        let mut nodes = 0;
        let (chosen, score) = self.alpha_beta(
            board,
            self.search_depth,
            LOSS_SCORE,
            WIN_SCORE,
            player,
            player,
            0,
            &mut nodes,
        );

        let next = match chosen {
            Some((row, col)) => match board.with_move(player, row, col) {
                Ok(next) => next,
                Err(e) => {
                    tracing::warn!("search chose an unplayable cell: {}", e);
                    board.clone()
                }
            },
            None => board.clone(),
        };

        tracing::debug!(
            "{} chose {:?} (score={}, nodes={}, depth={})",
            player,
            chosen,
            score,
            nodes,
            self.search_depth
        );

        SearchOutcome {
            board: next,
            chosen,
            score,
            nodes,
        }
    }

    /// Fixed opening: take the center, skip the search
    fn opening_move(&self, board: &Board, player: PlayerId) -> SearchOutcome {
        let center = board.size() / 2;
        let mut next = board.clone();
        let chosen = next.set(player, center, center).ok().map(|_| (center, center));

        SearchOutcome {
            board: next,
            chosen,
            score: 0,
            nodes: 0,
        }
    }

    // ========================================================================
    // EVALUATION
    // ========================================================================

    /// Offensive payoff of `player` minus defensive payoff of the opponent.
    /// `is_final` swaps in the full-length defensive evaluator.
    pub fn evaluate(&self, board: &Board, player: PlayerId, is_final: bool) -> i64 {
        let opponent = self.roster.opponent(player);
        let defensive = if is_final {
            &self.final_defensive
        } else {
            &self.defensive
        };

        let offense = self.offensive.board_payoff(board, player);
        if offense.is_certain_win() {
            return WIN_SCORE;
        }
        let defense = defensive.board_payoff(board, opponent);

        match (offense, defense) {
            (_, Payoff::CertainWin) => LOSS_SCORE,
            (Payoff::Value(own), Payoff::Value(theirs)) => own.saturating_sub(theirs),
            (Payoff::CertainWin, _) => WIN_SCORE,
        }
    }

    /// Win sooner, lose later
    fn terminal_score(&self, winner: PlayerId, player: PlayerId, ply: u32) -> i64 {
        if winner == player {
            WIN_SCORE / (i64::from(ply) + 1)
        } else {
            LOSS_SCORE / i64::from(ply.max(1))
        }
    }

    /// Non-terminal leaf. An unstoppable opponent threat counts as a loss
    /// at this ply, so it ranks above an actual loss found earlier.
    fn leaf_score(&self, board: &Board, player: PlayerId, ply: u32) -> i64 {
        match self.evaluate(board, player, false) {
            LOSS_SCORE => LOSS_SCORE / i64::from(ply.max(1)),
            score => score,
        }
    }

    // ========================================================================
    // MOVE GENERATION
    // ========================================================================

    /// Empty cells within `radius` of any occupied cell, in first-seen order.
    /// Falls back to every empty cell when the neighborhood is empty.
    pub fn candidates(&self, board: &Board) -> Vec<(usize, usize)> {
        let last = board.size() - 1;
        let mut seen = FxHashSet::default();
        let mut moves = Vec::new();

        for (row, col) in board.occupied_cells() {
            let rows = row.saturating_sub(self.radius)..=row.saturating_add(self.radius).min(last);
            for r in rows {
                let cols =
                    col.saturating_sub(self.radius)..=col.saturating_add(self.radius).min(last);
                for c in cols {
                    if board.get(r, c).is_none() && seen.insert((r, c)) {
                        moves.push((r, c));
                    }
                }
            }
        }

        if moves.is_empty() {
            moves.extend(board.empty_cells());
        }
        moves
    }

    // ========================================================================
    // ALPHA-BETA
    // ========================================================================

    #[allow(clippy::too_many_arguments)]
    fn alpha_beta(
        &self,
        node: &Board,
        depth: u32,
        mut alpha: i64,
        mut beta: i64,
        player: PlayerId,
        mover: PlayerId,
        ply: u32,
        nodes: &mut u64,
    ) -> (Option<(usize, usize)>, i64) {
        *nodes += 1;

        match node.result() {
            GameResult::Won(winner) => return (None, self.terminal_score(winner, player, ply)),
            GameResult::Draw => return (None, self.evaluate(node, player, true)),
            GameResult::Pending => {}
        }

        if depth == 0 {
            return (None, self.leaf_score(node, player, ply));
        }

        let node_type = if mover == player {
            NodeType::Max
        } else {
            NodeType::Min
        };
        let next_mover = self.roster.opponent(mover);
        let mut best: Option<((usize, usize), i64)> = None;

        for (row, col) in self.candidates(node) {
            let child = match node.with_move(mover, row, col) {
                Ok(child) => child,
                Err(_) => continue,
            };

            let (_, score) = self.alpha_beta(
                &child,
                depth - 1,
                alpha,
                beta,
                player,
                next_mover,
                ply + 1,
                nodes,
            );

            // Strict comparison: ties keep the earliest candidate
            let improves = match best {
                None => true,
                Some((_, best_score)) => match node_type {
                    NodeType::Max => score > best_score,
                    NodeType::Min => score < best_score,
                },
            };
            if improves {
                best = Some(((row, col), score));
            }

            if self.pruning {
                if let Some((_, best_score)) = best {
                    match node_type {
                        NodeType::Max => alpha = alpha.max(best_score),
                        NodeType::Min => beta = beta.min(best_score),
                    }
                }
                if alpha > beta {
                    break;
                }
            }
        }

        match best {
            Some((mv, score)) => (Some(mv), score),
            None => (None, self.leaf_score(node, player, ply)),
        }
    }
}

// ============================================================================
// TESTS
// ============================================================================
