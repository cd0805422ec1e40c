//! Line-strength evaluation
//!
//! A [`StreakEvaluator`] scores a board for one player by finding, on every
//! row, column and diagonal, the strongest window of `winning_value` cells the
//! player could still complete, then recursing into what is left of the line
//! on either side of the claimed span.

use serde::{Deserialize, Serialize};

use crate::board::Board;
use crate::lines;
use crate::player::PlayerId;

/// Score of a line or a whole board for one player
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Payoff {
    Value(i64),
    /// A window of `winning_value` cells is already fully owned
    CertainWin,
}

impl Payoff {
    pub const ZERO: Payoff = Payoff::Value(0);

    pub fn is_certain_win(self) -> bool {
        matches!(self, Payoff::CertainWin)
    }

    /// Sum two payoffs; a certain win absorbs everything
    pub fn combine(self, other: Payoff) -> Payoff {
        match (self, other) {
            (Payoff::Value(a), Payoff::Value(b)) => Payoff::Value(a.saturating_add(b)),
            _ => Payoff::CertainWin,
        }
    }
}

/// Direction in which candidate windows are visited; decides ties
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Scan {
    FromLeft,
    FromRight,
}

/// Exponentially weighted streak scorer
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct StreakEvaluator {
    base_value: i64,
    winning_value: usize,
}

impl StreakEvaluator {
    pub fn new(base_value: u32, winning_value: usize) -> Self {
        Self {
            base_value: i64::from(base_value),
            winning_value,
        }
    }

    pub fn base_value(&self) -> i64 {
        self.base_value
    }

    pub fn winning_value(&self) -> usize {
        self.winning_value
    }

    /// `base^(streak-1)`: one mark is worth 1 whatever the base
    pub fn points(&self, streak: usize) -> i64 {
        debug_assert!(streak > 0);
        let exponent = u32::try_from(streak.saturating_sub(1)).unwrap_or(u32::MAX);
        self.base_value.saturating_pow(exponent)
    }

    /// Best achievable streak value along a single line
    pub fn best_streak(&self, player: PlayerId, line: &[Option<PlayerId>]) -> Payoff {
        self.scan(player, line, Scan::FromLeft)
    }

    fn scan(&self, player: PlayerId, line: &[Option<PlayerId>], scan: Scan) -> Payoff {
        let k = self.winning_value;
        if k == 0 || line.len() < k {
            return Payoff::ZERO;
        }

        let window_count = line.len() - k + 1;
        let mut best_streak = 0;
        let mut best_start = 0;

        for step in 0..window_count {
            let start = match scan {
                Scan::FromLeft => step,
                Scan::FromRight => window_count - 1 - step,
            };
            let window = &line[start..start + k];

            // Opponent marks invalidate the window; empty cells are neutral
            if window.iter().any(|cell| matches!(cell, Some(owner) if *owner != player)) {
                continue;
            }

            let streak = window.iter().filter(|cell| **cell == Some(player)).count();
            if streak == k {
                return Payoff::CertainWin;
            }
            if streak > best_streak {
                best_streak = streak;
                best_start = start;
            }
        }

        if best_streak == 0 {
            return Payoff::ZERO;
        }

        // Claimed span: first to last own mark inside the best window
        let window = &line[best_start..best_start + k];
        let first = best_start + window.iter().position(|c| *c == Some(player)).unwrap_or(0);
        let last = best_start
            + window
                .iter()
                .rposition(|c| *c == Some(player))
                .unwrap_or(k - 1);

        let left = self.scan(player, &line[..first], Scan::FromRight);
        if left.is_certain_win() {
            return left;
        }
        let right = self.scan(player, &line[last + 1..], Scan::FromLeft);
        if right.is_certain_win() {
            return right;
        }

        Payoff::Value(self.points(best_streak))
            .combine(left)
            .combine(right)
    }

    /// Sum of [`best_streak`](Self::best_streak) over every row, column and diagonal
    pub fn board_payoff(&self, board: &Board, player: PlayerId) -> Payoff {
        let mut total = Payoff::ZERO;
        let mut values = Vec::with_capacity(board.size());

        for line in lines::all_lines(board.size(), self.winning_value) {
            values.clear();
            values.extend(line.cells().map(|(r, c)| board.get(r, c)));

            let payoff = self.best_streak(player, &values);
            if payoff.is_certain_win() {
                return payoff;
            }
            total = total.combine(payoff);
        }

        total
    }
}
