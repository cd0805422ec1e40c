//! Square board with generalized K-in-a-row result detection

use serde::{Deserialize, Serialize};

use crate::error::BoardError;
use crate::lines::{self, Line};
use crate::player::PlayerId;

/// Largest accepted side length; keeps `size * size` cells allocatable
pub const MAX_BOARD_SIZE: usize = 1024;

/// Size and run-length checks shared by boards and configs
pub(crate) fn check_dimensions(size: usize, winning_value: usize) -> Result<(), BoardError> {
    if !(1..=MAX_BOARD_SIZE).contains(&size) {
        return Err(BoardError::InvalidSize(size));
    }
    if winning_value < 1 || winning_value > size {
        return Err(BoardError::InvalidWinningValue { winning_value, size });
    }
    Ok(())
}

/// Outcome of scanning a board
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameResult {
    /// No winning line and at least one empty cell
    Pending,
    /// Some line holds `winning_value` consecutive marks of this player
    Won(PlayerId),
    /// Board is full without a winning line
    Draw,
}

impl GameResult {
    pub fn is_resolved(&self) -> bool {
        !matches!(self, GameResult::Pending)
    }

    pub fn winner(&self) -> Option<PlayerId> {
        match self {
            GameResult::Won(player) => Some(*player),
            _ => None,
        }
    }
}

/// N×N grid of optional owners (clone to branch)
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Board {
    size: usize,
    winning_value: usize,
    /// Row-major cells
    cells: Vec<Option<PlayerId>>,
}

impl Board {
    /// Create an empty board; `winning_value` is the run length that wins
    pub fn new(size: usize, winning_value: usize) -> Result<Self, BoardError> {
        check_dimensions(size, winning_value)?;
        Ok(Self {
            size,
            winning_value,
            cells: vec![None; size * size],
        })
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn winning_value(&self) -> usize {
        self.winning_value
    }

    #[inline]
    fn index(&self, row: usize, col: usize) -> usize {
        row * self.size + col
    }

    pub fn in_bounds(&self, row: usize, col: usize) -> bool {
        row < self.size && col < self.size
    }

    /// Owner of a cell. Panics when out of bounds.
    #[inline]
    pub fn get(&self, row: usize, col: usize) -> Option<PlayerId> {
        assert!(
            self.in_bounds(row, col),
            "cell ({}, {}) outside {}x{} board",
            row,
            col,
            self.size,
            self.size
        );
        self.cells[self.index(row, col)]
    }

    /// Claim an empty cell for `player`
    pub fn set(&mut self, player: PlayerId, row: usize, col: usize) -> Result<(), BoardError> {
        if !self.in_bounds(row, col) {
            return Err(BoardError::OutOfBounds {
                row,
                col,
                size: self.size,
            });
        }
        let idx = self.index(row, col);
        if self.cells[idx].is_some() {
            return Err(BoardError::Occupied { row, col });
        }
        self.cells[idx] = Some(player);
        Ok(())
    }

    /// Copy of this board with one more mark
    pub fn with_move(&self, player: PlayerId, row: usize, col: usize) -> Result<Self, BoardError> {
        let mut next = self.clone();
        next.set(player, row, col)?;
        Ok(next)
    }

    pub fn is_empty(&self) -> bool {
        self.cells.iter().all(Option::is_none)
    }

    pub fn is_full(&self) -> bool {
        self.cells.iter().all(Option::is_some)
    }

    pub fn occupied_count(&self) -> usize {
        self.cells.iter().filter(|c| c.is_some()).count()
    }

    /// Row slices, top to bottom
    pub fn rows(&self) -> impl Iterator<Item = &[Option<PlayerId>]> {
        self.cells.chunks(self.size)
    }

    /// Coordinates of every empty cell in row-major order
    pub fn empty_cells(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, cell)| cell.is_none())
            .map(move |(idx, _)| (idx / self.size, idx % self.size))
    }

    /// Coordinates of every occupied cell in row-major order
    pub fn occupied_cells(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, cell)| cell.is_some())
            .map(move |(idx, _)| (idx / self.size, idx % self.size))
    }

    /// Materialize the contents of a line
    pub fn line_values(&self, line: &Line) -> Vec<Option<PlayerId>> {
        line.cells().map(|(r, c)| self.get(r, c)).collect()
    }

    /// Scan rows, columns, then diagonals; the first completed run wins.
    pub fn result(&self) -> GameResult {
        for line in lines::all_lines(self.size, self.winning_value) {
            if let Some(winner) = self.line_winner(&line) {
                return GameResult::Won(winner);
            }
        }

        if self.cells.iter().any(Option::is_none) {
            GameResult::Pending
        } else {
            GameResult::Draw
        }
    }

    fn line_winner(&self, line: &Line) -> Option<PlayerId> {
        let mut current = None;
        let mut streak = 0;

        for (row, col) in line.cells() {
            match self.get(row, col) {
                None => streak = 0,
                Some(owner) if Some(owner) == current => streak += 1,
                Some(owner) => {
                    current = Some(owner);
                    streak = 1;
                }
            }
            if streak == self.winning_value {
                return current;
            }
        }

        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const A: PlayerId = PlayerId(1);
    const B: PlayerId = PlayerId(2);

    /// Build a board from rows of 'A', 'B' and '.'
    fn board_from(rows: &[&str], winning_value: usize) -> Board {
        let mut board = Board::new(rows.len(), winning_value).unwrap();
        for (r, line) in rows.iter().enumerate() {
            for (c, ch) in line.chars().enumerate() {
                match ch {
                    'A' => board.set(A, r, c).unwrap(),
                    'B' => board.set(B, r, c).unwrap(),
                    _ => {}
                }
            }
        }
        board
    }

    #[test]
    fn test_construction_errors() {
        assert_eq!(Board::new(0, 1), Err(BoardError::InvalidSize(0)));
        assert_eq!(
            Board::new(MAX_BOARD_SIZE + 1, 4),
            Err(BoardError::InvalidSize(MAX_BOARD_SIZE + 1))
        );
        assert_eq!(
            Board::new(5_000_000_000, 4),
            Err(BoardError::InvalidSize(5_000_000_000))
        );
        assert_eq!(
            Board::new(3, 4),
            Err(BoardError::InvalidWinningValue { winning_value: 4, size: 3 })
        );
        assert_eq!(
            Board::new(3, 0),
            Err(BoardError::InvalidWinningValue { winning_value: 0, size: 3 })
        );
        assert!(Board::new(1, 1).is_ok());
    }

    #[test]
    fn test_set_errors() {
        let mut board = Board::new(3, 3).unwrap();
        board.set(A, 1, 1).unwrap();

        assert_eq!(board.set(B, 1, 1), Err(BoardError::Occupied { row: 1, col: 1 }));
        assert_eq!(
            board.set(B, 3, 0),
            Err(BoardError::OutOfBounds { row: 3, col: 0, size: 3 })
        );
        assert_eq!(board.get(1, 1), Some(A));
        assert_eq!(board.occupied_count(), 1);
    }

    #[test]
    fn test_with_move_leaves_source_untouched() {
        let board = Board::new(3, 3).unwrap();
        let next = board.with_move(A, 0, 0).unwrap();
        assert!(board.is_empty());
        assert!(!next.is_empty());
        assert_eq!(next.get(0, 0), Some(A));
    }

    #[test]
    fn test_any_k_run_wins() {
        for size in 1..=7 {
            for k in 1..=size {
                for line in lines::all_lines(size, k) {
                    for offset in 0..=(line.len - k) {
                        let mut board = Board::new(size, k).unwrap();
                        for j in offset..offset + k {
                            let (r, c) = line.cell(j);
                            board.set(B, r, c).unwrap();
                        }
                        assert_eq!(
                            board.result(),
                            GameResult::Won(B),
                            "N={} K={} {:?} offset {}",
                            size,
                            k,
                            line,
                            offset
                        );
                    }
                }
            }
        }
    }

    #[test]
    fn test_full_board_without_line_is_draw() {
        let board = board_from(&["ABA", "ABB", "BAA"], 3);
        assert!(board.is_full());
        assert_eq!(board.result(), GameResult::Draw);
        assert!(board.result().is_resolved());
        assert_eq!(board.result().winner(), None);
    }

    #[test]
    fn test_open_board_without_line_is_pending() {
        let board = board_from(&["AB.", "BA.", "..B"], 3);
        assert_eq!(board.result(), GameResult::Pending);
        assert!(Board::new(4, 3).unwrap().result() == GameResult::Pending);
    }

    #[test]
    fn test_gap_breaks_streak() {
        let board = board_from(&["AA.A", "....", "....", "...."], 3);
        assert_eq!(board.result(), GameResult::Pending);
    }

    #[test]
    fn test_owner_change_restarts_streak() {
        let board = board_from(&["ABBB.", ".....", ".....", ".....", "....."], 4);
        assert_eq!(board.result(), GameResult::Pending);

        let board = board_from(&["ABBBB", ".....", ".....", ".....", "....."], 4);
        assert_eq!(board.result(), GameResult::Won(B));
    }

    #[test]
    fn test_completing_top_row() {
        let mut board = board_from(&["AA.", "B..", ".B."], 3);
        assert_eq!(board.result(), GameResult::Pending);

        board.set(A, 0, 2).unwrap();
        assert_eq!(board.result(), GameResult::Won(A));
    }

    #[test]
    fn test_off_center_anti_diagonal() {
        let board = board_from(
            &[
                "A....",
                "....B",
                "...B.",
                "..B..",
                ".B..A",
            ],
            4,
        );
        assert_eq!(board.result(), GameResult::Won(B));
    }

    #[test]
    fn test_off_center_falling_diagonal() {
        let board = board_from(
            &[
                ".A...",
                "..A..",
                "...A.",
                "....A",
                "B....",
            ],
            4,
        );
        assert_eq!(board.result(), GameResult::Won(A));
    }

    #[test]
    fn test_empty_and_occupied_cells() {
        let board = board_from(&["A.", ".B"], 2);
        let empty: Vec<_> = board.empty_cells().collect();
        let occupied: Vec<_> = board.occupied_cells().collect();
        assert_eq!(empty, vec![(0, 1), (1, 0)]);
        assert_eq!(occupied, vec![(0, 0), (1, 1)]);
    }
}
