//! Line geometry on a square board: rows, columns and both diagonal families
//!
//! Win detection and the streak evaluator walk the same set of lines, so the
//! enumeration lives here once.

use serde::{Deserialize, Serialize};

/// Orientation of a line
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    Horizontal,
    Vertical,
    /// Anti-diagonal: row grows while the column shrinks
    Rising,
    /// Main-diagonal family: row and column grow together
    Falling,
}

/// A maximal run of cells across the board
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Line {
    pub direction: Direction,
    pub start: (usize, usize),
    pub len: usize,
}

impl Line {
    /// Coordinates of the `j`-th cell along the line
    #[inline]
    pub fn cell(&self, j: usize) -> (usize, usize) {
        let (row, col) = self.start;
        match self.direction {
            Direction::Horizontal => (row, col + j),
            Direction::Vertical => (row + j, col),
            Direction::Rising => (row + j, col - j),
            Direction::Falling => (row + j, col + j),
        }
    }

    pub fn cells(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        (0..self.len).map(move |j| self.cell(j))
    }
}

/// Every row, top to bottom
pub fn rows(size: usize) -> impl Iterator<Item = Line> {
    (0..size).map(move |row| Line {
        direction: Direction::Horizontal,
        start: (row, 0),
        len: size,
    })
}

/// Every column, left to right
pub fn columns(size: usize) -> impl Iterator<Item = Line> {
    (0..size).map(move |col| Line {
        direction: Direction::Vertical,
        start: (0, col),
        len: size,
    })
}

/// Every maximal diagonal long enough to hold `winning_value` cells.
///
/// Offsets `i` run over `[K-1, 2*size-1-K]`; each offset yields one rising
/// diagonal (cells with `row + col == i`) followed by one falling diagonal
/// (cells with `col - row == i - (size-1)`), both of length
/// `size - |i - (size-1)|`.
pub fn diagonals(size: usize, winning_value: usize) -> impl Iterator<Item = Line> {
    let offsets = if winning_value == 0 || winning_value > size {
        1..=0
    } else {
        (winning_value - 1)..=(2 * size - 1 - winning_value)
    };

    offsets.flat_map(move |i| {
        let len = size - i.abs_diff(size - 1);
        let rising = Line {
            direction: Direction::Rising,
            start: (i.saturating_sub(size - 1), i.min(size - 1)),
            len,
        };
        let falling = Line {
            direction: Direction::Falling,
            start: ((size - 1).saturating_sub(i), i.saturating_sub(size - 1)),
            len,
        };
        [rising, falling]
    })
}

/// Rows, then columns, then diagonals
pub fn all_lines(size: usize, winning_value: usize) -> impl Iterator<Item = Line> {
    rows(size)
        .chain(columns(size))
        .chain(diagonals(size, winning_value))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn count(size: usize, k: usize, direction: Direction) -> usize {
        diagonals(size, k)
            .filter(|l| l.direction == direction)
            .count()
    }

    /// Brute force: walk from every edge start cell and keep lines of length >= k
    fn naive_diagonals(size: usize, k: usize) -> HashSet<Vec<(usize, usize)>> {
        let mut found = HashSet::new();
        for start in 0..size {
            for (r0, c0) in [(0, start), (start, 0)] {
                let falling: Vec<_> = (0..size)
                    .map(|j| (r0 + j, c0 + j))
                    .take_while(|&(r, c)| r < size && c < size)
                    .collect();
                if falling.len() >= k {
                    found.insert(falling);
                }
            }
            for (r0, c0) in [(0, start), (start, size - 1)] {
                let rising: Vec<_> = (0..size)
                    .take_while(|&j| r0 + j < size && j <= c0)
                    .map(|j| (r0 + j, c0 - j))
                    .collect();
                if rising.len() >= k {
                    found.insert(rising);
                }
            }
        }
        found
    }

    #[test]
    fn test_diagonal_count_per_direction() {
        for size in 1..=9 {
            for k in 1..=size {
                let expected = 2 * (size - k) + 1;
                assert_eq!(count(size, k, Direction::Rising), expected, "N={} K={}", size, k);
                assert_eq!(count(size, k, Direction::Falling), expected, "N={} K={}", size, k);
            }
        }
    }

    #[test]
    fn test_diagonals_match_brute_force() {
        for size in 1..=8 {
            for k in 1..=size {
                let enumerated: HashSet<Vec<_>> = diagonals(size, k)
                    .map(|l| l.cells().collect())
                    .collect();
                assert_eq!(enumerated, naive_diagonals(size, k), "N={} K={}", size, k);
            }
        }
    }

    #[test]
    fn test_lines_stay_in_bounds() {
        for size in 1..=7 {
            for k in 1..=size {
                for line in all_lines(size, k) {
                    assert!(line.len >= k);
                    for (r, c) in line.cells() {
                        assert!(r < size && c < size, "({}, {}) outside N={}", r, c, size);
                    }
                }
            }
        }
    }

    #[test]
    fn test_off_center_diagonal_start() {
        // N=5, K=4: offset i=4 is the main anti-diagonal, i=5 starts one row down
        let lines: Vec<_> = diagonals(5, 4).collect();
        assert_eq!(lines.len(), 6);
        let shifted = lines
            .iter()
            .find(|l| l.direction == Direction::Rising && l.start == (1, 4))
            .unwrap();
        assert_eq!(shifted.len, 4);
        assert_eq!(shifted.cell(3), (4, 1));
    }

    #[test]
    fn test_invalid_winning_value_yields_no_diagonals() {
        assert_eq!(diagonals(3, 0).count(), 0);
        assert_eq!(diagonals(3, 4).count(), 0);
    }
}
