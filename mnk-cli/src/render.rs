//! Text rendering of boards and results

use std::fmt::Write;

use mnk_core::{Board, GameResult, Roster};

/// Grid with 1-based row and column labels
pub fn render_board(board: &Board, roster: &Roster) -> String {
    let mut out = String::new();
    let size = board.size();

    out.push_str("   ");
    for col in 1..=size {
        let _ = write!(out, " {:>2} ", col);
    }
    out.push('\n');

    for (index, row) in board.rows().enumerate() {
        let _ = write!(out, "{:>2} ", index + 1);
        let cells: Vec<String> = row
            .iter()
            .map(|cell| match cell {
                Some(id) => format!(" {} ", roster.symbol(*id)),
                None => "   ".to_string(),
            })
            .collect();
        out.push_str(&cells.join("|"));
        out.push('\n');

        if index + 1 != size {
            out.push_str("   ");
            out.push_str(&vec!["---"; size].join("+"));
            out.push('\n');
        }
    }

    out
}

/// One-line summary of a result
pub fn describe_result(result: GameResult, roster: &Roster) -> String {
    match result {
        GameResult::Won(id) => format!("{} wins!", roster.symbol(id)),
        GameResult::Draw => "Game ended in a draw".to_string(),
        GameResult::Pending => "Game is still ongoing".to_string(),
    }
}
