//! Win detection logic for tic-tac-toe.

use crate::{Board, Cell, Symbol};
use serde::{Deserialize, Serialize};

/// Three board indices that form a winning line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct WinLine([usize; 3]);

impl WinLine {
    /// The three indices of this line, ascending.
    pub fn indices(&self) -> [usize; 3] {
        self.0
    }

    /// Checks if `index` lies on this line.
    pub fn contains(&self, index: usize) -> bool {
        self.0.contains(&index)
    }
}

/// All winning lines: rows, then columns, then diagonals.
///
/// [`check_win`] returns the first match in this order.
pub const WIN_LINES: [WinLine; 8] = [
    // Rows
    WinLine([0, 1, 2]),
    WinLine([3, 4, 5]),
    WinLine([6, 7, 8]),
    // Columns
    WinLine([0, 3, 6]),
    WinLine([1, 4, 7]),
    WinLine([2, 5, 8]),
    // Diagonals
    WinLine([0, 4, 8]),
    WinLine([2, 4, 6]),
];

/// Returns the first line on which every cell holds `symbol`.
pub fn check_win(board: &Board, symbol: Symbol) -> Option<WinLine> {
    let cells = board.cells();
    WIN_LINES
        .iter()
        .copied()
        .find(|line| line.0.iter().all(|&i| cells[i] == Cell::Mark(symbol)))
}

/// Returns the winning symbol and line, checking X before O.
pub fn winner(board: &Board) -> Option<(Symbol, WinLine)> {
    [Symbol::X, Symbol::O]
        .into_iter()
        .find_map(|symbol| check_win(board, symbol).map(|line| (symbol, line)))
}
