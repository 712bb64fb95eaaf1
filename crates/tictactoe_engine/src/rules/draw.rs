//! Draw detection and move legality.

use crate::{Board, Cell, BOARD_SIZE};

/// Checks if the board is full (no empty cell).
///
/// A full board can also be a won board: check [`check_win`](super::check_win)
/// first.
pub fn check_draw(board: &Board) -> bool {
    board.cells().iter().all(|c| *c != Cell::Empty)
}

/// A move is legal if the index is on the board and the cell is empty.
pub fn is_legal_move(board: &Board, index: usize) -> bool {
    index < BOARD_SIZE && board.is_empty(index)
}

#[cfg(test)]
mod tests {
    use super::super::win::check_win;
    use super::*;
    use crate::Symbol;

    #[test]
    fn test_empty_board_not_full() {
        assert!(!check_draw(&Board::new()));
    }

    #[test]
    fn test_partial_board_not_full() {
        let board: Board = "XO. ... ...".parse().unwrap();
        assert!(!check_draw(&board));
    }

    #[test]
    fn test_full_unwon_board_is_draw() {
        // X O X / O X X / O X O
        let board: Board = "XOX OXX OXO".parse().unwrap();
        assert_eq!(check_win(&board, Symbol::X), None);
        assert_eq!(check_win(&board, Symbol::O), None);
        assert!(check_draw(&board));
    }

    #[test]
    fn test_full_won_board_reports_both() {
        // X completes the main diagonal on the last move.
        let board: Board = "XOX OXO OXX".parse().unwrap();
        assert!(check_win(&board, Symbol::X).is_some());
        assert!(check_draw(&board));
    }

    #[test]
    fn test_legal_moves() {
        let board: Board = "X.. ... ...".parse().unwrap();
        assert!(!is_legal_move(&board, 0));
        assert!(is_legal_move(&board, 1));
        assert!(!is_legal_move(&board, 9));
        assert!(!is_legal_move(&board, usize::MAX));
    }
}
