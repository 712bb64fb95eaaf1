//! Exhaustive depth-aware minimax.

use crate::rules::{check_draw, check_win};
use crate::{Board, Cell, Symbol, BOARD_SIZE};

/// Score of an immediate opponent win at depth 0.
pub const WIN_SCORE: i32 = 10;

/// Score of a drawn position.
pub const DRAW_SCORE: i32 = 0;

/// Recursive search over a single exclusively owned board.
///
/// Every placement is retracted before the next one, so the board leaves
/// [`Minimax::evaluate`] exactly as it entered.
pub(crate) struct Minimax {
    board: Board,
    opponent: Symbol,
    human: Symbol,
    nodes: u64,
}

impl Minimax {
    pub(crate) fn new(board: Board, opponent: Symbol, human: Symbol) -> Self {
        Self {
            board,
            opponent,
            human,
            nodes: 0,
        }
    }

    #[cfg(test)]
    pub(crate) fn board(&self) -> &Board {
        &self.board
    }

    pub(crate) fn nodes(&self) -> u64 {
        self.nodes
    }

    /// Scores the root move at `index`: the opponent plays there, then the
    /// human replies at depth 0.
    pub(crate) fn score_root(&mut self, index: usize) -> i32 {
        self.board.set(index, Cell::Mark(self.opponent));
        let score = self.evaluate(0, false);
        self.board.set(index, Cell::Empty);
        score
    }

    /// Minimax value of the current board from the opponent's view.
    ///
    /// Terminal checks run in a fixed order: opponent win, human win, full.
    pub(crate) fn evaluate(&mut self, depth: i32, maximizing: bool) -> i32 {
        self.nodes += 1;

        if check_win(&self.board, self.opponent).is_some() {
            return WIN_SCORE - depth;
        }
        if check_win(&self.board, self.human).is_some() {
            return depth - WIN_SCORE;
        }
        if check_draw(&self.board) {
            return DRAW_SCORE;
        }

        let mover = if maximizing { self.opponent } else { self.human };
        let mut best = if maximizing { i32::MIN } else { i32::MAX };

        for index in 0..BOARD_SIZE {
            if !self.board.is_empty(index) {
                continue;
            }
            self.board.set(index, Cell::Mark(mover));
            let score = self.evaluate(depth + 1, !maximizing);
            self.board.set(index, Cell::Empty);

            best = if maximizing {
                best.max(score)
            } else {
                best.min(score)
            };
        }

        best
    }
}
