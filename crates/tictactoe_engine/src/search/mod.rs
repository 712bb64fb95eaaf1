//! Opponent move selection.
//!
//! The search explores the full game tree from the given position with no
//! pruning. Scores are depth-aware: `10 - depth` for an opponent win and
//! `depth - 10` for a human win, so among equal outcomes the opponent wins
//! sooner and loses later. Ties between root moves go to the lowest index.

mod minimax;

pub use minimax::{DRAW_SCORE, WIN_SCORE};

use crate::{Board, EngineError, Symbol};
use minimax::Minimax;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Root evaluation of one candidate move.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_new::new,
)]
pub struct ScoredMove {
    /// Board index of the move.
    pub index: usize,
    /// Minimax score from the mover's point of view.
    pub score: i32,
}

/// Scores every empty cell as a move for `opponent`, in index order.
///
/// The caller's board is copied; it is never mutated.
///
/// # Errors
///
/// `BoardFull` if there is no empty cell.
#[instrument(skip(board), fields(board = %board))]
pub fn score_moves(
    board: &Board,
    opponent: Symbol,
    human: Symbol,
) -> Result<Vec<ScoredMove>, EngineError> {
    let candidates: Vec<usize> = board.empty_indices().collect();
    if candidates.is_empty() {
        return Err(EngineError::BoardFull);
    }

    let mut search = Minimax::new(*board, opponent, human);
    let scored: Vec<ScoredMove> = candidates
        .into_iter()
        .map(|index| ScoredMove::new(index, search.score_root(index)))
        .collect();

    debug!(nodes = search.nodes(), candidates = scored.len(), "Search complete");
    Ok(scored)
}

/// Picks the best of `scored`, `None` if it is empty.
///
/// Keeps the first candidate reaching a strictly greater score, so equal
/// scores resolve to the earliest entry (the lowest index when `scored`
/// comes from [`score_moves`]).
pub fn best_move(scored: &[ScoredMove]) -> Option<ScoredMove> {
    let mut best: Option<ScoredMove> = None;
    for candidate in scored {
        if best.is_none_or(|b| candidate.score > b.score) {
            best = Some(*candidate);
        }
    }
    best
}

/// Returns the index of `opponent`'s optimal move.
///
/// Ties go to the lowest index, see [`best_move`].
///
/// # Errors
///
/// `BoardFull` if there is no empty cell.
#[instrument(skip(board), fields(board = %board))]
pub fn find_best_move(board: &Board, opponent: Symbol, human: Symbol) -> Result<usize, EngineError> {
    let scored = score_moves(board, opponent, human)?;
    let best = best_move(&scored).ok_or(EngineError::BoardFull)?;
    debug!(index = best.index, score = best.score, "Best move selected");
    Ok(best.index)
}
