//! Game rules for tic-tac-toe.
//!
//! Pure functions over a [`Board`](crate::Board). Rules are separated from
//! board storage so the search and the session share one definition of
//! win and draw.

pub mod draw;
pub mod win;

pub use draw::{check_draw, is_legal_move};
pub use win::{check_win, winner, WinLine, WIN_LINES};
