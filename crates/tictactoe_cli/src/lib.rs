//! Terminal front end for the tic-tac-toe engine.
//!
//! The binary wires these pieces together: [`Cli`] parses arguments,
//! [`PlayConfig`] loads settings, [`TurnController`] runs interactive games
//! and [`analyze()`] scores a single position.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod analyze;
mod cli;
mod config;
mod controller;

// Crate-level exports
pub use analyze::{analyze, Analysis};
pub use cli::{Cli, Command, SymbolArg};
pub use config::{ConfigError, PlayConfig, DEFAULT_CONFIG_PATH};
pub use controller::{parse_input, render_board, Input, Tally, TurnController};
