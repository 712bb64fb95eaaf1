//! Terminal turn controller.
//!
//! Alternates between reading the human's move and asking the engine for the
//! opponent's reply. All game rules live in the engine; this module owns
//! pacing, prompts and rendering.

use std::io::{BufRead, Write};
use tictactoe_engine::{
    score_moves, Board, Cell, EngineError, GameSession, MoveResult, Position, Symbol, WinLine,
};
use tracing::{debug, info, instrument, warn};

use crate::PlayConfig;

// ─────────────────────────────────────────────────────────────
//  Input
// ─────────────────────────────────────────────────────────────

/// A parsed line of player input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Input {
    /// Place the human's symbol.
    Place(Position),
    /// Start the game over.
    Restart,
    /// Leave the program.
    Quit,
    /// Show the command summary.
    Help,
}

/// Parses one line of input, `None` if it is not recognised.
pub fn parse_input(line: &str) -> Option<Input> {
    match line.trim().to_lowercase().as_str() {
        "r" | "restart" => Some(Input::Restart),
        "q" | "quit" | "exit" => Some(Input::Quit),
        "h" | "help" | "?" => Some(Input::Help),
        other => Position::from_label_or_number(other).map(Input::Place),
    }
}

// ─────────────────────────────────────────────────────────────
//  Rendering
// ─────────────────────────────────────────────────────────────

/// Renders the board with 1-based numbers in empty cells. Cells on
/// `highlight` are bracketed.
pub fn render_board(board: &Board, highlight: Option<WinLine>) -> String {
    let mut out = String::new();
    for row in 0..3 {
        let cells: Vec<String> = (0..3)
            .map(|col| {
                let index = row * 3 + col;
                let mark = match board.get(index) {
                    Some(Cell::Mark(symbol)) => symbol.to_string(),
                    _ => (index + 1).to_string(),
                };
                if highlight.is_some_and(|line| line.contains(index)) {
                    format!("[{}]", mark)
                } else {
                    format!(" {} ", mark)
                }
            })
            .collect();
        out.push_str(&cells.join("|"));
        out.push('\n');
        if row < 2 {
            out.push_str("---+---+---\n");
        }
    }
    out
}

const HELP: &str = "\
Enter a cell number (1-9) or a name such as 'center' or 'top-left'.
  r, restart  start over
  q, quit     leave the game";

// ─────────────────────────────────────────────────────────────
//  Controller
// ─────────────────────────────────────────────────────────────

/// Games won, lost and drawn by the human.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Tally {
    /// Games the human won.
    pub wins: u32,
    /// Games the opponent won.
    pub losses: u32,
    /// Drawn games.
    pub draws: u32,
}

impl std::fmt::Display for Tally {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Wins: {}  Losses: {}  Draws: {}",
            self.wins, self.losses, self.draws
        )
    }
}

enum GameEnd {
    Finished(MoveResult),
    Quit,
}

/// Drives a [`GameSession`] from a line-oriented reader and writer.
pub struct TurnController<R, W> {
    session: GameSession,
    config: PlayConfig,
    input: R,
    output: W,
    tally: Tally,
}

impl<R: BufRead, W: Write> TurnController<R, W> {
    /// Creates a controller for a fresh session with the configured symbol.
    pub fn new(config: PlayConfig, input: R, output: W) -> Self {
        Self {
            session: GameSession::new(*config.symbol()),
            config,
            input,
            output,
            tally: Tally::default(),
        }
    }

    /// Returns the current session.
    pub fn session(&self) -> &GameSession {
        &self.session
    }

    /// Returns the results so far.
    pub fn tally(&self) -> Tally {
        self.tally
    }

    /// Consumes the controller, returning the writer.
    pub fn into_output(self) -> W {
        self.output
    }

    /// Plays games until the human quits, declines a rematch or input ends.
    #[instrument(skip(self), fields(human = %self.session.human()))]
    pub async fn run(&mut self) -> anyhow::Result<Tally> {
        writeln!(
            self.output,
            "You play {}. The computer plays {}. Type 'help' for commands.",
            self.session.human(),
            self.session.opponent()
        )?;

        loop {
            match self.play_game().await? {
                GameEnd::Quit => break,
                GameEnd::Finished(result) => {
                    self.record(result);
                    writeln!(self.output, "{}", self.tally)?;
                    if !self.ask_play_again()? {
                        break;
                    }
                    self.restart().await?;
                }
            }
        }

        writeln!(self.output, "Goodbye.")?;
        info!(tally = %self.tally, "Session ended");
        Ok(self.tally)
    }

    async fn play_game(&mut self) -> anyhow::Result<GameEnd> {
        loop {
            if let Some(result) = self.session.result() {
                self.announce(result)?;
                return Ok(GameEnd::Finished(result));
            }

            if self.session.is_opponent_turn() {
                self.opponent_turn().await?;
                continue;
            }

            write!(self.output, "\n{}", render_board(self.session.board(), None))?;
            if *self.config.show_hints() {
                self.write_hints()?;
            }
            write!(self.output, "Your move ({}): ", self.session.human())?;
            self.output.flush()?;

            let Some(line) = self.read_line()? else {
                debug!("Input closed");
                return Ok(GameEnd::Quit);
            };

            match parse_input(&line) {
                Some(Input::Place(position)) => {
                    match self.session.submit_human_move(position.to_index()) {
                        Ok(_) => {}
                        Err(EngineError::Occupied(index)) => {
                            let open: Vec<String> = Position::valid_moves(self.session.board())
                                .iter()
                                .map(|p| (p.to_index() + 1).to_string())
                                .collect();
                            writeln!(
                                self.output,
                                "Cell {} is already taken. Open cells: {}",
                                index + 1,
                                open.join(", ")
                            )?;
                        }
                        Err(e) => {
                            debug!(error = %e, "Rejected human move");
                            writeln!(self.output, "Illegal move: {}", e)?;
                        }
                    }
                }
                Some(Input::Restart) => self.restart().await?,
                Some(Input::Quit) => return Ok(GameEnd::Quit),
                Some(Input::Help) => writeln!(self.output, "{}", HELP)?,
                None => writeln!(
                    self.output,
                    "Unrecognised input '{}'. Type 'help' for commands.",
                    line
                )?,
            }
        }
    }

    async fn opponent_turn(&mut self) -> anyhow::Result<()> {
        self.think().await;
        self.session.compute_opponent_move()?;
        if let Some(mv) = self.session.last_move() {
            let label = Position::from_index(mv.index).map_or("?", |p| p.label());
            writeln!(self.output, "Computer plays {} ({}).", mv.index + 1, label)?;
        }
        Ok(())
    }

    async fn restart(&mut self) -> anyhow::Result<()> {
        if self.session.opponent() == Symbol::X {
            self.think().await;
        }
        self.session.reset()?;
        writeln!(self.output, "New game.")?;
        if let Some(mv) = self.session.last_move() {
            writeln!(self.output, "Computer plays {}.", mv.index + 1)?;
        }
        Ok(())
    }

    async fn think(&self) {
        let delay = self.config.thinking_delay();
        if !delay.is_zero() {
            tokio::time::sleep(delay).await;
        }
    }

    fn write_hints(&mut self) -> anyhow::Result<()> {
        let board = *self.session.board();
        match score_moves(&board, self.session.human(), self.session.opponent()) {
            Ok(scored) => {
                let hints: Vec<String> = scored
                    .iter()
                    .map(|m| format!("{}:{:+}", m.index + 1, m.score))
                    .collect();
                writeln!(self.output, "Hints: {}", hints.join(" "))?;
            }
            Err(e) => warn!(error = %e, "No hints available"),
        }
        Ok(())
    }

    fn announce(&mut self, result: MoveResult) -> anyhow::Result<()> {
        let highlight = match result {
            MoveResult::Win { line, .. } => Some(line),
            _ => None,
        };
        write!(
            self.output,
            "\n{}",
            render_board(self.session.board(), highlight)
        )?;

        let message = match result.winner() {
            Some(symbol) if symbol == self.session.human() => "You win!",
            Some(_) => "The computer wins.",
            None => "It's a draw.",
        };
        writeln!(self.output, "{}", message)?;
        Ok(())
    }

    fn record(&mut self, result: MoveResult) {
        match result.winner() {
            Some(symbol) if symbol == self.session.human() => self.tally.wins += 1,
            Some(_) => self.tally.losses += 1,
            None => self.tally.draws += 1,
        }
    }

    fn ask_play_again(&mut self) -> anyhow::Result<bool> {
        write!(self.output, "Play again? [y/N]: ")?;
        self.output.flush()?;
        Ok(self
            .read_line()?
            .is_some_and(|answer| matches!(answer.to_lowercase().as_str(), "y" | "yes")))
    }

    fn read_line(&mut self) -> anyhow::Result<Option<String>> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }
}
