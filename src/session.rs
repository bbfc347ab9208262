//! Interactive game session: reads moves, drives the board, reports back.

use crate::view::TextView;
use derive_more::{Display, Error, From};
use solitaire_engine::{Board, Jump};
use std::collections::VecDeque;
use std::io::{BufRead, Write};
use tracing::{debug, info, instrument, warn};

const WELCOME: &str = "\nWelcome to Marble Solitaire!\n\
In order to move, enter 4 numbers with a space or return between them that represent the following:\n\
1. fromRow  2. fromColumn  3. toRow  4. toColumn.\n\
The numbers should begin at 1 to represent the first row/column, 2 to represent the second row/column, and so on.\n\
Enter q at any moment to quit the game. Have fun!\n";

/// How a session ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// The player entered `q`.
    Quit {
        /// Marbles left when the player quit.
        score: usize,
    },
    /// No legal jump remained.
    GameOver {
        /// Marbles left at the end.
        score: usize,
    },
}

impl Outcome {
    /// Marbles left on the board when the session ended.
    pub fn score(&self) -> usize {
        match *self {
            Outcome::Quit { score } | Outcome::GameOver { score } => score,
        }
    }
}

/// Error that ends a session before quit or game over.
#[derive(Debug, Display, Error, From)]
pub enum SessionError {
    /// Input ran out while the game was still running.
    #[display("No more inputs!")]
    InputExhausted,

    /// Reading input or writing output failed.
    #[display("Transmission failed: {_0}")]
    #[from]
    Io(#[error(source)] std::io::Error),
}

/// One game of solitaire played over a text input and output.
///
/// Input is a stream of whitespace-separated tokens. Four positive
/// integers form a jump, one-based; `q` or `Q` quits.
pub struct GameSession<R, W> {
    board: Board,
    view: TextView,
    input: R,
    output: W,
    tokens: VecDeque<String>,
    pending: Vec<i32>,
}

impl<R: BufRead, W: Write> GameSession<R, W> {
    /// Creates a session owning `board`.
    pub fn new(board: Board, input: R, output: W) -> Self {
        Self {
            board,
            view: TextView::new(),
            input,
            output,
            tokens: VecDeque::new(),
            pending: Vec::with_capacity(4),
        }
    }

    /// Returns the board in its current state.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Consumes the session, returning the output sink.
    pub fn into_output(self) -> W {
        self.output
    }

    /// Plays until the player quits or no jump remains.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::InputExhausted`] if input ends first, and
    /// [`SessionError::Io`] if reading or writing fails.
    #[instrument(skip(self), fields(shape = %self.board.shape()))]
    pub fn play(&mut self) -> Result<Outcome, SessionError> {
        info!("Session started");
        self.write(WELCOME)?;
        self.show_board_and_score()?;

        while !self.board.is_game_over() {
            let token = self.next_token()?.ok_or(SessionError::InputExhausted)?;

            if token.eq_ignore_ascii_case("q") {
                return self.quit();
            }
            self.handle_token(&token)?;
        }

        self.game_over()
    }

    /// Returns the next whitespace-separated token, reading lines as needed.
    ///
    /// Malformed UTF-8 is replaced rather than rejected, so it surfaces as
    /// an ordinary invalid token.
    fn next_token(&mut self) -> Result<Option<String>, SessionError> {
        while self.tokens.is_empty() {
            let mut line = Vec::new();
            if self.input.read_until(b'\n', &mut line)? == 0 {
                return Ok(None);
            }
            self.tokens.extend(
                String::from_utf8_lossy(&line)
                    .split_whitespace()
                    .map(str::to_string),
            );
        }
        Ok(self.tokens.pop_front())
    }

    fn handle_token(&mut self, token: &str) -> Result<(), SessionError> {
        match token.parse::<i32>() {
            Ok(n) if n > 0 => {
                self.pending.push(n - 1);
                if self.pending.len() == 4 {
                    self.attempt_jump()?;
                }
                Ok(())
            }
            _ => {
                debug!(token, "Rejected input token");
                self.write(&format!(
                    "Invalid Input: {}. Please re-enter that value again.\n",
                    token
                ))
            }
        }
    }

    fn attempt_jump(&mut self) -> Result<(), SessionError> {
        let jump = Jump::new(
            self.pending[0],
            self.pending[1],
            self.pending[2],
            self.pending[3],
        );
        self.pending.clear();

        match self.board.apply(jump) {
            Ok(()) => {
                info!(%jump, score = self.board.remaining_marble_count(), "Jump played");
                if !self.board.is_game_over() {
                    self.show_board_and_score()?;
                }
                Ok(())
            }
            Err(e) => {
                warn!(%jump, error = %e, "Jump rejected");
                self.write("Invalid move. Play again.\n")
            }
        }
    }

    fn quit(&mut self) -> Result<Outcome, SessionError> {
        let score = self.board.remaining_marble_count();
        info!(score, "Player quit");
        self.write("Game quit!\n")?;
        self.write("State of game when quit:\n")?;
        self.show_board_and_score()?;
        Ok(Outcome::Quit { score })
    }

    fn game_over(&mut self) -> Result<Outcome, SessionError> {
        let score = self.board.remaining_marble_count();
        info!(score, "Game over");
        self.write("Game over!\n")?;
        self.show_board_and_score()?;
        Ok(Outcome::GameOver { score })
    }

    fn show_board_and_score(&mut self) -> Result<(), SessionError> {
        self.view.render_board(&mut self.output, &self.board)?;
        let score = self.board.remaining_marble_count();
        self.write(&format!("\nScore: {}\n", score))
    }

    fn write(&mut self, message: &str) -> Result<(), SessionError> {
        self.view.render_message(&mut self.output, message)?;
        Ok(())
    }
}
