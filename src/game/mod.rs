//! The game the solver plays against
//!
//! A `Game` is whatever renders the puzzle and colours the letters: a browser
//! page, a person relaying the colours, or a local simulation. The solver only
//! talks to it through this trait.

mod console;
mod settle;
mod simulated;

pub use console::ConsoleGame;
pub use settle::poll_until_stable;
pub use simulated::SimulatedGame;

use crate::core::{ClassifiedLetter, Word};
use std::io;
use thiserror::Error;

/// Failures while interacting with the game
#[derive(Debug, Error)]
pub enum GameError {
    #[error("game I/O failed")]
    Io(#[from] io::Error),

    #[error("input ended before the game reported feedback")]
    InputClosed,

    #[error("board kept changing after {polls} reads")]
    Unsettled { polls: usize },

    #[error("game session has not been initialized")]
    NotStarted,

    #[error("game session is closed")]
    Closed,

    #[error("current row still holds {0} typed letters")]
    RowNotEmpty(usize),

    #[error("puzzle is over, no more guesses accepted")]
    PuzzleOver,
}

/// Operations the solver needs from the game
pub trait Game {
    /// Open the puzzle and dismiss any onboarding; called once per session
    ///
    /// # Errors
    /// Returns `GameError` if the puzzle cannot be reached.
    fn initialize_session(&mut self) -> Result<(), GameError>;

    /// Type the guess one letter at a time, then confirm it
    ///
    /// # Errors
    /// Returns `GameError` if the input cannot be delivered.
    fn submit_guess(&mut self, word: &Word) -> Result<(), GameError>;

    /// Every classified letter on the board, oldest row first
    ///
    /// Blocks until the board is stable after the last submission.
    ///
    /// # Errors
    /// Returns `GameError` if the board cannot be read or never settles.
    fn read_feedback(&mut self) -> Result<Vec<ClassifiedLetter>, GameError>;

    /// Whether the game refused the last submission as an unknown word
    ///
    /// # Errors
    /// Returns `GameError` if the game state cannot be read.
    fn was_guess_rejected(&mut self) -> Result<bool, GameError>;

    /// Erase the letters of a rejected guess
    ///
    /// # Errors
    /// Returns `GameError` if the input cannot be delivered.
    fn clear_current_row(&mut self) -> Result<(), GameError>;

    /// Release the game; the session calls this on every exit path
    ///
    /// # Errors
    /// Returns `GameError` if teardown fails.
    fn close(&mut self) -> Result<(), GameError>;
}
