//! Local simulation of the game
//!
//! Holds the secret word and the game's own dictionary, scores guesses with
//! the game's rules and reproduces the behaviours the solver has to cope
//! with: unknown words are refused and stay typed until erased, and a scored
//! row is revealed a few letters at a time.

use super::{Game, GameError, poll_until_stable};
use crate::config::{DEFAULT_MAX_ATTEMPTS, SettlePolicy};
use crate::core::{ClassifiedLetter, RoundFeedback, WORD_LENGTH, Word};
use rustc_hash::FxHashSet;

/// A puzzle played entirely in memory
#[derive(Debug, Clone)]
pub struct SimulatedGame {
    secret: Word,
    dictionary: FxHashSet<Word>,
    settle: SettlePolicy,
    max_rows: usize,
    reveal_lag: usize,
    rows: Vec<RoundFeedback>,
    hidden: usize,
    typed: Vec<u8>,
    rejected: bool,
    started: bool,
    closed: bool,
    clears: usize,
}

impl SimulatedGame {
    /// Create a game for `secret` that accepts the words in `dictionary`
    ///
    /// The secret does not need to be in the dictionary.
    pub fn new(secret: Word, dictionary: impl IntoIterator<Item = Word>) -> Self {
        Self {
            secret,
            dictionary: dictionary.into_iter().collect(),
            settle: SettlePolicy::immediate(),
            max_rows: DEFAULT_MAX_ATTEMPTS,
            reveal_lag: 0,
            rows: Vec::new(),
            hidden: 0,
            typed: Vec::new(),
            rejected: false,
            started: false,
            closed: false,
            clears: 0,
        }
    }

    /// Reveal each scored row over `lag` extra board reads
    #[must_use]
    pub fn with_reveal_lag(mut self, lag: usize) -> Self {
        self.reveal_lag = lag.min(WORD_LENGTH);
        self
    }

    #[must_use]
    pub fn with_settle(mut self, settle: SettlePolicy) -> Self {
        self.settle = settle;
        self
    }

    #[must_use]
    pub fn with_max_rows(mut self, max_rows: usize) -> Self {
        self.max_rows = max_rows;
        self
    }

    #[must_use]
    pub const fn secret(&self) -> &Word {
        &self.secret
    }

    /// Rows the game has scored so far
    #[must_use]
    pub fn rows(&self) -> &[RoundFeedback] {
        &self.rows
    }

    /// How many times a rejected row was erased
    #[must_use]
    pub const fn clears(&self) -> usize {
        self.clears
    }

    #[must_use]
    pub const fn is_closed(&self) -> bool {
        self.closed
    }

    fn ensure_open(&self) -> Result<(), GameError> {
        if self.closed {
            Err(GameError::Closed)
        } else if !self.started {
            Err(GameError::NotStarted)
        } else {
            Ok(())
        }
    }

    fn is_over(&self) -> bool {
        self.rows.len() >= self.max_rows || self.rows.last().is_some_and(RoundFeedback::is_solved)
    }

    /// What a single look at the board shows right now
    fn snapshot(&mut self) -> Vec<ClassifiedLetter> {
        let mut board: Vec<ClassifiedLetter> =
            self.rows.iter().flat_map(|row| *row.letters()).collect();
        board.truncate(board.len() - self.hidden);
        self.hidden = self.hidden.saturating_sub(1);
        board
    }
}

impl Game for SimulatedGame {
    fn initialize_session(&mut self) -> Result<(), GameError> {
        if self.closed {
            return Err(GameError::Closed);
        }
        self.started = true;
        Ok(())
    }

    fn submit_guess(&mut self, word: &Word) -> Result<(), GameError> {
        self.ensure_open()?;

        if !self.typed.is_empty() {
            return Err(GameError::RowNotEmpty(self.typed.len()));
        }
        if self.is_over() {
            return Err(GameError::PuzzleOver);
        }

        self.typed.extend_from_slice(word.chars());

        // Confirm
        if self.dictionary.contains(word) {
            self.rows.push(RoundFeedback::score(word, &self.secret));
            self.typed.clear();
            self.hidden = self.reveal_lag;
            self.rejected = false;
        } else {
            self.rejected = true;
        }

        Ok(())
    }

    fn read_feedback(&mut self) -> Result<Vec<ClassifiedLetter>, GameError> {
        self.ensure_open()?;
        let settle = self.settle;
        poll_until_stable(settle, || Ok(self.snapshot()))
    }

    fn was_guess_rejected(&mut self) -> Result<bool, GameError> {
        self.ensure_open()?;
        Ok(self.rejected)
    }

    fn clear_current_row(&mut self) -> Result<(), GameError> {
        self.ensure_open()?;
        for _ in 0..WORD_LENGTH {
            self.typed.pop();
        }
        self.rejected = false;
        self.clears += 1;
        Ok(())
    }

    fn close(&mut self) -> Result<(), GameError> {
        self.closed = true;
        Ok(())
    }
}
