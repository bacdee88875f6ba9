//! Errors raised while playing a session

use crate::core::Word;
use crate::game::GameError;
use thiserror::Error;

/// Fatal conditions that abort a session
///
/// Rejected guesses and running out of attempts are ordinary outcomes, not
/// errors; see `RoundOutcome` and `Outcome`.
#[derive(Debug, Error)]
pub enum SolveError {
    /// No word is left to guess; the catalog and the feedback disagree
    #[error("no candidates remaining for round {round}")]
    NoCandidatesRemaining { round: usize },

    /// The board did not end in a complete, ordered row
    #[error("board with {len} classified letters does not end in a complete row")]
    MalformedFeedback { len: usize },

    /// The solved row does not spell the submitted guess
    #[error("guess {guess} was reported as solved but the board shows {observed}")]
    FeedbackMismatch { guess: Word, observed: String },

    #[error("session already finished")]
    SessionFinished,

    #[error("game interaction failed")]
    Game(#[from] GameError),
}
