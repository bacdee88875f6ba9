//! Core domain types for the guessing game
//!
//! Words, per-letter feedback and the constraints derived from it. Nothing in
//! here touches I/O.

mod constraints;
mod feedback;
mod word;

pub use constraints::ConstraintSet;
pub use feedback::{Classification, ClassifiedLetter, RoundFeedback};
pub use word::{WORD_LENGTH, Word, WordError};
