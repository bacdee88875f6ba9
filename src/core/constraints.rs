//! Constraints derived from one round of feedback
//!
//! Absence is tracked per position, not per letter. When a guess repeats a
//! letter and one copy comes back correct or present while the other comes
//! back absent, only the absent position is ruled out for that letter.

use super::feedback::{Classification, ClassifiedLetter};
use super::word::{WORD_LENGTH, Word};

/// Correct, present and absent evidence from one round
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConstraintSet {
    correct: [Option<u8>; WORD_LENGTH],
    /// (letter, position): the letter is in the word, but not here
    present: Vec<(u8, usize)>,
    /// (letter, position): the letter is not at this position
    absent: Vec<(u8, usize)>,
}

impl ConstraintSet {
    /// Build the constraint set for one round's classified letters
    #[must_use]
    pub fn from_feedback(letters: &[ClassifiedLetter]) -> Self {
        let mut constraints = Self::default();

        for letter in letters {
            match letter.classification {
                Classification::Correct => {
                    constraints.correct[letter.position] = Some(letter.letter);
                }
                Classification::Present => {
                    constraints.present.push((letter.letter, letter.position));
                }
                Classification::Absent => {
                    constraints.absent.push((letter.letter, letter.position));
                }
            }
        }

        constraints
    }

    /// Check whether `word` is consistent with every constraint
    #[must_use]
    pub fn matches(&self, word: &Word) -> bool {
        let correct = self
            .correct
            .iter()
            .enumerate()
            .all(|(i, expected)| expected.is_none_or(|ch| word.char_at(i) == ch));

        let absent = self
            .absent
            .iter()
            .all(|&(ch, position)| word.char_at(position) != ch);

        let present = self
            .present
            .iter()
            .all(|&(ch, position)| word.char_at(position) != ch && word.has_letter(ch));

        correct && absent && present
    }

    /// Letters pinned to a position, by position
    #[must_use]
    pub const fn correct(&self) -> &[Option<u8>; WORD_LENGTH] {
        &self.correct
    }

    #[must_use]
    pub fn present(&self) -> &[(u8, usize)] {
        &self.present
    }

    #[must_use]
    pub fn absent(&self) -> &[(u8, usize)] {
        &self.absent
    }

    /// No evidence at all
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.correct.iter().all(Option::is_none) && self.present.is_empty() && self.absent.is_empty()
    }
}
