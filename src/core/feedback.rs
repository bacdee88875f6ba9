//! Per-letter feedback as reported by the game
//!
//! The game colours each letter of an accepted guess:
//! - Correct: right letter, right position (green)
//! - Present: letter is in the word, elsewhere (yellow)
//! - Absent: this occurrence is not in the word (gray)
//!
//! Cells the game has not classified yet are not evidence and never become a
//! `ClassifiedLetter`.

use super::word::{WORD_LENGTH, Word, WordError};
use std::fmt;

/// Classification of one letter of a guess
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Classification {
    Correct,
    Present,
    Absent,
}

impl Classification {
    /// Map a board cell's class name to a classification
    ///
    /// The target game tags cells `right` (or `done` once the puzzle is
    /// solved), `place` and `wrong`. Anything else, including the `letter`
    /// placeholder of an unrevealed cell, yields `None`.
    #[must_use]
    pub fn from_signal(class: &str) -> Option<Self> {
        match class.trim() {
            "right" | "done" => Some(Self::Correct),
            "place" => Some(Self::Present),
            "wrong" => Some(Self::Absent),
            _ => None,
        }
    }

    /// Parse a single pattern symbol
    ///
    /// Accepts:
    /// - 'G'/'g'/🟩 for correct
    /// - 'Y'/'y'/🟨 for present
    /// - '-'/'_'/'X'/'x'/⬜/⬛ for absent
    #[must_use]
    pub const fn from_symbol(symbol: char) -> Option<Self> {
        match symbol {
            'G' | 'g' | '🟩' => Some(Self::Correct),
            'Y' | 'y' | '🟨' => Some(Self::Present),
            '-' | '_' | 'X' | 'x' | '⬜' | '⬛' => Some(Self::Absent),
            _ => None,
        }
    }

    #[must_use]
    pub const fn to_emoji(self) -> char {
        match self {
            Self::Correct => '🟩',
            Self::Present => '🟨',
            Self::Absent => '⬜',
        }
    }
}

/// One observed letter of a submitted guess
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ClassifiedLetter {
    pub letter: u8,
    pub classification: Classification,
    pub position: usize,
}

impl ClassifiedLetter {
    #[must_use]
    pub const fn new(letter: u8, classification: Classification, position: usize) -> Self {
        Self {
            letter,
            classification,
            position,
        }
    }

    /// Build a letter from a raw board cell
    ///
    /// `index` is the cell's index on the whole board; the position inside the
    /// row is derived from it. Returns `None` for empty or unclassified cells
    /// and for text that does not normalize to a single `a`-`z` letter.
    #[must_use]
    pub fn from_cell(text: &str, class: &str, index: usize) -> Option<Self> {
        let classification = Classification::from_signal(class)?;
        let normalized = crate::wordlists::normalize(text);

        match normalized.as_bytes() {
            &[letter] if letter.is_ascii_lowercase() => Some(Self::new(
                letter,
                classification,
                index % WORD_LENGTH,
            )),
            _ => None,
        }
    }
}

/// The five classified letters of one accepted guess
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RoundFeedback {
    letters: [ClassifiedLetter; WORD_LENGTH],
}

impl RoundFeedback {
    /// Take the most recent row from a full board
    ///
    /// The board holds every classified letter so far, so its length must be
    /// a non-zero multiple of five with the last row in position order.
    #[must_use]
    pub fn latest(board: &[ClassifiedLetter]) -> Option<Self> {
        if board.is_empty() || board.len() % WORD_LENGTH != 0 {
            return None;
        }

        let row: [ClassifiedLetter; WORD_LENGTH] =
            board[board.len() - WORD_LENGTH..].try_into().ok()?;

        row.iter()
            .enumerate()
            .all(|(i, letter)| letter.position == i)
            .then_some(Self { letters: row })
    }

    /// Feedback from a pattern string like "GY-GY" or "🟩🟨⬜🟩🟨"
    ///
    /// # Examples
    /// ```
    /// use termo_solver::core::{RoundFeedback, Word};
    ///
    /// let guess = Word::new("amigo").unwrap();
    /// let feedback = RoundFeedback::from_pattern(&guess, "G----").unwrap();
    /// assert!(!feedback.is_solved());
    /// assert!(RoundFeedback::from_pattern(&guess, "GGGGGG").is_none());
    /// ```
    #[must_use]
    pub fn from_pattern(guess: &Word, pattern: &str) -> Option<Self> {
        let symbols: Vec<char> = pattern.trim().chars().collect();
        if symbols.len() != WORD_LENGTH {
            return None;
        }

        let mut classifications = [Classification::Absent; WORD_LENGTH];
        for (slot, &symbol) in classifications.iter_mut().zip(&symbols) {
            *slot = Classification::from_symbol(symbol)?;
        }

        Some(Self::from_classifications(guess, classifications))
    }

    /// Score `guess` against `answer` using the game's rules
    ///
    /// Duplicate letters are handled the way the game does it: exact matches
    /// claim their letter first, then remaining occurrences are marked present
    /// left to right while the answer still has unclaimed copies.
    ///
    /// # Examples
    /// ```
    /// use termo_solver::core::{Classification, RoundFeedback, Word};
    ///
    /// let guess = Word::new("robot").unwrap();
    /// let answer = Word::new("floor").unwrap();
    /// let feedback = RoundFeedback::score(&guess, &answer);
    /// assert_eq!(feedback.to_emoji(), "🟨🟨⬜🟩⬜");
    /// ```
    #[must_use]
    pub fn score(guess: &Word, answer: &Word) -> Self {
        let mut classifications = [Classification::Absent; WORD_LENGTH];
        let mut available = answer.letter_counts();

        // First pass: exact position matches
        for (i, slot) in classifications.iter_mut().enumerate() {
            let letter = guess.char_at(i);
            if letter == answer.char_at(i) {
                *slot = Classification::Correct;
                available[usize::from(letter - b'a')] -= 1;
            }
        }

        // Second pass: wrong position, but the answer still has a copy
        for (i, slot) in classifications.iter_mut().enumerate() {
            if *slot == Classification::Correct {
                continue;
            }
            let count = &mut available[usize::from(guess.char_at(i) - b'a')];
            if *count > 0 {
                *slot = Classification::Present;
                *count -= 1;
            }
        }

        Self::from_classifications(guess, classifications)
    }

    fn from_classifications(
        guess: &Word,
        classifications: [Classification; WORD_LENGTH],
    ) -> Self {
        let letters = std::array::from_fn(|i| {
            ClassifiedLetter::new(guess.char_at(i), classifications[i], i)
        });
        Self { letters }
    }

    #[must_use]
    pub const fn letters(&self) -> &[ClassifiedLetter; WORD_LENGTH] {
        &self.letters
    }

    /// All five letters are in the right place
    #[must_use]
    pub fn is_solved(&self) -> bool {
        self.letters
            .iter()
            .all(|l| l.classification == Classification::Correct)
    }

    /// Re-materialize the guessed word from the classified letters
    ///
    /// # Errors
    /// Returns `WordError` if the letters do not form a valid word, which only
    /// happens when a collaborator reports garbage.
    pub fn word(&self) -> Result<Word, WordError> {
        let text: String = self.letters.iter().map(|l| char::from(l.letter)).collect();
        Word::new(text)
    }

    #[must_use]
    pub fn to_emoji(&self) -> String {
        self.letters
            .iter()
            .map(|l| l.classification.to_emoji())
            .collect()
    }
}

impl fmt::Display for RoundFeedback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_emoji())
    }
}
