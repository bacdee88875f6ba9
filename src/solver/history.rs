//! Record of every guess submitted during a session

use crate::core::{RoundFeedback, Word};

/// One submitted guess
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GuessRecord {
    pub word: Word,
    /// `None` when the game refused the word
    pub feedback: Option<RoundFeedback>,
}

impl GuessRecord {
    #[must_use]
    pub const fn is_rejected(&self) -> bool {
        self.feedback.is_none()
    }
}

/// Append-only list of guesses in submission order, rejected ones included
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GuessHistory {
    records: Vec<GuessRecord>,
}

impl GuessHistory {
    pub(crate) fn push_scored(&mut self, word: Word, feedback: RoundFeedback) {
        self.records.push(GuessRecord {
            word,
            feedback: Some(feedback),
        });
    }

    pub(crate) fn push_rejected(&mut self, word: Word) {
        self.records.push(GuessRecord {
            word,
            feedback: None,
        });
    }

    #[must_use]
    pub fn records(&self) -> &[GuessRecord] {
        &self.records
    }

    /// Every submitted word, in order
    pub fn words(&self) -> impl Iterator<Item = &Word> {
        self.records.iter().map(|r| &r.word)
    }

    /// Guesses the game scored, with their feedback
    pub fn scored(&self) -> impl Iterator<Item = (&Word, &RoundFeedback)> {
        self.records
            .iter()
            .filter_map(|r| r.feedback.as_ref().map(|f| (&r.word, f)))
    }

    #[must_use]
    pub fn last(&self) -> Option<&Word> {
        self.records.last().map(|r| &r.word)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    #[must_use]
    pub fn rejected_count(&self) -> usize {
        self.records.iter().filter(|r| r.is_rejected()).count()
    }
}
