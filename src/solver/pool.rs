//! The shrinking set of words still consistent with the feedback

use crate::core::{ConstraintSet, Word};
use crate::wordlists::WordCatalog;

/// Pool sizes around one filtering pass
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FilterStats {
    pub before: usize,
    pub after: usize,
}

impl FilterStats {
    #[must_use]
    pub const fn removed(self) -> usize {
        self.before - self.after
    }
}

/// Candidate words, in catalog order
///
/// Words only ever leave the pool: filtering and rejected guesses remove
/// them, nothing adds them back.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CandidatePool {
    words: Vec<Word>,
}

impl CandidatePool {
    /// Start from a full copy of the catalog
    #[must_use]
    pub fn new(catalog: &WordCatalog) -> Self {
        Self {
            words: catalog.words().to_vec(),
        }
    }

    #[must_use]
    pub fn words(&self) -> &[Word] {
        &self.words
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Word> {
        self.words.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    #[must_use]
    pub fn contains(&self, word: &Word) -> bool {
        self.words.contains(word)
    }

    /// Keep only the words consistent with `constraints`
    pub fn filter(&mut self, constraints: &ConstraintSet) -> FilterStats {
        let before = self.words.len();
        self.words.retain(|word| constraints.matches(word));

        FilterStats {
            before,
            after: self.words.len(),
        }
    }

    /// The pool a filtering pass would leave, without touching this one
    #[must_use]
    pub fn filtered(&self, constraints: &ConstraintSet) -> Self {
        let mut next = self.clone();
        next.filter(constraints);
        next
    }

    /// Drop a word the game refused; returns whether it was present
    pub fn remove(&mut self, word: &Word) -> bool {
        let before = self.words.len();
        self.words.retain(|w| w != word);
        self.words.len() != before
    }
}

impl<'a> IntoIterator for &'a CandidatePool {
    type Item = &'a Word;
    type IntoIter = std::slice::Iter<'a, Word>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
