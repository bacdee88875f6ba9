//! Word catalog loading
//!
//! Reads a line-oriented word list, normalizes each token and keeps only the
//! tokens that form a valid five-letter word.

use crate::core::Word;
use deunicode::deunicode;
use log::debug;
use rustc_hash::FxHashSet;
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// The catalog could not be produced
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("word list {path} could not be read")]
    Unavailable {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("word list {path} has no valid five-letter words")]
    Empty { path: PathBuf },
}

/// Normalize a raw token: strip diacritics, trim whitespace, lowercase
///
/// Normalizing an already-normalized token returns it unchanged.
///
/// # Examples
/// ```
/// use termo_solver::wordlists::normalize;
///
/// assert_eq!(normalize("  Ações\n"), "acoes");
/// assert_eq!(normalize("acoes"), "acoes");
/// ```
#[must_use]
pub fn normalize(token: &str) -> String {
    deunicode(token).trim().to_lowercase()
}

/// The universe of legal words, loaded once and never mutated
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WordCatalog {
    words: Vec<Word>,
}

impl WordCatalog {
    /// Load a catalog from a file
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::Unavailable` if the file cannot be opened or
    /// read, and `CatalogError::Empty` if no line survives validation.
    ///
    /// # Examples
    /// ```no_run
    /// use termo_solver::wordlists::WordCatalog;
    ///
    /// let catalog = WordCatalog::load("words.txt").unwrap();
    /// println!("Loaded {} words", catalog.len());
    /// ```
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, CatalogError> {
        let path = path.as_ref();
        let unavailable = |source| CatalogError::Unavailable {
            path: path.to_path_buf(),
            source,
        };

        let file = File::open(path).map_err(unavailable)?;
        let catalog = Self::from_reader(BufReader::new(file)).map_err(unavailable)?;

        if catalog.is_empty() {
            return Err(CatalogError::Empty {
                path: path.to_path_buf(),
            });
        }

        debug!("loaded {} words from {}", catalog.len(), path.display());
        Ok(catalog)
    }

    /// Read a catalog from any buffered reader, one token per line
    ///
    /// # Errors
    ///
    /// Returns the underlying I/O error, including invalid UTF-8.
    pub fn from_reader<R: BufRead>(reader: R) -> io::Result<Self> {
        let lines = reader.lines().collect::<io::Result<Vec<_>>>()?;
        Ok(Self::from_tokens(lines))
    }

    /// Build a catalog from raw tokens
    ///
    /// Malformed tokens are dropped silently and duplicates keep their first
    /// position.
    ///
    /// # Examples
    /// ```
    /// use termo_solver::wordlists::WordCatalog;
    ///
    /// let catalog = WordCatalog::from_tokens(["Ámigo", "casas", "sol", "CASAS"]);
    /// let words: Vec<&str> = catalog.words().iter().map(|w| w.text()).collect();
    /// assert_eq!(words, ["amigo", "casas"]);
    /// ```
    pub fn from_tokens<I, S>(tokens: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut seen = FxHashSet::default();
        let words = tokens
            .into_iter()
            .filter_map(|token| Word::new(normalize(token.as_ref())).ok())
            .filter(|word| seen.insert(word.clone()))
            .collect();

        Self { words }
    }

    #[must_use]
    pub fn words(&self) -> &[Word] {
        &self.words
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
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use std::io::Cursor;

    #[test]
    fn normalize_strips_accents_and_case() {
        assert_eq!(normalize("ÁRVORE"), "arvore");
        assert_eq!(normalize("\tpão \r"), "pao");
        assert_eq!(normalize("Ímpar"), "impar");
    }

    #[test]
    fn from_tokens_skips_invalid() {
        let catalog = WordCatalog::from_tokens(["amigo", "toolong", "abc", "belos", "ca-sa", ""]);
        let words: Vec<&str> = catalog.words().iter().map(Word::text).collect();
        assert_eq!(words, ["amigo", "belos"]);
    }

    #[test]
    fn from_tokens_deduplicates_after_normalizing() {
        let catalog = WordCatalog::from_tokens(["Média", "media", "MEDIA", "termo"]);
        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.words()[0].text(), "media");
    }

    #[test]
    fn from_reader_reads_lines() {
        let input = "amigo\ncasas\n\nBelos\nçççç\n";
        let catalog = WordCatalog::from_reader(Cursor::new(input)).unwrap();
        assert_eq!(catalog.len(), 3);
        assert!(catalog.contains(&Word::new("belos").unwrap()));
    }

    #[test]
    fn load_missing_file_is_unavailable() {
        let result = WordCatalog::load("/nonexistent/termo/words.txt");
        assert!(matches!(result, Err(CatalogError::Unavailable { .. })));
    }

    #[test]
    fn load_file_without_valid_words_is_empty() {
        let path = std::env::temp_dir().join(format!("termo-empty-{}.txt", std::process::id()));
        std::fs::write(&path, "sol\nlua\nestrelas\n").unwrap();

        let result = WordCatalog::load(&path);
        std::fs::remove_file(&path).unwrap();

        assert!(matches!(result, Err(CatalogError::Empty { .. })));
    }

    #[test]
    fn load_reads_file() {
        let path = std::env::temp_dir().join(format!("termo-words-{}.txt", std::process::id()));
        std::fs::write(&path, "amigo\nCasas\nbélos\n").unwrap();

        let catalog = WordCatalog::load(&path).unwrap();
        std::fs::remove_file(&path).unwrap();

        let words: Vec<&str> = catalog.words().iter().map(Word::text).collect();
        assert_eq!(words, ["amigo", "casas", "belos"]);
    }

    proptest! {
        #[test]
        fn normalize_is_idempotent(token in "\\PC{0,12}") {
            let once = normalize(&token);
            prop_assert_eq!(normalize(&once), once);
        }

        #[test]
        fn accepted_words_are_five_lowercase_letters(tokens in prop::collection::vec("\\PC{0,8}", 0..40)) {
            let catalog = WordCatalog::from_tokens(&tokens);
            for word in catalog.words() {
                prop_assert_eq!(word.text().len(), 5);
                prop_assert!(word.text().bytes().all(|b| b.is_ascii_lowercase()));
            }
        }
    }
}
