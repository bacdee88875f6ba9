//! Word lists
//!
//! The catalog of legal words the solver draws candidates from.

pub mod loader;

pub use loader::{CatalogError, WordCatalog, normalize};

/// Word list read when no path is given on the command line
pub const DEFAULT_WORDLIST: &str = "words.txt";
