//! Termo Solver
//!
//! Plays a daily five-letter word puzzle: guess, read the coloured feedback,
//! drop every candidate the feedback rules out, and guess again.
//!
//! # Quick Start
//!
//! ```rust
//! use termo_solver::config::SessionConfig;
//! use termo_solver::core::Word;
//! use termo_solver::game::SimulatedGame;
//! use termo_solver::solver::{Outcome, RandomStrategy, Session};
//! use termo_solver::wordlists::WordCatalog;
//!
//! let catalog = WordCatalog::from_tokens(["amigo", "belos", "termo"]);
//! let secret = Word::new("termo").unwrap();
//!
//! let mut game = SimulatedGame::new(secret, catalog.words().iter().cloned());
//! let mut strategy = RandomStrategy::seeded(7);
//! let mut session = Session::new(&catalog, SessionConfig::default());
//!
//! let outcome = session.run(&mut game, &mut strategy).unwrap();
//! assert!(matches!(outcome, Outcome::Solved { .. }));
//! ```

// Core domain types
pub mod core;

// Candidate elimination and the session loop
pub mod solver;

// Word lists
pub mod wordlists;

// The game being played
pub mod game;

pub mod config;
pub mod error;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;
