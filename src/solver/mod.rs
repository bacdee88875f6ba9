//! Guess selection and the attempt loop

mod history;
mod pool;
mod session;
pub mod strategy;

pub use history::{GuessHistory, GuessRecord};
pub use pool::{CandidatePool, FilterStats};
pub use session::{Outcome, RoundOutcome, Session, SessionReport, SessionState};
pub use strategy::{RandomStrategy, Strategy};
