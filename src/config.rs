//! Session configuration

use std::time::Duration;

/// Attempts the game allows before the session gives up
pub const DEFAULT_MAX_ATTEMPTS: usize = 6;

/// How long to wait for the game to finish rendering feedback
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SettlePolicy {
    /// Pause between two board reads
    pub poll_interval: Duration,
    /// Reads before giving up on a board that keeps changing
    pub max_polls: usize,
}

impl SettlePolicy {
    #[must_use]
    pub const fn new(poll_interval: Duration, max_polls: usize) -> Self {
        Self {
            poll_interval,
            max_polls,
        }
    }

    /// Poll without sleeping; for collaborators that render synchronously
    #[must_use]
    pub const fn immediate() -> Self {
        Self::new(Duration::ZERO, 50)
    }
}

impl Default for SettlePolicy {
    fn default() -> Self {
        Self::new(Duration::from_millis(100), 50)
    }
}

/// Configuration for one solving session
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionConfig {
    pub max_attempts: usize,
    pub settle: SettlePolicy,
    /// Fixed seed for guess selection; `None` draws from the OS
    pub seed: Option<u64>,
}

impl SessionConfig {
    #[must_use]
    pub fn new() -> Self {
        Self {
            max_attempts: DEFAULT_MAX_ATTEMPTS,
            settle: SettlePolicy::default(),
            seed: None,
        }
    }

    #[must_use]
    pub const fn with_max_attempts(mut self, max_attempts: usize) -> Self {
        self.max_attempts = max_attempts;
        self
    }

    #[must_use]
    pub const fn with_seed(mut self, seed: Option<u64>) -> Self {
        self.seed = seed;
        self
    }

    #[must_use]
    pub const fn with_settle(mut self, settle: SettlePolicy) -> Self {
        self.settle = settle;
        self
    }
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self::new()
    }
}
