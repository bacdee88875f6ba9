//! Benchmark command
//!
//! Plays simulated sessions against many secrets in parallel.

use crate::config::{SessionConfig, SettlePolicy};
use crate::core::Word;
use crate::game::SimulatedGame;
use crate::output::formatters::create_progress_bar;
use crate::solver::{Outcome, RandomStrategy, Session};
use crate::wordlists::WordCatalog;
use indicatif::ProgressBar;
use log::debug;
use rayon::prelude::*;
use std::collections::HashMap;
use std::time::{Duration, Instant};

/// What to benchmark
#[derive(Debug, Clone)]
pub struct BenchmarkConfig {
    /// Secrets to play, taken from the start of the catalog
    pub count: usize,
    pub session: SessionConfig,
    pub show_progress: bool,
}

/// How one simulated session ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum RunStatus {
    Solved,
    Exhausted,
    Failed,
}

#[derive(Debug, Clone)]
struct WordRun {
    status: RunStatus,
    attempts: usize,
    rejected: usize,
}

/// Result of a benchmark run
#[derive(Debug)]
pub struct BenchmarkResult {
    pub total_words: usize,
    pub solved: usize,
    pub exhausted: usize,
    /// Sessions that ended in an error, such as an emptied pool
    pub failed: usize,
    /// Attempts needed, for solved sessions only
    pub distribution: HashMap<usize, usize>,
    pub average_attempts: f64,
    pub min_attempts: usize,
    pub max_attempts: usize,
    pub rejected_guesses: usize,
    pub duration: Duration,
    pub words_per_second: f64,
}

impl BenchmarkResult {
    #[must_use]
    pub fn success_rate(&self) -> f64 {
        if self.total_words == 0 {
            0.0
        } else {
            self.solved as f64 / self.total_words as f64
        }
    }
}

/// Seed for the session playing the `index`-th secret
const fn session_seed(seed: Option<u64>, index: usize) -> Option<u64> {
    match seed {
        Some(seed) => Some(seed.wrapping_add(index as u64)),
        None => None,
    }
}

fn play_one(catalog: &WordCatalog, secret: &Word, session: SessionConfig) -> WordRun {
    let mut game = SimulatedGame::new(secret.clone(), catalog.words().iter().cloned())
        .with_max_rows(session.max_attempts);
    let mut strategy = RandomStrategy::from_seed(session.seed);
    let mut session = Session::new(catalog, session);

    let outcome = session.run(&mut game, &mut strategy);
    let report = session.into_report(outcome);

    let status = match &report.outcome {
        Ok(Outcome::Solved { .. }) => RunStatus::Solved,
        Ok(Outcome::Exhausted) => RunStatus::Exhausted,
        Err(err) => {
            debug!("{secret}: {err}");
            RunStatus::Failed
        }
    };

    WordRun {
        status,
        attempts: report.attempts,
        rejected: report.history.rejected_count(),
    }
}

/// Run the benchmark over the first `config.count` catalog words
#[must_use]
pub fn run_benchmark(catalog: &WordCatalog, config: &BenchmarkConfig) -> BenchmarkResult {
    let secrets: Vec<&Word> = catalog.words().iter().take(config.count).collect();
    let progress = if config.show_progress {
        create_progress_bar(secrets.len() as u64)
    } else {
        ProgressBar::hidden()
    };

    // The simulation renders synchronously
    let base = config.session.clone().with_settle(SettlePolicy::immediate());

    let start = Instant::now();
    let runs: Vec<WordRun> = secrets
        .par_iter()
        .enumerate()
        .map(|(index, secret)| {
            let session = base.clone().with_seed(session_seed(base.seed, index));
            let run = play_one(catalog, secret, session);
            progress.inc(1);
            run
        })
        .collect();
    progress.finish_with_message("done");
    let duration = start.elapsed();

    summarize(&runs, duration)
}

fn summarize(runs: &[WordRun], duration: Duration) -> BenchmarkResult {
    let mut distribution: HashMap<usize, usize> = HashMap::new();
    let solved: Vec<usize> = runs
        .iter()
        .filter(|r| r.status == RunStatus::Solved)
        .map(|r| r.attempts)
        .collect();
    for &attempts in &solved {
        *distribution.entry(attempts).or_insert(0) += 1;
    }

    let total_words = runs.len();
    let average_attempts = if solved.is_empty() {
        0.0
    } else {
        solved.iter().sum::<usize>() as f64 / solved.len() as f64
    };
    let secs = duration.as_secs_f64();

    BenchmarkResult {
        total_words,
        solved: solved.len(),
        exhausted: runs
            .iter()
            .filter(|r| r.status == RunStatus::Exhausted)
            .count(),
        failed: runs.iter().filter(|r| r.status == RunStatus::Failed).count(),
        distribution,
        average_attempts,
        min_attempts: solved.iter().copied().min().unwrap_or(0),
        max_attempts: solved.iter().copied().max().unwrap_or(0),
        rejected_guesses: runs.iter().map(|r| r.rejected).sum(),
        duration,
        words_per_second: if secs > 0.0 {
            total_words as f64 / secs
        } else {
            0.0
        },
    }
}
