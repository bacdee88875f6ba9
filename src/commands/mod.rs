//! Command implementations

pub mod benchmark;
pub mod play;
pub mod simulate;

pub use benchmark::{BenchmarkConfig, BenchmarkResult, run_benchmark};
pub use play::{play_with, run_play};
pub use simulate::{SimulateConfig, run_simulation};
