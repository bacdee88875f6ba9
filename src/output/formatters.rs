//! Formatting utilities for terminal output

use crate::solver::GuessRecord;
use indicatif::{ProgressBar, ProgressStyle};

/// Progress bar for long batch runs
#[must_use]
pub fn create_progress_bar(len: u64) -> ProgressBar {
    let bar = ProgressBar::new(len);
    if let Ok(style) = ProgressStyle::default_bar()
        .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}")
    {
        bar.set_style(style.progress_chars("█▓▒░"));
    }
    bar
}

/// Horizontal bar `width` cells wide, filled in proportion to `value / max`
#[must_use]
pub fn proportion_bar(value: usize, max: usize, width: usize) -> String {
    let filled = if max == 0 { 0 } else { (value * width / max).min(width) };
    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// One history line: the guess and its tiles, or a rejection marker
#[must_use]
pub fn format_guess(record: &GuessRecord) -> String {
    let word = record.word.text().to_uppercase();
    record.feedback.as_ref().map_or_else(
        || format!("{word} (rejected)"),
        |feedback| format!("{word} {}", feedback.to_emoji()),
    )
}
