//! Display functions for command results

use super::formatters::{format_guess, proportion_bar};
use crate::commands::BenchmarkResult;
use crate::solver::SessionReport;
use colored::Colorize;

/// Print how a session went
pub fn print_session_report(report: &SessionReport) {
    println!("\n{}", "─".repeat(60).cyan());

    match (&report.outcome, report.word_found()) {
        (_, Some(word)) => println!(
            "{} {}",
            "Palavra encontrada:".green().bold(),
            word.text().to_uppercase().bright_yellow().bold()
        ),
        (Ok(_), None) => println!("{}", "Palavra não encontrada".red().bold()),
        (Err(err), None) => println!("{} {err}", "Palavra não encontrada:".red().bold()),
    }
    println!("{}", "─".repeat(60).cyan());

    println!("Attempts:   {}", report.attempts);
    if report.history.rejected_count() > 0 {
        println!("Rejected:   {}", report.history.rejected_count());
    }
    println!("Candidates: {} remaining", report.remaining);

    println!();
    for (i, record) in report.history.records().iter().enumerate() {
        println!("  {}. {}", i + 1, format_guess(record));
    }
}

/// Print the result of a benchmark
pub fn print_benchmark_result(result: &BenchmarkResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "BENCHMARK RESULTS".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    println!("\n📊 {}", "Performance:".bright_cyan().bold());
    println!("   Words tested:     {}", result.total_words);
    println!(
        "   Solved:           {} {}",
        result.solved,
        format!("({:.1}%)", result.success_rate() * 100.0).green()
    );
    if result.exhausted > 0 {
        println!("   Out of attempts:  {}", result.exhausted.to_string().yellow());
    }
    if result.failed > 0 {
        println!("   Failed:           {}", result.failed.to_string().red());
    }
    println!(
        "   Average attempts: {}",
        format!("{:.2}", result.average_attempts)
            .bright_yellow()
            .bold()
    );
    println!(
        "   Best case:        {}",
        format!("{}", result.min_attempts).green()
    );
    println!(
        "   Worst case:       {}",
        format!("{}", result.max_attempts).yellow()
    );
    println!("   Rejected guesses: {}", result.rejected_guesses);
    println!("   Time taken:       {:.2}s", result.duration.as_secs_f64());
    println!("   Words/second:     {:.1}", result.words_per_second);

    println!("\n📈 {}", "Distribution:".bright_cyan().bold());
    let max_count = result.distribution.values().copied().max().unwrap_or(0);
    let mut attempts: Vec<usize> = result.distribution.keys().copied().collect();
    attempts.sort_unstable();
    for attempt in attempts {
        let count = result.distribution[&attempt];
        let pct = count as f64 / result.solved as f64 * 100.0;
        let bar = proportion_bar(count, max_count, 40);
        println!("   {attempt}: {} {count:4} ({pct:5.1}%)", bar.green());
    }
}
