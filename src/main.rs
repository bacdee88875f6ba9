//! Termo Solver - CLI
//!
//! Plays the daily five-letter word game by eliminating candidates round by round.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use termo_solver::{
    commands::{BenchmarkConfig, SimulateConfig, run_benchmark, run_play, run_simulation},
    config::{DEFAULT_MAX_ATTEMPTS, SessionConfig},
    core::Word,
    output::{print_benchmark_result, print_session_report},
    wordlists::{DEFAULT_WORDLIST, WordCatalog, normalize},
};

#[derive(Parser)]
#[command(
    name = "termo_solver",
    about = "Solves the daily five-letter word puzzle by candidate elimination",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Word list file, one word per line
    #[arg(short = 'w', long, global = true, default_value = DEFAULT_WORDLIST)]
    wordlist: PathBuf,

    /// Attempts allowed before giving up
    #[arg(short = 'm', long, global = true, default_value_t = DEFAULT_MAX_ATTEMPTS)]
    max_attempts: usize,

    /// Seed for guess selection (random when omitted)
    #[arg(short, long, global = true)]
    seed: Option<u64>,
}

#[derive(Subcommand)]
enum Commands {
    /// Relay the real game through the terminal (default)
    Play,

    /// Solve a known secret against a simulated game
    Simulate {
        /// The secret word
        secret: String,

        /// Word list the simulated game accepts (defaults to --wordlist)
        #[arg(short, long)]
        dictionary: Option<PathBuf>,
    },

    /// Benchmark the solver on simulated games
    Benchmark {
        /// Number of catalog words to play as secrets
        #[arg(short = 'n', long, default_value = "50")]
        count: usize,
    },
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();

    let catalog = WordCatalog::load(&cli.wordlist)?;
    let session = SessionConfig::default()
        .with_max_attempts(cli.max_attempts)
        .with_seed(cli.seed);

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play);

    match command {
        Commands::Play => {
            let report = run_play(&catalog, session);
            print_session_report(&report);
            report.outcome?;
            Ok(())
        }
        Commands::Simulate { secret, dictionary } => {
            simulate_command(&catalog, session, &secret, dictionary)
        }
        Commands::Benchmark { count } => {
            benchmark_command(&catalog, session, count);
            Ok(())
        }
    }
}

fn simulate_command(
    catalog: &WordCatalog,
    session: SessionConfig,
    secret: &str,
    dictionary: Option<PathBuf>,
) -> Result<()> {
    let secret =
        Word::new(normalize(secret)).with_context(|| format!("invalid secret word '{secret}'"))?;
    let dictionary = dictionary.map(WordCatalog::load).transpose()?;

    let config = SimulateConfig {
        secret,
        dictionary,
        session,
    };
    let report = run_simulation(catalog, config);
    print_session_report(&report);
    report.outcome?;
    Ok(())
}

fn benchmark_command(catalog: &WordCatalog, session: SessionConfig, count: usize) {
    println!(
        "Running benchmark on {} words...",
        count.min(catalog.len())
    );

    let config = BenchmarkConfig {
        count,
        session,
        show_progress: true,
    };
    let result = run_benchmark(catalog, &config);
    print_benchmark_result(&result);
}
