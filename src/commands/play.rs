//! Play the real game with a person relaying the colours

use crate::config::SessionConfig;
use crate::game::ConsoleGame;
use crate::solver::{RandomStrategy, Session, SessionReport};
use crate::wordlists::WordCatalog;
use std::io::{self, BufRead, Write};

/// Run one session on the terminal
pub fn run_play(catalog: &WordCatalog, config: SessionConfig) -> SessionReport {
    let stdin = io::stdin();
    play_with(catalog, config, stdin.lock(), io::stdout())
}

/// Run one session over arbitrary input and output streams
pub fn play_with<R: BufRead, W: Write>(
    catalog: &WordCatalog,
    config: SessionConfig,
    input: R,
    output: W,
) -> SessionReport {
    let mut strategy = RandomStrategy::from_seed(config.seed);
    let mut game = ConsoleGame::new(input, output);
    let mut session = Session::new(catalog, config);

    let outcome = session.run(&mut game, &mut strategy);
    session.into_report(outcome)
}
