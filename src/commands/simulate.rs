//! Play against a local simulation of the game

use crate::config::SessionConfig;
use crate::core::Word;
use crate::game::SimulatedGame;
use crate::solver::{RandomStrategy, Session, SessionReport};
use crate::wordlists::WordCatalog;

/// Configuration for a simulated session
pub struct SimulateConfig {
    pub secret: Word,
    /// Words the game accepts; the catalog itself when `None`
    pub dictionary: Option<WordCatalog>,
    pub session: SessionConfig,
}

impl SimulateConfig {
    #[must_use]
    pub fn new(secret: Word) -> Self {
        Self {
            secret,
            dictionary: None,
            session: SessionConfig::default(),
        }
    }
}

/// Solve `config.secret` with a simulated game
#[must_use]
pub fn run_simulation(catalog: &WordCatalog, config: SimulateConfig) -> SessionReport {
    let dictionary = config.dictionary.as_ref().unwrap_or(catalog);
    let mut game = SimulatedGame::new(config.secret, dictionary.words().iter().cloned())
        .with_max_rows(config.session.max_attempts)
        .with_settle(config.session.settle);
    let mut strategy = RandomStrategy::from_seed(config.session.seed);
    let mut session = Session::new(catalog, config.session);

    let outcome = session.run(&mut game, &mut strategy);
    session.into_report(outcome)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SettlePolicy;
    use crate::error::SolveError;
    use crate::solver::Outcome;

    const WORDS: &[&str] = &[
        "amigo", "casas", "belos", "termo", "sagaz", "negro", "mexer", "nobre", "algoz", "afeto",
        "tenue", "sobre", "sutil", "vigor", "fazer", "poder", "moral", "assim", "casal", "astro",
    ];

    fn config(secret: &str, seed: u64) -> SimulateConfig {
        let mut config = SimulateConfig::new(Word::new(secret).unwrap());
        config.session = SessionConfig::default()
            .with_seed(Some(seed))
            .with_settle(SettlePolicy::immediate());
        config
    }

    #[test]
    fn secret_in_catalog_is_never_ruled_out() {
        let catalog = WordCatalog::from_tokens(WORDS);

        for seed in 0..20 {
            let report = run_simulation(&catalog, config("termo", seed));

            // Feedback scored against the secret never filters it out
            match report.outcome {
                Ok(Outcome::Solved { ref word }) => {
                    assert_eq!(word.text(), "termo");
                    assert_eq!(report.history.last(), Some(word));
                }
                Ok(Outcome::Exhausted) => assert!(report.remaining >= 1),
                Err(err) => panic!("unexpected failure: {err}"),
            }
            assert!(report.attempts <= 6);
        }
    }

    #[test]
    fn secret_outside_catalog_cannot_be_solved() {
        let catalog = WordCatalog::from_tokens(WORDS);
        let report = run_simulation(&catalog, config("zebra", 1));

        assert!(matches!(
            report.outcome,
            Ok(Outcome::Exhausted) | Err(SolveError::NoCandidatesRemaining { .. })
        ));
        assert_eq!(report.word_found(), None);
    }

    #[test]
    fn game_dictionary_rejects_unknown_words() {
        let catalog = WordCatalog::from_tokens(["amigo", "belos"]);
        let mut config = config("belos", 9);
        config.dictionary = Some(WordCatalog::from_tokens(["belos"]));

        let report = run_simulation(&catalog, config);

        assert_eq!(report.word_found().map(Word::text), Some("belos"));
        assert!(report.history.rejected_count() <= 1);
        assert_eq!(report.attempts, 1);
    }
}
