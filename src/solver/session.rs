//! The attempt loop
//!
//! A session owns the candidate pool and the guess history and drives the
//! game one round at a time:
//!
//! ```text
//! AwaitingGuess -> submit -> rejected  -> drop word, erase row -> AwaitingGuess
//!                         -> solved    -> Solved
//!                         -> scored    -> filter pool -> AwaitingGuess | Exhausted
//! ```
//!
//! Rejected rounds do not count against the attempt budget.

use super::{CandidatePool, GuessHistory, Strategy};
use crate::config::SessionConfig;
use crate::core::{ConstraintSet, RoundFeedback, Word};
use crate::error::SolveError;
use crate::game::Game;
use crate::wordlists::WordCatalog;
use log::{debug, info, warn};

/// Where the session stands between rounds
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionState {
    AwaitingGuess,
    Solved { word: Word },
    Exhausted,
}

/// What happened in one round
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RoundOutcome {
    /// The game refused the word; it was dropped and the row erased
    Rejected { guess: Word },
    /// Every letter came back correct
    Solved { word: Word },
    /// Feedback was applied to the pool
    Continue {
        guess: Word,
        feedback: RoundFeedback,
        before: usize,
        after: usize,
    },
}

/// How a finished session ended
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Solved { word: Word },
    /// Every attempt was used without finding the word
    Exhausted,
}

/// One game, from the first guess to a terminal state
#[derive(Debug, Clone)]
pub struct Session {
    config: SessionConfig,
    pool: CandidatePool,
    history: GuessHistory,
    attempts: usize,
    state: SessionState,
}

impl Session {
    #[must_use]
    pub fn new(catalog: &WordCatalog, config: SessionConfig) -> Self {
        let state = if config.max_attempts == 0 {
            SessionState::Exhausted
        } else {
            SessionState::AwaitingGuess
        };

        Self {
            config,
            pool: CandidatePool::new(catalog),
            history: GuessHistory::default(),
            attempts: 0,
            state,
        }
    }

    #[must_use]
    pub const fn pool(&self) -> &CandidatePool {
        &self.pool
    }

    #[must_use]
    pub const fn history(&self) -> &GuessHistory {
        &self.history
    }

    /// Rounds that counted against the budget
    #[must_use]
    pub const fn attempts(&self) -> usize {
        self.attempts
    }

    #[must_use]
    pub const fn state(&self) -> &SessionState {
        &self.state
    }

    #[must_use]
    pub const fn config(&self) -> &SessionConfig {
        &self.config
    }

    /// The word of the day, once the session has solved it
    #[must_use]
    pub const fn word_found(&self) -> Option<&Word> {
        match &self.state {
            SessionState::Solved { word } => Some(word),
            _ => None,
        }
    }

    /// Play the whole session
    ///
    /// Initializes the game, plays rounds until a terminal state, and closes
    /// the game on every path out, errors included.
    ///
    /// # Errors
    ///
    /// Returns `SolveError` if the pool runs dry, the game reports
    /// inconsistent feedback, or any game interaction fails.
    pub fn run<G, S>(&mut self, game: &mut G, strategy: &mut S) -> Result<Outcome, SolveError>
    where
        G: Game + ?Sized,
        S: Strategy + ?Sized,
    {
        info!(
            "starting session with {} candidates and {} attempts",
            self.pool.len(),
            self.config.max_attempts
        );

        let result = game
            .initialize_session()
            .map_err(SolveError::from)
            .and_then(|()| self.drive(game, strategy));

        match (result, game.close()) {
            (Ok(outcome), Ok(())) => {
                info!("session finished after {} attempts: {outcome:?}", self.attempts);
                Ok(outcome)
            }
            (Ok(_), Err(close_err)) => Err(close_err.into()),
            (Err(err), Ok(())) => Err(err),
            (Err(err), Err(close_err)) => {
                warn!("closing the game failed after an earlier error: {close_err}");
                Err(err)
            }
        }
    }

    fn drive<G, S>(&mut self, game: &mut G, strategy: &mut S) -> Result<Outcome, SolveError>
    where
        G: Game + ?Sized,
        S: Strategy + ?Sized,
    {
        loop {
            match &self.state {
                SessionState::Solved { word } => {
                    return Ok(Outcome::Solved { word: word.clone() });
                }
                SessionState::Exhausted => return Ok(Outcome::Exhausted),
                SessionState::AwaitingGuess => {}
            }
            self.play_round(game, strategy)?;
        }
    }

    /// Play a single round
    ///
    /// # Errors
    ///
    /// Returns `SolveError::SessionFinished` if the session already reached a
    /// terminal state, `SolveError::NoCandidatesRemaining` if the strategy has
    /// nothing to offer, and the feedback and game errors described on `run`.
    pub fn play_round<G, S>(
        &mut self,
        game: &mut G,
        strategy: &mut S,
    ) -> Result<RoundOutcome, SolveError>
    where
        G: Game + ?Sized,
        S: Strategy + ?Sized,
    {
        if self.state != SessionState::AwaitingGuess {
            return Err(SolveError::SessionFinished);
        }

        let round = self.attempts;
        let guess = strategy
            .select_guess(&self.pool, round)
            .cloned()
            .ok_or(SolveError::NoCandidatesRemaining { round: round + 1 })?;

        debug!(
            "round {}: guessing {guess} from {} candidates",
            round + 1,
            self.pool.len()
        );
        game.submit_guess(&guess)?;

        if game.was_guess_rejected()? {
            warn!("the game refused {guess}; dropping it and retrying");
            self.pool.remove(&guess);
            game.clear_current_row()?;
            self.history.push_rejected(guess.clone());
            return Ok(RoundOutcome::Rejected { guess });
        }

        let board = game.read_feedback()?;
        let feedback = RoundFeedback::latest(&board)
            .ok_or(SolveError::MalformedFeedback { len: board.len() })?;

        self.attempts += 1;
        self.history.push_scored(guess.clone(), feedback);

        if feedback.is_solved() {
            let word = match feedback.word() {
                Ok(word) if word == guess => word,
                _ => {
                    return Err(SolveError::FeedbackMismatch {
                        guess,
                        observed: feedback
                            .letters()
                            .iter()
                            .map(|l| char::from(l.letter))
                            .collect(),
                    });
                }
            };

            info!("solved with {word} in {} attempts", self.attempts);
            self.state = SessionState::Solved { word: word.clone() };
            return Ok(RoundOutcome::Solved { word });
        }

        let constraints = ConstraintSet::from_feedback(feedback.letters());
        let stats = self.pool.filter(&constraints);
        debug!(
            "round {}: {feedback} narrowed the pool from {} to {}",
            round + 1,
            stats.before,
            stats.after
        );

        if self.attempts >= self.config.max_attempts {
            self.state = SessionState::Exhausted;
        }

        Ok(RoundOutcome::Continue {
            guess,
            feedback,
            before: stats.before,
            after: stats.after,
        })
    }
}

/// Everything worth reporting once a session is over
#[derive(Debug)]
pub struct SessionReport {
    pub outcome: Result<Outcome, SolveError>,
    pub attempts: usize,
    pub history: GuessHistory,
    /// Candidates still in the pool at the end
    pub remaining: usize,
}

impl SessionReport {
    /// The word of the day, when the session solved it
    #[must_use]
    pub const fn word_found(&self) -> Option<&Word> {
        match &self.outcome {
            Ok(Outcome::Solved { word }) => Some(word),
            _ => None,
        }
    }
}

impl Session {
    /// Consume the session into a report of how `outcome` came about
    #[must_use]
    pub fn into_report(self, outcome: Result<Outcome, SolveError>) -> SessionReport {
        SessionReport {
            outcome,
            attempts: self.attempts,
            remaining: self.pool.len(),
            history: self.history,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Classification, ClassifiedLetter};
    use crate::game::{GameError, SimulatedGame};
    use crate::solver::RandomStrategy;

    /// Plays a fixed list of words, as long as they are still in the pool
    struct Scripted {
        words: Vec<&'static str>,
        next: usize,
    }

    impl Scripted {
        fn new(words: &[&'static str]) -> Self {
            Self {
                words: words.to_vec(),
                next: 0,
            }
        }
    }

    impl Strategy for Scripted {
        fn select_guess<'p>(&mut self, pool: &'p CandidatePool, _round: usize) -> Option<&'p Word> {
            let text = *self.words.get(self.next)?;
            self.next += 1;
            pool.iter().find(|w| w.text() == text)
        }
    }

    /// Accepts everything and always shows the same board
    struct FixedBoard {
        board: Vec<ClassifiedLetter>,
        fail_close: bool,
        closed: bool,
    }

    impl FixedBoard {
        fn new(board: Vec<ClassifiedLetter>) -> Self {
            Self {
                board,
                fail_close: false,
                closed: false,
            }
        }
    }

    impl Game for FixedBoard {
        fn initialize_session(&mut self) -> Result<(), GameError> {
            Ok(())
        }
        fn submit_guess(&mut self, _word: &Word) -> Result<(), GameError> {
            Ok(())
        }
        fn read_feedback(&mut self) -> Result<Vec<ClassifiedLetter>, GameError> {
            Ok(self.board.clone())
        }
        fn was_guess_rejected(&mut self) -> Result<bool, GameError> {
            Ok(false)
        }
        fn clear_current_row(&mut self) -> Result<(), GameError> {
            Ok(())
        }
        fn close(&mut self) -> Result<(), GameError> {
            self.closed = true;
            if self.fail_close {
                Err(GameError::Closed)
            } else {
                Ok(())
            }
        }
    }

    fn word(text: &str) -> Word {
        Word::new(text).unwrap()
    }

    fn catalog(words: &[&str]) -> WordCatalog {
        WordCatalog::from_tokens(words)
    }

    fn game(secret: &str, dictionary: &[&str]) -> SimulatedGame {
        SimulatedGame::new(word(secret), dictionary.iter().map(|w| word(w)))
    }

    fn started(game: &mut SimulatedGame) -> &mut SimulatedGame {
        game.initialize_session().unwrap();
        game
    }

    const SCENARIO: &[&str] = &["amigo", "casas", "belos"];

    #[test]
    fn pool_emptied_by_feedback_is_fatal() {
        // AMIGO against AULAS: only the leading A is right
        let mut session = Session::new(&catalog(SCENARIO), SessionConfig::default());
        let mut game = game("aulas", SCENARIO);
        let mut strategy = Scripted::new(&["amigo", "belos"]);

        let result = session.run(&mut game, &mut strategy);

        assert!(matches!(
            result,
            Err(SolveError::NoCandidatesRemaining { round: 2 })
        ));
        assert!(session.pool().is_empty());
        assert_eq!(session.attempts(), 1);
        assert!(game.is_closed());
        assert_eq!(session.word_found(), None);
    }

    #[test]
    fn rejected_guess_is_dropped_without_using_an_attempt() {
        let mut session = Session::new(&catalog(SCENARIO), SessionConfig::default());
        let mut game = game("belos", &["amigo", "belos"]);
        let mut strategy = Scripted::new(&["casas"]);

        let outcome = session.play_round(started(&mut game), &mut strategy).unwrap();

        assert_eq!(outcome, RoundOutcome::Rejected { guess: word("casas") });
        assert!(!session.pool().contains(&word("casas")));
        assert_eq!(session.pool().len(), 2);
        assert_eq!(session.attempts(), 0);
        assert_eq!(game.clears(), 1);
        assert_eq!(session.history().rejected_count(), 1);
        assert_eq!(session.state(), &SessionState::AwaitingGuess);

        // The retry can no longer pick the refused word
        for seed in 0..32 {
            let guess = RandomStrategy::seeded(seed)
                .select_guess(session.pool(), session.attempts())
                .unwrap();
            assert_ne!(guess.text(), "casas");
        }
    }

    #[test]
    fn all_correct_feedback_solves() {
        let mut session = Session::new(&catalog(SCENARIO), SessionConfig::default());
        let mut game = game("belos", SCENARIO);
        let mut strategy = Scripted::new(&["belos"]);

        let outcome = session.run(&mut game, &mut strategy).unwrap();

        assert_eq!(outcome, Outcome::Solved { word: word("belos") });
        assert_eq!(session.word_found(), Some(&word("belos")));
        assert_eq!(session.history().last(), Some(&word("belos")));
        assert_eq!(session.attempts(), 1);
        assert!(game.is_closed());
    }

    #[test]
    fn solves_through_slow_reveal() {
        let catalog = catalog(SCENARIO);
        let mut session = Session::new(&catalog, SessionConfig::default());
        let mut game = game("belos", SCENARIO).with_reveal_lag(4);
        let mut strategy = Scripted::new(&["amigo", "belos"]);

        let outcome = session.run(&mut game, &mut strategy).unwrap();

        assert_eq!(outcome, Outcome::Solved { word: word("belos") });
        assert_eq!(session.attempts(), 2);
    }

    const FAMILY: &[&str] = &[
        "bakes", "cakes", "fakes", "lakes", "makes", "rakes", "takes", "wakes",
    ];

    #[test]
    fn runs_out_of_attempts() {
        // JAKES is never in the pool, and each round rules out one word only
        let mut session = Session::new(&catalog(FAMILY), SessionConfig::default());
        let mut game = game("jakes", FAMILY);
        let mut strategy = RandomStrategy::seeded(42);

        let outcome = session.run(&mut game, &mut strategy).unwrap();

        assert_eq!(outcome, Outcome::Exhausted);
        assert_eq!(session.attempts(), 6);
        assert_eq!(session.history().len(), 6);
        assert_eq!(session.pool().len(), 2);
        assert_eq!(session.word_found(), None);
        assert!(game.is_closed());
    }

    #[test]
    fn rejections_do_not_shorten_the_budget() {
        for seed in 0..16 {
            let mut session = Session::new(&catalog(FAMILY), SessionConfig::default());
            let mut game = game("jakes", &FAMILY[2..]);
            let mut strategy = RandomStrategy::seeded(seed);

            let outcome = session.run(&mut game, &mut strategy).unwrap();
            let history = session.history();

            assert_eq!(outcome, Outcome::Exhausted);
            assert_eq!(session.attempts(), 6);
            assert_eq!(history.len(), 6 + history.rejected_count());
            assert_eq!(history.scored().count(), 6);
        }
    }

    #[test]
    fn max_attempts_is_configurable() {
        let config = SessionConfig::default().with_max_attempts(2);
        let mut session = Session::new(&catalog(FAMILY), config);
        let mut game = game("jakes", FAMILY);

        let outcome = session
            .run(&mut game, &mut RandomStrategy::seeded(3))
            .unwrap();

        assert_eq!(outcome, Outcome::Exhausted);
        assert_eq!(session.attempts(), 2);
        assert_eq!(session.pool().len(), FAMILY.len() - 2);
    }

    #[test]
    fn continue_reports_pool_sizes() {
        let mut session = Session::new(&catalog(FAMILY), SessionConfig::default());
        let mut game = game("jakes", FAMILY);
        let mut strategy = Scripted::new(&["bakes"]);

        let outcome = session.play_round(started(&mut game), &mut strategy).unwrap();

        let RoundOutcome::Continue {
            guess,
            feedback,
            before,
            after,
        } = outcome
        else {
            panic!("expected a scored round");
        };
        assert_eq!(guess, word("bakes"));
        assert_eq!(feedback.to_emoji(), "⬜🟩🟩🟩🟩");
        assert_eq!((before, after), (8, 7));
    }

    #[test]
    fn finished_session_refuses_more_rounds() {
        let mut session = Session::new(&catalog(SCENARIO), SessionConfig::default());
        let mut game = game("belos", SCENARIO);
        session
            .run(&mut game, &mut Scripted::new(&["belos"]))
            .unwrap();

        let mut fresh = self::game("belos", SCENARIO);
        let result = session.play_round(started(&mut fresh), &mut RandomStrategy::seeded(0));
        assert!(matches!(result, Err(SolveError::SessionFinished)));
    }

    #[test]
    fn partial_board_is_malformed() {
        let row = RoundFeedback::score(&word("amigo"), &word("belos"));
        let mut game = FixedBoard::new(row.letters()[..3].to_vec());
        let mut session = Session::new(&catalog(SCENARIO), SessionConfig::default());

        let result = session.run(&mut game, &mut Scripted::new(&["amigo"]));

        assert!(matches!(
            result,
            Err(SolveError::MalformedFeedback { len: 3 })
        ));
        assert!(game.closed);
    }

    #[test]
    fn solved_row_must_spell_the_guess() {
        let board: Vec<ClassifiedLetter> = b"belos"
            .iter()
            .enumerate()
            .map(|(i, &ch)| ClassifiedLetter::new(ch, Classification::Correct, i))
            .collect();
        let mut game = FixedBoard::new(board);
        let mut session = Session::new(&catalog(SCENARIO), SessionConfig::default());

        let result = session.run(&mut game, &mut Scripted::new(&["amigo"]));

        assert!(matches!(result, Err(SolveError::FeedbackMismatch { .. })));
    }

    #[test]
    fn report_keeps_history_of_failed_session() {
        let mut session = Session::new(&catalog(SCENARIO), SessionConfig::default());
        let mut game = game("aulas", SCENARIO);
        let outcome = session.run(&mut game, &mut Scripted::new(&["amigo"]));

        let report = session.into_report(outcome);
        assert!(report.outcome.is_err());
        assert_eq!(report.word_found(), None);
        assert_eq!(report.attempts, 1);
        assert_eq!(report.remaining, 0);
        assert_eq!(report.history.last(), Some(&word("amigo")));
    }

    #[test]
    fn close_failure_surfaces_after_success() {
        let belos = RoundFeedback::score(&word("belos"), &word("belos"));
        let mut game = FixedBoard::new(belos.letters().to_vec());
        game.fail_close = true;
        let mut session = Session::new(&catalog(SCENARIO), SessionConfig::default());

        let result = session.run(&mut game, &mut Scripted::new(&["belos"]));

        assert!(matches!(result, Err(SolveError::Game(GameError::Closed))));
        assert_eq!(session.word_found(), Some(&word("belos")));
    }

    #[test]
    fn earlier_error_wins_over_close_failure() {
        let mut game = FixedBoard::new(Vec::new());
        game.fail_close = true;
        let mut session = Session::new(&catalog(SCENARIO), SessionConfig::default());

        let result = session.run(&mut game, &mut Scripted::new(&["amigo"]));

        assert!(matches!(
            result,
            Err(SolveError::MalformedFeedback { len: 0 })
        ));
        assert!(game.closed);
    }
}
