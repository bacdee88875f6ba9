//! A person relays the real game through the terminal
//!
//! The solver prints each guess; the player types it into the game and
//! reports back the colours as a pattern, or says the game refused the word.

use super::{Game, GameError};
use crate::core::{ClassifiedLetter, RoundFeedback, Word};
use std::io::{BufRead, Write};

/// Game collaborator backed by a line-oriented reader and writer
pub struct ConsoleGame<R, W> {
    input: R,
    output: W,
    board: Vec<ClassifiedLetter>,
    rejected: bool,
}

impl<R: BufRead, W: Write> ConsoleGame<R, W> {
    pub const fn new(input: R, output: W) -> Self {
        Self {
            input,
            output,
            board: Vec::new(),
            rejected: false,
        }
    }

    /// Prompt until the player gives a usable answer
    fn ask_feedback(&mut self, word: &Word) -> Result<Option<RoundFeedback>, GameError> {
        loop {
            write!(
                self.output,
                "Feedback for {} (G/Y/-, 'win', or 'invalid'): ",
                word.text().to_uppercase()
            )?;
            self.output.flush()?;

            let mut line = String::new();
            if self.input.read_line(&mut line)? == 0 {
                return Err(GameError::InputClosed);
            }
            let answer = line.trim();

            match answer.to_lowercase().as_str() {
                "invalid" | "i" | "rejected" => return Ok(None),
                "win" | "correct" | "solved" => {
                    return Ok(RoundFeedback::from_pattern(word, "GGGGG"));
                }
                _ => {}
            }

            if let Some(feedback) = RoundFeedback::from_pattern(word, answer) {
                return Ok(Some(feedback));
            }
            writeln!(
                self.output,
                "❌ Invalid pattern! Use G/Y/-, 'win', or '🟩🟨⬜🟩🟨'"
            )?;
        }
    }
}

impl<R: BufRead, W: Write> Game for ConsoleGame<R, W> {
    fn initialize_session(&mut self) -> Result<(), GameError> {
        writeln!(self.output, "Open the puzzle and close the help screen.")?;
        writeln!(self.output, "After each guess, enter the feedback pattern:")?;
        writeln!(self.output, "  - Use G/g/🟩 for green (correct position)")?;
        writeln!(self.output, "  - Use Y/y/🟨 for yellow (wrong position)")?;
        writeln!(self.output, "  - Use -/_/⬜ for gray (not in word)")?;
        writeln!(self.output, "  - Or type 'invalid' if the game refused the word\n")?;
        Ok(())
    }

    fn submit_guess(&mut self, word: &Word) -> Result<(), GameError> {
        writeln!(self.output, "\nType: {}", word.text().to_uppercase())?;

        match self.ask_feedback(word)? {
            Some(feedback) => {
                self.board.extend_from_slice(feedback.letters());
                self.rejected = false;
            }
            None => self.rejected = true,
        }
        Ok(())
    }

    fn read_feedback(&mut self) -> Result<Vec<ClassifiedLetter>, GameError> {
        Ok(self.board.clone())
    }

    fn was_guess_rejected(&mut self) -> Result<bool, GameError> {
        Ok(self.rejected)
    }

    fn clear_current_row(&mut self) -> Result<(), GameError> {
        writeln!(self.output, "Erase the word from the game's row.")?;
        self.rejected = false;
        Ok(())
    }

    fn close(&mut self) -> Result<(), GameError> {
        self.output.flush()?;
        Ok(())
    }
}
