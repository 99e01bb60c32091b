//! Game session state machine
//!
//! A session holds the target word, the submitted guesses with their
//! evaluations, and the remaining-attempt count. It is constructed with an
//! injected dictionary and target; nothing here is global.

use crate::core::{Evaluation, GuessBuffer, Word};
use crate::wordlists::Dictionary;
use std::fmt;

/// Attempts per game, one per grid row
pub const MAX_ATTEMPTS: usize = 6;

/// Session lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    /// Attempts remain and the target has not been found
    InProgress,
    /// A guess matched the target
    Won,
    /// Attempts exhausted without a match
    Lost,
}

/// A submitted guess together with its evaluation
#[derive(Debug, Clone)]
pub struct GuessRecord {
    pub word: Word,
    pub evaluation: Evaluation,
}

/// Recoverable rejection of a submission
///
/// Neither variant consumes an attempt; the buffer is left untouched so the
/// player can correct the guess.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitError {
    /// Fewer than 5 letters entered
    IncompleteGuess,
    /// The completed guess is not in the dictionary
    UnknownWord(String),
    /// The session already ended; further submissions are rejected
    GameOver,
}

impl fmt::Display for SubmitError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::IncompleteGuess => write!(f, "Tahmin ettiğin kelime çok kısa"),
            Self::UnknownWord(word) => {
                write!(f, "Tahmin ettiğin kelime listede yok: '{word}'")
            }
            Self::GameOver => write!(f, "Oyun bitti"),
        }
    }
}

impl std::error::Error for SubmitError {}

/// Result of an accepted submission
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Attempt consumed, game continues; caller clears the buffer
    Continue(Evaluation),
    /// The guess matched the target
    Won(Evaluation),
    /// Last attempt consumed without a match
    Lost(Evaluation),
}

impl SubmitOutcome {
    /// The per-letter evaluation of the accepted guess
    #[must_use]
    pub const fn evaluation(self) -> Evaluation {
        match self {
            Self::Continue(e) | Self::Won(e) | Self::Lost(e) => e,
        }
    }

    /// True for the terminal outcomes
    #[must_use]
    pub const fn is_game_over(self) -> bool {
        matches!(self, Self::Won(_) | Self::Lost(_))
    }
}

/// One game against one target word
pub struct GameSession<'a> {
    dictionary: &'a Dictionary,
    target: Word,
    history: Vec<GuessRecord>,
    status: GameStatus,
}

impl<'a> GameSession<'a> {
    /// Start a session for the given target
    #[must_use]
    pub fn new(dictionary: &'a Dictionary, target: Word) -> Self {
        Self {
            dictionary,
            target,
            history: Vec::with_capacity(MAX_ATTEMPTS),
            status: GameStatus::InProgress,
        }
    }

    /// Submit the buffered guess
    ///
    /// # Errors
    ///
    /// - [`SubmitError::GameOver`] once the session is Won or Lost
    /// - [`SubmitError::IncompleteGuess`] when the buffer holds fewer than
    ///   5 letters
    /// - [`SubmitError::UnknownWord`] when the word is not in the dictionary
    ///
    /// Rejections leave the history, attempt count and buffer unchanged.
    pub fn submit(&mut self, buffer: &GuessBuffer) -> Result<SubmitOutcome, SubmitError> {
        if self.status != GameStatus::InProgress {
            return Err(SubmitError::GameOver);
        }

        let word = buffer.to_word().ok_or(SubmitError::IncompleteGuess)?;
        self.submit_word(word)
    }

    /// Submit an already-assembled word
    ///
    /// Used by the line-based interface, where input arrives as a string
    /// rather than through a buffer.
    ///
    /// # Errors
    /// Same conditions as [`GameSession::submit`].
    pub fn submit_word(&mut self, word: Word) -> Result<SubmitOutcome, SubmitError> {
        if self.status != GameStatus::InProgress {
            return Err(SubmitError::GameOver);
        }

        if !self.dictionary.contains_word(&word) {
            return Err(SubmitError::UnknownWord(word.text().to_string()));
        }

        let evaluation = Evaluation::score(&word, &self.target);
        self.history.push(GuessRecord { word, evaluation });

        let outcome = if evaluation.is_win() {
            self.status = GameStatus::Won;
            SubmitOutcome::Won(evaluation)
        } else if self.history.len() >= MAX_ATTEMPTS {
            self.status = GameStatus::Lost;
            SubmitOutcome::Lost(evaluation)
        } else {
            SubmitOutcome::Continue(evaluation)
        };

        Ok(outcome)
    }

    /// Current lifecycle state
    #[must_use]
    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// The secret word; revealed to the player only on loss
    #[must_use]
    pub fn target(&self) -> &Word {
        &self.target
    }

    /// Submitted guesses with evaluations, oldest first
    #[must_use]
    pub fn history(&self) -> &[GuessRecord] {
        &self.history
    }

    /// Attempts left before the session is Lost
    #[must_use]
    pub fn remaining_attempts(&self) -> usize {
        MAX_ATTEMPTS - self.history.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Letter;
    use crate::wordlists::loader::words_from_slice;

    fn dictionary() -> Dictionary {
        Dictionary::new(&words_from_slice(&[
            "kalem", "kitap", "deniz", "çorba", "şeker", "bahçe", "sokak", "duvar",
        ]))
    }

    fn full_buffer(word: &str) -> GuessBuffer {
        let mut buffer = GuessBuffer::new();
        for ch in word.chars() {
            buffer.push(Letter::new(ch).unwrap());
        }
        buffer
    }

    fn session<'a>(dict: &'a Dictionary, target: &str) -> GameSession<'a> {
        GameSession::new(dict, Word::new(target).unwrap())
    }

    #[test]
    fn matching_guess_wins() {
        let dict = dictionary();
        let mut game = session(&dict, "kalem");

        let outcome = game.submit(&full_buffer("kalem")).unwrap();
        assert!(matches!(outcome, SubmitOutcome::Won(_)));
        assert!(outcome.evaluation().is_win());
        assert_eq!(game.status(), GameStatus::Won);
        assert_eq!(game.history().len(), 1);
    }

    #[test]
    fn non_matching_guess_continues_and_consumes_attempt() {
        let dict = dictionary();
        let mut game = session(&dict, "kalem");

        let outcome = game.submit(&full_buffer("deniz")).unwrap();
        assert!(matches!(outcome, SubmitOutcome::Continue(_)));
        assert_eq!(game.status(), GameStatus::InProgress);
        assert_eq!(game.remaining_attempts(), 5);
    }

    #[test]
    fn six_failed_valid_guesses_lose() {
        let dict = dictionary();
        let mut game = session(&dict, "kalem");

        for (i, word) in ["kitap", "deniz", "çorba", "şeker", "bahçe", "sokak"]
            .iter()
            .enumerate()
        {
            let outcome = game.submit(&full_buffer(word)).unwrap();
            if i < 5 {
                assert!(matches!(outcome, SubmitOutcome::Continue(_)));
            } else {
                assert!(matches!(outcome, SubmitOutcome::Lost(_)));
            }
        }

        assert_eq!(game.status(), GameStatus::Lost);
        assert_eq!(game.remaining_attempts(), 0);
        assert_eq!(game.target().text(), "kalem");
    }

    #[test]
    fn win_on_last_attempt() {
        let dict = dictionary();
        let mut game = session(&dict, "kalem");

        for word in ["kitap", "deniz", "çorba", "şeker", "bahçe"] {
            game.submit(&full_buffer(word)).unwrap();
        }
        let outcome = game.submit(&full_buffer("kalem")).unwrap();
        assert!(matches!(outcome, SubmitOutcome::Won(_)));
        assert_eq!(game.status(), GameStatus::Won);
    }

    #[test]
    fn incomplete_guess_rejected_without_cost() {
        let dict = dictionary();
        let mut game = session(&dict, "kalem");

        let mut buffer = GuessBuffer::new();
        buffer.push(Letter::new('k').unwrap());

        assert_eq!(game.submit(&buffer), Err(SubmitError::IncompleteGuess));
        assert_eq!(game.remaining_attempts(), 6);
        assert!(game.history().is_empty());
        // Buffer untouched, still holds the letter
        assert_eq!(buffer.len(), 1);
    }

    #[test]
    fn unknown_word_rejected_without_cost() {
        let dict = dictionary();
        let mut game = session(&dict, "kalem");

        // Valid letters, not in the dictionary
        let err = game.submit(&full_buffer("zzzzz")).unwrap_err();
        assert_eq!(err, SubmitError::UnknownWord("zzzzz".to_string()));
        assert_eq!(game.remaining_attempts(), 6);
        assert_eq!(game.status(), GameStatus::InProgress);
    }

    #[test]
    fn terminal_session_rejects_submissions() {
        let dict = dictionary();
        let mut game = session(&dict, "kalem");

        game.submit(&full_buffer("kalem")).unwrap();
        assert_eq!(game.status(), GameStatus::Won);

        assert_eq!(
            game.submit(&full_buffer("deniz")),
            Err(SubmitError::GameOver)
        );
        // Won state is frozen
        assert_eq!(game.status(), GameStatus::Won);
        assert_eq!(game.history().len(), 1);
    }

    #[test]
    fn history_keeps_submission_order() {
        let dict = dictionary();
        let mut game = session(&dict, "kalem");

        game.submit(&full_buffer("deniz")).unwrap();
        game.submit(&full_buffer("kitap")).unwrap();

        let words: Vec<&str> = game.history().iter().map(|r| r.word.text()).collect();
        assert_eq!(words, vec!["deniz", "kitap"]);
    }

    #[test]
    fn rejection_messages_are_user_facing() {
        assert_eq!(
            SubmitError::IncompleteGuess.to_string(),
            "Tahmin ettiğin kelime çok kısa"
        );
        assert_eq!(
            SubmitError::UnknownWord("zzzzz".into()).to_string(),
            "Tahmin ettiğin kelime listede yok: 'zzzzz'"
        );
    }
}
