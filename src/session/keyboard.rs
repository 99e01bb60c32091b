//! Virtual keyboard status aggregation
//!
//! Each letter key accumulates the best outcome seen for that letter across
//! all evaluated guesses. The merge is escalate-only: once a key shows
//! Correct it never drops back to WrongLocation or Absent because a later
//! guess placed the letter badly.

use crate::core::{Evaluation, LetterOutcome, WORD_LENGTH, Word};
use rustc_hash::FxHashMap;

/// Displayed status of one keyboard key
///
/// The derived ordering is the escalation order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum KeyStatus {
    /// Letter not yet part of any evaluated guess
    Unused,
    Absent,
    WrongLocation,
    Correct,
}

impl From<LetterOutcome> for KeyStatus {
    fn from(outcome: LetterOutcome) -> Self {
        match outcome {
            LetterOutcome::Correct => Self::Correct,
            LetterOutcome::WrongLocation => Self::WrongLocation,
            LetterOutcome::Absent => Self::Absent,
        }
    }
}

/// Aggregated key statuses for the on-screen keyboard
#[derive(Debug, Clone, Default)]
pub struct KeyboardState {
    keys: FxHashMap<char, KeyStatus>,
}

impl KeyboardState {
    /// A keyboard with every key Unused
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Merge one evaluated guess into the key statuses
    pub fn absorb(&mut self, guess: &Word, evaluation: &Evaluation) {
        for i in 0..WORD_LENGTH {
            let letter = guess.letter_at(i);
            let status = KeyStatus::from(evaluation.outcome(i));
            let entry = self.keys.entry(letter).or_insert(KeyStatus::Unused);
            if status > *entry {
                *entry = status;
            }
        }
    }

    /// Current status of a key
    #[must_use]
    pub fn status(&self, letter: char) -> KeyStatus {
        self.keys.get(&letter).copied().unwrap_or(KeyStatus::Unused)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Word;

    fn absorb(state: &mut KeyboardState, guess: &str, target: &str) {
        let guess = Word::new(guess).unwrap();
        let target = Word::new(target).unwrap();
        let evaluation = Evaluation::score(&guess, &target);
        state.absorb(&guess, &evaluation);
    }

    #[test]
    fn untouched_keys_are_unused() {
        let state = KeyboardState::new();
        assert_eq!(state.status('k'), KeyStatus::Unused);
    }

    #[test]
    fn absorb_sets_statuses_per_outcome() {
        let mut state = KeyboardState::new();
        // guess kalem vs target kitap: k correct, a wrong location,
        // l/e/m absent
        absorb(&mut state, "kalem", "kitap");

        assert_eq!(state.status('k'), KeyStatus::Correct);
        assert_eq!(state.status('a'), KeyStatus::WrongLocation);
        assert_eq!(state.status('l'), KeyStatus::Absent);
        assert_eq!(state.status('m'), KeyStatus::Absent);
    }

    #[test]
    fn status_escalates() {
        let mut state = KeyboardState::new();
        // First guess places k off-position, second places it exactly
        absorb(&mut state, "sokak", "kalem");
        assert_eq!(state.status('k'), KeyStatus::WrongLocation);

        absorb(&mut state, "kitap", "kalem");
        assert_eq!(state.status('k'), KeyStatus::Correct);
    }

    #[test]
    fn status_never_downgrades() {
        let mut state = KeyboardState::new();
        absorb(&mut state, "kitap", "kalem");
        assert_eq!(state.status('k'), KeyStatus::Correct);

        // A later guess with k in a bad spot must not demote the key
        absorb(&mut state, "sokak", "kalem");
        assert_eq!(state.status('k'), KeyStatus::Correct);
    }

    #[test]
    fn duplicate_letter_takes_best_outcome_in_one_guess() {
        let mut state = KeyboardState::new();
        // Guess cadde vs target deniz: first d wrong location, second d
        // absent after the pool is consumed; the key shows the better one.
        absorb(&mut state, "cadde", "deniz");
        assert_eq!(state.status('d'), KeyStatus::WrongLocation);
    }
}
