//! Guess evaluation
//!
//! Scoring a guess against the target word produces one outcome per letter
//! position. Duplicate letters are handled with remaining-count bookkeeping:
//! a letter in the guess is only credited as many times as it occurs in the
//! target, exact positions first.

use super::word::{WORD_LENGTH, Word};

/// Per-position result of evaluating one guessed letter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LetterOutcome {
    /// Right letter in the right position
    Correct,
    /// Letter occurs in the target, at a different position
    WrongLocation,
    /// Letter does not occur in the target (counting consumed duplicates)
    Absent,
}

/// Evaluation of a full guess: 5 outcomes in position order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Evaluation([LetterOutcome; WORD_LENGTH]);

impl Evaluation {
    /// Score `guess` against `target`
    ///
    /// # Algorithm
    /// 1. First pass: mark exact position matches Correct and remove each
    ///    matched letter from the target's available pool.
    /// 2. Second pass, left to right: a not-yet-Correct letter with a
    ///    remaining occurrence in the pool is WrongLocation (consuming one
    ///    occurrence); otherwise it is Absent.
    ///
    /// A bare "does the target contain this letter" check would over-credit
    /// repeated guess letters; the pool makes the credit per occurrence.
    ///
    /// Total for any two well-formed words; there is no failure mode.
    ///
    /// # Examples
    /// ```
    /// use kelimele::core::{Evaluation, LetterOutcome, Word};
    ///
    /// let guess = Word::new("sokak").unwrap();
    /// let target = Word::new("kalem").unwrap();
    /// let eval = Evaluation::score(&guess, &target);
    ///
    /// // The first k is misplaced and consumes the target's only k,
    /// // so the second k is absent.
    /// assert_eq!(eval.outcome(2), LetterOutcome::WrongLocation);
    /// assert_eq!(eval.outcome(4), LetterOutcome::Absent);
    /// ```
    #[must_use]
    pub fn score(guess: &Word, target: &Word) -> Self {
        let mut outcomes = [LetterOutcome::Absent; WORD_LENGTH];
        let mut available = target.letter_counts();

        // First pass: exact position matches
        for i in 0..WORD_LENGTH {
            if guess.letter_at(i) == target.letter_at(i) {
                outcomes[i] = LetterOutcome::Correct;

                // Remove from available pool
                if let Some(count) = available.get_mut(&guess.letter_at(i)) {
                    *count = count.saturating_sub(1);
                }
            }
        }

        // Second pass: misplaced letters, while the pool still has them
        for i in 0..WORD_LENGTH {
            if outcomes[i] != LetterOutcome::Correct {
                let letter = guess.letter_at(i);
                if let Some(count) = available.get_mut(&letter)
                    && *count > 0
                {
                    outcomes[i] = LetterOutcome::WrongLocation;
                    *count -= 1;
                }
            }
        }

        Self(outcomes)
    }

    /// The outcome at a position (0-4)
    ///
    /// # Panics
    /// Panics if position >= 5
    #[inline]
    #[must_use]
    pub const fn outcome(self, position: usize) -> LetterOutcome {
        self.0[position]
    }

    /// All 5 outcomes in position order
    #[inline]
    #[must_use]
    pub const fn outcomes(&self) -> &[LetterOutcome; WORD_LENGTH] {
        &self.0
    }

    /// True when every position is Correct
    #[must_use]
    pub fn is_win(self) -> bool {
        self.0.iter().all(|&o| o == LetterOutcome::Correct)
    }

    /// Number of Correct positions
    #[must_use]
    pub fn count_correct(self) -> usize {
        self.0
            .iter()
            .filter(|&&o| o == LetterOutcome::Correct)
            .count()
    }
}

impl std::ops::Index<usize> for Evaluation {
    type Output = LetterOutcome;

    fn index(&self, position: usize) -> &LetterOutcome {
        &self.0[position]
    }
}
