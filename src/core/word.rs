//! Word representation
//!
//! A Word stores a validated 5-letter Turkish word in normalized lowercase
//! form.

use super::letter::{Letter, fold_lower};
use rustc_hash::FxHashMap;
use std::fmt;

/// Number of letters in every word of the game
pub const WORD_LENGTH: usize = 5;

/// A 5-letter Turkish word, lowercase-normalized
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Word {
    text: String,
    letters: [char; WORD_LENGTH],
}

/// Error type for invalid words
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WordError {
    InvalidLength(usize),
    InvalidLetter(char),
}

impl fmt::Display for WordError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidLength(len) => {
                write!(f, "Word must be exactly {WORD_LENGTH} letters, got {len}")
            }
            Self::InvalidLetter(ch) => {
                write!(f, "Character '{ch}' is not a Turkish letter")
            }
        }
    }
}

impl std::error::Error for WordError {}

impl Word {
    /// Create a new Word from a string
    ///
    /// Input is folded to Turkish lowercase, so `"KALEM"` and `"kalem"`
    /// produce equal words.
    ///
    /// # Errors
    /// Returns `WordError` if:
    /// - The character count is not exactly 5
    /// - Any character falls outside the Turkish alphabet
    ///
    /// # Examples
    /// ```
    /// use kelimele::core::Word;
    ///
    /// let word = Word::new("KALEM").unwrap();
    /// assert_eq!(word.text(), "kalem");
    ///
    /// assert!(Word::new("uzun kelime").is_err());
    /// assert!(Word::new("kal3m").is_err());
    /// ```
    pub fn new(text: impl AsRef<str>) -> Result<Self, WordError> {
        let raw = text.as_ref();

        let count = raw.chars().count();
        if count != WORD_LENGTH {
            return Err(WordError::InvalidLength(count));
        }

        let mut letters = ['\0'; WORD_LENGTH];
        for (slot, ch) in letters.iter_mut().zip(raw.chars()) {
            *slot = Letter::new(ch)
                .ok_or(WordError::InvalidLetter(ch))?
                .as_char();
        }

        Ok(Self {
            text: letters.iter().collect(),
            letters,
        })
    }

    /// Build a Word from exactly 5 normalized letters
    ///
    /// Infallible counterpart of [`Word::new`] for callers that already
    /// hold validated [`Letter`]s (the guess buffer).
    #[must_use]
    pub fn from_letters(letters: [Letter; WORD_LENGTH]) -> Self {
        let letters = letters.map(Letter::as_char);
        Self {
            text: letters.iter().collect(),
            letters,
        }
    }

    /// Get the word as a string slice
    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Get the word as a letter array
    #[inline]
    #[must_use]
    pub const fn letters(&self) -> &[char; WORD_LENGTH] {
        &self.letters
    }

    /// Get the letter at a specific position (0-4)
    ///
    /// # Panics
    /// Panics if position >= 5
    #[inline]
    #[must_use]
    pub const fn letter_at(&self, position: usize) -> char {
        self.letters[position]
    }

    /// Fold arbitrary input the same way word construction does
    ///
    /// Used for case-insensitive comparisons against raw strings.
    #[must_use]
    pub fn fold_text(raw: &str) -> String {
        raw.chars().map(fold_lower).collect()
    }

    /// Get the count of each letter in the word
    ///
    /// Used by evaluation for duplicate-letter bookkeeping.
    #[inline]
    pub(crate) fn letter_counts(&self) -> FxHashMap<char, u8> {
        let mut counts = FxHashMap::default();
        for &ch in &self.letters {
            *counts.entry(ch).or_insert(0) += 1;
        }
        counts
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}
