//! Core domain types for the game
//!
//! This module contains the fundamental domain types with zero external I/O.
//! All types here are pure, testable, and have clear invariants.

mod buffer;
mod evaluation;
mod letter;
mod word;

pub use buffer::GuessBuffer;
pub use evaluation::{Evaluation, LetterOutcome};
pub use letter::{ALPHABET, Letter, display_upper, display_upper_word, fold_lower};
pub use word::{WORD_LENGTH, Word, WordError};
