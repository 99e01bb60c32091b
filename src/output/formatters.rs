//! Formatting utilities for terminal output

use crate::core::{Evaluation, LetterOutcome, WORD_LENGTH, Word, display_upper};
use crate::session::{GuessRecord, KeyStatus, KeyboardState};
use colored::Colorize;

/// Format an evaluation as an emoji row, position order
#[must_use]
pub fn evaluation_to_emoji(evaluation: &Evaluation) -> String {
    evaluation
        .outcomes()
        .iter()
        .map(|outcome| match outcome {
            LetterOutcome::Correct => '🟩',
            LetterOutcome::WrongLocation => '🟨',
            LetterOutcome::Absent => '⬜',
        })
        .collect()
}

/// Format a finished game's history as a shareable emoji grid
#[must_use]
pub fn share_grid(history: &[GuessRecord]) -> String {
    history
        .iter()
        .map(|record| evaluation_to_emoji(&record.evaluation))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Format a guess as colored uppercase tiles
///
/// Green for Correct, yellow for WrongLocation, dimmed for Absent.
#[must_use]
pub fn colored_guess(word: &Word, evaluation: &Evaluation) -> String {
    let mut out = String::new();
    for i in 0..WORD_LENGTH {
        let tile = format!(" {} ", display_upper(word.letter_at(i)));
        let tile = match evaluation.outcome(i) {
            LetterOutcome::Correct => tile.black().on_green().bold(),
            LetterOutcome::WrongLocation => tile.black().on_yellow().bold(),
            LetterOutcome::Absent => tile.white().on_bright_black(),
        };
        out.push_str(&tile.to_string());
    }
    out
}

/// Format the whole alphabet colored by aggregated key status
///
/// Letters keep alphabet order; statuses come from the escalate-only merge.
#[must_use]
pub fn colored_keyboard(state: &KeyboardState) -> String {
    use crate::core::ALPHABET;

    let mut out = String::new();
    for (i, &letter) in ALPHABET.iter().enumerate() {
        if i > 0 {
            out.push(' ');
        }
        let key = display_upper(letter).to_string();
        let key = match state.status(letter) {
            KeyStatus::Correct => key.black().on_green().bold(),
            KeyStatus::WrongLocation => key.black().on_yellow().bold(),
            KeyStatus::Absent => key.bright_black(),
            KeyStatus::Unused => key.white(),
        };
        out.push_str(&key.to_string());
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn eval(guess: &str, target: &str) -> (Word, Evaluation) {
        let guess = Word::new(guess).unwrap();
        let target = Word::new(target).unwrap();
        let evaluation = Evaluation::score(&guess, &target);
        (guess, evaluation)
    }

    #[test]
    fn emoji_all_green_on_win() {
        let (_, e) = eval("kalem", "kalem");
        assert_eq!(evaluation_to_emoji(&e), "🟩🟩🟩🟩🟩");
    }

    #[test]
    fn emoji_all_gray_on_miss() {
        let (_, e) = eval("çorba", "deniz");
        assert_eq!(evaluation_to_emoji(&e), "⬜⬜⬜⬜⬜");
    }

    #[test]
    fn emoji_mixed_row() {
        // sokak vs kalem: both k and a misplaced once, duplicates gray
        let (_, e) = eval("sokak", "kalem");
        assert_eq!(evaluation_to_emoji(&e), "⬜⬜🟨🟨⬜");
    }

    #[test]
    fn share_grid_one_row_per_guess() {
        let (w1, e1) = eval("deniz", "kalem");
        let (w2, e2) = eval("kalem", "kalem");
        let history = vec![
            GuessRecord {
                word: w1,
                evaluation: e1,
            },
            GuessRecord {
                word: w2,
                evaluation: e2,
            },
        ];

        let grid = share_grid(&history);
        assert_eq!(grid.lines().count(), 2);
        assert_eq!(grid.lines().last().unwrap(), "🟩🟩🟩🟩🟩");
    }

    #[test]
    fn colored_guess_uses_display_uppercase() {
        let (w, e) = eval("kitap", "kitap");
        let line = colored_guess(&w, &e);
        // Dotted i renders as İ
        assert!(line.contains('İ'));
        assert!(!line.contains('I'));
    }
}
