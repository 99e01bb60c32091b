//! Offline guess evaluation command
//!
//! Scores a single guess against a given target without starting a game.
//! Useful for checking how the duplicate-letter rules land on a concrete
//! pair.

use crate::core::{Evaluation, Word};

/// Result of evaluating one guess against one target
pub struct EvaluationReport {
    pub guess: Word,
    pub target: Word,
    pub evaluation: Evaluation,
}

/// Evaluate a guess against a target word
///
/// # Errors
///
/// Returns an error if either string is not a valid 5-letter Turkish word.
pub fn evaluate_guess(guess: &str, target: &str) -> Result<EvaluationReport, String> {
    let guess = Word::new(guess).map_err(|e| format!("Geçersiz tahmin: {e}"))?;
    let target = Word::new(target).map_err(|e| format!("Geçersiz hedef: {e}"))?;

    let evaluation = Evaluation::score(&guess, &target);

    Ok(EvaluationReport {
        guess,
        target,
        evaluation,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::LetterOutcome;

    #[test]
    fn evaluate_valid_pair() {
        let report = evaluate_guess("allak", "elmas").unwrap();

        assert_eq!(report.guess.text(), "allak");
        assert_eq!(report.target.text(), "elmas");
        assert_eq!(report.evaluation.outcome(1), LetterOutcome::Correct);
    }

    #[test]
    fn evaluate_normalizes_case() {
        let report = evaluate_guess("KALEM", "kalem").unwrap();
        assert!(report.evaluation.is_win());
    }

    #[test]
    fn evaluate_rejects_bad_input() {
        assert!(evaluate_guess("kale", "kalem").is_err());
        assert!(evaluate_guess("kalem", "w1234").is_err());
    }
}
