//! Display functions for command results

use super::formatters::{colored_guess, evaluation_to_emoji};
use crate::commands::EvaluationReport;
use crate::core::display_upper_word;
use colored::Colorize;

/// Print the result of evaluating one guess against one target
pub fn print_evaluation_report(report: &EvaluationReport) {
    println!("\n{}", "─".repeat(60).cyan());
    println!(
        "Tahmin: {}   Hedef: {}",
        display_upper_word(report.guess.text()).bright_yellow().bold(),
        display_upper_word(report.target.text()).bright_white().bold()
    );
    println!("{}", "─".repeat(60).cyan());

    println!("\n  {}", colored_guess(&report.guess, &report.evaluation));
    println!("  {}\n", evaluation_to_emoji(&report.evaluation));

    if report.evaluation.is_win() {
        println!("{}", "✅ Tahmin hedefle aynı".green().bold());
    } else {
        println!(
            "{}",
            format!("{} harf doğru yerde", report.evaluation.count_correct()).bright_white()
        );
    }
    println!();
}
