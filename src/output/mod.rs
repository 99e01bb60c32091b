//! Terminal output formatting

pub mod display;
pub mod formatters;

pub use display::print_evaluation_report;
pub use formatters::{colored_guess, colored_keyboard, evaluation_to_emoji, share_grid};
