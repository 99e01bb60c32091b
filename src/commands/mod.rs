//! Command implementations

pub mod evaluate;
pub mod simple;

pub use evaluate::{EvaluationReport, evaluate_guess};
pub use simple::run_simple;
