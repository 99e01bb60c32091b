//! Game session orchestration
//!
//! The state machine driving a single game, plus the keyboard status
//! aggregation consumed by the presentation layer.

mod game;
mod keyboard;

pub use game::{GameSession, GameStatus, GuessRecord, MAX_ATTEMPTS, SubmitError, SubmitOutcome};
pub use keyboard::{KeyStatus, KeyboardState};
