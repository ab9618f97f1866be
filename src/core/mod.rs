//! Core domain types for the game
//!
//! Words, categories and the round state machine. Nothing here performs I/O,
//! so every type can be tested on its own.

mod category;
mod round;
mod word;

pub use category::{CATEGORIES, Category, DEFAULT_CATEGORY};
pub use round::{Outcome, Round, RoundStatus};
pub use word::{Word, WordError, is_hebrew_letter};

/// Number of letters in every word
pub const WORD_LENGTH: usize = 4;

/// Number of guesses allowed per round
pub const MAX_ROWS: usize = 6;
