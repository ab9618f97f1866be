//! Hebrew Wordle for kids
//!
//! A four-letter Hebrew word-guessing game with word categories and
//! persisted win/loss counters, played in the terminal.
//!
//! # Quick Start
//!
//! ```rust
//! use hebrew_wordle::game::{Session, VICTORY_MESSAGE};
//! use hebrew_wordle::storage::MemoryStore;
//! use hebrew_wordle::wordlists::loader::from_json;
//! use rand::{SeedableRng, rngs::StdRng};
//!
//! let words = from_json(r#"{"animals": ["דגים"]}"#).unwrap();
//! let mut session = Session::new(words, MemoryStore::default(), StdRng::seed_from_u64(1));
//! session.reset_game("animals").unwrap();
//!
//! for ch in "דגים".chars() {
//!     session.add_letter(ch);
//! }
//! session.submit_guess();
//! assert_eq!(session.message(), VICTORY_MESSAGE);
//! ```

// Core domain types
pub mod core;

// Round driving and stats bookkeeping
pub mod game;

// Word lists
pub mod wordlists;

// Stats persistence
pub mod storage;

// Runtime configuration
pub mod config;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;
