//! Word lists for the game
//!
//! Provides the category word repository, a JSON loader for custom lists and
//! the default lists compiled into the binary.

mod embedded;
pub mod loader;
mod repository;

pub use embedded::EMBEDDED;
pub use loader::LoadError;
pub use repository::WordRepository;
