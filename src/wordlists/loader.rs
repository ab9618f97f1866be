//! Word list loading utilities
//!
//! Parses the `{category: [word, ...]}` JSON document the game reads its
//! words from.

use super::WordRepository;
use std::collections::BTreeMap;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Why a word source could not be turned into a usable repository
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("cannot read word list {path}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("word list is not a JSON object of category -> word array")]
    Malformed(#[from] serde_json::Error),

    #[error("category '{0}' has no playable words")]
    MissingCategory(String),
}

/// Parse a word repository from JSON text
///
/// # Errors
///
/// Returns `LoadError::Malformed` if the text is not an object mapping
/// category names to arrays of strings.
///
/// # Examples
/// ```
/// use hebrew_wordle::wordlists::loader::from_json;
///
/// let words = from_json(r#"{"animals": ["דגים"]}"#).unwrap();
/// assert_eq!(words.words("animals").len(), 1);
/// ```
pub fn from_json(text: &str) -> Result<WordRepository, LoadError> {
    let lists: BTreeMap<String, Vec<String>> = serde_json::from_str(text)?;
    Ok(WordRepository::from_lists(lists))
}

/// Load a word repository from a JSON file
///
/// # Errors
///
/// Returns `LoadError::Io` if the file cannot be read and
/// `LoadError::Malformed` if its contents have the wrong shape.
pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<WordRepository, LoadError> {
    let path = path.as_ref();
    let content = fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let repository = from_json(&content)?;
    tracing::info!(
        path = %path.display(),
        categories = repository.categories().len(),
        "loaded word lists"
    );
    Ok(repository)
}
