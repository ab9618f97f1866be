//! Runtime configuration
//!
//! Resolved from the command line in `main.rs`; also owns the policy for
//! what to do when the word source is broken.

use crate::core::{CATEGORIES, DEFAULT_CATEGORY};
use crate::storage::AppPaths;
use crate::wordlists::{LoadError, WordRepository, loader};
use std::path::PathBuf;
use tracing::Level;

/// Where words come from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WordSource {
    Embedded,
    File(PathBuf),
}

#[derive(Debug, Clone)]
pub struct Config {
    pub words: WordSource,
    pub paths: AppPaths,
    pub category: String,
    pub auto_submit: bool,
    /// Keep playing with whatever words are available instead of failing
    pub lenient: bool,
    pub log_level: Level,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            words: WordSource::Embedded,
            paths: AppPaths::from_platform(),
            category: DEFAULT_CATEGORY.to_string(),
            auto_submit: false,
            lenient: false,
            log_level: Level::INFO,
        }
    }
}

impl Config {
    /// Load the configured word lists
    ///
    /// Strict mode fails on an unreadable source or a missing category.
    /// Lenient mode logs the problem, falls back to the embedded lists when
    /// the file is unusable, and leaves missing categories unplayable.
    ///
    /// # Errors
    ///
    /// Returns `LoadError` in strict mode only.
    pub fn load_words(&self) -> Result<WordRepository, LoadError> {
        let words = match (&self.words, self.lenient) {
            (WordSource::Embedded, _) => WordRepository::embedded(),
            (WordSource::File(path), false) => loader::load_from_file(path)?,
            (WordSource::File(path), true) => loader::load_from_file(path).unwrap_or_else(|err| {
                tracing::error!("{err}; using bundled word lists");
                WordRepository::embedded()
            }),
        };

        match words.require(&CATEGORIES) {
            Ok(()) => Ok(words),
            Err(err) if self.lenient => {
                tracing::warn!("{err}; continuing without it");
                Ok(words)
            }
            Err(err) => Err(err),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn write_words(name: &str, json: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!("hebrew-wordle-config-{}", std::process::id()));
        fs::create_dir_all(&dir).unwrap();
        let path = dir.join(name);
        fs::write(&path, json).unwrap();
        path
    }

    fn config(words: WordSource, lenient: bool) -> Config {
        Config {
            words,
            lenient,
            ..Config::default()
        }
    }

    #[test]
    fn embedded_words_load() {
        let words = config(WordSource::Embedded, false).load_words().unwrap();
        assert!(!words.is_empty());
    }

    #[test]
    fn strict_fails_on_missing_file() {
        let path = std::env::temp_dir().join("hebrew-wordle-config-absent.json");
        let err = config(WordSource::File(path), false).load_words().unwrap_err();
        assert!(matches!(err, LoadError::Io { .. }));
    }

    #[test]
    fn lenient_falls_back_to_embedded() {
        let path = write_words("broken.json", "not json");
        let words = config(WordSource::File(path), true).load_words().unwrap();
        assert!(words.is_playable("animals"));
    }

    #[test]
    fn strict_requires_every_category() {
        let path = write_words("partial-strict.json", r#"{"animals": ["דגים"]}"#);
        let err = config(WordSource::File(path), false).load_words().unwrap_err();
        assert!(matches!(err, LoadError::MissingCategory(_)));
    }

    #[test]
    fn lenient_keeps_partial_lists() {
        let path = write_words("partial-lenient.json", r#"{"animals": ["דגים"]}"#);
        let words = config(WordSource::File(path), true).load_words().unwrap();
        assert_eq!(words.words("animals").len(), 1);
        assert!(!words.is_playable("colors"));
    }
}
