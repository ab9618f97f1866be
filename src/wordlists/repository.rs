//! Category to word list mapping

use super::loader::LoadError;
use crate::core::{Category, Word};
use rand::Rng;
use rand::seq::IndexedRandom;
use rustc_hash::FxHashMap;

/// Immutable word lists keyed by category name
#[derive(Debug, Clone, Default)]
pub struct WordRepository {
    lists: FxHashMap<String, Vec<Word>>,
}

impl WordRepository {
    /// Build a repository from raw category lists
    ///
    /// Entries that are not valid words are skipped and logged. Order within
    /// each list is preserved.
    pub fn from_lists<I, C, W, S>(lists: I) -> Self
    where
        I: IntoIterator<Item = (C, W)>,
        C: Into<String>,
        W: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let lists = lists
            .into_iter()
            .map(|(category, words)| {
                let category = category.into();
                let words = words
                    .into_iter()
                    .filter_map(|text| match Word::new(text.as_ref()) {
                        Ok(word) => Some(word),
                        Err(err) => {
                            tracing::warn!(
                                category = %category,
                                word = text.as_ref(),
                                "skipping word: {err}"
                            );
                            None
                        }
                    })
                    .collect();
                (category, words)
            })
            .collect();

        Self { lists }
    }

    /// Word lists bundled into the binary
    #[must_use]
    pub fn embedded() -> Self {
        Self::from_lists(
            super::EMBEDDED
                .iter()
                .map(|&(category, words)| (category, words.iter().copied())),
        )
    }

    /// Draw a word uniformly at random from a category
    ///
    /// Returns `None` if the category is unknown or has no words.
    pub fn random_word<R: Rng + ?Sized>(&self, category: &str, rng: &mut R) -> Option<&Word> {
        self.words(category).choose(rng)
    }

    /// Words of a category, empty if the category is unknown
    #[must_use]
    pub fn words(&self, category: &str) -> &[Word] {
        self.lists.get(category).map_or(&[], Vec::as_slice)
    }

    /// Whether a category can start a round
    #[must_use]
    pub fn is_playable(&self, category: &str) -> bool {
        !self.words(category).is_empty()
    }

    /// Category names, sorted
    #[must_use]
    pub fn categories(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.lists.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    /// True if no category holds any word
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lists.values().all(Vec::is_empty)
    }

    /// Check that every given category has at least one word
    ///
    /// # Errors
    ///
    /// Returns `LoadError::MissingCategory` naming the first category that is
    /// absent or empty.
    pub fn require(&self, categories: &[Category]) -> Result<(), LoadError> {
        match categories.iter().find(|c| !self.is_playable(c.name)) {
            Some(category) => Err(LoadError::MissingCategory(category.name.to_string())),
            None => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::CATEGORIES;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn sample() -> WordRepository {
        WordRepository::from_lists([
            ("animals", vec!["דגים", "חתול", "ארנב"]),
            ("colors", vec![]),
        ])
    }

    #[test]
    fn random_word_is_member_of_category() {
        let words = sample();
        let mut rng = StdRng::seed_from_u64(42);

        for _ in 0..100 {
            let word = words.random_word("animals", &mut rng).unwrap();
            assert!(words.words("animals").contains(word));
        }
    }

    #[test]
    fn random_word_single_choice_is_deterministic() {
        let words = WordRepository::from_lists([("animals", ["דגים"])]);
        let mut rng = StdRng::seed_from_u64(7);

        for _ in 0..10 {
            assert_eq!(
                words.random_word("animals", &mut rng).map(Word::text),
                Some("דגים")
            );
        }
    }

    #[test]
    fn random_word_covers_the_list() {
        let words = sample();
        let mut rng = StdRng::seed_from_u64(1);
        let mut seen = rustc_hash::FxHashSet::default();

        for _ in 0..200 {
            seen.insert(words.random_word("animals", &mut rng).unwrap().text().to_string());
        }
        assert_eq!(seen.len(), 3);
    }

    #[test]
    fn random_word_missing_or_empty_category() {
        let words = sample();
        let mut rng = StdRng::seed_from_u64(0);

        assert!(words.random_word("colors", &mut rng).is_none());
        assert!(words.random_word("vehicles", &mut rng).is_none());
    }

    #[test]
    fn categories_sorted() {
        let words = WordRepository::from_lists([("food", ["פיצה"]), ("animals", ["דגים"])]);
        assert_eq!(words.categories(), vec!["animals", "food"]);
    }

    #[test]
    fn empty_repository() {
        assert!(WordRepository::default().is_empty());
        assert!(sample().words("vehicles").is_empty());
        assert!(!sample().is_empty());
    }

    #[test]
    fn require_reports_missing_category() {
        let err = sample().require(&CATEGORIES).unwrap_err();
        assert!(matches!(err, LoadError::MissingCategory(name) if name == "colors"));
    }

    #[test]
    fn embedded_covers_all_categories() {
        let words = WordRepository::embedded();
        assert!(words.require(&CATEGORIES).is_ok());
    }
}
