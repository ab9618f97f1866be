//! Category listing command

use crate::core::CATEGORIES;
use crate::wordlists::WordRepository;

/// One category as seen by the player
pub struct CategorySummary {
    pub name: String,
    pub icon: Option<&'static str>,
    pub label: Option<&'static str>,
    pub word_count: usize,
}

impl CategorySummary {
    #[must_use]
    pub const fn is_playable(&self) -> bool {
        self.word_count > 0
    }

    /// Whether the category has an on-screen button
    #[must_use]
    pub const fn has_button(&self) -> bool {
        self.icon.is_some()
    }
}

/// Summarise categories: the button categories in button order, then any
/// extra categories the word list defines
#[must_use]
pub fn list_categories(words: &WordRepository) -> Vec<CategorySummary> {
    let buttons = CATEGORIES.iter().map(|category| CategorySummary {
        name: category.name.to_string(),
        icon: Some(category.icon),
        label: Some(category.label),
        word_count: words.words(category.name).len(),
    });

    let extras = words
        .categories()
        .into_iter()
        .filter(|name| !CATEGORIES.iter().any(|c| c.name == *name))
        .map(|name| CategorySummary {
            name: name.to_string(),
            icon: None,
            label: None,
            word_count: words.words(name).len(),
        });

    buttons.chain(extras).collect()
}
