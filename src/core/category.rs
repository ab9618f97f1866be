//! Word categories shown as icon buttons

/// A category of words with its on-screen icon
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Category {
    pub name: &'static str,
    pub icon: &'static str,
    pub label: &'static str,
}

/// The categories offered by the game, in button order
pub const CATEGORIES: [Category; 4] = [
    Category {
        name: "animals",
        icon: "🐶",
        label: "חיות",
    },
    Category {
        name: "colors",
        icon: "🎨",
        label: "צבעים",
    },
    Category {
        name: "food",
        icon: "🍎",
        label: "אוכל",
    },
    Category {
        name: "objects",
        icon: "🔑",
        label: "חפצים",
    },
];

/// Category a fresh session starts in
pub const DEFAULT_CATEGORY: &str = "animals";

impl Category {
    /// Find a static category by name
    #[must_use]
    pub fn by_name(name: &str) -> Option<&'static Self> {
        CATEGORIES.iter().find(|category| category.name == name)
    }

    /// Find a static category by its 1-based button number
    #[must_use]
    pub fn by_number(number: usize) -> Option<&'static Self> {
        number.checked_sub(1).and_then(|index| CATEGORIES.get(index))
    }
}
