//! Hebrew word representation
//!
//! A Word stores a fixed-length Hebrew word as an array of letters so guesses
//! can be compared without re-parsing the UTF-8 text.

use super::WORD_LENGTH;
use std::fmt;

/// First letter of the Hebrew alphabet (alef)
const ALEF: char = '\u{05D0}';
/// Last letter of the Hebrew alphabet (tav)
const TAV: char = '\u{05EA}';

/// A fixed-length Hebrew word
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Word {
    text: String,
    letters: [char; WORD_LENGTH],
}

/// Error type for invalid words
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WordError {
    InvalidLength(usize),
    InvalidCharacters,
}

impl fmt::Display for WordError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidLength(len) => {
                write!(f, "Word must be exactly {WORD_LENGTH} letters, got {len}")
            }
            Self::InvalidCharacters => write!(f, "Word must contain only Hebrew letters"),
        }
    }
}

impl std::error::Error for WordError {}

/// Check whether a character is a Hebrew letter, final forms included
#[inline]
#[must_use]
pub const fn is_hebrew_letter(ch: char) -> bool {
    ch >= ALEF && ch <= TAV
}

impl Word {
    /// Create a new Word from a string
    ///
    /// Surrounding whitespace is ignored. Length is counted in characters,
    /// not bytes.
    ///
    /// # Errors
    /// Returns `WordError` if:
    /// - Length is not exactly `WORD_LENGTH`
    /// - Contains anything other than Hebrew letters
    ///
    /// # Examples
    /// ```
    /// use hebrew_wordle::core::Word;
    ///
    /// let word = Word::new("דגים").unwrap();
    /// assert_eq!(word.text(), "דגים");
    ///
    /// assert!(Word::new("דג").is_err());
    /// assert!(Word::new("fish").is_err());
    /// ```
    pub fn new(text: impl AsRef<str>) -> Result<Self, WordError> {
        let text = text.as_ref().trim();

        let chars: Vec<char> = text.chars().collect();
        let letters: [char; WORD_LENGTH] = chars
            .as_slice()
            .try_into()
            .map_err(|_| WordError::InvalidLength(chars.len()))?;

        if !letters.iter().all(|&ch| is_hebrew_letter(ch)) {
            return Err(WordError::InvalidCharacters);
        }

        Ok(Self {
            text: text.to_string(),
            letters,
        })
    }

    /// Get the word as a string slice
    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Get the word's letters in reading order
    #[inline]
    #[must_use]
    pub const fn letters(&self) -> &[char; WORD_LENGTH] {
        &self.letters
    }

    /// Check whether a sequence of entered letters spells this word exactly
    #[must_use]
    pub fn matches(&self, guess: &[char]) -> bool {
        self.letters.as_slice() == guess
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn word_creation_valid() {
        let word = Word::new("דגים").unwrap();
        assert_eq!(word.text(), "דגים");
        assert_eq!(word.letters(), &['ד', 'ג', 'י', 'ם']);
    }

    #[test]
    fn word_creation_trims_whitespace() {
        let word = Word::new("  חתול\n").unwrap();
        assert_eq!(word.text(), "חתול");
    }

    #[test]
    fn word_creation_invalid_length() {
        assert!(matches!(
            Word::new("תרנגול"),
            Err(WordError::InvalidLength(6))
        ));
        assert!(matches!(Word::new("כלב"), Err(WordError::InvalidLength(3))));
        assert!(matches!(Word::new(""), Err(WordError::InvalidLength(0))));
    }

    #[test]
    fn word_length_counts_chars_not_bytes() {
        // Four Hebrew letters are eight UTF-8 bytes
        assert_eq!("דגים".len(), 8);
        assert!(Word::new("דגים").is_ok());
    }

    #[test]
    fn word_creation_invalid_characters() {
        assert!(Word::new("fish").is_err()); // Latin
        assert!(Word::new("דג1ם").is_err()); // Digit
        assert!(Word::new("דג ם").is_err()); // Inner space
        assert!(Word::new("דגי!").is_err()); // Punctuation
    }

    #[test]
    fn final_forms_are_letters() {
        for ch in ['ך', 'ם', 'ן', 'ף', 'ץ'] {
            assert!(is_hebrew_letter(ch), "{ch} should be a letter");
        }
        assert!(!is_hebrew_letter('a'));
        assert!(!is_hebrew_letter('\u{05B4}')); // Niqqud (hiriq)
    }

    #[test]
    fn word_matches_exact_letters_only() {
        let word = Word::new("דגים").unwrap();
        assert!(word.matches(&['ד', 'ג', 'י', 'ם']));
        assert!(!word.matches(&['ד', 'ג', 'י', 'מ'])); // Non-final mem
        assert!(!word.matches(&['ד', 'ג', 'י']));
        assert!(!word.matches(&[]));
    }

    #[test]
    fn word_display() {
        let word = Word::new("כחול").unwrap();
        assert_eq!(format!("{word}"), "כחול");
    }

    #[test]
    fn word_equality() {
        let word1 = Word::new("ירוק").unwrap();
        let word2 = Word::new(" ירוק ").unwrap();
        let word3 = Word::new("אדום").unwrap();

        assert_eq!(word1, word2);
        assert_ne!(word1, word3);
    }
}
