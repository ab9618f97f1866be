//! Round state machine
//!
//! A round owns the target word and the player's progress through the grid.
//! It performs no I/O: every input returns an [`Outcome`] and the caller
//! decides what to persist or display.

use super::word::{Word, is_hebrew_letter};
use super::{MAX_ROWS, WORD_LENGTH};

/// Where a round stands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoundStatus {
    InProgress,
    Won,
    Lost,
}

impl RoundStatus {
    #[inline]
    #[must_use]
    pub const fn is_over(self) -> bool {
        !matches!(self, Self::InProgress)
    }
}

/// Result of submitting the current row
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Fewer than `WORD_LENGTH` letters entered; nothing changed
    Incomplete,
    /// The round had already ended; nothing changed
    Finished,
    /// Wrong guess with rows to spare; play continues on `row`
    Advanced { row: usize },
    /// Correct guess after `attempts` rows
    Won { attempts: usize },
    /// Wrong guess on the last row
    Lost { answer: Word },
}

/// A single game round
#[derive(Debug, Clone)]
pub struct Round {
    target: Word,
    row: usize,
    letters: Vec<char>,
    guesses: Vec<String>,
    status: RoundStatus,
}

impl Round {
    #[must_use]
    pub fn new(target: Word) -> Self {
        Self {
            target,
            row: 0,
            letters: Vec::with_capacity(WORD_LENGTH),
            guesses: Vec::with_capacity(MAX_ROWS),
            status: RoundStatus::InProgress,
        }
    }

    /// Append a letter to the current row
    ///
    /// Silently ignored once the row is full, after the round ends, or for
    /// anything that is not a Hebrew letter. Returns whether the letter was
    /// taken.
    pub fn add_letter(&mut self, ch: char) -> bool {
        if self.status.is_over() || self.letters.len() >= WORD_LENGTH || !is_hebrew_letter(ch) {
            return false;
        }
        self.letters.push(ch);
        true
    }

    /// Remove the last letter of the current row
    pub fn erase_letter(&mut self) -> bool {
        if self.status.is_over() {
            return false;
        }
        self.letters.pop().is_some()
    }

    /// Check the current row against the target
    pub fn submit_guess(&mut self) -> Outcome {
        if self.status.is_over() {
            return Outcome::Finished;
        }
        if self.letters.len() < WORD_LENGTH {
            return Outcome::Incomplete;
        }

        let correct = self.target.matches(&self.letters);
        self.guesses.push(self.letters.iter().collect());

        if correct {
            self.status = RoundStatus::Won;
            return Outcome::Won {
                attempts: self.row + 1,
            };
        }

        if self.row >= MAX_ROWS - 1 {
            self.status = RoundStatus::Lost;
            return Outcome::Lost {
                answer: self.target.clone(),
            };
        }

        self.row += 1;
        self.letters.clear();
        Outcome::Advanced { row: self.row }
    }

    #[inline]
    #[must_use]
    pub const fn status(&self) -> RoundStatus {
        self.status
    }

    #[inline]
    #[must_use]
    pub const fn is_over(&self) -> bool {
        self.status.is_over()
    }

    /// Index of the row being filled (or the last row played once over)
    #[inline]
    #[must_use]
    pub const fn row(&self) -> usize {
        self.row
    }

    /// Letters entered on the current row
    #[inline]
    #[must_use]
    pub fn letters(&self) -> &[char] {
        &self.letters
    }

    /// Rows already submitted, oldest first
    #[inline]
    #[must_use]
    pub fn guesses(&self) -> &[String] {
        &self.guesses
    }

    #[inline]
    #[must_use]
    pub const fn target(&self) -> &Word {
        &self.target
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn round(target: &str) -> Round {
        Round::new(Word::new(target).unwrap())
    }

    fn type_word(round: &mut Round, text: &str) {
        for ch in text.chars() {
            round.add_letter(ch);
        }
    }

    #[test]
    fn new_round_starts_in_progress() {
        let round = round("דגים");
        assert_eq!(round.status(), RoundStatus::InProgress);
        assert_eq!(round.row(), 0);
        assert!(round.letters().is_empty());
        assert!(round.guesses().is_empty());
        assert!(!round.is_over());
    }

    #[test]
    fn add_letter_clamps_to_word_length() {
        let mut round = round("דגים");
        type_word(&mut round, "אבגד");
        assert!(!round.add_letter('ה'));
        assert_eq!(round.letters(), &['א', 'ב', 'ג', 'ד']);
    }

    #[test]
    fn add_letter_rejects_non_hebrew() {
        let mut round = round("דגים");
        assert!(!round.add_letter('x'));
        assert!(!round.add_letter('7'));
        assert!(round.letters().is_empty());
    }

    #[test]
    fn erase_letter_removes_last() {
        let mut round = round("דגים");
        type_word(&mut round, "דג");
        assert!(round.erase_letter());
        assert_eq!(round.letters(), &['ד']);
        assert!(round.erase_letter());
        assert!(!round.erase_letter());
    }

    #[test]
    fn incomplete_row_does_not_transition() {
        let mut round = round("דגים");
        type_word(&mut round, "דגי");
        assert_eq!(round.submit_guess(), Outcome::Incomplete);
        assert_eq!(round.status(), RoundStatus::InProgress);
        assert_eq!(round.row(), 0);
        assert_eq!(round.letters().len(), 3);
    }

    #[test]
    fn exact_guess_wins() {
        let mut round = round("דגים");
        type_word(&mut round, "דגים");
        assert_eq!(round.submit_guess(), Outcome::Won { attempts: 1 });
        assert_eq!(round.status(), RoundStatus::Won);
        assert!(round.is_over());
    }

    #[test]
    fn wrong_guess_advances_row() {
        let mut round = round("דגים");
        type_word(&mut round, "חתול");
        assert_eq!(round.submit_guess(), Outcome::Advanced { row: 1 });
        assert_eq!(round.row(), 1);
        assert!(round.letters().is_empty());
        assert_eq!(round.guesses(), &["חתול".to_string()]);
    }

    #[test]
    fn six_wrong_guesses_lose() {
        let mut round = round("דגים");
        for attempt in 0..MAX_ROWS {
            type_word(&mut round, "חתול");
            let outcome = round.submit_guess();
            if attempt < MAX_ROWS - 1 {
                assert_eq!(outcome, Outcome::Advanced { row: attempt + 1 });
            } else {
                assert_eq!(
                    outcome,
                    Outcome::Lost {
                        answer: Word::new("דגים").unwrap()
                    }
                );
            }
            assert!(round.row() <= MAX_ROWS - 1);
        }
        assert_eq!(round.status(), RoundStatus::Lost);
        assert_eq!(round.target().text(), "דגים");
        assert_eq!(round.guesses().len(), MAX_ROWS);
    }

    #[test]
    fn win_on_last_row() {
        let mut round = round("דגים");
        for _ in 0..MAX_ROWS - 1 {
            type_word(&mut round, "חתול");
            round.submit_guess();
        }
        type_word(&mut round, "דגים");
        assert_eq!(
            round.submit_guess(),
            Outcome::Won {
                attempts: MAX_ROWS
            }
        );
    }

    #[test]
    fn finished_round_ignores_input() {
        let mut round = round("דגים");
        type_word(&mut round, "דגים");
        round.submit_guess();

        assert!(!round.add_letter('א'));
        assert!(!round.erase_letter());
        assert_eq!(round.submit_guess(), Outcome::Finished);
        assert_eq!(round.status(), RoundStatus::Won);
    }
}
