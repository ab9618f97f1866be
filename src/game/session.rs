//! Game session
//!
//! Ties a word repository, the stats store and the current round together.
//! The session is an ordinary value owned by whoever drives the game (the
//! TUI, the line-mode loop, or a test).

use crate::core::{Outcome, Round, WORD_LENGTH, Word};
use crate::storage::{KeyValueStore, StatsRecord, StatsStore};
use crate::wordlists::WordRepository;
use rand::rngs::StdRng;
use thiserror::Error;
use tracing::{debug, error, info, warn};

/// Shown when the round is won
pub const VICTORY_MESSAGE: &str = "ניצחת!";
/// Shown before the target word when the round is lost
pub const REVEAL_PREFIX: &str = "המילה הייתה: ";
/// Shown when a category has no words to draw from
pub const UNAVAILABLE_PREFIX: &str = "אין מילים בקטגוריה: ";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SessionError {
    #[error("category '{0}' has no words")]
    CategoryUnavailable(String),
}

/// What the status line should say
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Status {
    Playing,
    Victory,
    Revealed(Word),
    Unavailable(String),
}

impl Status {
    #[must_use]
    pub fn message(&self) -> String {
        match self {
            Self::Playing => String::new(),
            Self::Victory => VICTORY_MESSAGE.to_string(),
            Self::Revealed(word) => format!("{REVEAL_PREFIX}{word}"),
            Self::Unavailable(category) => format!("{UNAVAILABLE_PREFIX}{category}"),
        }
    }
}

pub struct Session<S> {
    words: WordRepository,
    stats_store: StatsStore<S>,
    stats: StatsRecord,
    round: Option<Round>,
    category: String,
    status: Status,
    rng: StdRng,
}

impl<S: KeyValueStore> Session<S> {
    /// Create a session with stats loaded from `store`
    ///
    /// No round is running until [`Session::reset_game`] is called.
    pub fn new(words: WordRepository, store: S, rng: StdRng) -> Self {
        let stats_store = StatsStore::new(store);
        let stats = stats_store.load();
        info!(wins = stats.wins, losses = stats.losses, "session started");

        Self {
            words,
            stats_store,
            stats,
            round: None,
            category: String::new(),
            status: Status::Playing,
            rng,
        }
    }

    /// Start a new round with a word drawn from `category`
    ///
    /// # Errors
    ///
    /// Returns `SessionError::CategoryUnavailable` if the category is unknown
    /// or empty. The previous round is discarded either way and the status
    /// line says why nothing can be played.
    pub fn reset_game(&mut self, category: &str) -> Result<(), SessionError> {
        category.clone_into(&mut self.category);

        let Some(target) = self.words.random_word(category, &mut self.rng).cloned() else {
            warn!(category, "cannot start round: no words");
            self.round = None;
            self.status = Status::Unavailable(category.to_string());
            return Err(SessionError::CategoryUnavailable(category.to_string()));
        };

        info!(category, "round started");
        self.round = Some(Round::new(target));
        self.status = Status::Playing;
        Ok(())
    }

    /// Start another round in the current category
    ///
    /// # Errors
    ///
    /// Same as [`Session::reset_game`].
    pub fn new_round(&mut self) -> Result<(), SessionError> {
        let category = self.category.clone();
        self.reset_game(&category)
    }

    /// Add a letter to the current row; see [`Round::add_letter`]
    pub fn add_letter(&mut self, ch: char) -> bool {
        let accepted = self.round.as_mut().is_some_and(|round| round.add_letter(ch));
        debug!(%ch, accepted, "letter");
        accepted
    }

    pub fn erase_letter(&mut self) -> bool {
        self.round.as_mut().is_some_and(Round::erase_letter)
    }

    /// Submit the current row and apply the result to stats and status
    pub fn submit_guess(&mut self) -> Outcome {
        let Some(round) = self.round.as_mut() else {
            return Outcome::Finished;
        };

        let outcome = round.submit_guess();
        match &outcome {
            Outcome::Won { attempts } => {
                info!(attempts, "round won");
                self.stats.record_win();
                self.status = Status::Victory;
                self.persist_stats();
            }
            Outcome::Lost { answer } => {
                info!(answer = %answer, "round lost");
                self.stats.record_loss();
                self.status = Status::Revealed(answer.clone());
                self.persist_stats();
            }
            Outcome::Advanced { row } => debug!(row, "wrong guess"),
            Outcome::Incomplete | Outcome::Finished => {}
        }
        outcome
    }

    fn persist_stats(&mut self) {
        if let Err(err) = self.stats_store.save(&self.stats) {
            error!("failed to save stats: {err}");
        }
    }

    /// True when the current row holds a full word awaiting submission
    #[must_use]
    pub fn is_row_full(&self) -> bool {
        self.round
            .as_ref()
            .is_some_and(|round| !round.is_over() && round.letters().len() == WORD_LENGTH)
    }

    #[must_use]
    pub const fn round(&self) -> Option<&Round> {
        self.round.as_ref()
    }

    #[must_use]
    pub const fn stats(&self) -> StatsRecord {
        self.stats
    }

    #[must_use]
    pub const fn status(&self) -> &Status {
        &self.status
    }

    #[must_use]
    pub fn message(&self) -> String {
        self.status.message()
    }

    /// Wins and losses as displayed under the grid
    #[must_use]
    pub fn stats_line(&self) -> String {
        format!(
            "ניצחונות: {} | הפסדים: {}",
            self.stats.wins, self.stats.losses
        )
    }

    #[must_use]
    pub fn category(&self) -> &str {
        &self.category
    }

    #[must_use]
    pub const fn words(&self) -> &WordRepository {
        &self.words
    }

    /// Give back the stats store, e.g. to reopen it in a new session
    pub fn into_store(self) -> S {
        self.stats_store.into_inner()
    }
}
