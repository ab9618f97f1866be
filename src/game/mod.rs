//! Game session driving rounds and stats

mod session;

pub use session::{
    REVEAL_PREFIX, Session, SessionError, Status, UNAVAILABLE_PREFIX, VICTORY_MESSAGE,
};
