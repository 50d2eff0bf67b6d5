//! Inbound intents: the full mutation surface of the core.
//!
//! The presentation adapter forwards user clicks as intents; the scoped
//! timer emits tick intents. The session processes each intent to
//! completion before the next, giving ordinary single-threaded
//! event-loop semantics with no locking.

use serde::{Deserialize, Serialize};

use crate::session::RoundId;

/// An intent delivered to the session.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Intent {
    /// The player clicked tile `1..=9`.
    TileClicked(u8),
    /// The player asked for a fresh round.
    NewGameRequested,
    /// One second elapsed on the timer started for `round`.
    ///
    /// The stamp lets the session drop ticks from a timer that outlived
    /// its round, so a stale timer can never decrement a replacement.
    SecondTick { round: RoundId },
}
