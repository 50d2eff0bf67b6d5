//! Session controller: sequences rounds and serializes intents.
//!
//! A [`Session`] owns the root RNG and the current [`RoundState`]. A new
//! game never mutates the old round in place: it builds a brand-new round
//! from a forked RNG and bumps the [`RoundId`], mirroring
//! replacement-by-identity. Intents stamped with a superseded `RoundId`
//! are discarded.

use serde::{Deserialize, Serialize};

use crate::core::GameRng;
use crate::events::Intent;
use crate::round::RoundState;
use crate::snapshot::RoundSnapshot;

/// Identity of one round within a session.
///
/// Bumped on every new game; stale timer ticks carry the old value and
/// are dropped by the session.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RoundId(pub u64);

impl RoundId {
    /// Create a round ID.
    #[must_use]
    pub const fn new(id: u64) -> Self {
        Self(id)
    }

    /// The next round's ID.
    #[must_use]
    pub const fn next(self) -> Self {
        Self(self.0 + 1)
    }
}

impl std::fmt::Display for RoundId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Round({})", self.0)
    }
}

/// One player's game session: the current round plus the machinery to
/// replace it.
#[derive(Clone, Debug)]
pub struct Session {
    rng: GameRng,
    round_id: RoundId,
    round: RoundState,
}

impl Session {
    /// Start a session with a deterministic seed. The first round starts
    /// immediately.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        let mut rng = GameRng::new(seed);
        let round = RoundState::new(rng.fork());
        Self {
            rng,
            round_id: RoundId::new(0),
            round,
        }
    }

    /// Start a session seeded from OS entropy.
    #[must_use]
    pub fn from_entropy() -> Self {
        Self::new(rand::random())
    }

    /// The current round's identity.
    #[must_use]
    pub fn round_id(&self) -> RoundId {
        self.round_id
    }

    /// Read-only view of the current round.
    #[must_use]
    pub fn round(&self) -> &RoundState {
        &self.round
    }

    /// Discard the current round and start a fresh one.
    ///
    /// Callable at any time; the presentation adapter typically offers it
    /// only once the round is terminal, but the controller does not
    /// enforce that.
    pub fn request_new_game(&mut self) {
        self.round_id = self.round_id.next();
        self.round = RoundState::new(self.rng.fork());
    }

    /// Process one intent to completion.
    ///
    /// Tile clicks are resolved against the tile's current displayed
    /// status; ticks stamped with a stale [`RoundId`] are dropped.
    pub fn handle(&mut self, intent: Intent) {
        match intent {
            Intent::TileClicked(tile) => {
                let status = self.round.tile_status(tile);
                self.round.toggle_tile(tile, status);
            }
            Intent::NewGameRequested => self.request_new_game(),
            Intent::SecondTick { round } => {
                if round == self.round_id {
                    self.round.tick();
                }
            }
        }
    }

    /// Snapshot of the current round for rendering.
    #[must_use]
    pub fn snapshot(&self) -> RoundSnapshot {
        RoundSnapshot::capture(&self.round, self.round_id)
    }
}
