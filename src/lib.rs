//! # star-match
//!
//! Event-driven core for the star-match arithmetic puzzle: a round shows a
//! random number of stars and nine number tiles, and the player selects
//! tiles summing exactly to the star count before a ten-second clock runs
//! out.
//!
//! ## Design Principles
//!
//! 1. **Single owned state**: one [`RoundState`] per round, mutated only
//!    through its transition functions.
//!
//! 2. **Derived, never stored**: tile status, round status, and the
//!    sum-exceeding flag are pure queries, so display state cannot drift.
//!
//! 3. **Replace, don't mutate**: a new game builds a brand-new round from
//!    a forked RNG and bumps the [`RoundId`].
//!
//! 4. **Scoped timing**: a per-round [`TickTimer`] emits stamped tick
//!    intents and is cancelled on teardown; stale stamps are dropped.
//!
//! ## Modules
//!
//! - `core`: deterministic RNG, arithmetic helpers, errors
//! - `round`: the round state machine (selection, resolution, countdown)
//! - `session`: round sequencing and intent serialization
//! - `events`: inbound intent contract
//! - `snapshot`: outbound render contract
//! - `timer`: scoped per-round tick source

pub mod core;
pub mod events;
pub mod round;
pub mod session;
pub mod snapshot;
pub mod timer;

// Re-export commonly used types
pub use crate::core::{GameError, GameRng, GameRngState};
pub use crate::events::Intent;
pub use crate::round::{
    RoundBuilder, RoundState, RoundStatus, TileStatus, ROUND_SECONDS, TARGET_MAX, TILE_MAX,
    TILE_MIN,
};
pub use crate::session::{RoundId, Session};
pub use crate::snapshot::RoundSnapshot;
pub use crate::timer::{TickTimer, TICK_INTERVAL};
