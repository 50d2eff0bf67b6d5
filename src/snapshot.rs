//! Read-only render contract for the presentation adapter.
//!
//! A [`RoundSnapshot`] is the entire outbound surface: the adapter reads
//! it, draws stars and tiles, and sends [`crate::events::Intent`]s back.
//! It is captured on demand from [`RoundState`], never kept in sync
//! incrementally.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use crate::round::{RoundState, RoundStatus, TileStatus, TILE_MAX, TILE_MIN};
use crate::session::RoundId;

/// Everything the adapter needs to draw one frame.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundSnapshot {
    /// Which round this frame belongs to.
    pub round_id: RoundId,

    /// Star count to display.
    pub star_target: u8,

    /// Display status for every tile `1..=9`.
    pub tile_statuses: FxHashMap<u8, TileStatus>,

    /// Seconds left on the clock.
    pub seconds_remaining: u8,

    /// Derived round status.
    pub round_status: RoundStatus,
}

impl RoundSnapshot {
    /// Capture the current state of a round.
    #[must_use]
    pub fn capture(round: &RoundState, round_id: RoundId) -> Self {
        let tile_statuses = (TILE_MIN..=TILE_MAX)
            .map(|tile| (tile, round.tile_status(tile)))
            .collect();

        Self {
            round_id,
            star_target: round.star_target(),
            tile_statuses,
            seconds_remaining: round.seconds_remaining(),
            round_status: round.status(),
        }
    }
}
