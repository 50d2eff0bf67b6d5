//! Round state machine: tile selection, resolution, and the countdown.
//!
//! ## State
//!
//! A [`RoundState`] owns everything a single round needs:
//! - the star target the player must match,
//! - the tiles still on the board,
//! - the player's current candidate selection,
//! - the seconds left on the clock,
//! - a forked [`GameRng`] for drawing replacement targets.
//!
//! ## Derived values
//!
//! Round status, tile display status, and the sum-exceeding flag are pure
//! queries computed on demand. They are never stored, so they cannot
//! drift from the owned state.
//!
//! ## Transitions
//!
//! - `active -> won` when a resolution empties the board
//! - `active -> lost` when the clock hits zero with tiles remaining
//! - `won`/`lost` are terminal; clicks and ticks become silent no-ops

use im::OrdSet;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::math;
use crate::core::GameRng;

/// Lowest tile value on the board.
pub const TILE_MIN: u8 = 1;
/// Highest tile value on the board.
pub const TILE_MAX: u8 = 9;
/// Upper bound for every drawn star target.
pub const TARGET_MAX: u8 = 9;
/// Countdown length for a fresh round, in seconds.
pub const ROUND_SECONDS: u8 = 10;

/// Display status of a single tile, derived from round state.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TileStatus {
    /// Solved out of the round; no longer on the board.
    Used,
    /// Selected, and the selection sum does not exceed the target.
    Candidate,
    /// Selected, but the selection sum exceeds the target.
    Wrong,
    /// On the board and not selected.
    Available,
}

/// Overall status of a round, derived from round state.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RoundStatus {
    /// Tiles remain and the clock is still running.
    Active,
    /// Every tile has been solved out.
    Won,
    /// The clock ran out with tiles remaining.
    Lost,
}

/// State of a single round.
///
/// Mutated only through [`RoundState::toggle_tile`] and
/// [`RoundState::tick`]; everything else is a read-only query.
#[derive(Clone, Debug)]
pub struct RoundState {
    star_target: u8,
    available: OrdSet<u8>,
    candidates: SmallVec<[u8; 9]>,
    seconds_remaining: u8,
    rng: GameRng,
}

/// Builder for a [`RoundState`] with fixed knobs, mainly for tests and
/// deterministic replay.
pub struct RoundBuilder {
    star_target: Option<u8>,
    seconds: u8,
    rng: Option<GameRng>,
}

impl Default for RoundBuilder {
    fn default() -> Self {
        Self {
            star_target: None,
            seconds: ROUND_SECONDS,
            rng: None,
        }
    }
}

impl RoundBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fix the opening star target instead of drawing one.
    pub fn star_target(mut self, target: u8) -> Self {
        assert!(
            (TILE_MIN..=TILE_MAX).contains(&target),
            "Star target must be 1-9"
        );
        self.star_target = Some(target);
        self
    }

    /// Set the countdown length in seconds.
    pub fn seconds(mut self, seconds: u8) -> Self {
        self.seconds = seconds;
        self
    }

    /// Use a specific RNG for target draws.
    pub fn rng(mut self, rng: GameRng) -> Self {
        self.rng = Some(rng);
        self
    }

    /// Seed a fresh RNG for target draws.
    pub fn seed(self, seed: u64) -> Self {
        self.rng(GameRng::new(seed))
    }

    /// Build the round.
    pub fn build(self) -> RoundState {
        let mut rng = self.rng.unwrap_or_else(GameRng::from_entropy);
        let star_target = match self.star_target {
            Some(target) => target,
            None => rng.gen_range(u32::from(TILE_MIN)..=u32::from(TILE_MAX)) as u8,
        };

        RoundState {
            star_target,
            available: math::range(TILE_MIN, TILE_MAX).into_iter().collect(),
            candidates: SmallVec::new(),
            seconds_remaining: self.seconds,
            rng,
        }
    }
}

impl RoundState {
    /// Start a fresh round: random target 1-9, full board, empty
    /// selection, full countdown.
    #[must_use]
    pub fn new(rng: GameRng) -> Self {
        RoundBuilder::new().rng(rng).build()
    }

    /// Builder with fixed knobs.
    #[must_use]
    pub fn builder() -> RoundBuilder {
        RoundBuilder::new()
    }

    // === Queries ===

    /// The star count the player must match.
    #[must_use]
    pub fn star_target(&self) -> u8 {
        self.star_target
    }

    /// Seconds left on the clock.
    #[must_use]
    pub fn seconds_remaining(&self) -> u8 {
        self.seconds_remaining
    }

    /// Tiles still on the board, in ascending order.
    pub fn available_tiles(&self) -> impl Iterator<Item = u8> + '_ {
        self.available.iter().copied()
    }

    /// The player's current selection, in click order.
    #[must_use]
    pub fn candidates(&self) -> &[u8] {
        &self.candidates
    }

    /// Sum of the current selection.
    #[must_use]
    pub fn candidate_sum(&self) -> u32 {
        math::sum(self.candidates.iter().copied())
    }

    /// Whether the current selection overshoots the target.
    #[must_use]
    pub fn is_candidate_sum_exceeding(&self) -> bool {
        self.candidate_sum() > u32::from(self.star_target)
    }

    /// Round status, derived: won when the board is empty, lost when the
    /// clock hit zero with tiles remaining, active otherwise.
    #[must_use]
    pub fn status(&self) -> RoundStatus {
        if self.available.is_empty() {
            RoundStatus::Won
        } else if self.seconds_remaining == 0 {
            RoundStatus::Lost
        } else {
            RoundStatus::Active
        }
    }

    /// Display status of a tile, derived from the board and selection.
    #[must_use]
    pub fn tile_status(&self, tile: u8) -> TileStatus {
        if !self.available.contains(&tile) {
            return TileStatus::Used;
        }
        if self.candidates.contains(&tile) {
            if self.is_candidate_sum_exceeding() {
                TileStatus::Wrong
            } else {
                TileStatus::Candidate
            }
        } else {
            TileStatus::Available
        }
    }

    // === Transitions ===

    /// Toggle a tile in or out of the selection, then resolve if the
    /// selection now matches the target exactly.
    ///
    /// `current_status` is the tile's displayed status at click time.
    /// Clicks on used tiles, and any click once the round is no longer
    /// active, are silent no-ops.
    ///
    /// An overshooting selection is left alone: it is surfaced as
    /// [`TileStatus::Wrong`] and the player must deselect manually.
    pub fn toggle_tile(&mut self, tile: u8, current_status: TileStatus) {
        if current_status == TileStatus::Used || self.status() != RoundStatus::Active {
            return;
        }
        if !(TILE_MIN..=TILE_MAX).contains(&tile) {
            return;
        }

        match current_status {
            TileStatus::Available => {
                if self.available.contains(&tile) && !self.candidates.contains(&tile) {
                    self.candidates.push(tile);
                }
            }
            TileStatus::Candidate | TileStatus::Wrong => {
                if let Some(pos) = self.candidates.iter().position(|&c| c == tile) {
                    self.candidates.remove(pos);
                }
            }
            TileStatus::Used => {}
        }

        self.resolve_if_matched();

        debug_assert!(
            self.candidates.iter().all(|c| self.available.contains(c)),
            "candidates must remain a subset of available tiles"
        );
    }

    /// Advance the clock by one second. No-op unless the round is active,
    /// so `seconds_remaining` never goes negative and terminal rounds
    /// stay frozen.
    pub fn tick(&mut self) {
        if self.status() == RoundStatus::Active {
            self.seconds_remaining -= 1;
        }
    }

    /// If the selection sums exactly to the target: remove those tiles
    /// from the board, clear the selection, and draw a new achievable
    /// target from whatever remains.
    fn resolve_if_matched(&mut self) {
        if self.candidate_sum() != u32::from(self.star_target) {
            return;
        }

        for &tile in &self.candidates {
            self.available.remove(&tile);
        }
        self.candidates.clear();

        if self.available.is_empty() {
            // Board cleared; status() now reports Won.
            return;
        }

        let pool: Vec<u8> = self.available.iter().copied().collect();
        self.star_target = math::random_sum_target_from(&pool, TARGET_MAX, &mut self.rng)
            .expect("non-empty tile pool always has an achievable target");
    }
}
