//! Core building blocks: deterministic RNG, arithmetic helpers, errors.
//!
//! Nothing in this module knows about rounds or sessions; the game modules
//! are built on top of these pieces.

pub mod error;
pub mod math;
pub mod rng;

pub use error::GameError;
pub use rng::{GameRng, GameRngState};
