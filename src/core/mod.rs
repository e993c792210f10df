//! Core engine types: RNG, errors, configuration.
//!
//! Nothing in here knows about battles; the other modules build on it.

pub mod config;
pub mod error;
pub mod rng;

pub use config::{BattleConfig, WorldConfig};
pub use error::{QuestError, Result};
pub use rng::{GameRng, GameRngState};
