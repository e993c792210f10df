//! Effect system for battle actions.
//!
//! - `Effect`: Closed set of move outcomes (attack, heal, condition, defend)
//! - `EffectOutcome`: What an applied effect did, printable as a log line
//!
//! Effects never pick their own targets. An action applies each of its
//! effects against the same (user, target) pair; `Heal` and `Defend`
//! act on the user and the rest act on the target.

mod effect;
mod resolver;

pub use effect::{Effect, DEFEND};
pub use resolver::{attack_damage, EffectOutcome};
