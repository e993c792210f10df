//! Battle resolution.
//!
//! - `run_turn`: One exchange between two characters
//! - `Battle`: Turn loop driven by decision providers
//! - `Encounter`: Scouting, taming and fleeing outside a full battle
//!
//! Every random draw goes through the `GameRng` passed in, so a seeded
//! battle replays exactly.

pub mod encounter;
pub mod fight;
pub mod turn;

pub use encounter::Encounter;
pub use fight::{Battle, BattleEvent, BattleOutcome, Side};
pub use turn::{run_turn, turn_order, TurnOrder};
