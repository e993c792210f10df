//! # auto-quest
//!
//! A turn-based creature battler built to be played by both humans and
//! programs.
//!
//! ## Design Principles
//!
//! 1. **Data-Driven**: Species and actions come from a world document.
//!    The engine hardcodes only the four effect kinds.
//!
//! 2. **Pluggable Decisions**: Every choice goes through a
//!    `DecisionProvider`, so a terminal user, a random policy and a
//!    scripted agent are interchangeable.
//!
//! 3. **Deterministic**: One `GameRng` is threaded through every random
//!    draw. The same seed replays a session exactly.
//!
//! ## Modules
//!
//! - `core`: RNG, errors, configuration
//! - `effects`: Attack, heal, condition and defend effects
//! - `actions`: Actions, the action catalog, log entries
//! - `characters`: Species, characters, experience curve
//! - `battle`: Turn resolution, the battle loop, scouting encounters
//! - `policy`: Decision providers
//! - `world`: Roster, starters, opponents, randomization

pub mod actions;
pub mod battle;
pub mod characters;
pub mod core;
pub mod effects;
pub mod policy;
pub mod world;

// Re-export commonly used types
pub use crate::core::{BattleConfig, GameRng, GameRngState, QuestError, Result, WorldConfig};

pub use crate::effects::{Effect, EffectOutcome, DEFEND};

pub use crate::actions::{Action, ActionCatalog, LogEntry};

pub use crate::characters::{Attributes, Character, Species, MAX_KNOWN_ACTIONS};

pub use crate::battle::{
    run_turn, turn_order, Battle, BattleEvent, BattleOutcome, Encounter, Side, TurnOrder,
};

pub use crate::policy::{DecisionProvider, FixedPolicy, UniformPolicy};

pub use crate::world::{World, STARTER_COUNT};
