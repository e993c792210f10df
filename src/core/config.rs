//! Configuration types.
//!
//! - `WorldConfig`: The world document (species + actions), read from JSON
//! - `BattleConfig`: Knobs for the battle loop
//!
//! `WorldConfig` is raw data; [`World::from_config`](crate::world::World::from_config)
//! performs the cross-reference checks.

use std::path::Path;

use serde::{Deserialize, Serialize};

use super::error::{QuestError, Result};
use crate::actions::Action;
use crate::characters::Species;

/// A world document.
///
/// ```json
/// {
///   "species": [{"name": "onion", "attributes": {...}, "actions": {"1": "tackle"}}],
///   "actions": [{"name": "tackle", "priority": 0, "effects": [{"type": "attack", ...}]}]
/// }
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorldConfig {
    pub species: Vec<Species>,
    pub actions: Vec<Action>,
}

impl WorldConfig {
    /// Parse a world from JSON text.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Read and parse a world file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| QuestError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        tracing::debug!(path = %path.display(), bytes = text.len(), "loading world");
        Self::from_json(&text)
    }
}

/// Battle loop configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BattleConfig {
    /// Turns before a battle is called a stalemate (0 = unlimited).
    pub max_turns: u32,
}

impl Default for BattleConfig {
    fn default() -> Self {
        Self { max_turns: 100 }
    }
}

impl BattleConfig {
    /// Create a new config with a custom turn limit.
    #[must_use]
    pub fn with_max_turns(mut self, max_turns: u32) -> Self {
        self.max_turns = max_turns;
        self
    }
}
