//! Species - immutable creature templates.
//!
//! A `Species` holds the base attributes and the learnset. Live battle
//! state lives in [`Character`](super::Character), which shares its
//! species through an `Arc`.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// The four scaling attributes.
///
/// On a species these are per-level bases; on a character they are the
/// derived values `level * base`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Attributes {
    pub health: u32,
    pub strength: u32,
    pub smarts: u32,
    pub speed: u32,
}

impl Attributes {
    /// Create an attribute block.
    #[must_use]
    pub const fn new(health: u32, strength: u32, smarts: u32, speed: u32) -> Self {
        Self {
            health,
            strength,
            smarts,
            speed,
        }
    }

    /// Every attribute multiplied by `level`.
    #[must_use]
    pub fn scaled(self, level: u32) -> Self {
        Self {
            health: level.saturating_mul(self.health),
            strength: level.saturating_mul(self.strength),
            smarts: level.saturating_mul(self.smarts),
            speed: level.saturating_mul(self.speed),
        }
    }

    /// Sum of all four attributes.
    #[must_use]
    pub fn total(self) -> u32 {
        self.health
            .saturating_add(self.strength)
            .saturating_add(self.smarts)
            .saturating_add(self.speed)
    }
}

/// Static species definition.
///
/// ## Example
///
/// ```
/// use auto_quest::characters::{Attributes, Species};
///
/// let onion = Species::new("onion", Attributes::new(10, 4, 3, 2))
///     .with_action(1, "tackle")
///     .with_action(4, "cry");
///
/// assert_eq!(onion.action_at(4), Some("cry"));
/// assert_eq!(onion.action_at(2), None);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Species {
    /// Species name, also the default character name.
    pub name: String,

    /// Per-level base attributes.
    pub attributes: Attributes,

    /// Level -> action learned on reaching that level.
    #[serde(rename = "actions", default)]
    pub learnset: BTreeMap<u32, String>,
}

impl Species {
    /// Create a species with an empty learnset.
    #[must_use]
    pub fn new(name: impl Into<String>, attributes: Attributes) -> Self {
        Self {
            name: name.into(),
            attributes,
            learnset: BTreeMap::new(),
        }
    }

    /// Add a learnset entry (builder pattern).
    #[must_use]
    pub fn with_action(mut self, level: u32, action: impl Into<String>) -> Self {
        self.learnset.insert(level, action.into());
        self
    }

    /// Action learned at exactly `level`, if any.
    #[must_use]
    pub fn action_at(&self, level: u32) -> Option<&str> {
        self.learnset.get(&level).map(String::as_str)
    }
}
