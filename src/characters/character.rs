//! Characters - live creature state.
//!
//! `Character` is a species instance during play. It tracks health,
//! conditions, level and learned actions. Derived attributes are always
//! `level * species base` and are recomputed on every level-up.

use std::collections::BTreeSet;
use std::sync::Arc;

use smallvec::SmallVec;

use super::progression::{experience_reward, experience_to_next};
use super::species::{Attributes, Species};
use crate::core::{QuestError, Result};

/// A creature in play.
///
/// ## Invariants
///
/// - `0 <= health <= max_health`
/// - attributes equal `species.attributes.scaled(level)`
/// - learned actions follow learnset order (minus forgotten ones)
#[derive(Clone, Debug)]
pub struct Character {
    species: Arc<Species>,
    name: String,
    level: u32,
    attributes: Attributes,
    actions: SmallVec<[String; 4]>,
    health: u32,
    conditions: BTreeSet<String>,
    experience: u32,
}

impl Character {
    /// Create a level-0 character with zero stats.
    ///
    /// `name` defaults to the species name.
    #[must_use]
    pub fn new(species: Arc<Species>, name: Option<String>) -> Self {
        let name = name.unwrap_or_else(|| species.name.clone());
        Self {
            species,
            name,
            level: 0,
            attributes: Attributes::default(),
            actions: SmallVec::new(),
            health: 0,
            conditions: BTreeSet::new(),
            experience: 0,
        }
    }

    /// Create a character, level it to `level` and refresh it for play.
    #[must_use]
    pub fn at_level(species: Arc<Species>, name: Option<String>, level: u32) -> Self {
        let mut character = Self::new(species, name);
        if level > 0 {
            for _ in 0..level {
                character.gain_level();
            }
            character.refresh();
        }
        character
    }

    // === Accessors ===

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Rename, e.g. after taming.
    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    #[must_use]
    pub fn species(&self) -> &Species {
        &self.species
    }

    #[must_use]
    pub fn level(&self) -> u32 {
        self.level
    }

    #[must_use]
    pub fn health(&self) -> u32 {
        self.health
    }

    #[must_use]
    pub fn max_health(&self) -> u32 {
        self.attributes.health
    }

    #[must_use]
    pub fn strength(&self) -> u32 {
        self.attributes.strength
    }

    #[must_use]
    pub fn smarts(&self) -> u32 {
        self.attributes.smarts
    }

    #[must_use]
    pub fn speed(&self) -> u32 {
        self.attributes.speed
    }

    /// Derived attributes (copy).
    #[must_use]
    pub fn attributes(&self) -> Attributes {
        self.attributes
    }

    /// Learned action names, oldest first.
    #[must_use]
    pub fn actions(&self) -> &[String] {
        &self.actions
    }

    /// Active conditions, sorted.
    #[must_use]
    pub fn conditions(&self) -> &BTreeSet<String> {
        &self.conditions
    }

    /// Experience banked toward the next level.
    #[must_use]
    pub fn experience(&self) -> u32 {
        self.experience
    }

    /// Experience awarded for defeating this character.
    #[must_use]
    pub fn experience_reward(&self) -> u32 {
        experience_reward(self.level)
    }

    #[must_use]
    pub fn is_defeated(&self) -> bool {
        self.health == 0
    }

    // === Health ===

    /// Lose health, never below zero.
    pub fn damage(&mut self, amount: u32) {
        self.health = self.health.saturating_sub(amount);
    }

    /// Recover health, never above max health.
    pub fn heal(&mut self, amount: u32) {
        self.health = self.health.saturating_add(amount).min(self.attributes.health);
    }

    // === Conditions ===

    #[must_use]
    pub fn has_condition(&self, condition: &str) -> bool {
        self.conditions.contains(condition)
    }

    pub fn add_condition(&mut self, condition: impl Into<String>) {
        self.conditions.insert(condition.into());
    }

    /// Remove a condition; absent conditions are ignored.
    pub fn remove_condition(&mut self, condition: &str) {
        self.conditions.remove(condition);
    }

    /// Full health, no conditions.
    pub fn refresh(&mut self) {
        self.health = self.attributes.health;
        self.conditions.clear();
    }

    // === Progression ===

    /// Advance one level: rescale attributes and learn the level's action.
    ///
    /// Health is left alone; call [`refresh`](Self::refresh) to top up.
    pub fn gain_level(&mut self) {
        self.level += 1;
        self.attributes = self.species.attributes.scaled(self.level);

        if let Some(action) = self.species.action_at(self.level) {
            self.actions.push(action.to_string());
        }

        tracing::debug!(
            name = %self.name,
            level = self.level,
            max_health = self.attributes.health,
            "level up"
        );
    }

    /// Bank experience, levelling up as thresholds are crossed.
    ///
    /// Returns the number of levels gained.
    pub fn gain_experience(&mut self, amount: u32) -> u32 {
        self.experience = self.experience.saturating_add(amount);

        let mut gained = 0;
        loop {
            let needed = experience_to_next(self.level);
            if self.experience < needed {
                break;
            }
            self.experience -= needed;
            self.gain_level();
            gained += 1;
        }
        gained
    }

    /// Forget the learned action at `index`, returning its name.
    pub fn forget_action(&mut self, index: usize) -> Result<String> {
        if index >= self.actions.len() {
            return Err(QuestError::ChoiceOutOfRange {
                index,
                len: self.actions.len(),
            });
        }
        Ok(self.actions.remove(index))
    }
}
