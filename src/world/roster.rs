//! The world: species roster plus action catalog.

use std::path::Path;
use std::sync::Arc;

use super::randomizer::randomize_species;
use crate::actions::ActionCatalog;
use crate::characters::{Character, Species};
use crate::core::{GameRng, QuestError, Result, WorldConfig};

/// Number of starters offered at the beginning of a run.
pub const STARTER_COUNT: usize = 3;

/// A validated world.
///
/// Every learnset entry names an action in the catalog and there are
/// enough species to offer distinct starters.
#[derive(Clone, Debug)]
pub struct World {
    species: Vec<Arc<Species>>,
    catalog: ActionCatalog,
}

impl World {
    /// Build a world, checking learnsets against the catalog.
    ///
    /// Learnset levels must be at least 1.
    pub fn new(species: Vec<Species>, catalog: ActionCatalog) -> Result<Self> {
        if species.len() < STARTER_COUNT {
            return Err(QuestError::NotEnoughSpecies {
                required: STARTER_COUNT,
                found: species.len(),
            });
        }

        for s in &species {
            for (&level, action) in &s.learnset {
                if level == 0 {
                    return Err(QuestError::ZeroLearnsetLevel {
                        species: s.name.clone(),
                        action: action.clone(),
                    });
                }
                if !catalog.contains(action) {
                    return Err(QuestError::UnknownLearnsetAction {
                        species: s.name.clone(),
                        action: action.clone(),
                        level,
                    });
                }
            }
        }

        tracing::debug!(species = species.len(), actions = catalog.len(), "world ready");
        Ok(Self {
            species: species.into_iter().map(Arc::new).collect(),
            catalog,
        })
    }

    /// Build a world from a parsed document.
    pub fn from_config(config: WorldConfig) -> Result<Self> {
        let catalog = ActionCatalog::from_actions(config.actions)?;
        Self::new(config.species, catalog)
    }

    /// Load and validate a world file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        Self::from_config(WorldConfig::load(path)?)
    }

    #[must_use]
    pub fn species(&self) -> &[Arc<Species>] {
        &self.species
    }

    #[must_use]
    pub fn catalog(&self) -> &ActionCatalog {
        &self.catalog
    }

    /// Look up a species by name.
    #[must_use]
    pub fn find_species(&self, name: &str) -> Option<&Arc<Species>> {
        self.species.iter().find(|s| s.name == name)
    }

    /// Draw [`STARTER_COUNT`] distinct species, in draw order.
    pub fn create_starters(&self, rng: &mut GameRng) -> Vec<Arc<Species>> {
        let mut picks: Vec<usize> = Vec::with_capacity(STARTER_COUNT);
        while picks.len() < STARTER_COUNT {
            let idx = rng.gen_range_usize(0..self.species.len());
            if !picks.contains(&idx) {
                picks.push(idx);
            }
        }
        picks.into_iter().map(|idx| Arc::clone(&self.species[idx])).collect()
    }

    /// A fresh character of a random species at `level`.
    pub fn random_character(&self, level: u32, rng: &mut GameRng) -> Character {
        let idx = rng.gen_range_usize(0..self.species.len());
        Character::at_level(Arc::clone(&self.species[idx]), None, level)
    }

    /// Opponent level after `battles` wins:
    /// `player_level + randint(0..=battles) / player_level`.
    pub fn opponent_level(player_level: u32, battles: u32, rng: &mut GameRng) -> u32 {
        let level = player_level.max(1);
        let bonus = rng.gen_range(0..battles.saturating_add(1)) / level;
        level + bonus
    }

    /// A copy of this world with every species randomized.
    ///
    /// The catalog is shared unchanged.
    pub fn randomized(&self, rng: &mut GameRng) -> Result<Self> {
        let pool = self.catalog.names();
        let species = self
            .species
            .iter()
            .map(|s| randomize_species(s, &pool, rng))
            .collect::<Result<Vec<_>>>()?;
        Self::new(species, self.catalog.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::actions::Action;
    use crate::characters::Attributes;
    use crate::effects::Effect;

    fn catalog() -> ActionCatalog {
        ActionCatalog::from_actions([
            Action::new("tackle", [Effect::attack(40, 95)]),
            Action::new("guard", [Effect::Defend]).with_priority(3),
        ])
        .unwrap()
    }

    fn roster(n: usize) -> Vec<Species> {
        (0..n)
            .map(|i| {
                Species::new(format!("species{i}"), Attributes::new(10, 3, 2, 1 + i as u32))
                    .with_action(1, "tackle")
                    .with_action(2, "guard")
            })
            .collect()
    }

    #[test]
    fn test_too_few_species() {
        let err = World::new(roster(2), catalog()).unwrap_err();
        assert!(matches!(err, QuestError::NotEnoughSpecies { required: 3, found: 2 }));
    }

    #[test]
    fn test_unknown_learnset_action() {
        let mut species = roster(3);
        species[1] = species[1].clone().with_action(5, "meteor");

        let err = World::new(species, catalog()).unwrap_err();
        assert!(matches!(
            err,
            QuestError::UnknownLearnsetAction { ref action, level: 5, .. } if action == "meteor"
        ));
    }

    #[test]
    fn test_level_zero_learnset_rejected() {
        let species: Vec<Species> = roster(3)
            .into_iter()
            .map(|s| s.with_action(0, "tackle"))
            .collect();

        let err = World::new(species, catalog()).unwrap_err();
        assert!(matches!(
            err,
            QuestError::ZeroLearnsetLevel { ref species, ref action } if species == "species0" && action == "tackle"
        ));
    }

    #[test]
    fn test_starters_distinct() {
        let world = World::new(roster(5), catalog()).unwrap();
        let mut rng = GameRng::new(42);

        for _ in 0..50 {
            let starters = world.create_starters(&mut rng);
            assert_eq!(starters.len(), STARTER_COUNT);
            assert_ne!(starters[0].name, starters[1].name);
            assert_ne!(starters[0].name, starters[2].name);
            assert_ne!(starters[1].name, starters[2].name);
        }
    }

    #[test]
    fn test_starters_with_exactly_three_species() {
        let world = World::new(roster(3), catalog()).unwrap();
        let mut rng = GameRng::new(1);
        let mut names: Vec<_> = world.create_starters(&mut rng).iter().map(|s| s.name.clone()).collect();
        names.sort();
        assert_eq!(names, ["species0", "species1", "species2"]);
    }

    #[test]
    fn test_random_character_ready_for_play() {
        let world = World::new(roster(4), catalog()).unwrap();
        let mut rng = GameRng::new(9);

        let character = world.random_character(4, &mut rng);
        assert_eq!(character.level(), 4);
        assert_eq!(character.health(), character.max_health());
        assert_eq!(character.actions(), ["tackle", "guard"]);
        assert!(world.find_species(&character.species().name).is_some());
    }

    #[test]
    fn test_opponent_level() {
        let mut rng = GameRng::new(0);
        assert_eq!(World::opponent_level(5, 0, &mut rng), 5);

        for _ in 0..100 {
            let level = World::opponent_level(2, 6, &mut rng);
            assert!((2..=5).contains(&level));
        }
    }

    #[test]
    fn test_randomized_keeps_shape() {
        let world = World::new(roster(3), catalog()).unwrap();
        let mut rng = GameRng::new(8);

        let shuffled = world.randomized(&mut rng).unwrap();
        for (before, after) in world.species().iter().zip(shuffled.species()) {
            assert_eq!(before.name, after.name);
            let levels: Vec<_> = after.learnset.keys().copied().collect();
            assert_eq!(levels, vec![1, 2]);
            assert!(after.attributes.total() <= before.attributes.total());
        }
        assert_eq!(shuffled.catalog().len(), 2);
    }
}
