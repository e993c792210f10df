//! Scouting encounters: watch, tame, or flee.
//!
//! Each tame or flee attempt bumps a counter that starts at 1, and
//! succeeds when a uniform draw beats `1 / counter`. The first attempt
//! therefore succeeds half the time, the next two thirds, and so on.
//! While scouting the player does nothing and the enemy acts freely.

use super::fight::Battle;
use super::turn::run_turn;
use crate::actions::{Action, LogEntry};
use crate::characters::Character;
use crate::core::{GameRng, Result};
use crate::policy::DecisionProvider;

/// State of one scouting encounter.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Encounter {
    counter: u32,
}

impl Default for Encounter {
    fn default() -> Self {
        Self { counter: 1 }
    }
}

impl Encounter {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Attempt counter (starts at 1).
    #[must_use]
    pub fn counter(&self) -> u32 {
        self.counter
    }

    fn attempt(&mut self, rng: &mut GameRng) -> bool {
        self.counter += 1;
        rng.gen_unit() > 1.0 / f64::from(self.counter)
    }

    /// Try to tame `enemy`. On success it takes the player's name and
    /// should replace the player's character.
    pub fn try_tame(&mut self, player: &Character, enemy: &mut Character, rng: &mut GameRng) -> bool {
        let tamed = self.attempt(rng);
        if tamed {
            enemy.set_name(player.name());
        }
        tracing::debug!(tamed, counter = self.counter, enemy = enemy.species().name.as_str(), "tame attempt");
        tamed
    }

    /// Try to run away.
    pub fn try_flee(&mut self, rng: &mut GameRng) -> bool {
        let fled = self.attempt(rng);
        tracing::debug!(fled, counter = self.counter, "flee attempt");
        fled
    }

    /// The enemy acts while the player does nothing.
    pub fn enemy_turn(
        &self,
        battle: &Battle<'_>,
        player: &mut Character,
        enemy: &mut Character,
        enemy_brain: &mut impl DecisionProvider,
        rng: &mut GameRng,
    ) -> Result<Vec<LogEntry>> {
        let enemy_action = battle.choose_action(enemy, enemy_brain, rng)?;
        Ok(run_turn(player, &Action::nothing(), enemy, &enemy_action, rng))
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::actions::ActionCatalog;
    use crate::characters::{Attributes, Species};
    use crate::core::BattleConfig;
    use crate::effects::Effect;
    use crate::policy::FixedPolicy;

    fn character(name: &str) -> Character {
        let species = Species::new(name, Attributes::new(10, 2, 2, 2)).with_action(1, "bite");
        Character::at_level(Arc::new(species), None, 2)
    }

    #[test]
    fn test_counter_increments() {
        let mut encounter = Encounter::new();
        let mut rng = GameRng::new(0);
        assert_eq!(encounter.counter(), 1);

        encounter.try_flee(&mut rng);
        encounter.try_flee(&mut rng);
        assert_eq!(encounter.counter(), 3);
    }

    #[test]
    fn test_first_attempt_is_a_coin_flip() {
        let mut rng = GameRng::new(77);
        let trials = 4000;
        let fled = (0..trials)
            .filter(|_| Encounter::new().try_flee(&mut rng))
            .count();

        let ratio = fled as f64 / trials as f64;
        assert!((0.45..0.55).contains(&ratio), "ratio {ratio}");
    }

    #[test]
    fn test_later_attempts_get_easier() {
        let mut rng = GameRng::new(5);
        let trials = 4000;
        let third = (0..trials)
            .filter(|_| {
                let mut encounter = Encounter::new();
                encounter.counter = 3;
                encounter.try_flee(&mut rng)
            })
            .count();

        // 1 - 1/4
        let ratio = third as f64 / trials as f64;
        assert!((0.70..0.80).contains(&ratio), "ratio {ratio}");
    }

    #[test]
    fn test_tame_renames_on_success() {
        let player = character("Ash");
        let mut rng = GameRng::new(11);

        loop {
            let mut wild = character("wild");
            if Encounter::new().try_tame(&player, &mut wild, &mut rng) {
                assert_eq!(wild.name(), "Ash");
                assert_eq!(wild.species().name, "wild");
                break;
            }
            assert_eq!(wild.name(), "wild");
        }
    }

    #[test]
    fn test_enemy_turn_player_does_nothing() {
        let catalog = ActionCatalog::from_actions([Action::new("bite", [Effect::attack(10, 100)])]).unwrap();
        let battle = Battle::new(&catalog, BattleConfig::default());
        let mut player = character("player");
        let mut enemy = character("enemy");
        let mut rng = GameRng::new(2);

        let log = Encounter::new()
            .enemy_turn(&battle, &mut player, &mut enemy, &mut FixedPolicy::always(0), &mut rng)
            .unwrap();

        let lines: Vec<_> = log.iter().map(ToString::to_string).collect();
        assert!(lines.contains(&"player uses nothing".to_string()));
        assert!(lines.contains(&"enemy uses bite".to_string()));
        assert!(player.health() < player.max_health());
        assert_eq!(enemy.health(), enemy.max_health());
    }
}
