//! The campaign: pick a starter, beat the rival, then scout and battle
//! until the player falls or quits.

use std::sync::Arc;

use anyhow::Result;
use auto_quest::{
    Battle, BattleConfig, BattleEvent, Character, DecisionProvider, Encounter, GameRng, QuestError,
    Side, UniformPolicy, World, MAX_KNOWN_ACTIONS,
};

use super::display::Printer;
use super::input::Controller;

/// Level of the chosen starter.
const STARTER_LEVEL: u32 = 5;
/// Level of the rival's starter in the lab battle.
const RIVAL_LEVEL: u32 = 3;

fn labels<const N: usize>(items: [&str; N]) -> Vec<String> {
    items.map(String::from).to_vec()
}

/// One play-through.
pub(crate) struct Session<'w> {
    world: &'w World,
    battle: Battle<'w>,
    controller: Controller,
    printer: Printer,
    /// Battles won so far; raises opponent levels.
    battles: u32,
}

impl<'w> Session<'w> {
    pub(crate) fn new(world: &'w World, config: BattleConfig, controller: Controller) -> Self {
        Self {
            world,
            battle: Battle::new(world.catalog(), config),
            controller,
            printer: Printer,
            battles: 0,
        }
    }

    /// Play until death, quit, or end of input.
    pub(crate) fn run(&mut self, rng: &mut GameRng) -> Result<()> {
        match self.play(rng) {
            Err(_) if self.controller.is_closed() => {
                self.printer.blank();
                Ok(())
            }
            other => other,
        }
    }

    fn play(&mut self, rng: &mut GameRng) -> Result<()> {
        self.printer.message("What is your name?");
        let name = self.controller.read_name();
        if self.controller.is_closed() {
            return Ok(());
        }

        let starters = self.world.create_starters(rng);
        self.printer.message("Choose a starter");
        let names: Vec<String> = starters.iter().map(|s| s.name.clone()).collect();
        let choice = self.pick(&names, rng)?;

        let mut player = Character::at_level(Arc::clone(&starters[choice]), name, STARTER_LEVEL);
        let rival_species = Arc::clone(&starters[(choice + 1) % starters.len()]);
        let mut rival = Character::at_level(rival_species, None, RIVAL_LEVEL);

        if !self.fight(&mut player, &mut rival, rng)? {
            return Ok(());
        }
        player.refresh();
        self.printer.blank();

        loop {
            self.printer.character(&player);
            match self.pick(&labels(["scout", "battle", "quit"]), rng)? {
                0 => {
                    if !self.scout(&mut player, rng)? {
                        return Ok(());
                    }
                }
                1 => {
                    let mut enemy = self.opponent(&player, rng);
                    if !self.fight(&mut player, &mut enemy, rng)? {
                        return Ok(());
                    }
                }
                _ => return Ok(()),
            }
            self.printer.blank();
        }
    }

    /// Ask the controller and check the answer.
    fn pick(&mut self, choices: &[String], rng: &mut GameRng) -> Result<usize> {
        let index = self.controller.choose(choices, rng);
        if index >= choices.len() {
            return Err(QuestError::ChoiceOutOfRange {
                index,
                len: choices.len(),
            }
            .into());
        }
        Ok(index)
    }

    fn opponent(&self, player: &Character, rng: &mut GameRng) -> Character {
        let level = World::opponent_level(player.level(), self.battles, rng);
        self.world.random_character(level, rng)
    }

    /// Full battle plus rewards. Returns `false` if the player died.
    fn fight(&mut self, player: &mut Character, enemy: &mut Character, rng: &mut GameRng) -> Result<bool> {
        let printer = self.printer;
        let outcome = self.battle.fight(
            player,
            enemy,
            &mut self.controller,
            &mut UniformPolicy,
            rng,
            |event| match event {
                BattleEvent::TurnStarted { turn, player, enemy } => {
                    printer.message(format!("Turn {turn}"));
                    printer.battle(player, enemy);
                }
                BattleEvent::TurnResolved { log, .. } => {
                    printer.log(log);
                    printer.blank();
                }
            },
        )?;

        match outcome.winner() {
            Some(Side::Player) => {}
            Some(Side::Enemy) => {
                printer.message("died");
                return Ok(false);
            }
            None => {
                printer.message(format!("stalemate after {} turns", outcome.turns()));
                return Ok(true);
            }
        }

        let reward = enemy.experience_reward();
        printer.message(format!("gained {reward} experience"));
        if player.gain_experience(reward) > 0 {
            printer.message(format!("{} grew to level {}", player.name(), player.level()));
        }
        printer.character(player);

        while player.actions().len() > MAX_KNOWN_ACTIONS {
            printer.message("Please drop an action");
            let known = player.actions().to_vec();
            let choice = self.pick(&known, rng)?;
            let dropped = player.forget_action(choice)?;
            printer.message(format!("forgot {dropped}"));
        }

        self.battles += 1;
        Ok(true)
    }

    /// Scout a wild opponent. Returns `false` if the player died.
    fn scout(&mut self, player: &mut Character, rng: &mut GameRng) -> Result<bool> {
        let mut enemy = self.opponent(player, rng);
        let mut encounter = Encounter::new();
        let options = labels(["scout", "tame", "flee"]);

        loop {
            if player.is_defeated() {
                self.printer.message("died");
                return Ok(false);
            }
            self.printer.battle_frame(player, &enemy);

            match self.pick(&options, rng)? {
                1 => {
                    if encounter.try_tame(player, &mut enemy, rng) {
                        self.printer
                            .message(format!("successfully tamed {}", enemy.species().name));
                        *player = enemy;
                        return Ok(true);
                    }
                    self.printer.message(format!("failed to tame {}", enemy.name()));
                }
                2 => {
                    if encounter.try_flee(rng) {
                        self.printer.message("successfully fled");
                        return Ok(true);
                    }
                    self.printer.message("failed to flee");
                }
                _ => {}
            }

            let log = encounter.enemy_turn(&self.battle, player, &mut enemy, &mut UniformPolicy, rng)?;
            self.printer.log(&log);
            self.printer.blank();
        }
    }
}

#[cfg(test)]
mod tests {
    use auto_quest::WorldConfig;

    use super::*;
    use crate::cli::{Logic, DEFAULT_WORLD};

    #[test]
    fn test_bundled_world_loads() {
        let world = World::from_config(WorldConfig::from_json(DEFAULT_WORLD).unwrap()).unwrap();
        assert_eq!(world.species().len(), 6);
        assert_eq!(world.catalog().len(), 10);
    }

    #[test]
    fn test_random_session_finishes() {
        let world = World::from_config(WorldConfig::from_json(DEFAULT_WORLD).unwrap()).unwrap();

        for seed in 0..5 {
            let mut rng = GameRng::new(seed);
            let mut session = Session::new(&world, BattleConfig::default(), Controller::new(Logic::Random));
            session.run(&mut rng).unwrap();
        }
    }
}
