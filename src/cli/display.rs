//! Text rendering for the terminal.

use std::fmt::Display;
use std::io::Write;

use auto_quest::{Character, LogEntry};

const HEADER: &str = "\t\t\t\t";

/// Prints indented game text to stdout.
#[derive(Clone, Copy, Debug, Default)]
pub(crate) struct Printer;

impl Printer {
    pub(crate) fn message(&self, text: impl Display) {
        println!("{HEADER}  {text}");
    }

    pub(crate) fn prompt(&self) {
        print!("{HEADER}> ");
        let _ = std::io::stdout().flush();
    }

    pub(crate) fn blank(&self) {
        println!();
    }

    pub(crate) fn log(&self, entries: &[LogEntry]) {
        for entry in entries {
            self.message(entry);
        }
    }

    pub(crate) fn choices(&self, choices: &[String]) {
        self.message(choices.join("  "));
    }

    pub(crate) fn character(&self, character: &Character) {
        self.message(summary(character));
        self.message(stats(character));
        self.message(format!("ACTIONS: {}", character.actions().join(" ")));
    }

    pub(crate) fn battle_frame(&self, player: &Character, enemy: &Character) {
        self.message(format!("ENEMY: {}", summary(enemy)));
        self.message(format!("PLAYER: {}", summary(player)));
    }

    /// Frame plus the player's stats, shown before each battle choice.
    pub(crate) fn battle(&self, player: &Character, enemy: &Character) {
        self.battle_frame(player, enemy);
        self.message(stats(player));
        self.message("ACTIONS:");
    }
}

/// `name LVL:n HP:h/max conditions`, with the species in parentheses
/// when the character has been renamed.
pub(crate) fn summary(character: &Character) -> String {
    let species = &character.species().name;
    let name = if character.name() == species.as_str() {
        character.name().to_string()
    } else {
        format!("{} ({species})", character.name())
    };
    let conditions: Vec<&str> = character.conditions().iter().map(String::as_str).collect();

    format!(
        "{name} LVL:{} HP:{}/{} {}",
        character.level(),
        character.health(),
        character.max_health(),
        conditions.join(" ")
    )
    .trim_end()
    .to_string()
}

pub(crate) fn stats(character: &Character) -> String {
    format!(
        "STR:{} SMT:{} SPD:{}",
        character.strength(),
        character.smarts(),
        character.speed()
    )
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use auto_quest::{Attributes, Species};

    use super::*;

    fn onion(name: Option<&str>) -> Character {
        let species = Arc::new(Species::new("onion", Attributes::new(10, 3, 2, 1)));
        Character::at_level(species, name.map(str::to_string), 2)
    }

    #[test]
    fn test_summary_plain() {
        assert_eq!(summary(&onion(None)), "onion LVL:2 HP:20/20");
    }

    #[test]
    fn test_summary_renamed_with_conditions() {
        let mut character = onion(Some("Ash"));
        character.damage(5);
        character.add_condition("sleepy");
        character.add_condition("defend");

        assert_eq!(summary(&character), "Ash (onion) LVL:2 HP:15/20 defend sleepy");
    }

    #[test]
    fn test_stats() {
        assert_eq!(stats(&onion(None)), "STR:6 SMT:4 SPD:2");
    }
}
