//! Player input: stdin for humans, the uniform policy for autopilot.

use std::io::BufRead;

use auto_quest::{DecisionProvider, GameRng, UniformPolicy};

use super::display::Printer;
use super::Logic;

/// Makes the player's decisions.
#[derive(Debug)]
pub(crate) enum Controller {
    /// Human at the terminal. `closed` is set once stdin hits EOF.
    User { closed: bool },
    /// Uniformly random choices.
    Random,
}

impl Controller {
    pub(crate) fn new(logic: Logic) -> Self {
        match logic {
            Logic::User => Self::User { closed: false },
            Logic::Random => Self::Random,
        }
    }

    /// True once a human's input stream has ended.
    pub(crate) fn is_closed(&self) -> bool {
        matches!(self, Self::User { closed: true })
    }

    /// Ask for the player's name. Autopilot keeps the species name.
    pub(crate) fn read_name(&mut self) -> Option<String> {
        match self {
            Self::Random => None,
            Self::User { .. } => self.read_line().filter(|name| !name.is_empty()),
        }
    }

    fn read_line(&mut self) -> Option<String> {
        Printer.prompt();
        let mut line = String::new();
        match std::io::stdin().lock().read_line(&mut line) {
            Ok(0) | Err(_) => {
                *self = Self::User { closed: true };
                None
            }
            Ok(_) => Some(line.trim().to_string()),
        }
    }
}

impl DecisionProvider for Controller {
    fn choose(&mut self, choices: &[String], rng: &mut GameRng) -> usize {
        Printer.choices(choices);
        if matches!(self, Self::Random) {
            return UniformPolicy.choose(choices, rng);
        }

        loop {
            // An out-of-range answer ends the session upstream.
            let Some(line) = self.read_line() else {
                return choices.len();
            };

            if let Ok(index) = line.parse::<usize>() {
                if index < choices.len() {
                    return index;
                }
                Printer.message(format!("{index} is not valid!"));
                continue;
            }
            if let Some(index) = choices.iter().position(|choice| *choice == line) {
                return index;
            }

            let shown = if line.is_empty() { "None" } else { line.as_str() };
            Printer.message(format!("{shown} is not valid!"));
        }
    }
}
