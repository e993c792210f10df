//! Terminal driver: printing, input and the campaign loop.

mod display;
mod input;
mod session;

use clap::ValueEnum;

pub(crate) use input::Controller;
pub(crate) use session::Session;

/// World used when no `--world` is given.
pub(crate) const DEFAULT_WORLD: &str = include_str!("../../data/world.json");

/// Who makes the player's choices.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub(crate) enum Logic {
    /// Read choices from stdin.
    User,
    /// Pick uniformly at random.
    Random,
}
