//! World roster: species, action catalog, starters and opponents.

pub mod randomizer;
pub mod roster;

pub use randomizer::{randomize_attributes, randomize_species};
pub use roster::{World, STARTER_COUNT};
