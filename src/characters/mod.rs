//! Creature system: species templates, live characters, progression.
//!
//! ## Key Types
//!
//! - `Attributes`: Health, strength, smarts, speed
//! - `Species`: Immutable template with per-level bases and a learnset
//! - `Character`: Mutable battle entity derived from a species
//!
//! Species are shared between characters through `Arc` and never mutated
//! once loaded.

pub mod character;
pub mod progression;
pub mod species;

pub use character::Character;
pub use progression::MAX_KNOWN_ACTIONS;
pub use species::{Attributes, Species};
