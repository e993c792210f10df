//! Actions: what a character does on its turn.
//!
//! - `Action`: Named, prioritized list of effects
//! - `ActionCatalog`: Name -> action lookup shared by every character
//! - `LogEntry`: One line of battle output

pub mod action;
pub mod catalog;

pub use action::{Action, LogEntry, NOTHING};
pub use catalog::ActionCatalog;
