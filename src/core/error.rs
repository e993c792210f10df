//! Error types for world loading and battle resolution.

use std::path::PathBuf;

use thiserror::Error;

/// Result type alias using [`QuestError`].
pub type Result<T> = std::result::Result<T, QuestError>;

/// Top-level error type for the game engine.
#[derive(Debug, Error)]
pub enum QuestError {
    /// World file could not be read.
    #[error("Failed to read world file '{path}': {source}")]
    Io {
        /// Path that failed to open.
        path: PathBuf,
        /// Underlying IO error.
        #[source]
        source: std::io::Error,
    },

    /// World document is malformed (unknown effect type, missing field, ...).
    #[error("Failed to parse world: {0}")]
    Parse(#[from] serde_json::Error),

    /// Two actions share a name.
    #[error("Duplicate action: {0}")]
    DuplicateAction(String),

    /// A learnset refers to an action missing from the catalog.
    #[error("Species '{species}' learns unknown action '{action}' at level {level}")]
    UnknownLearnsetAction {
        /// Species declaring the learnset.
        species: String,
        /// Missing action name.
        action: String,
        /// Learnset level.
        level: u32,
    },

    /// Attack accuracy outside `0..=100`.
    #[error("Action '{action}' has accuracy {accuracy}, expected 0..=100")]
    InvalidAccuracy {
        /// Action holding the attack.
        action: String,
        /// Declared accuracy.
        accuracy: u32,
    },

    /// Too few species for the requested draw.
    #[error("World needs at least {required} species, found {found}")]
    NotEnoughSpecies {
        /// Minimum required.
        required: usize,
        /// Species available.
        found: usize,
    },

    /// Learnsets start at level 1; a level-0 entry could never be learned.
    #[error("Species '{species}' lists action '{action}' at level 0")]
    ZeroLearnsetLevel {
        /// Species declaring the learnset.
        species: String,
        /// Action at level 0.
        action: String,
    },

    /// Too few actions to fill a randomized learnset.
    #[error("Need {required} distinct actions to randomize '{species}', pool has {found}")]
    NotEnoughActions {
        /// Species being randomized.
        species: String,
        /// Learnset size.
        required: usize,
        /// Pool size.
        found: usize,
    },

    /// Action name not present in the catalog.
    #[error("Unknown action: {0}")]
    UnknownAction(String),

    /// A decision provider or caller passed an invalid index.
    #[error("Choice {index} out of range for {len} options")]
    ChoiceOutOfRange {
        /// Index received.
        index: usize,
        /// Number of options.
        len: usize,
    },
}
