//! Effect definitions.
//!
//! Effects are atomic move outcomes composed into actions. The set of
//! kinds is closed: world files select one with a `"type"` tag and any
//! other tag is rejected when the world is parsed.

use serde::{Deserialize, Serialize};

use crate::core::{QuestError, Result};

/// Condition that blocks attacks and afflictions for one exchange.
pub const DEFEND: &str = "defend";

/// An atomic move outcome.
///
/// ## Variants
///
/// - `Attack`: Scaled damage to the target, subject to an accuracy roll
/// - `Heal`: Restore a percentage of the user's max health
/// - `Condition`: Afflict the target with a named condition
/// - `Defend`: Guard the user until the end of the exchange
///
/// In a world file:
///
/// ```json
/// {"type": "attack", "power": 40, "accuracy": 95}
/// {"type": "heal", "power": 50}
/// {"type": "condition", "condition": "poison"}
/// {"type": "defend"}
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Effect {
    /// Deal damage scaled by user level/strength against target bulk.
    Attack {
        power: u32,
        /// Hit chance in percent, `0..=100`.
        accuracy: u32,
    },

    /// Restore `power` percent of the user's max health.
    Heal {
        power: u32,
    },

    /// Add a condition to the target.
    Condition {
        condition: String,
    },

    /// Add [`DEFEND`] to the user.
    Defend,
}

impl Effect {
    /// Create an attack effect.
    pub fn attack(power: u32, accuracy: u32) -> Self {
        Self::Attack { power, accuracy }
    }

    /// Create a heal effect.
    pub fn heal(power: u32) -> Self {
        Self::Heal { power }
    }

    /// Create a condition effect.
    pub fn condition(condition: impl Into<String>) -> Self {
        Self::Condition {
            condition: condition.into(),
        }
    }

    /// Check parameters that serde cannot express.
    ///
    /// `action` is only used for the error message.
    pub fn validate(&self, action: &str) -> Result<()> {
        match self {
            Self::Attack { accuracy, .. } if *accuracy > 100 => Err(QuestError::InvalidAccuracy {
                action: action.to_string(),
                accuracy: *accuracy,
            }),
            _ => Ok(()),
        }
    }
}
