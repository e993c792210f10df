//! Action definitions and battle log entries.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::characters::Character;
use crate::core::{GameRng, Result};
use crate::effects::{Effect, EffectOutcome};

/// Name of the built-in no-op action.
pub const NOTHING: &str = "nothing";

/// A named, prioritized bundle of effects.
///
/// ## Example
///
/// ```
/// use auto_quest::actions::Action;
/// use auto_quest::effects::Effect;
///
/// let quick = Action::new("quick jab", [Effect::attack(20, 100)]).with_priority(1);
/// assert_eq!(quick.priority, 1);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Action {
    pub name: String,

    /// Applied in order against the same (user, target) pair.
    pub effects: Vec<Effect>,

    /// Higher priority acts first within a turn.
    #[serde(default)]
    pub priority: i32,
}

impl Action {
    /// Create an action with priority 0.
    pub fn new(name: impl Into<String>, effects: impl IntoIterator<Item = Effect>) -> Self {
        Self {
            name: name.into(),
            effects: effects.into_iter().collect(),
            priority: 0,
        }
    }

    /// The action taken while scouting: no effects, priority 0.
    pub fn nothing() -> Self {
        Self::new(NOTHING, [])
    }

    /// Set priority (builder pattern).
    #[must_use]
    pub fn with_priority(mut self, priority: i32) -> Self {
        self.priority = priority;
        self
    }

    /// Check every effect's parameters.
    pub fn validate(&self) -> Result<()> {
        self.effects.iter().try_for_each(|effect| effect.validate(&self.name))
    }

    /// Perform this action: a `Uses` entry followed by one entry per effect.
    pub fn act(&self, user: &mut Character, target: &mut Character, rng: &mut GameRng) -> Vec<LogEntry> {
        let mut log = Vec::with_capacity(self.effects.len() + 1);
        log.push(LogEntry::Uses {
            user: user.name().to_string(),
            action: self.name.clone(),
        });
        log.extend(
            self.effects
                .iter()
                .map(|effect| LogEntry::Effect(effect.apply(user, target, rng))),
        );
        log
    }
}

/// One battle log line.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum LogEntry {
    /// A character started an action.
    Uses { user: String, action: String },
    /// One effect of that action resolved.
    Effect(EffectOutcome),
}

impl fmt::Display for LogEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Uses { user, action } => write!(f, "{user} uses {action}"),
            Self::Effect(outcome) => outcome.fmt(f),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::characters::{Attributes, Species};
    use crate::core::QuestError;
    use crate::effects::DEFEND;

    fn pair() -> (Character, Character) {
        let species = Arc::new(Species::new("blob", Attributes::new(20, 2, 2, 2)));
        (
            Character::at_level(species.clone(), Some("left".to_string()), 2),
            Character::at_level(species, Some("right".to_string()), 2),
        )
    }

    #[test]
    fn test_act_logs_in_order() {
        let (mut user, mut target) = pair();
        let mut rng = GameRng::new(5);
        let action = Action::new("guard strike", [Effect::Defend, Effect::condition("dazed")]);

        let log = action.act(&mut user, &mut target, &mut rng);
        let lines: Vec<_> = log.iter().map(ToString::to_string).collect();

        assert_eq!(lines, ["left uses guard strike", "left defends", "right has dazed"]);
        assert!(user.has_condition(DEFEND));
        assert!(target.has_condition("dazed"));
    }

    #[test]
    fn test_nothing_only_logs_use() {
        let (mut user, mut target) = pair();
        let mut rng = GameRng::new(5);

        let log = Action::nothing().act(&mut user, &mut target, &mut rng);

        assert_eq!(log.len(), 1);
        assert_eq!(log[0].to_string(), "left uses nothing");
        assert_eq!(target.health(), target.max_health());
    }

    #[test]
    fn test_priority_defaults_to_zero() {
        let action: Action = serde_json::from_str(
            r#"{"name": "tackle", "effects": [{"type": "attack", "power": 40, "accuracy": 95}]}"#,
        )
        .unwrap();
        assert_eq!(action.priority, 0);
        assert_eq!(action.effects, vec![Effect::attack(40, 95)]);
    }

    #[test]
    fn test_unknown_effect_fails_action() {
        let result = serde_json::from_str::<Action>(
            r#"{"name": "warp", "effects": [{"type": "warp"}], "priority": 2}"#,
        );
        assert!(result.is_err());
    }

    #[test]
    fn test_validate() {
        assert!(Action::new("ok", [Effect::attack(1, 50)]).validate().is_ok());
        let err = Action::new("wild", [Effect::heal(5), Effect::attack(1, 150)])
            .validate()
            .unwrap_err();
        assert!(matches!(err, QuestError::InvalidAccuracy { .. }));
    }
}
