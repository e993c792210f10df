//! Effect resolution - applying effects to characters.
//!
//! Every application mutates the characters in place and returns an
//! [`EffectOutcome`] whose `Display` is the battle log line.

use std::fmt;

use crate::characters::Character;
use crate::core::GameRng;

use super::effect::{Effect, DEFEND};

/// What happened when an effect was applied.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum EffectOutcome {
    /// Target was defending; nothing happened.
    Defended { target: String },
    /// Accuracy roll failed.
    Missed { user: String },
    /// Attack connected.
    Hit {
        user: String,
        target: String,
        damage: u32,
    },
    /// User recovered health.
    Healed { user: String, amount: u32 },
    /// Target gained a condition.
    Afflicted { target: String, condition: String },
    /// User started defending.
    Defending { user: String },
}

impl fmt::Display for EffectOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Defended { target } => write!(f, "{target} is defending"),
            Self::Missed { user } => write!(f, "{user} missed"),
            Self::Hit { user, target, .. } => write!(f, "{user} attacks {target}"),
            Self::Healed { user, .. } => write!(f, "{user} heals"),
            Self::Afflicted { target, condition } => write!(f, "{target} has {condition}"),
            Self::Defending { user } => write!(f, "{user} defends"),
        }
    }
}

/// Damage an attack of `power` deals from `user` to `target`.
///
/// `floor(power * user.level * user.strength / (target.strength + target.smarts + target.speed))`,
/// computed in integers. A target with no stats takes no damage.
pub fn attack_damage(power: u32, user: &Character, target: &Character) -> u32 {
    let bulk = u128::from(target.strength()) + u128::from(target.smarts()) + u128::from(target.speed());
    if bulk == 0 {
        tracing::trace!(target = target.name(), "attack against zero-stat target");
        return 0;
    }

    let force = u128::from(power) * u128::from(user.level()) * u128::from(user.strength());
    u32::try_from(force / bulk).unwrap_or(u32::MAX)
}

impl Effect {
    /// Apply this effect from `user` against `target`.
    ///
    /// Only `Attack` draws from `rng`, and only when the target is not defending.
    pub fn apply(&self, user: &mut Character, target: &mut Character, rng: &mut GameRng) -> EffectOutcome {
        match self {
            Effect::Attack { power, accuracy } => {
                if target.has_condition(DEFEND) {
                    return EffectOutcome::Defended {
                        target: target.name().to_string(),
                    };
                }

                let roll = rng.roll_percent();
                if roll >= *accuracy {
                    tracing::debug!(user = user.name(), roll, accuracy, "attack missed");
                    return EffectOutcome::Missed {
                        user: user.name().to_string(),
                    };
                }

                let damage = attack_damage(*power, user, target);
                target.damage(damage);
                tracing::debug!(
                    user = user.name(),
                    target = target.name(),
                    roll,
                    damage,
                    remaining = target.health(),
                    "attack hit"
                );

                EffectOutcome::Hit {
                    user: user.name().to_string(),
                    target: target.name().to_string(),
                    damage,
                }
            }

            Effect::Heal { power } => {
                let before = user.health();
                let amount = u64::from(*power) * u64::from(user.max_health()) / 100;
                user.heal(u32::try_from(amount).unwrap_or(u32::MAX));

                EffectOutcome::Healed {
                    user: user.name().to_string(),
                    amount: user.health() - before,
                }
            }

            Effect::Condition { condition } => {
                if target.has_condition(DEFEND) {
                    return EffectOutcome::Defended {
                        target: target.name().to_string(),
                    };
                }
                target.add_condition(condition.clone());

                EffectOutcome::Afflicted {
                    target: target.name().to_string(),
                    condition: condition.clone(),
                }
            }

            Effect::Defend => {
                user.add_condition(DEFEND);

                EffectOutcome::Defending {
                    user: user.name().to_string(),
                }
            }
        }
    }
}
