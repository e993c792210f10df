//! Experience curve.
//!
//! Reaching level `L + 1` from level `L` (L >= 1) costs `100 + 25 * (L - 1)`
//! experience: 100, 125, 150, ... A level-0 character needs the same 100
//! as level 1.
//! Experience left over after a level-up carries into the next level.

/// Most actions a character may keep after a battle.
pub const MAX_KNOWN_ACTIONS: usize = 4;

/// Experience to go from level 1 to level 2.
pub const BASE_EXPERIENCE: u32 = 100;

/// Extra experience each further level costs.
pub const EXPERIENCE_STEP: u32 = 25;

/// Experience awarded per level of a defeated character.
pub const REWARD_PER_LEVEL: u32 = 30;

/// Experience needed to advance from `level` to `level + 1`.
#[must_use]
pub fn experience_to_next(level: u32) -> u32 {
    match level {
        0 => BASE_EXPERIENCE,
        l => BASE_EXPERIENCE.saturating_add(EXPERIENCE_STEP.saturating_mul(l - 1)),
    }
}

/// Experience earned for defeating a character of `level`.
#[must_use]
pub fn experience_reward(level: u32) -> u32 {
    REWARD_PER_LEVEL.saturating_mul(level)
}
