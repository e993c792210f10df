//! Species randomization.
//!
//! Keeps a species' name, attribute total and learnset levels, but
//! reshuffles how the total is split and which actions are learned.

use crate::characters::{Attributes, Species};
use crate::core::{GameRng, QuestError, Result};

/// Split `attributes.total()` across the four attributes with uniform
/// random weights. Shares are truncated, so the new total may be a
/// little lower.
pub fn randomize_attributes(attributes: Attributes, rng: &mut GameRng) -> Attributes {
    let weights = [rng.gen_unit(), rng.gen_unit(), rng.gen_unit(), rng.gen_unit()];
    let sum: f64 = weights.iter().sum();
    if sum <= 0.0 {
        return attributes;
    }

    let total = f64::from(attributes.total());
    let share = |w: f64| (total * w / sum) as u32;
    Attributes::new(share(weights[0]), share(weights[1]), share(weights[2]), share(weights[3]))
}

/// Randomize a species' attributes and learnset.
///
/// Each learnset level, lowest first, gets a distinct action from `pool`.
pub fn randomize_species(species: &Species, pool: &[&str], rng: &mut GameRng) -> Result<Species> {
    let levels: Vec<u32> = species.learnset.keys().copied().collect();
    if pool.len() < levels.len() {
        return Err(QuestError::NotEnoughActions {
            species: species.name.clone(),
            required: levels.len(),
            found: pool.len(),
        });
    }

    let mut randomized = Species::new(species.name.clone(), randomize_attributes(species.attributes, rng));
    for level in levels {
        loop {
            let Some(&action) = rng.choose(pool) else {
                break;
            };
            if !randomized.learnset.values().any(|known| known == action) {
                randomized.learnset.insert(level, action.to_string());
                break;
            }
        }
    }

    Ok(randomized)
}
