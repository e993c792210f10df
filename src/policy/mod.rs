//! Decision providers: who picks the next move.
//!
//! The engine never decides for a side. It hands an ordered list of
//! choice labels to a `DecisionProvider` and expects an index back.
//! Indices are checked by the caller; an out-of-range answer is an error,
//! not something the engine clamps.
//!
//! - `UniformPolicy`: Uniformly random choice from the shared RNG
//! - `FixedPolicy`: Replays a scripted sequence of indices

use std::collections::VecDeque;

use crate::core::GameRng;

/// Something that picks one of several labelled choices.
pub trait DecisionProvider {
    /// Return an index into `choices`.
    ///
    /// Random providers must draw from `rng` so that seeded runs replay.
    fn choose(&mut self, choices: &[String], rng: &mut GameRng) -> usize;
}

impl<P: DecisionProvider + ?Sized> DecisionProvider for &mut P {
    fn choose(&mut self, choices: &[String], rng: &mut GameRng) -> usize {
        (**self).choose(choices, rng)
    }
}

/// Uniform random policy.
#[derive(Clone, Copy, Debug, Default)]
pub struct UniformPolicy;

impl DecisionProvider for UniformPolicy {
    fn choose(&mut self, choices: &[String], rng: &mut GameRng) -> usize {
        if choices.is_empty() {
            return 0;
        }
        rng.gen_range_usize(0..choices.len())
    }
}

/// Scripted policy.
///
/// Returns the queued indices in order, cycling once exhausted. Useful
/// for tests and simple agents.
#[derive(Clone, Debug)]
pub struct FixedPolicy {
    script: VecDeque<usize>,
}

impl FixedPolicy {
    /// Replay `script`, cycling. An empty script always answers 0.
    pub fn new(script: impl IntoIterator<Item = usize>) -> Self {
        Self {
            script: script.into_iter().collect(),
        }
    }

    /// Always pick `index`.
    #[must_use]
    pub fn always(index: usize) -> Self {
        Self::new([index])
    }
}

impl DecisionProvider for FixedPolicy {
    fn choose(&mut self, _choices: &[String], _rng: &mut GameRng) -> usize {
        match self.script.pop_front() {
            Some(index) => {
                self.script.push_back(index);
                index
            }
            None => 0,
        }
    }
}
