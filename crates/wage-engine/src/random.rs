//! The single source of randomness for the engine.
//!
//! Target locations, hit checks, weapon choices, confusion replies,
//! regeneration and `random@` placement all draw from a [`RandomSource`], so a
//! seeded [`StdRng`] or a [`ScriptedRolls`] sequence makes a session fully
//! reproducible.

use rand::Rng;
use rand::rngs::StdRng;

/// A uniform random source.
pub trait RandomSource {
    /// A uniform draw from `[0, 1)`.
    fn unit(&mut self) -> f64;

    /// A uniform index into a collection of `len` elements. `len` must be
    /// non-zero; zero yields 0.
    fn pick(&mut self, len: usize) -> usize {
        if len == 0 {
            return 0;
        }
        let scaled = (self.unit() * len as f64) as usize;
        scaled.min(len - 1)
    }
}

impl RandomSource for StdRng {
    fn unit(&mut self) -> f64 {
        self.random::<f64>()
    }

    fn pick(&mut self, len: usize) -> usize {
        if len == 0 {
            return 0;
        }
        self.random_range(0..len)
    }
}

/// A fixed, repeating sequence of unit rolls.
///
/// `pick` scales the next roll, so `0.0` always selects the first element and
/// `0.99` the last.
#[derive(Debug, Clone, Default)]
pub struct ScriptedRolls {
    rolls: Vec<f64>,
    next: usize,
}

impl ScriptedRolls {
    /// Cycle through `rolls`. An empty sequence always rolls `0.0`.
    pub fn new(rolls: impl IntoIterator<Item = f64>) -> Self {
        Self {
            rolls: rolls.into_iter().collect(),
            next: 0,
        }
    }

    /// Always roll the same value.
    pub fn constant(roll: f64) -> Self {
        Self::new([roll])
    }

    /// Number of rolls drawn so far.
    pub fn drawn(&self) -> usize {
        self.next
    }
}

impl RandomSource for ScriptedRolls {
    fn unit(&mut self) -> f64 {
        if self.rolls.is_empty() {
            return 0.0;
        }
        let roll = self.rolls[self.next % self.rolls.len()];
        self.next += 1;
        roll
    }
}
