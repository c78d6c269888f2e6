//! Randomness for decorative sequences.
//!
//! Nothing here is security relevant: packet numbers, progress jitter and scene
//! layouts only need to look random. Seeds come from the wall clock so the browser
//! build needs no OS entropy source.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

/// Source of uniform samples in `[0, 1)`.
pub trait Entropy {
    fn unit(&mut self) -> f64;

    /// Uniform sample in `[low, high)`.
    fn between(&mut self, low: f64, high: f64) -> f64 {
        (high - low).mul_add(self.unit(), low)
    }

    /// Uniform index into a collection of `len` items; `None` when empty.
    fn index(&mut self, len: usize) -> Option<usize> {
        if len == 0 {
            return None;
        }
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let idx = (self.unit() * len as f64).floor() as usize;
        Some(idx.min(len - 1))
    }

    /// Picks one element uniformly.
    fn pick<'a, T>(&mut self, items: &'a [T]) -> Option<&'a T> {
        self.index(items.len()).map(|i| &items[i])
    }

    /// `true` with probability `p`.
    fn chance(&mut self, p: f64) -> bool {
        self.unit() < p
    }
}

/// Default entropy source backed by a small, fast PRNG.
#[derive(Debug, Clone)]
pub struct SeededEntropy {
    rng: SmallRng,
}

impl SeededEntropy {
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self { rng: SmallRng::seed_from_u64(seed) }
    }

    /// Seeds from the current wall-clock time.
    #[must_use]
    pub fn from_clock() -> Self {
        let now = chrono::Utc::now();
        #[allow(clippy::cast_sign_loss)]
        let seed = now.timestamp_nanos_opt().unwrap_or_else(|| now.timestamp_millis()) as u64;
        Self::new(seed)
    }
}

impl Entropy for SeededEntropy {
    fn unit(&mut self) -> f64 {
        self.rng.random::<f64>()
    }
}

/// Replays a fixed sequence of samples, cycling when exhausted. Useful for
/// scripting a sequence deterministically.
#[derive(Debug, Clone)]
pub struct ScriptedEntropy {
    samples: Vec<f64>,
    cursor: usize,
}

impl ScriptedEntropy {
    /// # Panics
    /// Panics if `samples` is empty or contains values outside `[0, 1)`.
    #[must_use]
    pub fn new(samples: impl Into<Vec<f64>>) -> Self {
        let samples = samples.into();
        assert!(!samples.is_empty(), "scripted entropy needs at least one sample");
        assert!(samples.iter().all(|s| (0.0..1.0).contains(s)), "samples must lie in [0, 1)");
        Self { samples, cursor: 0 }
    }
}

impl Entropy for ScriptedEntropy {
    fn unit(&mut self) -> f64 {
        let value = self.samples[self.cursor % self.samples.len()];
        self.cursor += 1;
        value
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seeded_entropy_is_reproducible() {
        let mut a = SeededEntropy::new(7);
        let mut b = SeededEntropy::new(7);
        for _ in 0..16 {
            let (x, y) = (a.unit(), b.unit());
            assert!((x - y).abs() < f64::EPSILON);
            assert!((0.0..1.0).contains(&x));
        }
    }

    #[test]
    fn index_stays_in_bounds() {
        let mut entropy = ScriptedEntropy::new([0.0, 0.5, 0.999_999]);
        assert_eq!(entropy.index(4), Some(0));
        assert_eq!(entropy.index(4), Some(2));
        assert_eq!(entropy.index(4), Some(3));
        assert_eq!(entropy.index(0), None);
    }

    #[test]
    fn between_scales_unit_samples() {
        let mut entropy = ScriptedEntropy::new([0.5]);
        assert!((entropy.between(0.2, 0.4) - 0.3).abs() < 1e-12);
    }

    #[test]
    fn scripted_entropy_cycles() {
        let mut entropy = ScriptedEntropy::new([0.1, 0.9]);
        assert!(entropy.chance(0.5));
        assert!(!entropy.chance(0.5));
        assert!(entropy.chance(0.5));
    }
}
