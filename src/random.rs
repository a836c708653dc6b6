use rand::{Rng, SeedableRng, rngs::StdRng};

/// Source of the random choices made while decorating a batch.
pub trait RandomSource: Send {
    /// Returns a value in `0..upper`. `upper` is never zero.
    fn below(&mut self, upper: usize) -> usize;
}

/// [`RandomSource`] backed by [`StdRng`].
pub struct SeededRandom(StdRng);

impl SeededRandom {
    /// Seeds from the operating system.
    pub fn from_entropy() -> Self {
        Self(StdRng::from_entropy())
    }

    /// Reproducible sequence for a fixed `seed`.
    pub fn seeded(seed: u64) -> Self {
        Self(StdRng::seed_from_u64(seed))
    }
}

impl Default for SeededRandom {
    fn default() -> Self {
        Self::from_entropy()
    }
}

impl RandomSource for SeededRandom {
    fn below(&mut self, upper: usize) -> usize {
        self.0.gen_range(0..upper)
    }
}

/// Replays a fixed list of values, wrapping around at the end.
///
/// Each value is reduced modulo the requested bound.
///
/// ```
/// use vent::random::{RandomSource, ScriptedRandom};
/// let mut r = ScriptedRandom::new(vec![3, 14]);
/// assert_eq!(r.below(10), 3);
/// assert_eq!(r.below(10), 4);
/// assert_eq!(r.below(10), 3);
/// ```
#[derive(Debug, Clone)]
pub struct ScriptedRandom {
    values: Vec<usize>,
    pos: usize,
}

impl ScriptedRandom {
    pub fn new(values: Vec<usize>) -> Self {
        Self { values, pos: 0 }
    }
}

impl RandomSource for ScriptedRandom {
    fn below(&mut self, upper: usize) -> usize {
        if self.values.is_empty() {
            return 0;
        }
        let v = self.values[self.pos % self.values.len()];
        self.pos += 1;
        v % upper
    }
}
