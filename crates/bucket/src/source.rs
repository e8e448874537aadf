//! Injectable sources of randomness for pool extraction.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Uniform index generator used by [`RandomPool`](crate::RandomPool).
///
/// Implementations must return every index in `0..len` with equal
/// probability. `len` is never zero.
pub trait RandomSource: Send {
    /// Pick an index in `0..len`.
    fn next_index(&mut self, len: usize) -> usize;

    /// Create an independent source for a duplicated pool.
    ///
    /// The fork must not share state with `self`: drawing from one never
    /// changes what the other produces next.
    fn fork(&mut self) -> Box<dyn RandomSource>;
}

// =============================================================================
// StdRngSource
// =============================================================================

/// [`StdRng`]-backed source, seeded from the OS or from a fixed seed.
pub struct StdRngSource {
    rng: StdRng,
}

impl StdRngSource {
    /// Seed from OS entropy.
    pub fn from_os() -> Self {
        Self {
            rng: StdRng::from_os_rng(),
        }
    }

    /// Seed deterministically (reproducible draws).
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Default for StdRngSource {
    fn default() -> Self {
        Self::from_os()
    }
}

impl RandomSource for StdRngSource {
    fn next_index(&mut self, len: usize) -> usize {
        self.rng.random_range(0..len)
    }

    fn fork(&mut self) -> Box<dyn RandomSource> {
        // Child seeds come from the parent stream so seeded runs stay reproducible
        Box::new(Self::seeded(self.rng.random()))
    }
}

// =============================================================================
// ScriptedSource
// =============================================================================

/// Replays a fixed cycle of indices, reduced modulo the pool length.
///
/// Used for deterministic replays and exact-output tests. An empty script
/// always picks index 0. Forks restart the script from the beginning.
#[derive(Debug, Clone, Default)]
pub struct ScriptedSource {
    script: Vec<usize>,
    cursor: usize,
}

impl ScriptedSource {
    pub fn new(script: Vec<usize>) -> Self {
        Self { script, cursor: 0 }
    }

    /// Always pick the first remaining item.
    pub fn first_item() -> Self {
        Self::default()
    }
}

impl RandomSource for ScriptedSource {
    fn next_index(&mut self, len: usize) -> usize {
        if self.script.is_empty() {
            return 0;
        }
        let pick = self.script[self.cursor % self.script.len()];
        self.cursor += 1;
        pick % len
    }

    fn fork(&mut self) -> Box<dyn RandomSource> {
        Box::new(Self::new(self.script.clone()))
    }
}
