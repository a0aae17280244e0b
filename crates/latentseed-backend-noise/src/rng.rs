//! Deterministic RNG wrapper using PCG32.
//!
//! Every random draw made while synthesizing a field goes through one
//! request-scoped [`DeterministicRng`]. Nothing in this crate touches a global
//! generator, so concurrent syntheses never observe each other's seeds.

use rand::{Rng, SeedableRng};
use rand_distr::StandardNormal;
use rand_pcg::Pcg32;

/// Wrapper around PCG32 for deterministic random number generation.
#[derive(Clone)]
pub struct DeterministicRng {
    inner: Pcg32,
}

impl DeterministicRng {
    /// Create a new RNG from a 64-bit request seed.
    pub fn new(seed: u64) -> Self {
        Self {
            inner: Pcg32::seed_from_u64(seed),
        }
    }

    /// Draw one standard-normal sample.
    #[inline]
    pub fn gen_normal(&mut self) -> f64 {
        self.inner.sample(StandardNormal)
    }

    /// Fill a buffer with standard-normal samples, in index order.
    pub fn fill_normal(&mut self, out: &mut [f64]) {
        for v in out.iter_mut() {
            *v = self.gen_normal();
        }
    }
}
