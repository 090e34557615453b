//! Seeded randomness for the simulation
//!
//! Every random decision goes through `GameRng` so a session is fully
//! reproducible from its seed.

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

/// Seeded PCG generator with the sampling helpers the spawner needs
#[derive(Debug, Clone)]
pub struct GameRng {
    seed: u64,
    rng: Pcg32,
}

impl GameRng {
    pub fn new(seed: u64) -> Self {
        Self {
            seed,
            rng: Pcg32::seed_from_u64(seed),
        }
    }

    /// Seed this generator was created with
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Uniform sample in (0, 1]
    ///
    /// Excluding zero keeps `ln(u)` finite in the Box–Muller transform.
    pub fn unit_open_closed(&mut self) -> f32 {
        1.0 - self.rng.random::<f32>()
    }

    /// Fair coin
    pub fn coin_flip(&mut self) -> bool {
        self.rng.random_bool(0.5)
    }

    /// True with probability `p` (clamped to [0, 1])
    pub fn chance(&mut self, p: f32) -> bool {
        let p = if p.is_nan() { 0.0 } else { p.clamp(0.0, 1.0) };
        self.rng.random_bool(p as f64)
    }

    /// Normal sample using the Box–Muller transform.
    ///
    /// `std_dev` is clamped to be non-negative. The result is unbounded on
    /// both sides; callers apply their own floor.
    pub fn normal(&mut self, mean: f32, std_dev: f32) -> f32 {
        let u1 = self.unit_open_closed();
        let u2 = self.unit_open_closed();
        let standard = (-2.0 * u1.ln()).sqrt() * (std::f32::consts::TAU * u2).sin();
        mean + std_dev.max(0.0) * standard
    }
}
