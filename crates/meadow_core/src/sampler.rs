//! Procedural noise used by the ground texture.
//!
//! The renderer only sees the `NoiseSampler` trait. Any deterministic,
//! continuous function works; the shading thresholds assume output centered
//! on zero and roughly within [-1, 1].

use noise::{NoiseFn, Perlin};

/// Deterministic 3D scalar noise.
pub trait NoiseSampler: Send + Sync {
    /// Sample the noise field at (x, y, z).
    fn sample(&self, x: f32, y: f32, z: f32) -> f32;
}

/// Seed used when none is given, so default renders are reproducible.
pub const DEFAULT_NOISE_SEED: u32 = 0;

/// Seeded 3D Perlin noise backed by the `noise` crate.
#[derive(Clone)]
pub struct PerlinNoise {
    perlin: Perlin,
    seed: u32,
}

impl PerlinNoise {
    pub fn new(seed: u32) -> Self {
        Self {
            perlin: Perlin::new(seed),
            seed,
        }
    }

    pub fn seed(&self) -> u32 {
        self.seed
    }
}

impl std::fmt::Debug for PerlinNoise {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PerlinNoise").field("seed", &self.seed).finish()
    }
}

impl Default for PerlinNoise {
    fn default() -> Self {
        Self::new(DEFAULT_NOISE_SEED)
    }
}

impl NoiseSampler for PerlinNoise {
    #[inline]
    fn sample(&self, x: f32, y: f32, z: f32) -> f32 {
        self.perlin.get([x as f64, y as f64, z as f64]) as f32
    }
}
