//! Meadow Core - scene description and collaborators for the ray caster.
//!
//! This crate provides:
//!
//! - **Scene types**: `Scene`, `Primitive`, `Sphere`, `Plane`, `Light`
//! - **Noise**: the `NoiseSampler` seam and a seeded Perlin implementation
//! - **Demo scene**: a reproducible, seeded test scene
//! - **Output**: binary PPM and PNG writers for rendered color grids
//!
//! # Example
//!
//! ```ignore
//! use meadow_core::{demo_scene, Scene};
//!
//! let scene = demo_scene(7);
//! println!("{} primitives, {} lights",
//!     scene.primitive_count(),
//!     scene.light_count());
//! ```

pub mod demo;
pub mod sampler;
pub mod output;
pub mod scene;

// Re-export commonly used types
pub use demo::demo_scene;
pub use sampler::{NoiseSampler, PerlinNoise};
pub use output::{save_image, save_png, save_ppm, write_ppm, OutputError};
pub use scene::{Light, Plane, Primitive, Scene, SceneError, Sphere};
