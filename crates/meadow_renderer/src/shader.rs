//! Procedural shading.
//!
//! Spheres are flat colored. Planes get a mottled ground texture built from
//! four noise samples at different frequencies, each mapped onto a discrete
//! color band. Beyond `FAR_GROUND_DISTANCE` the ground is a flat color and no
//! noise is sampled. Rays that miss everything get a vertical sky gradient.

use meadow_core::{NoiseSampler, Primitive};
use meadow_math::{rgba, Color, Vec3, UP};

/// Ground beyond this distance is drawn flat.
pub const FAR_GROUND_DISTANCE: f32 = 100.0;

/// The fine-detail band only appears closer than this.
pub const NEAR_DETAIL_DISTANCE: f32 = 10.0;

pub const FAR_GROUND_COLOR: Color = rgba(0.12, 0.3, 0.1, 1.0);

/// Brightest green
pub const GROUND_A: Color = rgba(0.4, 0.75, 0.25, 1.0);
pub const GROUND_B: Color = rgba(0.3, 0.6, 0.18, 1.0);
pub const GROUND_C: Color = rgba(0.22, 0.48, 0.14, 1.0);
pub const GROUND_D: Color = rgba(0.16, 0.4, 0.12, 1.0);
/// Darkest green
pub const GROUND_BASE: Color = rgba(0.1, 0.28, 0.08, 1.0);

/// Offset applied to the point for the second, decorrelated sample.
const OFFSET: Vec3 = Vec3::new(17.3, 5.9, 31.7);
const FINE_SCALE: f32 = 16.0;
const STREAK_SCALE: Vec3 = Vec3::new(48.0, 48.0, 8.0);

/// The four noise values that drive the ground bands.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GroundSamples {
    /// Base frequency
    pub n: f32,
    /// Offset copy of the base frequency
    pub n2: f32,
    /// 16x frequency
    pub n3: f32,
    /// Anisotropic 48x/48x/8x frequency
    pub n4: f32,
}

impl GroundSamples {
    /// Sample `noise` around `point`.
    pub fn at(point: Vec3, noise: &dyn NoiseSampler) -> Self {
        let sample = |p: Vec3| noise.sample(p.x, p.y, p.z);
        Self {
            n: sample(point),
            n2: sample(point + OFFSET),
            n3: sample(point * FINE_SCALE),
            n4: sample(point * STREAK_SCALE),
        }
    }
}

/// Pick the ground band. The first satisfied rule wins.
pub fn ground_band(samples: &GroundSamples, distance: f32) -> Color {
    if samples.n4 > 0.3 {
        GROUND_A
    } else if samples.n3 > 0.4 {
        GROUND_B
    } else if samples.n > 0.3 {
        GROUND_C
    } else if distance < NEAR_DETAIL_DISTANCE && samples.n2 > 0.3 {
        GROUND_D
    } else {
        GROUND_BASE
    }
}

/// Ground color at `point`, seen from `distance` away.
pub fn ground_color(point: Vec3, distance: f32, noise: &dyn NoiseSampler) -> Color {
    if distance > FAR_GROUND_DISTANCE {
        return FAR_GROUND_COLOR;
    }
    ground_band(&GroundSamples::at(point, noise), distance)
}

/// Color of `primitive` at `point`, `distance` along the ray.
pub fn shade(primitive: &Primitive, point: Vec3, distance: f32, noise: &dyn NoiseSampler) -> Color {
    match primitive {
        Primitive::Sphere(sphere) => sphere.color,
        Primitive::Plane(_) => ground_color(point, distance, noise),
    }
}

/// Sky gradient for a ray leaving the scene. Not clamped.
#[inline]
pub fn sky_color(direction: Vec3) -> Color {
    rgba(0.2, 0.2, 1.0 - direction.dot(UP), 1.0)
}
