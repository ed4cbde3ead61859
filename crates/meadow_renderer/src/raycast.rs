//! Nearest-hit resolution over a primitive list.

use meadow_core::{NoiseSampler, Primitive};
use meadow_math::{Color, Ray};

use crate::hittable::Hittable;
use crate::shader::{shade, sky_color};

/// Distance reported when a ray meets nothing.
pub const NO_HIT: f32 = f32::INFINITY;

/// Result of casting one ray into the scene.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HitResult {
    /// Distance to the nearest hit, or `NO_HIT`
    pub distance: f32,
    /// Shaded color of the nearest hit, or the sky color
    pub color: Color,
}

impl HitResult {
    /// Whether the ray hit anything. Compares against the sentinel exactly.
    #[inline]
    pub fn is_hit(&self) -> bool {
        self.distance != NO_HIT
    }
}

/// Cast `ray` against every primitive and shade the nearest hit.
///
/// Primitives are tested in order and a hit only replaces the current best
/// when it is strictly closer, so equal distances go to the earlier primitive.
/// The same routine serves primary and shadow rays.
pub fn raycast_scene(ray: &Ray, primitives: &[Primitive], noise: &dyn NoiseSampler) -> HitResult {
    let mut result = HitResult {
        distance: NO_HIT,
        color: Color::ONE,
    };

    for primitive in primitives {
        if let Some(distance) = primitive.hit(ray) {
            if distance < result.distance {
                result.distance = distance;
                result.color = shade(primitive, ray.at(distance), distance, noise);
            }
        }
    }

    if !result.is_hit() {
        result.color = sky_color(ray.direction);
    }

    result
}
