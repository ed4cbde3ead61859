//! Built-in demo scene.
//!
//! A textured ground plane, a few fixed spheres in front of the camera and a
//! scatter of small decorative spheres. The scatter is drawn from an explicitly
//! seeded RNG so the same seed always produces the same scene.

use meadow_math::{rgba, Color, ColorExt, Vec3};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::scene::{Light, Plane, Scene, Sphere};

/// Height of the ground plane.
pub const GROUND_Y: f32 = -4.0;

/// Number of decorative spheres scattered on the ground.
pub const DECORATION_COUNT: usize = 16;

/// Build the demo scene for `seed`.
pub fn demo_scene(seed: u64) -> Scene {
    let mut scene = Scene::new()
        // Normal points down so rays from the camera above can hit it.
        .with_primitive(Plane::new(Vec3::NEG_Y, Vec3::new(0.0, GROUND_Y, 0.0)))
        .with_primitive(Sphere::new(
            Vec3::new(-3.0, 0.0, -16.0),
            2.0,
            rgba(0.4, 0.4, 0.3, 1.0),
        ))
        .with_primitive(Sphere::new(
            Vec3::new(-1.0, -1.5, -12.0),
            2.0,
            rgba(0.9, 0.9, 0.95, 1.0),
        ))
        .with_primitive(Sphere::new(
            Vec3::new(1.5, -0.5, -18.0),
            3.0,
            rgba(0.3, 0.1, 0.1, 1.0),
        ))
        .with_primitive(Sphere::new(
            Vec3::new(7.0, 5.0, -18.0),
            4.0,
            rgba(0.9, 0.75, 0.3, 1.0),
        ))
        .with_light(Light::new(Vec3::new(-20.0, 20.0, 20.0)))
        .with_light(Light::new(Vec3::new(30.0, 50.0, -25.0)));

    let mut rng = StdRng::seed_from_u64(seed);
    for _ in 0..DECORATION_COUNT {
        let radius = rng.gen_range(0.2..0.8);
        let center = Vec3::new(
            rng.gen_range(-14.0..14.0),
            GROUND_Y + radius,
            rng.gen_range(-40.0..-8.0),
        );
        scene.add_primitive(Sphere::new(center, radius, random_flower_color(&mut rng)));
    }

    log::debug!(
        "Built demo scene (seed {}): {} primitives, {} lights",
        seed,
        scene.primitive_count(),
        scene.light_count()
    );
    scene
}

/// Bright, saturated colors that stand out against the green ground.
fn random_flower_color(rng: &mut StdRng) -> Color {
    const PALETTE: [Color; 5] = [
        rgba(0.95, 0.3, 0.3, 1.0),
        rgba(0.95, 0.85, 0.2, 1.0),
        rgba(0.6, 0.3, 0.9, 1.0),
        rgba(1.0, 1.0, 1.0, 1.0),
        rgba(1.0, 0.55, 0.1, 1.0),
    ];
    let base = PALETTE[rng.gen_range(0..PALETTE.len())];
    base.scale_rgb(rng.gen_range(0.8..1.0))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scene::Primitive;

    #[test]
    fn test_same_seed_same_scene() {
        assert_eq!(demo_scene(42), demo_scene(42));
    }

    #[test]
    fn test_different_seed_moves_decorations() {
        let a = demo_scene(1);
        let b = demo_scene(2);
        // Fixed part is shared, the scatter is not.
        assert_eq!(a.primitives[..5], b.primitives[..5]);
        assert_ne!(a.primitives[5..], b.primitives[5..]);
    }

    #[test]
    fn test_demo_scene_is_valid() {
        let scene = demo_scene(7);
        assert!(scene.validate().is_ok());
        assert_eq!(scene.primitive_count(), 5 + DECORATION_COUNT);
        assert_eq!(scene.light_count(), 2);
    }

    #[test]
    fn test_decorations_rest_on_ground() {
        let scene = demo_scene(9);
        for primitive in &scene.primitives[5..] {
            match primitive {
                Primitive::Sphere(s) => {
                    assert!((s.center.y - s.radius - GROUND_Y).abs() < 1e-5);
                }
                Primitive::Plane(_) => panic!("decorations are spheres"),
            }
        }
    }
}
