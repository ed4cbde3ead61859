//! Hard shadows from point lights.

use meadow_core::{NoiseSampler, Scene};
use meadow_math::{Ray, Vec3};

use crate::raycast::raycast_scene;

/// Whether `point` sees at least one light.
///
/// Lights are tried in order and the first unobstructed one ends the search.
/// Shadow rays start at `point` itself; the sphere self-hit epsilon keeps them
/// off the surface they leave. A scene without lights leaves every point in
/// shadow.
pub fn is_lit(point: Vec3, scene: &Scene, noise: &dyn NoiseSampler) -> bool {
    scene.lights.iter().any(|light| {
        let ray = Ray::toward(point, light.position);
        !raycast_scene(&ray, &scene.primitives, noise).is_hit()
    })
}
