//! Meadow Renderer - CPU ray casting
//!
//! Renders a scene of spheres and planes with a single primary ray per pixel,
//! a procedural ground texture and hard shadows from point lights.
//!
//! The pipeline, per pixel: primary ray -> nearest hit over all primitives ->
//! procedural shade -> shadow rays toward the lights -> final color.

mod hittable;
mod raycast;
mod renderer;
mod shader;
mod shadow;

pub use hittable::{Hittable, PLANE_EPSILON, SELF_HIT_EPSILON};
pub use raycast::{raycast_scene, HitResult, NO_HIT};
pub use renderer::{
    pixel_direction, render, render_into, render_pixel, ImageBuffer, PixelIndexing,
    RenderConfig, RenderError, DEFAULT_FOV, SHADOW_FACTOR,
};
pub use shader::{
    ground_band, ground_color, shade, sky_color, GroundSamples, FAR_GROUND_COLOR,
    FAR_GROUND_DISTANCE, GROUND_BASE, GROUND_A, GROUND_B, GROUND_C, GROUND_D,
    NEAR_DETAIL_DISTANCE,
};
pub use shadow::is_lit;

/// Re-export the math and scene types the renderer works with
pub use meadow_core::{Light, NoiseSampler, Plane, Primitive, Scene, Sphere};
pub use meadow_math::{Color, Ray, Vec3};
