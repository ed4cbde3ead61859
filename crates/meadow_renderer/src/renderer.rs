//! Frame rendering.
//!
//! One primary ray per pixel from a fixed eye at the origin looking down -Z.
//! Hits are shadow tested against the scene lights; shadowed pixels keep
//! their hue at half brightness. Pixels are independent, so the frame can be
//! filled in parallel with rayon.

use std::time::Instant;

use meadow_core::{NoiseSampler, OutputError, Scene};
use meadow_math::{Color, ColorExt, Ray, Vec3};
use rayon::prelude::*;
use thiserror::Error;

use crate::raycast::raycast_scene;
use crate::shadow::is_lit;

/// Field of view in radians.
pub const DEFAULT_FOV: f32 = 1.05;

/// RGB multiplier applied to shadowed pixels.
pub const SHADOW_FACTOR: f32 = 0.5;

/// Errors reported before any pixel is written.
#[derive(Error, Debug, PartialEq)]
pub enum RenderError {
    #[error("Frame is empty ({width}x{height})")]
    EmptyFrame { width: u32, height: u32 },

    #[error("Output buffer holds {actual} pixels, frame needs {expected}")]
    BufferSize { expected: usize, actual: usize },

    #[error("Field of view must be in (0, pi), got {0}")]
    InvalidFov(f32),
}

/// How a flat pixel index maps to a column and a row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PixelIndexing {
    /// `column = p % width`, `row = p / height`.
    ///
    /// Matches the long-standing output of this renderer. Only equivalent to
    /// row-major order for square frames.
    #[default]
    Legacy,
    /// `column = p % width`, `row = p / width`.
    RowMajor,
}

impl PixelIndexing {
    /// Column and row for flat index `p`.
    #[inline]
    pub fn coords(self, p: usize, width: u32, height: u32) -> (usize, usize) {
        let column = p % width as usize;
        let row = match self {
            PixelIndexing::Legacy => p / height as usize,
            PixelIndexing::RowMajor => p / width as usize,
        };
        (column, row)
    }
}

/// Render configuration.
#[derive(Debug, Clone)]
pub struct RenderConfig {
    pub width: u32,
    pub height: u32,
    /// Field of view in radians
    pub fov: f32,
    pub indexing: PixelIndexing,
    /// Fill the frame on the rayon thread pool
    pub parallel: bool,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            width: 1024,
            height: 1024,
            fov: DEFAULT_FOV,
            indexing: PixelIndexing::Legacy,
            parallel: true,
        }
    }
}

impl RenderConfig {
    pub fn with_resolution(mut self, width: u32, height: u32) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    pub fn pixel_count(&self) -> usize {
        self.width as usize * self.height as usize
    }

    fn validate(&self) -> Result<(), RenderError> {
        if self.width == 0 || self.height == 0 {
            return Err(RenderError::EmptyFrame {
                width: self.width,
                height: self.height,
            });
        }
        if !(self.fov > 0.0 && self.fov < std::f32::consts::PI) {
            return Err(RenderError::InvalidFov(self.fov));
        }
        Ok(())
    }
}

/// Unit direction of the primary ray for flat pixel index `p`.
pub fn pixel_direction(p: usize, config: &RenderConfig) -> Vec3 {
    let (i, j) = config.indexing.coords(p, config.width, config.height);
    let width = config.width as f32;
    let height = config.height as f32;

    let x = (i as f32 + 0.5) - width / 2.0;
    let y = -(j as f32 + 0.5) + height / 2.0;
    let z = -height / (2.0 * (config.fov / 2.0).tan());
    Vec3::new(x, y, z).normalize()
}

/// Final color of flat pixel index `p`.
pub fn render_pixel(p: usize, scene: &Scene, noise: &dyn NoiseSampler, config: &RenderConfig) -> Color {
    let ray = Ray::new(Vec3::ZERO, pixel_direction(p, config));
    let hit = raycast_scene(&ray, &scene.primitives, noise);

    // Sky is never darkened
    if !hit.is_hit() {
        return hit.color;
    }

    if is_lit(ray.at(hit.distance), scene, noise) {
        hit.color
    } else {
        hit.color.scale_rgb(SHADOW_FACTOR)
    }
}

/// Fill a caller-owned frame buffer. Every cell is written exactly once.
///
/// The buffer must hold exactly `width * height` colors.
pub fn render_into(
    scene: &Scene,
    noise: &dyn NoiseSampler,
    config: &RenderConfig,
    pixels: &mut [Color],
) -> Result<(), RenderError> {
    config.validate()?;
    if pixels.len() != config.pixel_count() {
        return Err(RenderError::BufferSize {
            expected: config.pixel_count(),
            actual: pixels.len(),
        });
    }
    if config.indexing == PixelIndexing::Legacy && config.width != config.height {
        log::warn!(
            "Legacy pixel indexing on a non-square {}x{} frame; rows will not be row-major",
            config.width,
            config.height
        );
    }

    log::debug!(
        "Rendering {}x{} ({} primitives, {} lights, parallel: {})",
        config.width,
        config.height,
        scene.primitive_count(),
        scene.light_count(),
        config.parallel
    );

    let start = Instant::now();
    if config.parallel {
        pixels
            .par_iter_mut()
            .enumerate()
            .for_each(|(p, pixel)| *pixel = render_pixel(p, scene, noise, config));
    } else {
        for (p, pixel) in pixels.iter_mut().enumerate() {
            *pixel = render_pixel(p, scene, noise, config);
        }
    }
    log::info!(
        "Rendered {}x{} in {:?}",
        config.width,
        config.height,
        start.elapsed()
    );

    Ok(())
}

/// Render the entire scene to a new image buffer.
pub fn render(
    scene: &Scene,
    noise: &dyn NoiseSampler,
    config: &RenderConfig,
) -> Result<ImageBuffer, RenderError> {
    let mut image = ImageBuffer::new(config.width, config.height);
    render_into(scene, noise, config, &mut image.pixels)?;
    Ok(image)
}

/// Frame buffer: `width * height` colors in render order.
#[derive(Debug, Clone, PartialEq)]
pub struct ImageBuffer {
    pub width: u32,
    pub height: u32,
    pub pixels: Vec<Color>,
}

impl ImageBuffer {
    /// Create a new image buffer filled with transparent black.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            pixels: vec![Color::ZERO; width as usize * height as usize],
        }
    }

    /// Get the pixel at flat index `p`. Panics if `p` is out of range.
    pub fn get(&self, p: usize) -> Color {
        self.pixels[p]
    }

    /// Convert to packed RGB bytes, alpha dropped.
    pub fn to_rgb8(&self) -> Vec<u8> {
        meadow_core::output::to_rgb_bytes(&self.pixels)
    }

    /// Save as `.ppm` or `.png`, chosen by extension.
    pub fn save(&self, path: impl AsRef<std::path::Path>) -> Result<(), OutputError> {
        meadow_core::save_image(path, self.width, self.height, &self.pixels)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shader::sky_color;
    use meadow_core::{demo_scene, Light, PerlinNoise, Sphere};
    use meadow_math::rgba;

    struct ZeroNoise;

    impl NoiseSampler for ZeroNoise {
        fn sample(&self, _x: f32, _y: f32, _z: f32) -> f32 {
            0.0
        }
    }

    const ORANGE: Color = rgba(1.0, 0.5, 0.25, 0.75);

    fn config(width: u32, height: u32) -> RenderConfig {
        RenderConfig::default().with_resolution(width, height)
    }

    fn ball_scene(light: Vec3) -> Scene {
        Scene::new()
            .with_primitive(Sphere::new(Vec3::new(0.0, 0.0, -10.0), 2.0, ORANGE))
            .with_light(Light::new(light))
    }

    #[test]
    fn test_center_pixel_direction() {
        // 3x3: index 4 is the exact center.
        let d = pixel_direction(4, &config(3, 3));
        assert!((d - Vec3::NEG_Z).length() < 1e-6);
    }

    #[test]
    fn test_projection_distance() {
        let cfg = config(3, 3);
        let d = pixel_direction(5, &cfg);
        let z = -3.0 / (2.0 * (DEFAULT_FOV / 2.0).tan());
        let expected = Vec3::new(1.0, 0.0, z).normalize();
        assert!((d - expected).length() < 1e-6);
    }

    #[test]
    fn test_legacy_indexing() {
        assert_eq!(PixelIndexing::Legacy.coords(5, 4, 2), (1, 2));
        assert_eq!(PixelIndexing::RowMajor.coords(5, 4, 2), (1, 1));
        for p in 0..16 {
            assert_eq!(
                PixelIndexing::Legacy.coords(p, 4, 4),
                PixelIndexing::RowMajor.coords(p, 4, 4)
            );
        }
    }

    #[test]
    fn test_empty_scene_is_all_sky() {
        let cfg = config(4, 4);
        let image = render(&Scene::new(), &ZeroNoise, &cfg).unwrap();
        for (p, color) in image.pixels.iter().enumerate() {
            assert_eq!(*color, sky_color(pixel_direction(p, &cfg)));
        }
    }

    #[test]
    fn test_lit_pixel_keeps_color() {
        let scene = ball_scene(Vec3::new(0.0, 0.0, 10.0));
        assert_eq!(render_pixel(4, &scene, &ZeroNoise, &config(3, 3)), ORANGE);
    }

    #[test]
    fn test_shadowed_pixel_is_half_brightness() {
        let cfg = config(3, 3);
        let lit = render_pixel(4, &ball_scene(Vec3::new(0.0, 0.0, 10.0)), &ZeroNoise, &cfg);
        // Light behind the ball: the visible face is occluded by the ball itself.
        let dark = render_pixel(4, &ball_scene(Vec3::new(0.0, 0.0, -30.0)), &ZeroNoise, &cfg);

        assert_eq!(dark, rgba(lit.x * 0.5, lit.y * 0.5, lit.z * 0.5, lit.w));
        assert_eq!(dark.w, 0.75);
    }

    #[test]
    fn test_no_lights_darkens_hits_not_sky() {
        let scene = Scene::new().with_primitive(Sphere::new(Vec3::new(0.0, 0.0, -10.0), 2.0, ORANGE));
        let cfg = config(3, 3);
        assert_eq!(render_pixel(4, &scene, &ZeroNoise, &cfg), ORANGE.scale_rgb(0.5));
        // Corner pixel misses the ball.
        assert_eq!(
            render_pixel(0, &scene, &ZeroNoise, &cfg),
            sky_color(pixel_direction(0, &cfg))
        );
    }

    #[test]
    fn test_render_is_deterministic() {
        let scene = demo_scene(5);
        let noise = PerlinNoise::default();
        let cfg = config(32, 32);

        let a = render(&scene, &noise, &cfg).unwrap();
        let b = render(&scene, &noise, &cfg).unwrap();
        assert_eq!(a.to_rgb8(), b.to_rgb8());
        assert_eq!(a, b);
    }

    #[test]
    fn test_parallel_matches_sequential() {
        let scene = demo_scene(5);
        let noise = PerlinNoise::default();
        let parallel = config(24, 24);
        let sequential = RenderConfig {
            parallel: false,
            ..parallel.clone()
        };

        assert_eq!(
            render(&scene, &noise, &parallel).unwrap(),
            render(&scene, &noise, &sequential).unwrap()
        );
    }

    #[test]
    fn test_render_into_overwrites_every_cell() {
        let cfg = config(6, 6);
        let mut pixels = vec![rgba(f32::NAN, f32::NAN, f32::NAN, f32::NAN); 36];
        render_into(&demo_scene(1), &PerlinNoise::default(), &cfg, &mut pixels).unwrap();
        assert!(pixels.iter().all(|c| !c.is_nan()));
    }

    #[test]
    fn test_non_square_frame_renders() {
        let cfg = RenderConfig {
            indexing: PixelIndexing::RowMajor,
            ..config(8, 4)
        };
        let image = render(&demo_scene(1), &PerlinNoise::default(), &cfg).unwrap();
        assert_eq!(image.pixels.len(), 32);
    }

    #[test]
    fn test_legacy_non_square_frames_render() {
        let scene = demo_scene(1);
        let noise = PerlinNoise::default();
        for (width, height) in [(8, 4), (4, 8)] {
            let cfg = config(width, height);
            assert_eq!(cfg.indexing, PixelIndexing::Legacy);

            let image = render(&scene, &noise, &cfg).unwrap();
            assert_eq!(image.pixels.len(), (width * height) as usize);
            assert!(image.pixels.iter().all(|c| c.is_finite()));
        }
    }

    #[test]
    fn test_image_buffer_get() {
        let cfg = config(3, 3);
        let image = render(&ball_scene(Vec3::new(0.0, 0.0, 10.0)), &ZeroNoise, &cfg).unwrap();
        assert_eq!(image.get(4), ORANGE);
        assert_eq!(image.get(0), sky_color(pixel_direction(0, &cfg)));
        assert_eq!(image.get(8), image.pixels[8]);
    }

    #[test]
    #[should_panic]
    fn test_image_buffer_get_out_of_range() {
        ImageBuffer::new(2, 2).get(4);
    }

    #[test]
    fn test_rejects_wrong_buffer_size() {
        let mut pixels = vec![Color::ZERO; 8];
        let err = render_into(&Scene::new(), &ZeroNoise, &config(3, 3), &mut pixels).unwrap_err();
        assert_eq!(err, RenderError::BufferSize { expected: 9, actual: 8 });
        assert!(pixels.iter().all(|c| *c == Color::ZERO));
    }

    #[test]
    fn test_rejects_empty_frame() {
        let err = render(&Scene::new(), &ZeroNoise, &config(0, 3)).unwrap_err();
        assert_eq!(err, RenderError::EmptyFrame { width: 0, height: 3 });
    }

    #[test]
    fn test_rejects_bad_fov() {
        let cfg = RenderConfig {
            fov: 0.0,
            ..config(2, 2)
        };
        assert_eq!(
            render(&Scene::new(), &ZeroNoise, &cfg).unwrap_err(),
            RenderError::InvalidFov(0.0)
        );
    }
}
