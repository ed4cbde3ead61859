//! Simple ray casting example.
//!
//! Renders a small hand-built scene and saves it in PPM format.

use meadow_core::{Light, PerlinNoise, Plane, Scene, Sphere};
use meadow_math::{rgba, Vec3};
use meadow_renderer::{render, RenderConfig};

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let scene = Scene::new()
        .with_primitive(Plane::new(Vec3::NEG_Y, Vec3::new(0.0, -3.0, 0.0)))
        .with_primitive(Sphere::new(Vec3::new(-2.5, -1.0, -12.0), 2.0, rgba(0.8, 0.2, 0.2, 1.0)))
        .with_primitive(Sphere::new(Vec3::new(2.5, -1.5, -10.0), 1.5, rgba(0.9, 0.9, 0.3, 1.0)))
        .with_light(Light::new(Vec3::new(-15.0, 25.0, 10.0)));

    let config = RenderConfig::default().with_resolution(512, 512);
    let noise = PerlinNoise::default();

    let image = render(&scene, &noise, &config).expect("Failed to render");

    let filename = "output.ppm";
    image.save(filename).expect("Failed to save image");
    println!("Saved to {}", filename);
}
