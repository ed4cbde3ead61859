//! meadow - render a scene to an image file.
//!
//! Renders the built-in seeded demo scene, or a JSON scene file, and writes
//! the result as binary PPM or PNG.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use meadow_core::{demo_scene, PerlinNoise, Scene};
use meadow_renderer::{render, PixelIndexing, RenderConfig, DEFAULT_FOV};

#[derive(Parser, Debug)]
#[command(name = "meadow")]
#[command(about = "Ray cast spheres over a procedural meadow", long_about = None)]
struct Cli {
    /// Output image (.ppm or .png)
    #[arg(short, long, default_value = "out.ppm")]
    output: PathBuf,

    /// Image width in pixels
    #[arg(long, default_value_t = 1024)]
    width: u32,

    /// Image height in pixels
    #[arg(long, default_value_t = 1024)]
    height: u32,

    /// Field of view in radians
    #[arg(long, default_value_t = DEFAULT_FOV)]
    fov: f32,

    /// JSON scene file (default: built-in demo scene)
    #[arg(long)]
    scene: Option<PathBuf>,

    /// Seed for the demo scene's decorative spheres
    #[arg(long, default_value_t = 0)]
    seed: u64,

    /// Seed for the ground noise
    #[arg(long, default_value_t = meadow_core::sampler::DEFAULT_NOISE_SEED)]
    noise_seed: u32,

    /// Map pixel indices row-major instead of the legacy mapping
    #[arg(long)]
    row_major: bool,

    /// Render on the calling thread only
    #[arg(long)]
    single_threaded: bool,
}

impl Cli {
    fn render_config(&self) -> RenderConfig {
        RenderConfig {
            width: self.width,
            height: self.height,
            fov: self.fov,
            indexing: if self.row_major {
                PixelIndexing::RowMajor
            } else {
                PixelIndexing::Legacy
            },
            parallel: !self.single_threaded,
        }
    }

    fn load_scene(&self) -> Result<Scene> {
        match &self.scene {
            Some(path) => Scene::load(path)
                .with_context(|| format!("Failed to load scene {}", path.display())),
            None => {
                log::info!("Using demo scene (seed {})", self.seed);
                Ok(demo_scene(self.seed))
            }
        }
    }
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();
    let config = cli.render_config();
    let scene = cli.load_scene()?;
    let noise = PerlinNoise::new(cli.noise_seed);

    let image = render(&scene, &noise, &config).context("Render failed")?;
    image
        .save(&cli.output)
        .with_context(|| format!("Failed to write {}", cli.output.display()))?;

    Ok(())
}
