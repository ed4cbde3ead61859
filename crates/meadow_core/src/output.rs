//! Image output for rendered color grids.
//!
//! The reference container is binary PPM (`P6`): an ASCII header followed by
//! three bytes per pixel in grid order. PNG is offered through the `image`
//! crate with the same byte values.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use meadow_math::{Color, ColorExt};
use thiserror::Error;

/// Errors that can occur while writing an image.
#[derive(Error, Debug)]
pub enum OutputError {
    #[error("Pixel count {actual} does not match {width}x{height}")]
    SizeMismatch {
        width: u32,
        height: u32,
        actual: usize,
    },

    #[error("Unsupported output format: {0}")]
    UnsupportedFormat(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Image encoding error: {0}")]
    ImageError(#[from] image::ImageError),
}

pub type OutputResult<T> = Result<T, OutputError>;

fn check_size(width: u32, height: u32, pixels: &[Color]) -> OutputResult<()> {
    if pixels.len() as u64 != width as u64 * height as u64 {
        return Err(OutputError::SizeMismatch {
            width,
            height,
            actual: pixels.len(),
        });
    }
    Ok(())
}

/// Pack pixels as tightly packed 8-bit RGB, alpha dropped.
pub fn to_rgb_bytes(pixels: &[Color]) -> Vec<u8> {
    let mut bytes = Vec::with_capacity(pixels.len() * 3);
    for color in pixels {
        bytes.extend_from_slice(&color.to_rgb8());
    }
    bytes
}

/// Write a binary PPM to `writer`.
pub fn write_ppm<W: Write>(
    mut writer: W,
    width: u32,
    height: u32,
    pixels: &[Color],
) -> OutputResult<()> {
    check_size(width, height, pixels)?;

    write!(writer, "P6\n{} {}\n255\n", width, height)?;
    writer.write_all(&to_rgb_bytes(pixels))?;
    writer.flush()?;
    Ok(())
}

/// Save as binary PPM.
pub fn save_ppm(path: impl AsRef<Path>, width: u32, height: u32, pixels: &[Color]) -> OutputResult<()> {
    let path = path.as_ref();
    let file = File::create(path)?;
    write_ppm(BufWriter::new(file), width, height, pixels)?;
    log::info!("Wrote {}x{} PPM to {}", width, height, path.display());
    Ok(())
}

/// Save as PNG.
pub fn save_png(path: impl AsRef<Path>, width: u32, height: u32, pixels: &[Color]) -> OutputResult<()> {
    let path = path.as_ref();
    check_size(width, height, pixels)?;

    image::save_buffer(
        path,
        &to_rgb_bytes(pixels),
        width,
        height,
        image::ColorType::Rgb8,
    )?;
    log::info!("Wrote {}x{} PNG to {}", width, height, path.display());
    Ok(())
}

/// Save using the format implied by the file extension (`.ppm` or `.png`).
pub fn save_image(path: impl AsRef<Path>, width: u32, height: u32, pixels: &[Color]) -> OutputResult<()> {
    let path = path.as_ref();
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_ascii_lowercase())
        .unwrap_or_default();

    match ext.as_str() {
        "ppm" => save_ppm(path, width, height, pixels),
        "png" => save_png(path, width, height, pixels),
        _ => Err(OutputError::UnsupportedFormat(path.display().to_string())),
    }
}
