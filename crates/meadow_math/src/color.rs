//! RGBA color helpers.
//!
//! Colors are plain `Vec4` values (r, g, b, a). Channels are nominally in
//! [0, 1] but are only clamped when converted to bytes.

use glam::Vec4;

/// Color type alias (RGBA, unclamped until output)
pub type Color = Vec4;

/// Build a color from its four channels.
#[inline]
pub const fn rgba(r: f32, g: f32, b: f32, a: f32) -> Color {
    Vec4::new(r, g, b, a)
}

/// Color-specific operations on top of `Vec4`.
pub trait ColorExt {
    /// Scale r, g and b by `k`, leaving alpha untouched.
    fn scale_rgb(self, k: f32) -> Self;

    /// Convert to 8-bit RGB, clamping each channel to [0, 1] and dropping alpha.
    fn to_rgb8(self) -> [u8; 3];
}

impl ColorExt for Color {
    #[inline]
    fn scale_rgb(self, k: f32) -> Self {
        Vec4::new(self.x * k, self.y * k, self.z * k, self.w)
    }

    #[inline]
    fn to_rgb8(self) -> [u8; 3] {
        [
            (self.x.clamp(0.0, 1.0) * 255.0) as u8,
            (self.y.clamp(0.0, 1.0) * 255.0) as u8,
            (self.z.clamp(0.0, 1.0) * 255.0) as u8,
        ]
    }
}
