// Re-export glam for convenience
pub use glam::*;

// Meadow math types
mod color;
mod ray;
pub use color::{rgba, Color, ColorExt};
pub use ray::Ray;

/// World up axis, used by the sky gradient.
pub const UP: Vec3 = Vec3::Y;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vec3_creation() {
        let v = Vec3::new(1.0, 2.0, 3.0);
        assert_eq!(v.x, 1.0);
        assert_eq!(v.y, 2.0);
        assert_eq!(v.z, 3.0);
    }

    #[test]
    fn test_vec3_operations() {
        let a = Vec3::new(1.0, 2.0, 3.0);
        let b = Vec3::new(4.0, 5.0, 6.0);
        assert_eq!(a + b, Vec3::new(5.0, 7.0, 9.0));
        assert_eq!(b - a, Vec3::new(3.0, 3.0, 3.0));
        assert_eq!(a * 2.0, Vec3::new(2.0, 4.0, 6.0));
        assert_eq!(b / 2.0, Vec3::new(2.0, 2.5, 3.0));
        assert_eq!(a.dot(b), 32.0);
    }

    #[test]
    fn test_normalize() {
        let v = Vec3::new(3.0, 0.0, 4.0).normalize();
        assert!((v.length() - 1.0).abs() < 1e-6);
        assert!((v.x - 0.6).abs() < 1e-6);
        assert!((v.z - 0.8).abs() < 1e-6);
    }

    #[test]
    fn test_color_elementwise() {
        let a = rgba(0.25, 0.5, 0.75, 1.0);
        let b = rgba(0.25, 0.25, 0.25, 0.0);
        assert_eq!(a + b, rgba(0.5, 0.75, 1.0, 1.0));
        assert_eq!(a - b, rgba(0.0, 0.25, 0.5, 1.0));
        assert_eq!(a * 0.5, rgba(0.125, 0.25, 0.375, 0.5));
        assert_eq!(a / 2.0, rgba(0.125, 0.25, 0.375, 0.5));
    }
}
