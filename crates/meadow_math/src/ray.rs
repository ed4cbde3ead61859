use crate::Vec3;

/// A ray in 3D space with origin and direction.
///
/// Rays are used for ray casting - they represent a half-line starting at
/// `origin` and traveling along `direction`. Intersection routines assume the
/// direction is unit length, so distances returned are world-space lengths.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Ray {
    pub origin: Vec3,
    pub direction: Vec3,
}

impl Ray {
    /// Create a new ray.
    pub fn new(origin: Vec3, direction: Vec3) -> Self {
        Self { origin, direction }
    }

    /// Create a ray from `origin` toward `target`, normalizing the direction.
    ///
    /// `target` must differ from `origin`.
    pub fn toward(origin: Vec3, target: Vec3) -> Self {
        Self::new(origin, (target - origin).normalize())
    }

    /// Get the point along the ray at parameter t.
    ///
    /// Returns: origin + t * direction
    #[inline]
    pub fn at(&self, t: f32) -> Vec3 {
        self.origin + self.direction * t
    }
}
