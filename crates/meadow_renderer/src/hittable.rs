//! Ray-primitive intersection.
//!
//! Every routine expects a unit-length ray direction and returns the distance
//! to the nearest accepted hit, or `None` when the ray misses.

use meadow_core::{Plane, Primitive, Sphere};
use meadow_math::Ray;

/// Minimum accepted sphere hit distance. Keeps shadow rays that start on a
/// sphere's surface from hitting that same surface.
pub const SELF_HIT_EPSILON: f32 = 0.001;

/// Minimum `normal . direction` for a plane hit. Rejects parallel rays,
/// grazing rays and rays approaching from the back side.
pub const PLANE_EPSILON: f32 = 1e-6;

/// Trait for shapes that can be hit by rays.
pub trait Hittable {
    /// Distance along `ray` to the nearest accepted hit.
    fn hit(&self, ray: &Ray) -> Option<f32>;
}

impl Hittable for Sphere {
    fn hit(&self, ray: &Ray) -> Option<f32> {
        let l = self.center - ray.origin;
        let tca = l.dot(ray.direction);
        let d2 = l.dot(l) - tca * tca;
        let r2 = self.radius * self.radius;
        if d2 > r2 {
            return None;
        }

        let thc = (r2 - d2).sqrt();
        let t0 = tca - thc;
        let t1 = tca + thc;

        if t0 > SELF_HIT_EPSILON {
            Some(t0)
        } else if t1 > SELF_HIT_EPSILON {
            Some(t1)
        } else {
            None
        }
    }
}

impl Hittable for Plane {
    /// One-sided: only rays travelling along the normal can hit.
    fn hit(&self, ray: &Ray) -> Option<f32> {
        let denom = self.normal.dot(ray.direction);
        if denom <= PLANE_EPSILON {
            return None;
        }

        let t = (self.point - ray.origin).dot(self.normal) / denom;
        (t >= 0.0).then_some(t)
    }
}

impl Hittable for Primitive {
    #[inline]
    fn hit(&self, ray: &Ray) -> Option<f32> {
        match self {
            Primitive::Sphere(sphere) => sphere.hit(ray),
            Primitive::Plane(plane) => plane.hit(ray),
        }
    }
}
