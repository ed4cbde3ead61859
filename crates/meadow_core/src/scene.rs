//! Scene description types for Meadow.
//!
//! A scene is an ordered list of analytic primitives plus an ordered list of
//! point lights. It is built once, then only read while rendering. Order is
//! significant: the ray caster resolves equal hit distances in favor of the
//! primitive that appears first.

use std::path::Path;

use meadow_math::{Color, Vec3};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors that can occur while loading or validating a scene.
#[derive(Error, Debug)]
pub enum SceneError {
    #[error("Invalid primitive at index {index}: {reason}")]
    InvalidPrimitive { index: usize, reason: String },

    #[error("Invalid light at index {index}: position is not finite")]
    InvalidLight { index: usize },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Scene parse error: {0}")]
    Parse(#[from] serde_json::Error),
}

pub type SceneResult<T> = Result<T, SceneError>;

/// A solid-colored sphere.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Sphere {
    pub center: Vec3,
    /// Must be > 0
    pub radius: f32,
    pub color: Color,
}

impl Sphere {
    pub fn new(center: Vec3, radius: f32, color: Color) -> Self {
        Self {
            center,
            radius,
            color,
        }
    }
}

/// An infinite plane through `point` with the given `normal`.
///
/// The normal is expected to be unit length and is never renormalized.
/// Only rays travelling along the normal's direction can hit the plane.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Plane {
    pub normal: Vec3,
    pub point: Vec3,
}

impl Plane {
    pub fn new(normal: Vec3, point: Vec3) -> Self {
        Self { normal, point }
    }
}

/// Closed set of renderable shapes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum Primitive {
    Sphere(Sphere),
    Plane(Plane),
}

impl From<Sphere> for Primitive {
    fn from(sphere: Sphere) -> Self {
        Primitive::Sphere(sphere)
    }
}

impl From<Plane> for Primitive {
    fn from(plane: Plane) -> Self {
        Primitive::Plane(plane)
    }
}

/// A point light. Only its position matters: there is no intensity,
/// color or falloff.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Light {
    pub position: Vec3,
}

impl Light {
    pub fn new(position: Vec3) -> Self {
        Self { position }
    }
}

/// The complete renderable scene.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Scene {
    #[serde(default)]
    pub primitives: Vec<Primitive>,
    #[serde(default)]
    pub lights: Vec<Light>,
}

impl Scene {
    /// Create an empty scene.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a primitive (builder style).
    pub fn with_primitive(mut self, primitive: impl Into<Primitive>) -> Self {
        self.primitives.push(primitive.into());
        self
    }

    /// Append a light (builder style).
    pub fn with_light(mut self, light: Light) -> Self {
        self.lights.push(light);
        self
    }

    pub fn add_primitive(&mut self, primitive: impl Into<Primitive>) {
        self.primitives.push(primitive.into());
    }

    pub fn add_light(&mut self, light: Light) {
        self.lights.push(light);
    }

    pub fn primitive_count(&self) -> usize {
        self.primitives.len()
    }

    pub fn light_count(&self) -> usize {
        self.lights.len()
    }

    /// Check the geometric invariants the renderer relies on.
    ///
    /// Empty primitive and light lists are valid.
    pub fn validate(&self) -> SceneResult<()> {
        for (index, primitive) in self.primitives.iter().enumerate() {
            let invalid = |reason: &str| SceneError::InvalidPrimitive {
                index,
                reason: reason.to_string(),
            };
            match primitive {
                Primitive::Sphere(sphere) => {
                    if !sphere.center.is_finite() || !sphere.radius.is_finite() {
                        return Err(invalid("sphere has non-finite values"));
                    }
                    if sphere.radius <= 0.0 {
                        return Err(invalid("sphere radius must be positive"));
                    }
                }
                Primitive::Plane(plane) => {
                    if !plane.normal.is_finite() || !plane.point.is_finite() {
                        return Err(invalid("plane has non-finite values"));
                    }
                    if plane.normal.length_squared() == 0.0 {
                        return Err(invalid("plane normal has zero length"));
                    }
                }
            }
        }

        for (index, light) in self.lights.iter().enumerate() {
            if !light.position.is_finite() {
                return Err(SceneError::InvalidLight { index });
            }
        }

        Ok(())
    }

    /// Parse and validate a scene from JSON text.
    pub fn from_json_str(json: &str) -> SceneResult<Self> {
        let scene: Scene = serde_json::from_str(json)?;
        scene.validate()?;
        Ok(scene)
    }

    /// Load and validate a scene from a JSON file.
    pub fn load(path: impl AsRef<Path>) -> SceneResult<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)?;
        let scene = Self::from_json_str(&json)?;
        log::info!(
            "Loaded scene {}: {} primitives, {} lights",
            path.display(),
            scene.primitive_count(),
            scene.light_count()
        );
        Ok(scene)
    }
}
