//! Pickable object type definitions

use glam::Vec3;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Strongly-typed Object ID.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(transparent)]
pub struct ObjectId(pub String);

impl ObjectId {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<String> for ObjectId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl From<&str> for ObjectId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl fmt::Display for ObjectId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl AsRef<str> for ObjectId {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

/// Primitive shape tag used for rendering and shape-keyword resolution.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Shape {
    Box,
    Sphere,
    Cylinder,
}

/// A pickable object in the scene.
///
/// Created at scene-setup time. Position is mutated by drop-style steps;
/// `attached` is mutated only by grasp/drop steps.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SceneObject {
    /// Unique identifier for this object
    pub id: ObjectId,
    /// Display name, e.g. "red box"
    pub name: String,
    /// Color token, e.g. "red"
    pub color: String,
    /// Primitive shape tag
    pub shape: Shape,
    /// World position
    pub position: Vec3,
    /// Size scalar; doubles as weight when held
    pub size: f32,
    /// Whether the object is currently attached to (held by) an actor
    #[serde(default)]
    pub attached: bool,
}

impl SceneObject {
    /// Create a new unattached object.
    pub fn new(
        id: impl Into<ObjectId>,
        name: impl Into<String>,
        color: impl Into<String>,
        shape: Shape,
        position: Vec3,
        size: f32,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            color: color.into(),
            shape,
            position,
            size,
            attached: false,
        }
    }
}
