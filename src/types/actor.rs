//! Actor type definitions
//!
//! Actor is the controlled articulated figure: identity, current pose, a 3D
//! position, a single heading about the vertical axis, and at most one held
//! object.

use glam::Vec3;
use serde::{Deserialize, Serialize};
use std::fmt;

use super::{ObjectId, Pose};

/// Strongly-typed Actor ID.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(transparent)]
pub struct ActorId(pub String);

impl ActorId {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<String> for ActorId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl From<&str> for ActorId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl fmt::Display for ActorId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl AsRef<str> for ActorId {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

/// The controlled figure.
///
/// Invariant: holds at most one object at a time; [`crate::scene::Scene`]
/// enforces that an object is held by at most one actor.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Actor {
    /// Unique identifier for this actor
    pub id: ActorId,
    /// Display name
    pub name: String,
    /// Current joint angles
    pub pose: Pose,
    /// World position
    pub position: Vec3,
    /// Rotation about the vertical axis, in degrees. 0° faces +Z.
    pub heading: f32,
    /// The object currently held, if any
    #[serde(default)]
    pub held: Option<ObjectId>,
}

impl Actor {
    /// Create a new actor at a position, facing forward, hands empty.
    pub fn new(id: impl Into<ActorId>, name: impl Into<String>, position: Vec3) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            pose: Pose::neutral(),
            position,
            heading: 0.0,
            held: None,
        }
    }

    /// Whether this actor currently holds an object.
    pub fn is_holding(&self) -> bool {
        self.held.is_some()
    }

    /// Planar (XZ) distance to a point, ignoring the vertical offset.
    pub fn planar_distance_to(&self, target: Vec3) -> f32 {
        let dx = target.x - self.position.x;
        let dz = target.z - self.position.z;
        (dx * dx + dz * dz).sqrt()
    }

    /// Heading from this actor toward a point, in degrees, 0° facing +Z.
    pub fn heading_toward(&self, target: Vec3) -> f32 {
        let dx = target.x - self.position.x;
        let dz = target.z - self.position.z;
        dx.atan2(dz).to_degrees()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_planar_distance_ignores_vertical() {
        let actor = Actor::new("a1", "Robo", Vec3::ZERO);
        let d = actor.planar_distance_to(Vec3::new(3.0, 17.0, 4.0));
        assert_relative_eq!(d, 5.0);
    }

    #[test]
    fn test_heading_toward_cardinal_directions() {
        let actor = Actor::new("a1", "Robo", Vec3::ZERO);
        assert_relative_eq!(actor.heading_toward(Vec3::new(0.0, 0.0, 1.0)), 0.0);
        assert_relative_eq!(actor.heading_toward(Vec3::new(1.0, 0.0, 0.0)), 90.0);
        assert_relative_eq!(actor.heading_toward(Vec3::new(-1.0, 0.0, 0.0)), -90.0);
    }

    #[test]
    fn test_new_actor_is_empty_handed() {
        let actor = Actor::new("a1", "Robo", Vec3::ZERO);
        assert!(!actor.is_holding());
    }
}
