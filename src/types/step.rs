//! Step type definitions
//!
//! ActionStep is an atomic sub-action in a Plan. It is a closed sum type:
//! each variant carries exactly the fields its execution needs, so a step
//! cannot be constructed with a missing required parameter.

use glam::Vec3;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::time::Duration;

use super::ObjectId;

/// A single step in a motion plan. Immutable once placed in a plan.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ActionStep {
    /// Walk to a target position, facing the target heading.
    Navigate {
        target: Vec3,
        /// Heading snapped at step start, degrees, 0° facing +Z.
        heading: f32,
        duration_ms: u64,
    },
    /// Turn in place to a target heading.
    Align { heading: f32, duration_ms: u64 },
    /// Bend down into a full squat.
    Squat { duration_ms: u64 },
    /// Extend the arm toward the ground, shoulder leading.
    Reach { duration_ms: u64 },
    /// Attach the named object and take hold of it. Discrete.
    Grasp { object: ObjectId, duration_ms: u64 },
    /// Rise into a carrying posture with the held object.
    Lift { duration_ms: u64 },
    /// Release the held object onto the ground. Discrete.
    Drop { duration_ms: u64 },
    /// Return to the idle upright posture.
    Stand { duration_ms: u64 },
}

/// Fieldless discriminant for logging and plan-shape assertions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StepKind {
    Navigate,
    Align,
    Squat,
    Reach,
    Grasp,
    Lift,
    Drop,
    Stand,
}

impl fmt::Display for StepKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            StepKind::Navigate => "navigate",
            StepKind::Align => "align",
            StepKind::Squat => "squat",
            StepKind::Reach => "reach",
            StepKind::Grasp => "grasp",
            StepKind::Lift => "lift",
            StepKind::Drop => "drop",
            StepKind::Stand => "stand",
        };
        f.write_str(name)
    }
}

impl ActionStep {
    /// The discriminant of this step.
    pub fn kind(&self) -> StepKind {
        match self {
            ActionStep::Navigate { .. } => StepKind::Navigate,
            ActionStep::Align { .. } => StepKind::Align,
            ActionStep::Squat { .. } => StepKind::Squat,
            ActionStep::Reach { .. } => StepKind::Reach,
            ActionStep::Grasp { .. } => StepKind::Grasp,
            ActionStep::Lift { .. } => StepKind::Lift,
            ActionStep::Drop { .. } => StepKind::Drop,
            ActionStep::Stand { .. } => StepKind::Stand,
        }
    }

    /// Nominal duration of this step.
    pub fn duration(&self) -> Duration {
        let ms = match self {
            ActionStep::Navigate { duration_ms, .. }
            | ActionStep::Align { duration_ms, .. }
            | ActionStep::Squat { duration_ms }
            | ActionStep::Reach { duration_ms }
            | ActionStep::Grasp { duration_ms, .. }
            | ActionStep::Lift { duration_ms }
            | ActionStep::Drop { duration_ms }
            | ActionStep::Stand { duration_ms } => *duration_ms,
        };
        Duration::from_millis(ms)
    }

    /// Discrete steps mutate state instantly and then wait out their nominal
    /// duration; interpolated steps drive a pose/position blend every tick.
    pub fn is_discrete(&self) -> bool {
        matches!(self, ActionStep::Grasp { .. } | ActionStep::Drop { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_step_kind_and_duration() {
        let step = ActionStep::Grasp {
            object: ObjectId::from("o1"),
            duration_ms: 200,
        };
        assert_eq!(step.kind(), StepKind::Grasp);
        assert_eq!(step.duration(), Duration::from_millis(200));
        assert!(step.is_discrete());

        let step = ActionStep::Align {
            heading: 45.0,
            duration_ms: 400,
        };
        assert_eq!(step.kind(), StepKind::Align);
        assert!(!step.is_discrete());
    }

    #[test]
    fn test_step_serde_tags_are_snake_case() {
        let step = ActionStep::Squat { duration_ms: 700 };
        let value = serde_json::to_value(&step).unwrap();
        assert_eq!(value["kind"], "squat");
        assert_eq!(value["duration_ms"], 700);
    }
}
