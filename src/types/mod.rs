//! Core type definitions
//!
//! This module defines the data shapes shared by every other component:
//! - Pose: joint angles of an articulated figure
//! - Actor: the controlled figure (pose + position + heading + held object)
//! - SceneObject: a pickable object in the scene
//! - MotionIntent: the tagged inbound command
//! - ActionStep / Plan: the planner's output, consumed by the executor

mod actor;
mod intent;
mod object;
mod plan;
mod pose;
mod step;

pub use actor::{Actor, ActorId};
pub use intent::MotionIntent;
pub use object::{ObjectId, SceneObject, Shape};
pub use plan::{Plan, PlanId};
pub use pose::{ArmPose, LegPose, Pose, TorsoPose};
pub use step::{ActionStep, StepKind};
