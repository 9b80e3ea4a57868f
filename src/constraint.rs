//! Joint constraint system
//!
//! Pure clamping of a candidate pose into an anatomically valid envelope.
//! Applied at every point a pose is committed to an actor's visible state,
//! not only at plan boundaries: blending between two valid endpoint poses
//! can transiently push an axis outside its range.

use crate::types::{ArmPose, LegPose, Pose, TorsoPose};

/// Inclusive `[min, max]` bound for one joint axis, in degrees.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct JointLimit {
    pub min: f32,
    pub max: f32,
}

impl JointLimit {
    pub const fn new(min: f32, max: f32) -> Self {
        Self { min, max }
    }

    /// Clamp a value into this limit.
    pub fn clamp(&self, value: f32) -> f32 {
        value.clamp(self.min, self.max)
    }

    /// Check whether a value lies inside this limit.
    pub fn contains(&self, value: f32) -> bool {
        value >= self.min && value <= self.max
    }
}

pub const SHOULDER_PITCH: JointLimit = JointLimit::new(-170.0, 60.0);
pub const SHOULDER_ROLL: JointLimit = JointLimit::new(-20.0, 160.0);
/// Elbow is a single-direction hinge: it can only bend forward.
pub const ELBOW_FLEX: JointLimit = JointLimit::new(0.0, 150.0);
pub const HIP_PITCH: JointLimit = JointLimit::new(-120.0, 30.0);
pub const HIP_ROLL: JointLimit = JointLimit::new(-45.0, 45.0);
/// Knee is a single-direction hinge: it can only bend backward.
pub const KNEE_FLEX: JointLimit = JointLimit::new(0.0, 140.0);
pub const TORSO_PITCH: JointLimit = JointLimit::new(-30.0, 30.0);
pub const TORSO_ROLL: JointLimit = JointLimit::new(-20.0, 20.0);

fn constrain_arm(arm: ArmPose) -> ArmPose {
    ArmPose {
        shoulder_pitch: SHOULDER_PITCH.clamp(arm.shoulder_pitch),
        shoulder_roll: SHOULDER_ROLL.clamp(arm.shoulder_roll),
        // hinge joint: magnitude first, then clamp
        elbow_flex: ELBOW_FLEX.clamp(arm.elbow_flex.abs()),
    }
}

fn constrain_leg(leg: LegPose) -> LegPose {
    LegPose {
        hip_pitch: HIP_PITCH.clamp(leg.hip_pitch),
        hip_roll: HIP_ROLL.clamp(leg.hip_roll),
        knee_flex: KNEE_FLEX.clamp(leg.knee_flex.abs()),
    }
}

/// Clamp every joint axis of a pose into its anatomical range.
///
/// Total function: out-of-range input degrades silently to the nearest valid
/// value, there is no error path.
pub fn constrain(pose: Pose) -> Pose {
    Pose {
        left_arm: constrain_arm(pose.left_arm),
        right_arm: constrain_arm(pose.right_arm),
        left_leg: constrain_leg(pose.left_leg),
        right_leg: constrain_leg(pose.right_leg),
        torso: TorsoPose {
            pitch: TORSO_PITCH.clamp(pose.torso.pitch),
            roll: TORSO_ROLL.clamp(pose.torso.roll),
        },
    }
}
