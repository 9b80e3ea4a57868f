//! Linear interpolation primitives
//!
//! Identity holds at the interval boundaries: `lerp(a, b, 0) == a` and
//! `lerp(a, b, 1) == b` for scalars, vectors and whole poses. `t` outside
//! [0, 1] extrapolates, which is what the overshooting easing curves rely on.

use glam::Vec3;

use crate::types::{ArmPose, LegPose, Pose, TorsoPose};

/// Scalar linear interpolation.
pub fn lerp(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t
}

/// Vector linear interpolation.
pub fn lerp_vec3(a: Vec3, b: Vec3, t: f32) -> Vec3 {
    a.lerp(b, t)
}

fn lerp_arm(a: &ArmPose, b: &ArmPose, t: f32) -> ArmPose {
    ArmPose {
        shoulder_pitch: lerp(a.shoulder_pitch, b.shoulder_pitch, t),
        shoulder_roll: lerp(a.shoulder_roll, b.shoulder_roll, t),
        elbow_flex: lerp(a.elbow_flex, b.elbow_flex, t),
    }
}

fn lerp_leg(a: &LegPose, b: &LegPose, t: f32) -> LegPose {
    LegPose {
        hip_pitch: lerp(a.hip_pitch, b.hip_pitch, t),
        hip_roll: lerp(a.hip_roll, b.hip_roll, t),
        knee_flex: lerp(a.knee_flex, b.knee_flex, t),
    }
}

/// Whole-pose linear interpolation, per joint axis.
pub fn lerp_pose(a: &Pose, b: &Pose, t: f32) -> Pose {
    Pose {
        left_arm: lerp_arm(&a.left_arm, &b.left_arm, t),
        right_arm: lerp_arm(&a.right_arm, &b.right_arm, t),
        left_leg: lerp_leg(&a.left_leg, &b.left_leg, t),
        right_leg: lerp_leg(&a.right_leg, &b.right_leg, t),
        torso: TorsoPose {
            pitch: lerp(a.torso.pitch, b.torso.pitch, t),
            roll: lerp(a.torso.roll, b.torso.roll, t),
        },
    }
}

/// Blend only the arm joints of `from` toward `to`, with independent progress
/// for shoulder and elbow. Everything below the shoulders holds `from`.
pub fn lerp_arms_split(from: &Pose, to: &Pose, shoulder_t: f32, elbow_t: f32) -> Pose {
    let mut out = *from;
    for (out_arm, from_arm, to_arm) in [
        (&mut out.left_arm, &from.left_arm, &to.left_arm),
        (&mut out.right_arm, &from.right_arm, &to.right_arm),
    ] {
        out_arm.shoulder_pitch = lerp(from_arm.shoulder_pitch, to_arm.shoulder_pitch, shoulder_t);
        out_arm.shoulder_roll = lerp(from_arm.shoulder_roll, to_arm.shoulder_roll, shoulder_t);
        out_arm.elbow_flex = lerp(from_arm.elbow_flex, to_arm.elbow_flex, elbow_t);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::motion::library;
    use approx::assert_relative_eq;

    #[test]
    fn test_scalar_lerp_identity_at_boundaries() {
        assert_relative_eq!(lerp(-42.5, 17.0, 0.0), -42.5);
        assert_relative_eq!(lerp(-42.5, 17.0, 1.0), 17.0);
        assert_relative_eq!(lerp(0.0, 10.0, 0.5), 5.0);
    }

    #[test]
    fn test_vec3_lerp_identity_at_boundaries() {
        let a = Vec3::new(1.0, -2.0, 3.0);
        let b = Vec3::new(-4.0, 5.0, -6.0);
        assert_eq!(lerp_vec3(a, b, 0.0), a);
        assert_eq!(lerp_vec3(a, b, 1.0), b);
    }

    #[test]
    fn test_pose_lerp_identity_at_boundaries() {
        let a = library::squat();
        let b = library::holding(2.0);
        let at0 = lerp_pose(&a, &b, 0.0);
        let at1 = lerp_pose(&a, &b, 1.0);
        for (x, y) in at0.axes().iter().zip(a.axes().iter()) {
            assert_relative_eq!(x, y);
        }
        for (x, y) in at1.axes().iter().zip(b.axes().iter()) {
            assert_relative_eq!(x, y);
        }
    }

    #[test]
    fn test_split_arm_lerp_holds_legs_and_torso() {
        let from = library::squat();
        let to = library::reach_down();
        let out = lerp_arms_split(&from, &to, 1.0, 0.0);

        assert_eq!(out.left_leg, from.left_leg);
        assert_eq!(out.right_leg, from.right_leg);
        assert_eq!(out.torso, from.torso);
        assert_relative_eq!(out.right_arm.shoulder_pitch, to.right_arm.shoulder_pitch);
        assert_relative_eq!(out.right_arm.elbow_flex, from.right_arm.elbow_flex);
    }
}
