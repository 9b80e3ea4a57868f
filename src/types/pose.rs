//! Pose type definitions
//!
//! A Pose is a fully-populated record of named joint groups. There are no
//! optional joints: every constructor fills every axis once, so downstream
//! code never defaults a missing field at the use site.

use serde::{Deserialize, Serialize};

/// Joint angles for one arm. All angles in signed degrees.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct ArmPose {
    /// Rotation of the upper arm about the lateral axis. Negative raises the
    /// arm forward/up, positive swings it behind the torso.
    pub shoulder_pitch: f32,
    /// Rotation of the upper arm away from the torso.
    pub shoulder_roll: f32,
    /// Elbow bend. Single-direction hinge: valid values are non-negative.
    pub elbow_flex: f32,
}

/// Joint angles for one leg. All angles in signed degrees.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct LegPose {
    /// Rotation of the thigh about the lateral axis. Negative lifts the
    /// thigh forward, positive extends it behind.
    pub hip_pitch: f32,
    /// Rotation of the thigh away from the midline.
    pub hip_roll: f32,
    /// Knee bend. Single-direction hinge: valid values are non-negative.
    pub knee_flex: f32,
}

/// Torso lean angles in signed degrees.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct TorsoPose {
    /// Forward lean (positive) / backward lean (negative).
    pub pitch: f32,
    /// Sideways lean.
    pub roll: f32,
}

/// The full posture of an articulated figure.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Pose {
    pub left_arm: ArmPose,
    pub right_arm: ArmPose,
    pub left_leg: LegPose,
    pub right_leg: LegPose,
    pub torso: TorsoPose,
}

impl Pose {
    /// The neutral upright pose: every axis at zero.
    pub fn neutral() -> Self {
        Self::default()
    }

    /// Apply the same function to both arms.
    pub fn with_arms(mut self, arm: ArmPose) -> Self {
        self.left_arm = arm;
        self.right_arm = arm;
        self
    }

    /// Apply the same function to both legs.
    pub fn with_legs(mut self, leg: LegPose) -> Self {
        self.left_leg = leg;
        self.right_leg = leg;
        self
    }

    /// Set the torso lean.
    pub fn with_torso(mut self, torso: TorsoPose) -> Self {
        self.torso = torso;
        self
    }

    /// Visit every joint axis in a fixed order.
    ///
    /// Axis order: arms (left then right: shoulder pitch, shoulder roll,
    /// elbow), legs (left then right: hip pitch, hip roll, knee), torso
    /// (pitch, roll).
    pub fn axes(&self) -> [f32; 14] {
        [
            self.left_arm.shoulder_pitch,
            self.left_arm.shoulder_roll,
            self.left_arm.elbow_flex,
            self.right_arm.shoulder_pitch,
            self.right_arm.shoulder_roll,
            self.right_arm.elbow_flex,
            self.left_leg.hip_pitch,
            self.left_leg.hip_roll,
            self.left_leg.knee_flex,
            self.right_leg.hip_pitch,
            self.right_leg.hip_roll,
            self.right_leg.knee_flex,
            self.torso.pitch,
            self.torso.roll,
        ]
    }
}
