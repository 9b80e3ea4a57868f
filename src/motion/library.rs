//! Named motion library
//!
//! Each named motion is a pure function producing a full pose. `walk_cycle`
//! is the only continuous one: a periodic function of a phase variable in
//! [0, 1), wrapped internally so any finite phase is valid.
//!
//! The static poses approximate a forward-leaning, counterbalanced human
//! squat-and-reach. Angles were tuned by eye against the joint limit table in
//! [`crate::constraint`]; every generated pose is already inside the limits.

use std::f32::consts::TAU;

use crate::types::{ArmPose, LegPose, Pose, TorsoPose};

/// Peak leg swing during the walk cycle, degrees.
pub const LEG_SWING_DEG: f32 = 25.0;
/// Peak knee lift during the walk cycle, degrees.
pub const KNEE_LIFT_DEG: f32 = 35.0;
/// Arm swing amplitude as a ratio of leg swing.
pub const ARM_SWING_RATIO: f32 = 0.6;
/// Torso counter-sway per unit of swing signal, degrees.
pub const TORSO_COUNTER_DEG: f32 = 2.0;
/// Above this held weight, `holding` leans further back to counterbalance.
pub const HEAVY_HOLD_THRESHOLD: f32 = 1.5;

/// Relaxed standing pose: arms hang with a slight elbow bend.
pub fn idle() -> Pose {
    Pose::neutral().with_arms(ArmPose {
        shoulder_pitch: 4.0,
        shoulder_roll: 3.0,
        elbow_flex: 8.0,
    })
}

/// Strict neutral upright pose.
pub fn stand() -> Pose {
    Pose::neutral()
}

/// Transitional crouch between standing and the full squat: knees start to
/// bend, torso starts to tip forward, arms come forward for balance.
pub fn squat_prep() -> Pose {
    Pose::neutral()
        .with_legs(LegPose {
            hip_pitch: -40.0,
            hip_roll: 0.0,
            knee_flex: 50.0,
        })
        .with_arms(ArmPose {
            shoulder_pitch: -20.0,
            shoulder_roll: 5.0,
            elbow_flex: 15.0,
        })
        .with_torso(TorsoPose {
            pitch: 15.0,
            roll: 0.0,
        })
}

/// Full deep squat, torso leaning forward over the feet.
pub fn squat() -> Pose {
    Pose::neutral()
        .with_legs(LegPose {
            hip_pitch: -95.0,
            hip_roll: 0.0,
            knee_flex: 115.0,
        })
        .with_arms(ArmPose {
            shoulder_pitch: -35.0,
            shoulder_roll: 8.0,
            elbow_flex: 20.0,
        })
        .with_torso(TorsoPose {
            pitch: 28.0,
            roll: 0.0,
        })
}

/// Squat with the arms extended down toward the ground.
pub fn reach_down() -> Pose {
    squat().with_arms(ArmPose {
        shoulder_pitch: -70.0,
        shoulder_roll: 10.0,
        elbow_flex: 5.0,
    })
}

/// Upright carrying pose, cradling a held object.
///
/// `weight` is an open-ended scalar; above [`HEAVY_HOLD_THRESHOLD`] the torso
/// leans further back to counterbalance the load.
pub fn holding(weight: f32) -> Pose {
    let lean_back = if weight > HEAVY_HOLD_THRESHOLD {
        -12.0
    } else {
        -5.0
    };
    Pose::neutral()
        .with_arms(ArmPose {
            shoulder_pitch: -30.0,
            shoulder_roll: 6.0,
            elbow_flex: 95.0,
        })
        .with_torso(TorsoPose {
            pitch: lean_back,
            roll: 0.0,
        })
}

/// One pose of the walking gait at `phase`, periodic with period 1.
///
/// Leg swing follows `sin(phase·2π)`, knee lift follows the positive half of
/// the same signal, the opposite leg runs half a cycle out of phase, arms
/// swing anti-phase to the same-side leg, and the torso takes a small
/// counter-sway proportional to the swing signal.
pub fn walk_cycle(phase: f32) -> Pose {
    let phase = phase.rem_euclid(1.0);
    let swing = (phase * TAU).sin();
    let opposite = (phase + 0.5).rem_euclid(1.0);
    let swing_op = (opposite * TAU).sin();

    let leg = |s: f32| LegPose {
        hip_pitch: -LEG_SWING_DEG * s,
        hip_roll: 0.0,
        knee_flex: KNEE_LIFT_DEG * s.max(0.0),
    };
    // Arm swings against the same-side leg.
    let arm = |s: f32| ArmPose {
        shoulder_pitch: LEG_SWING_DEG * ARM_SWING_RATIO * s,
        shoulder_roll: 3.0,
        elbow_flex: 12.0,
    };

    Pose {
        left_leg: leg(swing),
        right_leg: leg(swing_op),
        left_arm: arm(swing),
        right_arm: arm(swing_op),
        torso: TorsoPose {
            pitch: TORSO_COUNTER_DEG * swing.abs(),
            roll: -TORSO_COUNTER_DEG * 0.75 * swing,
        },
    }
}
