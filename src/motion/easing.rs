//! Easing curves
//!
//! An easing curve remaps normalized progress in [0, 1] to a shaped progress
//! value before interpolation. `Back` deliberately overshoots past 1 and
//! settles; blends driven by it rely on the constraint pass to stay in range.

use serde::{Deserialize, Serialize};
use std::f32::consts::PI;

/// A named easing curve.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Easing {
    #[default]
    Linear,
    EaseIn,
    EaseOut,
    EaseInOut,
    /// Overshoot-and-settle ("back") curve.
    Back,
    Elastic,
}

impl Easing {
    /// Remap normalized progress `t` in [0, 1].
    ///
    /// Input is clamped to [0, 1]; output may exceed 1 for the overshooting
    /// curves (`Back`, `Elastic`) but is exact at both endpoints.
    pub fn apply(self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Easing::Linear => t,
            Easing::EaseIn => t * t,
            Easing::EaseOut => t * (2.0 - t),
            Easing::EaseInOut => {
                if t < 0.5 {
                    2.0 * t * t
                } else {
                    -1.0 + (4.0 - 2.0 * t) * t
                }
            }
            Easing::Back => {
                const C1: f32 = 1.70158;
                const C3: f32 = C1 + 1.0;
                let u = t - 1.0;
                1.0 + C3 * u * u * u + C1 * u * u
            }
            Easing::Elastic => {
                const C4: f32 = 2.0 * PI / 3.0;
                if t == 0.0 {
                    0.0
                } else if t == 1.0 {
                    1.0
                } else {
                    2f32.powf(-10.0 * t) * ((t * 10.0 - 0.75) * C4).sin() + 1.0
                }
            }
        }
    }
}
