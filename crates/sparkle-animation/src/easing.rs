//! Easing curves mapping normalized time to normalized progress

use serde::{Deserialize, Serialize};

/// How progress accelerates across a timed move
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum Easing {
    /// Constant speed
    #[default]
    Linear,
    /// Starts slow, quadratic
    InQuad,
    /// Ends slow, quadratic
    OutQuad,
    /// Starts slow, cubic
    InCubic,
    /// Ends slow, cubic
    OutCubic,
    /// Slow at both ends, quadratic
    InOutQuad,
}

impl Easing {
    /// Map `t` in [0, 1] to eased progress in [0, 1]. Out-of-range `t` is clamped.
    pub fn apply(self, t: f32) -> f32 {
        let t = if t.is_nan() { 1.0 } else { t.clamp(0.0, 1.0) };
        match self {
            Easing::Linear => t,
            Easing::InQuad => t * t,
            Easing::OutQuad => {
                let inv = 1.0 - t;
                1.0 - inv * inv
            }
            Easing::InCubic => t * t * t,
            Easing::OutCubic => {
                let inv = 1.0 - t;
                1.0 - inv * inv * inv
            }
            Easing::InOutQuad => {
                if t < 0.5 {
                    2.0 * t * t
                } else {
                    let inv = -2.0 * t + 2.0;
                    1.0 - inv * inv / 2.0
                }
            }
        }
    }
}
