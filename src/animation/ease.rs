/// Interpolation curve applied to reveal/dismiss timeline progress.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum Ease {
    /// Constant-rate interpolation.
    Linear,
    /// Quadratic acceleration from rest.
    InQuad,
    /// Quadratic deceleration to rest.
    OutQuad,
    /// Accelerate then decelerate; the reference overlay's default feel.
    #[default]
    InOutQuad,
    /// Cubic accelerate/decelerate, slightly sharper shoulders.
    InOutCubic,
    /// Decelerating overshoot past the target before settling.
    OutBack,
}

impl Ease {
    /// Apply the curve to raw progress `t`, clamped into `[0, 1]` first.
    pub fn apply(self, t: f64) -> f64 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Self::Linear => t,
            Self::InQuad => t * t,
            Self::OutQuad => 1.0 - (1.0 - t) * (1.0 - t),
            Self::InOutQuad => {
                if t < 0.5 {
                    2.0 * t * t
                } else {
                    1.0 - ((-2.0 * t + 2.0).powi(2) / 2.0)
                }
            }
            Self::InOutCubic => {
                if t < 0.5 {
                    4.0 * t * t * t
                } else {
                    1.0 - ((-2.0 * t + 2.0).powi(3) / 2.0)
                }
            }
            Self::OutBack => {
                const C1: f64 = 1.70158;
                const C3: f64 = C1 + 1.0;
                let u = t - 1.0;
                1.0 + C3 * u * u * u + C1 * u * u
            }
        }
    }
}
