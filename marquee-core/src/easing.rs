//! Easing functions for animation progress curves.

/// Easing function applied to a normalized progress value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Easing {
    /// Identity curve.
    Linear,
    /// Decelerating cubic.
    EaseOutCubic,
    /// Symmetric cubic acceleration/deceleration.
    EaseInOutCubic,
    /// Symmetric sinusoidal acceleration/deceleration.
    EaseInOutSine,
}

impl Easing {
    /// Apply the easing function to a progress value (0.0 to 1.0).
    pub fn apply(&self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Easing::Linear => t,
            Easing::EaseOutCubic => 1.0 - (1.0 - t).powi(3),
            Easing::EaseInOutCubic => {
                if t < 0.5 {
                    4.0 * t * t * t
                } else {
                    1.0 - (-2.0 * t + 2.0).powi(3) / 2.0
                }
            }
            Easing::EaseInOutSine => -((t * std::f32::consts::PI).cos() - 1.0) / 2.0,
        }
    }
}
