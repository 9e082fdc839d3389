//! Retargetable tween between two scalar values.

use std::time::{Duration, Instant};

use crate::easing::Easing;

/// Duration of the selection-change tween.
pub const FOCUS_TRANSITION_DURATION: Duration = Duration::from_millis(300);

/// A time-based tween between two `f32` values.
///
/// The clock is injected: [`Transition::value`] and
/// [`Transition::is_animating`] are pure in the `now` argument, and
/// [`Transition::retarget`] stamps the start instant it is handed. Nothing
/// here reads the system clock.
#[derive(Debug, Clone, Copy)]
pub struct Transition {
    from: f32,
    to: f32,
    started_at: Option<Instant>,
    duration: Duration,
    easing: Easing,
}

impl Transition {
    /// Create a settled transition holding `initial`.
    pub fn new(initial: f32, duration: Duration, easing: Easing) -> Self {
        Self {
            from: initial,
            to: initial,
            started_at: None,
            duration,
            easing,
        }
    }

    /// The value the transition is heading toward.
    pub fn target(&self) -> f32 {
        self.to
    }

    /// Start animating toward `to` as of `now`.
    ///
    /// When retargeted mid-flight the current interpolated value becomes
    /// the new starting point, so a second selection while animating picks
    /// up from wherever the sweep currently is.
    pub fn retarget(&mut self, to: f32, now: Instant) {
        self.from = self.value(now);
        self.to = to;
        self.started_at = Some(now);
    }

    /// Jump to `to` with no animation.
    pub fn snap_to(&mut self, to: f32) {
        self.from = to;
        self.to = to;
        self.started_at = None;
    }

    /// Interpolated value at `now`.
    pub fn value(&self, now: Instant) -> f32 {
        match self.started_at {
            None => self.to,
            Some(started_at) => {
                let elapsed = now.saturating_duration_since(started_at);
                if elapsed >= self.duration {
                    self.to
                } else {
                    let raw = elapsed.as_secs_f32() / self.duration.as_secs_f32();
                    let progress = self.easing.apply(raw);
                    self.from + (self.to - self.from) * progress
                }
            }
        }
    }

    /// Whether the tween is still in flight at `now`.
    pub fn is_animating(&self, now: Instant) -> bool {
        match self.started_at {
            None => false,
            Some(started_at) => now.saturating_duration_since(started_at) < self.duration,
        }
    }
}
