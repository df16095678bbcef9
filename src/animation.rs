//! Sweep animation for progress changes
//!
//! The gauge itself is a stateless canvas program; interpolation between
//! successive progress values lives in host state, updated through
//! `iced_anim` and ticked on animation frames.

use std::time::{Duration, Instant};

use iced_anim::Animated;
use iced_anim::transition::Easing;

/// Duration of one sweep transition
const SWEEP_DURATION: Duration = Duration::from_millis(250);

/// Create the linear sweep easing
fn sweep_easing() -> Easing {
    Easing::LINEAR.with_duration(SWEEP_DURATION)
}

/// Host-owned interpolation state for a gauge's filled arc
///
/// When animation is disabled, progress changes settle immediately and
/// `value` reflects the new target with no interpolation step.
#[derive(Debug)]
pub struct SweepAnimation {
    animated: bool,
    animation: Animated<f32>,
}

impl Default for SweepAnimation {
    fn default() -> Self {
        Self::new(0.0, true)
    }
}

impl SweepAnimation {
    /// Create a sweep animation settled at the clamped fraction
    pub fn new(progress: f32, animated: bool) -> Self {
        Self {
            animated,
            animation: Animated::transition(progress.clamp(0.0, 1.0), sweep_easing()),
        }
    }

    /// Move toward a new progress value
    ///
    /// Animated mode transitions linearly; otherwise the value jumps to
    /// the clamped target at once.
    pub fn set_progress(&mut self, progress: f32) {
        let target = progress.clamp(0.0, 1.0);
        if self.animated {
            self.animation.update(target.into());
        } else {
            self.animation = Animated::transition(target, sweep_easing());
        }
    }

    /// Enable or disable interpolation
    ///
    /// Disabling settles the value at the current target.
    pub fn set_animated(&mut self, animated: bool) {
        self.animated = animated;
        if !animated {
            let target = *self.animation.target();
            self.animation = Animated::transition(target, sweep_easing());
        }
    }

    /// Whether progress changes are interpolated
    pub fn is_animated(&self) -> bool {
        self.animated
    }

    /// The fraction the gauge should draw this frame
    pub fn value(&self) -> f32 {
        *self.animation.value()
    }

    /// The fraction being moved toward
    pub fn target(&self) -> f32 {
        *self.animation.target()
    }

    /// Check if an animation is currently in progress
    pub fn is_animating(&self) -> bool {
        self.animation.is_animating()
    }

    /// Tick the animation forward in time
    /// Must be called on each animation frame to update the value
    pub fn tick(&mut self, now: Instant) {
        self.animation.tick(now);
    }
}
