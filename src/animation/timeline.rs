use crate::animation::ease::Ease;

/// Focal scale at the bottom of the idle breathing wave.
pub const BREATH_SCALE_MIN: f64 = 1.0;
/// Focal scale at the peak of the idle breathing wave.
pub const BREATH_SCALE_MAX: f64 = 1.1;
/// Ripple scale when the one-shot ripple starts.
pub const RIPPLE_SCALE_START: f64 = 1.1;
/// Ripple scale when the ripple has fully expanded and faded out.
pub const RIPPLE_SCALE_END: f64 = 1.6;

/// Finite progress generator for the single "current" animation
/// (reveal, finish, or dismiss), driven by the host's frame ticks.
#[derive(Clone, Copy, Debug)]
pub struct Timeline {
    duration: f64,
    elapsed: f64,
    ease: Ease,
}

impl Timeline {
    /// A timeline covering `duration` seconds shaped by `ease`.
    pub fn new(duration: f64, ease: Ease) -> Self {
        Self {
            duration: duration.max(0.0),
            elapsed: 0.0,
            ease,
        }
    }

    /// Advance by `dt` seconds. Returns true exactly once, on the tick that
    /// reaches the end of the timeline.
    pub fn advance(&mut self, dt: f64) -> bool {
        if self.is_finished() {
            return false;
        }
        self.elapsed += dt.max(0.0);
        self.is_finished()
    }

    /// Eased progress in `[0, 1]`.
    pub fn progress(&self) -> f64 {
        self.ease.apply(self.raw_progress())
    }

    /// Unshaped progress in `[0, 1]`.
    pub fn raw_progress(&self) -> f64 {
        if self.duration <= 0.0 {
            return 1.0;
        }
        (self.elapsed / self.duration).clamp(0.0, 1.0)
    }

    /// Whether the timeline has run to completion.
    pub fn is_finished(&self) -> bool {
        self.elapsed >= self.duration
    }
}

/// Triangular idle wave oscillating the focal scale between
/// [`BREATH_SCALE_MIN`] and [`BREATH_SCALE_MAX`].
///
/// Each time the wave passes its peak and begins descending the ripple
/// timeline is (re)started; [`BreathingTimeline::advance`] reports that
/// direction change.
#[derive(Clone, Copy, Debug)]
pub struct BreathingTimeline {
    /// Seconds per rising (or falling) leg of the wave.
    leg: f64,
    elapsed: f64,
}

impl BreathingTimeline {
    /// A wave spending `leg_secs` rising and `leg_secs` falling.
    pub fn new(leg_secs: f64) -> Self {
        Self {
            leg: leg_secs.max(1e-6),
            elapsed: 0.0,
        }
    }

    /// Advance by `dt` seconds. Returns true when the wave passed a peak and
    /// began descending during this tick.
    pub fn advance(&mut self, dt: f64) -> bool {
        let was_rising = self.is_rising();
        let legs_before = (self.elapsed / self.leg) as u64;
        self.elapsed += dt.max(0.0);
        let legs_after = (self.elapsed / self.leg) as u64;
        // A peak sits at every odd leg boundary; crossing one (or rolling
        // over several legs in one large dt) flips rising to falling.
        (legs_after > legs_before && was_rising) || (legs_after >= legs_before + 2)
    }

    /// Current focal scale in `[BREATH_SCALE_MIN, BREATH_SCALE_MAX]`.
    pub fn scale(&self) -> f64 {
        let phase = (self.elapsed / self.leg).rem_euclid(2.0);
        let tri = if phase < 1.0 { phase } else { 2.0 - phase };
        BREATH_SCALE_MIN + (BREATH_SCALE_MAX - BREATH_SCALE_MIN) * tri
    }

    fn is_rising(&self) -> bool {
        (self.elapsed / self.leg).rem_euclid(2.0) < 1.0
    }
}

/// One-shot ripple ring expanding from [`RIPPLE_SCALE_START`] to
/// [`RIPPLE_SCALE_END`] while fading out.
#[derive(Clone, Copy, Debug)]
pub struct RippleTimeline {
    duration: f64,
    elapsed: f64,
    active: bool,
}

impl RippleTimeline {
    /// An inactive ripple that will take `duration` seconds per shot.
    pub fn new(duration: f64) -> Self {
        Self {
            duration: duration.max(1e-6),
            elapsed: 0.0,
            active: false,
        }
    }

    /// Restart the ripple from the beginning of its expansion.
    pub fn restart(&mut self) {
        self.elapsed = 0.0;
        self.active = true;
    }

    /// Advance by `dt` seconds; the ripple deactivates at full expansion.
    pub fn advance(&mut self, dt: f64) {
        if !self.active {
            return;
        }
        self.elapsed += dt.max(0.0);
        if self.elapsed >= self.duration {
            self.active = false;
        }
    }

    /// Whether a shot is in flight.
    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Ripple scale modifier in `[RIPPLE_SCALE_START, RIPPLE_SCALE_END]`.
    pub fn scale(&self) -> f64 {
        let t = (self.elapsed / self.duration).clamp(0.0, 1.0);
        RIPPLE_SCALE_START + (RIPPLE_SCALE_END - RIPPLE_SCALE_START) * t
    }

    /// Ripple alpha modifier: `(1.6 - scale) * 2`, clamped into `[0, 1]`.
    ///
    /// The raw formula goes negative past full expansion; the clamp is a
    /// hard requirement, not an optimization.
    pub fn alpha(&self) -> f64 {
        ((RIPPLE_SCALE_END - self.scale()) * 2.0).clamp(0.0, 1.0)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/timeline.rs"]
mod tests;
