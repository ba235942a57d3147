//! Progress bar animation state

use std::time::{Duration, Instant};

/// Eased transition of the displayed completion percentage
///
/// The displayed value moves from where it was to the new target with a
/// cubic ease-out, so the gauge glides instead of jumping.
#[derive(Debug, Clone)]
pub struct ProgressAnimation {
    from: f32,
    to: f32,
    started: Instant,
}

impl ProgressAnimation {
    /// Duration of one transition
    pub const DURATION: Duration = Duration::from_millis(500);

    pub fn new() -> Self {
        Self {
            from: 0.0,
            to: 0.0,
            started: Instant::now(),
        }
    }

    /// Start animating toward `percentage` from the currently displayed value
    pub fn retarget(&mut self, percentage: u8) {
        self.retarget_at(percentage, Instant::now());
    }

    fn retarget_at(&mut self, percentage: u8, now: Instant) {
        self.from = self.value_at(now);
        self.to = f32::from(percentage.min(100));
        self.started = now;
    }

    /// Target the animation is heading to
    pub fn target(&self) -> u8 {
        self.to as u8
    }

    /// Currently displayed percentage
    pub fn displayed(&self) -> u8 {
        self.value_at(Instant::now()).round() as u8
    }

    /// Whether the gauge is still moving (the event loop polls faster meanwhile)
    pub fn is_animating(&self) -> bool {
        self.started.elapsed() < Self::DURATION
    }

    fn value_at(&self, now: Instant) -> f32 {
        let elapsed = now.saturating_duration_since(self.started);
        let progress = (elapsed.as_secs_f32() / Self::DURATION.as_secs_f32()).min(1.0);
        let eased = simple_easing::cubic_out(progress);
        (self.from + (self.to - self.from) * eased).clamp(0.0, 100.0)
    }
}

impl Default for ProgressAnimation {
    fn default() -> Self {
        Self::new()
    }
}
