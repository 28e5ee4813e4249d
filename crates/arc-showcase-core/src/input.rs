//! Wheel accumulation and button navigation.

use std::ops::Range;
use std::time::Duration;

use arc_showcase_hal::NavButton;

/// Direction a completed wheel gesture asks for.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ScrollIntent {
    Forward,
    Backward,
}

/// Sums wheel deltas until they cross the current threshold.
///
/// A gesture that stays quiet for the configured period is abandoned and the
/// sum starts over.
#[derive(Clone, Debug)]
pub struct ScrollAggregator {
    accumulated: f32,
    quiet_period: Duration,
    quiet_timer: Option<Duration>,
}

impl ScrollAggregator {
    pub fn new(quiet_period: Duration) -> Self {
        Self {
            accumulated: 0.0,
            quiet_period,
            quiet_timer: None,
        }
    }

    /// Running sum since the last reset.
    pub fn accumulated(&self) -> f32 {
        self.accumulated
    }

    /// True while the quiet-period timer is armed.
    pub fn quiet_timer_armed(&self) -> bool {
        self.quiet_timer.is_some()
    }

    pub fn reset(&mut self) {
        self.accumulated = 0.0;
    }

    /// Disarm the quiet-period timer.
    pub fn cancel_quiet_timer(&mut self) {
        self.quiet_timer = None;
    }

    /// Add one wheel delta and (re)arm the quiet timer.
    ///
    /// Returns the requested direction once the sum reaches `threshold` in
    /// either direction. The caller decides whether a view exists there.
    /// A zero delta carries no direction and is ignored.
    pub fn accumulate(&mut self, delta: f32, threshold: f32) -> Option<ScrollIntent> {
        if delta == 0.0 {
            return None;
        }
        self.accumulated += delta;
        self.quiet_timer = Some(self.quiet_period);

        if self.accumulated >= threshold {
            Some(ScrollIntent::Forward)
        } else if self.accumulated <= -threshold {
            Some(ScrollIntent::Backward)
        } else {
            None
        }
    }

    /// Run the quiet timer. When it fires with no animation in flight the
    /// sum is dropped.
    pub fn tick(&mut self, dt: Duration, animating: bool) {
        let Some(remaining) = self.quiet_timer else {
            return;
        };
        if dt >= remaining {
            self.quiet_timer = None;
            if !animating {
                log::trace!("wheel gesture abandoned at {:.1}", self.accumulated);
                self.accumulated = 0.0;
            }
        } else {
            self.quiet_timer = Some(remaining - dt);
        }
    }
}

/// Target of a navigation button press, if it stays inside the focus block.
///
/// Presses only count while `current` is itself a focus view.
pub fn button_target(focus: &Range<usize>, current: usize, button: NavButton) -> Option<usize> {
    if !focus.contains(&current) {
        return None;
    }
    current
        .checked_add_signed(button.step())
        .filter(|target| focus.contains(target))
}
