// SPDX-License-Identifier: MPL-2.0
//! Single-tap versus double-tap arbitration.
//!
//! A tap is held back for the double-tap window. A second tap inside the
//! window becomes a double tap for the current page; otherwise the first tap
//! is released as a single tap when the window expires. Without a double-tap
//! recognizer to wait for, taps are single taps right away.

use crate::domain::ui::DoubleTapWindow;
use crate::ui::page::GestureId;
use iced_core::Point;
use std::time::{Duration, Instant};

#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) enum TapOutcome {
    /// Waiting for a possible second tap.
    Pending,
    Single(Point),
    Double(Point),
}

#[derive(Debug, Clone, Copy)]
struct PendingTap {
    position: Point,
    at: Instant,
}

#[derive(Debug, Clone)]
pub(crate) struct TapArbiter {
    window: Duration,
    pending: Option<PendingTap>,
    requires_failure_of: Option<GestureId>,
}

impl TapArbiter {
    pub(crate) fn new(window: DoubleTapWindow) -> Self {
        Self {
            window: window.as_duration(),
            pending: None,
            requires_failure_of: None,
        }
    }

    /// Makes single taps wait for `gesture` to fail. A pending tap is dropped.
    pub(crate) fn require_failure_of(&mut self, gesture: Option<GestureId>) {
        if self.requires_failure_of != gesture {
            self.pending = None;
        }
        self.requires_failure_of = gesture;
    }

    pub(crate) fn tap(&mut self, position: Point, at: Instant) -> TapOutcome {
        if self.requires_failure_of.is_none() {
            return TapOutcome::Single(position);
        }
        match self.pending.take() {
            Some(first) if at.saturating_duration_since(first.at) < self.window => {
                TapOutcome::Double(position)
            }
            _ => {
                self.pending = Some(PendingTap { position, at });
                TapOutcome::Pending
            }
        }
    }

    /// Releases the pending tap as a single tap once its window expired.
    pub(crate) fn tick(&mut self, now: Instant) -> Option<Point> {
        let pending = self.pending?;
        if now.saturating_duration_since(pending.at) >= self.window {
            self.pending = None;
            Some(pending.position)
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn arbiter() -> TapArbiter {
        let mut arbiter = TapArbiter::new(DoubleTapWindow::from_millis(300));
        arbiter.require_failure_of(Some(GestureId::new(1)));
        arbiter
    }

    #[test]
    fn two_quick_taps_make_a_double_tap() {
        let mut arbiter = arbiter();
        let start = Instant::now();
        let point = Point::new(5.0, 5.0);

        assert_eq!(arbiter.tap(point, start), TapOutcome::Pending);
        assert_eq!(
            arbiter.tap(point, start + Duration::from_millis(100)),
            TapOutcome::Double(point)
        );
        assert_eq!(arbiter.tick(start + Duration::from_secs(1)), None);
    }

    #[test]
    fn lone_tap_is_released_after_the_window() {
        let mut arbiter = arbiter();
        let start = Instant::now();
        let point = Point::new(1.0, 2.0);

        arbiter.tap(point, start);
        assert_eq!(arbiter.tick(start + Duration::from_millis(100)), None);
        assert_eq!(
            arbiter.tick(start + Duration::from_millis(300)),
            Some(point)
        );
    }

    #[test]
    fn taps_are_immediate_without_a_double_tap_recognizer() {
        let mut arbiter = TapArbiter::new(DoubleTapWindow::default());
        let point = Point::new(3.0, 4.0);
        assert_eq!(arbiter.tap(point, Instant::now()), TapOutcome::Single(point));
    }

    #[test]
    fn changing_recognizer_drops_pending_tap() {
        let mut arbiter = arbiter();
        let start = Instant::now();
        arbiter.tap(Point::ORIGIN, start);

        arbiter.require_failure_of(Some(GestureId::new(2)));
        assert_eq!(arbiter.tick(start + Duration::from_secs(1)), None);
    }
}
