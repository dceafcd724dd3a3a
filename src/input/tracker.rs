//! Drag Session Tracking
//!
//! One [`PointerTracker`] instance tracks at most one drag session: the
//! start position recorded at pointer-down and the running delta of the
//! most recent sample. Calls against an inactive session return the
//! zero delta and leave no other trace.

use tracing::trace;

use crate::input::pointer::{Delta, Point};

/// Tracks the ephemeral gesture session between pointer-down and
/// pointer-up.
#[derive(Debug, Clone)]
pub struct PointerTracker {
    /// Session start position
    start: Point,

    /// Delta of the most recent sample
    last_delta: Delta,

    /// Whether a session is in progress
    active: bool,
}

impl PointerTracker {
    /// Create an inactive tracker.
    pub fn new() -> Self {
        Self {
            start: Point::new(0.0, 0.0),
            last_delta: Delta::ZERO,
            active: false,
        }
    }

    /// Begin a session at the given start position.
    pub fn begin(&mut self, point: Point) {
        self.start = point;
        self.last_delta = Delta::ZERO;
        self.active = true;
        trace!("pointer session begin at ({}, {})", point.x, point.y);
    }

    /// Sample the current pointer position against the session start.
    ///
    /// Returns the zero delta when no session is active.
    pub fn sample(&mut self, point: Point) -> Delta {
        if !self.active {
            return Delta::ZERO;
        }
        self.last_delta = point.delta_from(self.start);
        self.last_delta
    }

    /// End the session, returning the final delta.
    ///
    /// Returns the zero delta when no session is active.
    pub fn end(&mut self) -> Delta {
        if !self.active {
            return Delta::ZERO;
        }
        self.active = false;
        let delta = self.last_delta;
        self.last_delta = Delta::ZERO;
        trace!("pointer session end, final delta ({}, {})", delta.x, delta.y);
        delta
    }

    /// Whether a session is in progress.
    pub fn is_active(&self) -> bool {
        self.active
    }
}

impl Default for PointerTracker {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_inactive_sample_is_inert() {
        let mut tracker = PointerTracker::new();
        assert_eq!(tracker.sample(Point::new(50.0, 50.0)), Delta::ZERO);
        assert!(!tracker.is_active());
    }

    #[test]
    fn test_inactive_end_is_inert() {
        let mut tracker = PointerTracker::new();
        assert_eq!(tracker.end(), Delta::ZERO);
    }

    #[test]
    fn test_sample_returns_delta_from_start() {
        let mut tracker = PointerTracker::new();
        tracker.begin(Point::new(100.0, 200.0));

        let delta = tracker.sample(Point::new(150.0, 170.0));
        assert_eq!(delta, Delta::new(50.0, -30.0));
    }

    #[test]
    fn test_end_returns_last_sampled_delta() {
        let mut tracker = PointerTracker::new();
        tracker.begin(Point::new(0.0, 0.0));
        tracker.sample(Point::new(10.0, 0.0));
        tracker.sample(Point::new(220.0, 5.0));

        let final_delta = tracker.end();
        assert_eq!(final_delta, Delta::new(220.0, 5.0));
        assert!(!tracker.is_active());
    }

    #[test]
    fn test_end_without_samples_is_zero() {
        let mut tracker = PointerTracker::new();
        tracker.begin(Point::new(42.0, 42.0));
        assert_eq!(tracker.end(), Delta::ZERO);
    }

    #[test]
    fn test_begin_resets_previous_session() {
        let mut tracker = PointerTracker::new();
        tracker.begin(Point::new(0.0, 0.0));
        tracker.sample(Point::new(300.0, 0.0));

        tracker.begin(Point::new(500.0, 500.0));
        let delta = tracker.sample(Point::new(510.0, 500.0));
        assert_eq!(delta, Delta::new(10.0, 0.0));
    }
}
