//! Swipe Classification
//!
//! Pure threshold classification of a drag delta. The vertical
//! threshold is checked before the horizontal one: a gesture exceeding
//! both commits as a top swipe, never a lateral one. Downward swipes
//! are suppressed entirely — no commit, the card stays.

use serde::{Deserialize, Serialize};

use crate::input::Delta;
use crate::pool::CommitKind;

/// Phase of the gesture the sample belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GesturePhase {
    /// Pointer is still down, card tracks the finger
    InProgress,
    /// Pointer released, final delta
    Ended,
}

/// Outcome of classifying one delta sample.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decision {
    /// No threshold crossed (in progress), or a suppressed downward
    /// swipe: nothing happens
    None,
    /// Gesture ended under threshold: animate back to neutral
    SnapBack,
    /// Upward swipe past the vertical threshold
    CommitTop,
    /// Leftward swipe past the horizontal threshold
    CommitLeft,
    /// Rightward swipe past the horizontal threshold
    CommitRight,
}

impl Decision {
    /// Pool outcome for a commit decision; `None` for non-commits.
    ///
    /// Direction mapping: up = cart, right = wishlist, left = rejected.
    pub fn outcome(self) -> Option<CommitKind> {
        match self {
            Decision::CommitTop => Some(CommitKind::Cart),
            Decision::CommitRight => Some(CommitKind::Wishlist),
            Decision::CommitLeft => Some(CommitKind::Rejected),
            Decision::None | Decision::SnapBack => None,
        }
    }
}

/// Minimum drag distances, in pixels, for a swipe to commit.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct SwipeThresholds {
    /// Horizontal commit distance
    #[serde(default = "default_threshold_x")]
    pub horizontal: f64,

    /// Vertical commit distance
    #[serde(default = "default_threshold_y")]
    pub vertical: f64,
}

fn default_threshold_x() -> f64 {
    200.0
}
fn default_threshold_y() -> f64 {
    300.0
}

impl Default for SwipeThresholds {
    fn default() -> Self {
        Self {
            horizontal: default_threshold_x(),
            vertical: default_threshold_y(),
        }
    }
}

/// Classify a drag delta.
///
/// Applied identically at every in-progress sample and at gesture end;
/// the only phase-dependent case is an under-threshold delta, which
/// means "follow the finger" mid-drag and "snap back" on release.
pub fn classify(delta: Delta, phase: GesturePhase, thresholds: &SwipeThresholds) -> Decision {
    if delta.y.abs() > thresholds.vertical {
        if delta.y < 0.0 {
            return Decision::CommitTop;
        }
        // Downward swipe: suppressed, card stays
        return Decision::None;
    }

    if delta.x.abs() > thresholds.horizontal {
        return if delta.x > 0.0 {
            Decision::CommitRight
        } else {
            Decision::CommitLeft
        };
    }

    match phase {
        GesturePhase::InProgress => Decision::None,
        GesturePhase::Ended => Decision::SnapBack,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn thresholds() -> SwipeThresholds {
        SwipeThresholds::default()
    }

    #[test]
    fn test_vertical_wins_when_both_thresholds_crossed() {
        let decision = classify(Delta::new(250.0, -310.0), GesturePhase::Ended, &thresholds());
        assert_eq!(decision, Decision::CommitTop);
    }

    #[test]
    fn test_downward_swipe_is_suppressed() {
        for phase in [GesturePhase::InProgress, GesturePhase::Ended] {
            let decision = classify(Delta::new(0.0, 320.0), phase, &thresholds());
            assert_eq!(decision, Decision::None);
        }
    }

    #[test]
    fn test_lateral_commits() {
        let right = classify(Delta::new(220.0, 10.0), GesturePhase::Ended, &thresholds());
        assert_eq!(right, Decision::CommitRight);

        let left = classify(Delta::new(-220.0, 10.0), GesturePhase::InProgress, &thresholds());
        assert_eq!(left, Decision::CommitLeft);
    }

    #[test]
    fn test_under_threshold_by_phase() {
        let delta = Delta::new(50.0, 50.0);
        assert_eq!(
            classify(delta, GesturePhase::InProgress, &thresholds()),
            Decision::None
        );
        assert_eq!(
            classify(delta, GesturePhase::Ended, &thresholds()),
            Decision::SnapBack
        );
    }

    #[test]
    fn test_exact_threshold_does_not_commit() {
        // Strictly greater-than: landing exactly on the threshold
        // still snaps back.
        let decision = classify(Delta::new(200.0, 0.0), GesturePhase::Ended, &thresholds());
        assert_eq!(decision, Decision::SnapBack);

        let decision = classify(Delta::new(0.0, -300.0), GesturePhase::Ended, &thresholds());
        assert_eq!(decision, Decision::SnapBack);
    }

    #[test]
    fn test_outcome_mapping() {
        assert_eq!(Decision::CommitTop.outcome(), Some(CommitKind::Cart));
        assert_eq!(Decision::CommitRight.outcome(), Some(CommitKind::Wishlist));
        assert_eq!(Decision::CommitLeft.outcome(), Some(CommitKind::Rejected));
        assert_eq!(Decision::None.outcome(), None);
        assert_eq!(Decision::SnapBack.outcome(), None);
    }
}
