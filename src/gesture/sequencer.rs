//! Commit Sequencer
//!
//! Level-triggered state machine over `{Idle, Dragging, Animating}`
//! that owns the commit timeline: on a commit decision it freezes
//! further classification, publishes the off-viewport exit transform,
//! and holds the pool mutation back until the settle deadline so the
//! fly-out completes before the deck advances.
//!
//! At most one [`PendingCommit`] is outstanding at a time. Beginning a
//! new gesture drops any pending commit before anything new can be
//! scheduled; a stale settle firing against a superseded card would
//! corrupt the active index.
//!
//! Every time-dependent operation takes an explicit `now: Instant`, so
//! settle/cancel ordering is deterministic under test. The driver
//! passes wall-clock instants.

use std::time::{Duration, Instant};

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::catalog::ProductId;
use crate::gesture::classifier::{classify, Decision, GesturePhase, SwipeThresholds};
use crate::input::{Delta, Point, PointerTracker};
use crate::pool::CommitKind;

/// Sequencer configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GestureConfig {
    /// Horizontal commit distance (pixels)
    #[serde(default = "default_threshold_x")]
    pub threshold_x: f64,

    /// Vertical commit distance (pixels)
    #[serde(default = "default_threshold_y")]
    pub threshold_y: f64,

    /// Settle window between fly-out start and pool mutation (ms)
    #[serde(default = "default_settle_ms")]
    pub settle_ms: u64,

    /// Snap-back animation duration (ms)
    #[serde(default = "default_snap_back_ms")]
    pub snap_back_ms: u64,

    /// Rotation per horizontal drag pixel (degrees)
    #[serde(default = "default_rotation_factor")]
    pub rotation_factor: f64,
}

fn default_threshold_x() -> f64 {
    200.0
}
fn default_threshold_y() -> f64 {
    300.0
}
fn default_settle_ms() -> u64 {
    300
}
fn default_snap_back_ms() -> u64 {
    300
}
fn default_rotation_factor() -> f64 {
    0.1
}

impl Default for GestureConfig {
    fn default() -> Self {
        Self {
            threshold_x: default_threshold_x(),
            threshold_y: default_threshold_y(),
            settle_ms: default_settle_ms(),
            snap_back_ms: default_snap_back_ms(),
            rotation_factor: default_rotation_factor(),
        }
    }
}

impl GestureConfig {
    /// Thresholds for the classifier.
    pub fn thresholds(&self) -> SwipeThresholds {
        SwipeThresholds {
            horizontal: self.threshold_x,
            vertical: self.threshold_y,
        }
    }
}

/// Viewport dimensions used to size the exit translation.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Viewport {
    /// Viewport width (pixels)
    #[serde(default = "default_viewport_width")]
    pub width: f64,

    /// Viewport height (pixels)
    #[serde(default = "default_viewport_height")]
    pub height: f64,
}

fn default_viewport_width() -> f64 {
    390.0
}
fn default_viewport_height() -> f64 {
    844.0
}

impl Default for Viewport {
    fn default() -> Self {
        Self {
            width: default_viewport_width(),
            height: default_viewport_height(),
        }
    }
}

/// Easing applied to the published transform.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Easing {
    /// No transition: the card follows the finger directly
    None,
    /// Ease-out back to the neutral pose
    EaseOut,
    /// Decelerating fly-out off the viewport
    Decelerate,
}

/// Visual transform for the top card, published to the render layer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CardTransform {
    /// Horizontal translation (pixels)
    pub x: f64,
    /// Vertical translation (pixels)
    pub y: f64,
    /// Rotation (degrees)
    pub rotation: f64,
    /// Transition easing
    pub easing: Easing,
    /// Transition duration; zero when easing is `None`
    pub duration: Duration,
}

impl CardTransform {
    /// The untransformed pose with no transition.
    pub fn neutral() -> Self {
        Self {
            x: 0.0,
            y: 0.0,
            rotation: 0.0,
            easing: Easing::None,
            duration: Duration::ZERO,
        }
    }
}

/// The single outstanding commit, scheduled at fly-out start and
/// applied to the pool when the settle deadline passes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PendingCommit {
    /// Card the commit targets
    pub target: ProductId,
    /// Pool outcome to apply
    pub outcome: CommitKind,
    /// When the settle fires
    pub deadline: Instant,
}

/// Sequencer state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DragPhase {
    /// No gesture in progress
    Idle,
    /// Pointer down, card tracking the finger
    Dragging,
    /// Commit decided, fly-out playing, settle pending
    Animating,
}

/// The commit sequencer.
pub struct Sequencer {
    phase: DragPhase,
    tracker: PointerTracker,
    thresholds: SwipeThresholds,
    settle: Duration,
    snap_back: Duration,
    rotation_factor: f64,
    viewport: Viewport,
    transform: CardTransform,
    pending: Option<PendingCommit>,
}

impl Sequencer {
    /// Create an idle sequencer.
    pub fn new(config: &GestureConfig, viewport: Viewport) -> Self {
        Self {
            phase: DragPhase::Idle,
            tracker: PointerTracker::new(),
            thresholds: config.thresholds(),
            settle: Duration::from_millis(config.settle_ms),
            snap_back: Duration::from_millis(config.snap_back_ms),
            rotation_factor: config.rotation_factor,
            viewport,
            transform: CardTransform::neutral(),
            pending: None,
        }
    }

    /// Current phase.
    pub fn phase(&self) -> DragPhase {
        self.phase
    }

    /// Transform the render layer should apply to the top card.
    pub fn transform(&self) -> &CardTransform {
        &self.transform
    }

    /// The outstanding commit, if any.
    pub fn pending(&self) -> Option<&PendingCommit> {
        self.pending.as_ref()
    }

    /// Deadline of the outstanding commit, for drivers that sleep
    /// between events.
    pub fn next_deadline(&self) -> Option<Instant> {
        self.pending.as_ref().map(|p| p.deadline)
    }

    /// Begin a gesture on the active card.
    ///
    /// Ignored when the deck is exhausted (`active` is `None`) — the
    /// designed empty-state behavior, not an error. Any outstanding
    /// pending commit is dropped first; returns `true` when a drag
    /// actually started.
    pub fn begin(&mut self, active: Option<ProductId>, point: Point) -> bool {
        if active.is_none() {
            return false;
        }
        if let Some(stale) = self.pending.take() {
            debug!(target_id = %stale.target, "pending commit cancelled by new gesture");
        }
        self.phase = DragPhase::Dragging;
        self.tracker.begin(point);
        self.transform = CardTransform::neutral();
        true
    }

    /// Feed one pointer sample.
    ///
    /// Under threshold the card follows the finger (translate plus
    /// proportional rotation, no easing). A commit decision mid-drag
    /// transitions to `Animating` immediately, exactly as if the drag
    /// had ended with that outcome.
    pub fn sample(&mut self, active: Option<ProductId>, point: Point, now: Instant) -> Decision {
        if self.phase != DragPhase::Dragging {
            return Decision::None;
        }
        let delta = self.tracker.sample(point);
        let decision = classify(delta, GesturePhase::InProgress, &self.thresholds);

        if decision.outcome().is_some() {
            self.animate_out(active, decision, delta, now);
        } else {
            self.transform = CardTransform {
                x: delta.x,
                y: delta.y,
                rotation: delta.x * self.rotation_factor,
                easing: Easing::None,
                duration: Duration::ZERO,
            };
        }
        decision
    }

    /// End the gesture (pointer released).
    ///
    /// The final delta decides: commit decisions schedule the settle,
    /// everything else (snap-back, suppressed downward swipe) eases the
    /// card back to neutral with no pool effect.
    pub fn finish(&mut self, active: Option<ProductId>, now: Instant) -> Decision {
        if self.phase != DragPhase::Dragging {
            return Decision::None;
        }
        let delta = self.tracker.end();
        let decision = classify(delta, GesturePhase::Ended, &self.thresholds);

        if decision.outcome().is_some() {
            self.animate_out(active, decision, delta, now);
        } else {
            self.snap_back();
        }
        decision
    }

    /// Drive the settle step.
    ///
    /// Once `now` reaches the deadline the pending commit is emitted
    /// exactly once (the caller applies it to the pool), the ephemeral
    /// transform is cleared so the next top card renders untransformed,
    /// and the sequencer returns to `Idle`. Polling early or again
    /// returns `None`.
    pub fn poll(&mut self, now: Instant) -> Option<PendingCommit> {
        if now < self.pending.as_ref()?.deadline {
            return None;
        }
        let commit = self.pending.take()?;
        self.phase = DragPhase::Idle;
        self.transform = CardTransform::neutral();
        debug!(target_id = %commit.target, outcome = ?commit.outcome, "settle fired");
        Some(commit)
    }

    /// Transition to `Animating`: publish the exit transform and
    /// schedule the pool mutation one settle window from now.
    fn animate_out(&mut self, active: Option<ProductId>, decision: Decision, delta: Delta, now: Instant) {
        self.tracker.end();

        let Some(target) = active else {
            // Active card vanished mid-drag (external reseed); nothing
            // to commit against.
            self.snap_back();
            return;
        };

        // Rotation scales with the exit translation: subtle for top
        // swipes, +/-45 degrees for lateral exits.
        let (fly_x, fly_y, rotation_span, outcome) = match decision {
            Decision::CommitTop => (0.0, -self.viewport.height, 15.0, CommitKind::Cart),
            Decision::CommitRight => {
                (self.viewport.width, delta.y * 2.0, 45.0, CommitKind::Wishlist)
            }
            Decision::CommitLeft => {
                (-self.viewport.width, delta.y * 2.0, 45.0, CommitKind::Rejected)
            }
            Decision::None | Decision::SnapBack => {
                self.snap_back();
                return;
            }
        };
        let rotation = (fly_x / self.viewport.width) * rotation_span;

        self.transform = CardTransform {
            x: fly_x,
            y: fly_y,
            rotation,
            easing: Easing::Decelerate,
            duration: self.settle,
        };
        self.phase = DragPhase::Animating;
        self.pending = Some(PendingCommit {
            target,
            outcome,
            deadline: now + self.settle,
        });
        debug!(target_id = %target, ?outcome, "commit scheduled");
    }

    /// Ease back to the neutral pose and return to `Idle`. No pool
    /// mutation, no pending commit.
    fn snap_back(&mut self) {
        self.phase = DragPhase::Idle;
        self.transform = CardTransform {
            x: 0.0,
            y: 0.0,
            rotation: 0.0,
            easing: Easing::EaseOut,
            duration: self.snap_back,
        };
    }
}
