//! Gesture Classification and Commit Sequencing
//!
//! Converts the continuous delta stream of a drag into a discrete
//! triage decision, and sequences the commit so the visual fly-out
//! completes before the pool mutates.
//!
//! # Architecture
//!
//! ```text
//! Delta stream
//!      ↓
//! ┌────────────────┐   Decision    ┌──────────────────────────┐
//! │ classify()     │ ────────────> │ Sequencer                │
//! │ threshold +    │               │ Idle → Dragging →        │
//! │ tie-break rule │               │ Animating → Idle         │
//! └────────────────┘               │ (PendingCommit + settle) │
//!                                  └──────────────────────────┘
//! ```
//!
//! The classifier is a pure function; the sequencer is a level-
//! triggered state machine driven by pointer events and a settle poll.
//! Beginning a new gesture while a commit is pending drops the pending
//! commit before anything new can be scheduled — that cancellation is
//! the one correctness-critical ordering rule in the crate.

pub mod classifier;
pub mod sequencer;

pub use classifier::{classify, Decision, GesturePhase, SwipeThresholds};
pub use sequencer::{
    CardTransform, DragPhase, Easing, GestureConfig, PendingCommit, Sequencer, Viewport,
};
