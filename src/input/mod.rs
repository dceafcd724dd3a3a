//! Pointer Input Handling
//!
//! Normalizes heterogeneous pointer sources (mouse vs. single-touch)
//! into one `{x, y}` coordinate stream and tracks the ephemeral drag
//! session between pointer-down and pointer-up.
//!
//! # Architecture
//!
//! ```text
//! Mouse events ──┐
//!                ├─> PointerInput::position() ─> PointerTracker ─> Delta stream
//! Touch events ──┘       (unified point)         (session state)
//! ```
//!
//! Everything here is total: sampling an inactive session or a touch
//! event without touch points degrades to a no-op, never an error.

pub mod pointer;
pub mod tracker;

pub use pointer::{Delta, Point, PointerInput};
pub use tracker::PointerTracker;
