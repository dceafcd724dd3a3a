//! # swipedeck
//!
//! Swipe-to-triage engine for product card decks. A user triages a
//! pool of product cards one at a time with directional swipe
//! gestures; each card routes into exactly one of three outcomes
//! (cart, wishlist, rejected) or stays put.
//!
//! # Architecture
//!
//! ```text
//! swipedeck
//!   ├─> Pointer input   (mouse/touch normalization, drag session)
//!   ├─> Classifier      (thresholds + tie-break → discrete decision)
//!   ├─> Sequencer       (Idle/Dragging/Animating, settle timeline)
//!   ├─> Product pool    (four disjoint membership sets, active index)
//!   ├─> Cart store      (tagged-action dispatch + view flag)
//!   └─> Engine          (wiring, reseeding, session statistics)
//! ```
//!
//! # Data Flow
//!
//! **Gesture path:** pointer events → tracker → classifier → sequencer
//! → (settle) → pool
//!
//! **Store path:** render-layer actions → cart store → pool
//!
//! The whole engine is single-threaded and event-driven: pointer
//! samples and settle polls interleave on one logical thread in
//! arrival order. The one correctness-critical ordering rule is that
//! beginning a new gesture drops any still-pending commit before a new
//! one can be scheduled — a stale settle firing against a superseded
//! card would corrupt the active index.

#![warn(missing_docs)]
#![warn(clippy::all)]

/// Product catalog records
pub mod catalog;

/// Engine configuration
pub mod config;

/// Engine wiring and session statistics
pub mod engine;

/// Gesture classification and commit sequencing
pub mod gesture;

/// Pointer input normalization and drag-session tracking
pub mod input;

/// Product pool state machine
pub mod pool;

/// Cart store dispatch layer
pub mod store;

pub use catalog::{Catalog, Product, ProductId};
pub use config::Config;
pub use engine::{CommitEvent, SwipeEngine, TriageStats};
pub use gesture::{CardTransform, Decision, DragPhase, Easing, PendingCommit};
pub use input::{Delta, Point, PointerInput};
pub use pool::{CardState, CommitKind, ProductPool};
pub use store::{CartAction, CartStore};
