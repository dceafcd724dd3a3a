//! Triage Engine
//!
//! Wires the pointer surface, the commit sequencer, and the pool-owning
//! cart store together, and keeps session statistics. This is the unit
//! a render layer talks to: feed it begin/move/end pointer events and a
//! periodic settle poll, read back the active card and its transform.
//!
//! # Event flow
//!
//! ```text
//! pointer_down ─> Sequencer::begin   (drops any pending commit)
//! pointer_move ─> Sequencer::sample  (drag transform / early commit)
//! pointer_up   ─> Sequencer::finish  (snap back / schedule settle)
//! poll         ─> Sequencer::poll    (apply the commit to the pool)
//! dispatch     ─> CartStore          (cart-view actions, reseed on
//!                                     return to the deck)
//! ```

use std::time::Instant;

use tracing::{debug, info};

use crate::catalog::{Catalog, Product, ProductId};
use crate::config::Config;
use crate::gesture::{CardTransform, Decision, DragPhase, PendingCommit, Sequencer};
use crate::input::PointerInput;
use crate::pool::{CommitKind, ProductPool};
use crate::store::{CartAction, CartStore};

/// A commit that settled and was applied to the pool.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CommitEvent {
    /// Card that was committed
    pub id: ProductId,
    /// Outcome it was routed to
    pub outcome: CommitKind,
}

/// Session counters. Observability only; no decision logic reads them.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TriageStats {
    /// Gestures that actually started a drag
    pub gestures_begun: u64,
    /// Releases that snapped the card back
    pub snap_backs: u64,
    /// Settled commits into the cart
    pub commits_to_cart: u64,
    /// Settled commits onto the wishlist
    pub commits_to_wishlist: u64,
    /// Settled rejections
    pub commits_rejected: u64,
    /// Pending commits dropped by a superseding gesture
    pub cancelled_commits: u64,
}

impl TriageStats {
    fn record_commit(&mut self, outcome: CommitKind) {
        match outcome {
            CommitKind::Cart => self.commits_to_cart += 1,
            CommitKind::Wishlist => self.commits_to_wishlist += 1,
            CommitKind::Rejected => self.commits_rejected += 1,
        }
    }
}

/// The gesture-to-decision engine over one catalog.
pub struct SwipeEngine {
    catalog: Catalog,
    store: CartStore,
    sequencer: Sequencer,
    stats: TriageStats,
}

impl SwipeEngine {
    /// Create an engine seeded from the catalog.
    pub fn new(catalog: Catalog, config: &Config) -> Self {
        let mut engine = Self {
            catalog,
            store: CartStore::new(),
            sequencer: Sequencer::new(&config.gesture, config.viewport),
            stats: TriageStats::default(),
        };
        engine.reseed();
        info!(products = engine.catalog.len(), "engine ready");
        engine
    }

    /// Replace the catalog, tearing the pool down and rebuilding it.
    pub fn load_catalog(&mut self, catalog: Catalog) {
        self.catalog = catalog;
        *self.store.pool_mut() = ProductPool::new();
        self.reseed();
        info!(products = self.catalog.len(), "catalog reloaded");
    }

    /// Pointer-down from either input source.
    ///
    /// Returns `true` when a drag started; `false` for an exhausted
    /// deck or a touch event without contact points.
    pub fn pointer_down(&mut self, input: &PointerInput) -> bool {
        let Some(point) = input.position() else {
            return false;
        };
        let superseding = self.sequencer.pending().is_some();
        let started = self.sequencer.begin(self.store.pool().active_id(), point);
        if started {
            self.stats.gestures_begun += 1;
            if superseding {
                self.stats.cancelled_commits += 1;
            }
        }
        started
    }

    /// Pointer-move sample.
    pub fn pointer_move(&mut self, input: &PointerInput, now: Instant) -> Decision {
        let Some(point) = input.position() else {
            return Decision::None;
        };
        self.sequencer
            .sample(self.store.pool().active_id(), point, now)
    }

    /// Pointer released.
    pub fn pointer_up(&mut self, now: Instant) -> Decision {
        let decision = self.sequencer.finish(self.store.pool().active_id(), now);
        if decision == Decision::SnapBack {
            self.stats.snap_backs += 1;
        }
        decision
    }

    /// Drive the settle step; applies the fired commit to the pool.
    pub fn poll(&mut self, now: Instant) -> Option<CommitEvent> {
        let PendingCommit { target, outcome, .. } = self.sequencer.poll(now)?;
        let applied = self.store.pool_mut().commit(target, outcome);
        if applied {
            self.stats.record_commit(outcome);
        } else {
            // Precondition gone (e.g. the card left the pool through a
            // store action mid-animation); the settle is still a no-op.
            debug!(%target, ?outcome, "settled commit found nothing to move");
        }
        Some(CommitEvent { id: target, outcome })
    }

    /// Deadline of the outstanding commit, for drivers that sleep
    /// between events.
    pub fn next_deadline(&self) -> Option<Instant> {
        self.sequencer.next_deadline()
    }

    /// Dispatch a cart-store action. Returning from the cart view to
    /// the deck recomputes availability, like the original deck does
    /// whenever the view flips.
    pub fn dispatch(&mut self, action: CartAction) {
        self.store.dispatch(action);
        if action == CartAction::ToggleCartView {
            self.reseed();
        }
    }

    /// The product under the finger, if the deck has one.
    pub fn active_card(&self) -> Option<&Product> {
        self.store
            .pool()
            .active_id()
            .and_then(|id| self.catalog.get(id))
    }

    /// Transform the render layer should apply to the top card.
    pub fn card_transform(&self) -> &CardTransform {
        self.sequencer.transform()
    }

    /// Sequencer phase.
    pub fn phase(&self) -> DragPhase {
        self.sequencer.phase()
    }

    /// Read access to the store (pool views, cart-view flag).
    pub fn store(&self) -> &CartStore {
        &self.store
    }

    /// The loaded catalog.
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Session statistics.
    pub fn stats(&self) -> &TriageStats {
        &self.stats
    }

    /// True when every card has been triaged.
    pub fn is_exhausted(&self) -> bool {
        self.store.pool().active_index().is_none()
    }

    fn reseed(&mut self) {
        let ids: Vec<ProductId> = self.catalog.ids().collect();
        self.store.pool_mut().reseed(ids);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::Point;
    use std::time::Duration;

    fn catalog(n: u64) -> Catalog {
        Catalog::new((1..=n).map(Product::from_id).collect())
    }

    fn engine(n: u64) -> SwipeEngine {
        SwipeEngine::new(catalog(n), &Config::default())
    }

    fn mouse(x: f64, y: f64) -> PointerInput {
        PointerInput::Mouse { x, y }
    }

    #[test]
    fn test_full_swipe_commits_after_settle() {
        let mut engine = engine(3);
        let t0 = Instant::now();

        assert!(engine.pointer_down(&mouse(0.0, 0.0)));
        engine.pointer_move(&mouse(220.0, 0.0), t0);
        assert_eq!(engine.phase(), DragPhase::Animating);

        // Nothing mutates until the settle deadline
        assert!(engine.store().pool().wishlist().is_empty());
        assert!(engine.poll(t0).is_none());

        let event = engine.poll(t0 + Duration::from_millis(300)).unwrap();
        assert_eq!(event, CommitEvent { id: ProductId(3), outcome: CommitKind::Wishlist });
        assert!(engine.store().pool().wishlist().contains(&ProductId(3)));
        assert_eq!(engine.store().pool().active_id(), Some(ProductId(2)));
    }

    #[test]
    fn test_empty_touch_event_is_a_no_op() {
        let mut engine = engine(2);
        assert!(!engine.pointer_down(&PointerInput::Touch { points: vec![] }));
        assert_eq!(engine.phase(), DragPhase::Idle);
    }

    #[test]
    fn test_touch_gesture_uses_first_contact() {
        let mut engine = engine(2);
        let t0 = Instant::now();

        let down = PointerInput::Touch { points: vec![Point::new(0.0, 0.0)] };
        assert!(engine.pointer_down(&down));

        let slide = PointerInput::Touch {
            points: vec![Point::new(-250.0, 0.0), Point::new(900.0, 900.0)],
        };
        assert_eq!(engine.pointer_move(&slide, t0), Decision::CommitLeft);
    }

    #[test]
    fn test_exhausted_deck_ignores_gestures() {
        let mut engine = engine(0);
        assert!(engine.is_exhausted());
        assert!(!engine.pointer_down(&mouse(0.0, 0.0)));
        assert_eq!(engine.stats().gestures_begun, 0);
    }

    #[test]
    fn test_superseding_gesture_yields_one_mutation() {
        let mut engine = engine(3);
        let t0 = Instant::now();

        engine.pointer_down(&mouse(0.0, 0.0));
        engine.pointer_move(&mouse(0.0, -310.0), t0);
        assert!(engine.next_deadline().is_some());

        // New gesture before the settle: cart commit must never land
        engine.pointer_down(&mouse(0.0, 0.0));
        engine.pointer_move(&mouse(-220.0, 0.0), t0 + Duration::from_millis(100));

        let event = engine.poll(t0 + Duration::from_secs(1)).unwrap();
        assert_eq!(event.outcome, CommitKind::Rejected);
        assert!(engine.store().pool().cart().is_empty());
        assert_eq!(engine.store().pool().rejected().len(), 1);
        assert_eq!(engine.stats().cancelled_commits, 1);
        assert_eq!(engine.stats().commits_rejected, 1);
        assert_eq!(engine.stats().commits_to_cart, 0);
    }

    #[test]
    fn test_snap_back_leaves_pool_untouched() {
        let mut engine = engine(3);
        let t0 = Instant::now();

        engine.pointer_down(&mouse(0.0, 0.0));
        engine.pointer_move(&mouse(50.0, 50.0), t0);
        assert_eq!(engine.pointer_up(t0), Decision::SnapBack);

        assert_eq!(engine.store().pool().active_id(), Some(ProductId(3)));
        assert_eq!(engine.store().pool().available().len(), 3);
        assert_eq!(engine.stats().snap_backs, 1);
    }

    #[test]
    fn test_view_toggle_reseeds_deck() {
        let mut engine = engine(3);
        let t0 = Instant::now();

        // Wishlist the top card via gesture
        engine.pointer_down(&mouse(0.0, 0.0));
        engine.pointer_move(&mouse(220.0, 0.0), t0);
        engine.poll(t0 + Duration::from_millis(300));

        // In the cart view, drop it from the wishlist; coming back to
        // the deck makes it available again.
        engine.dispatch(CartAction::ToggleCartView);
        engine.dispatch(CartAction::RemoveFromWishlist(ProductId(3)));
        engine.dispatch(CartAction::ToggleCartView);

        assert_eq!(engine.store().pool().available().len(), 3);
        assert_eq!(engine.store().pool().active_id(), Some(ProductId(3)));
    }

    #[test]
    fn test_catalog_reload_rebuilds_pool() {
        let mut engine = engine(2);
        let t0 = Instant::now();

        engine.pointer_down(&mouse(0.0, 0.0));
        engine.pointer_move(&mouse(0.0, -310.0), t0);
        engine.poll(t0 + Duration::from_millis(300));
        assert_eq!(engine.store().pool().cart().len(), 1);

        engine.load_catalog(catalog(5));
        assert!(engine.store().pool().cart().is_empty());
        assert_eq!(engine.store().pool().available().len(), 5);
        assert_eq!(engine.store().pool().active_id(), Some(ProductId(5)));
    }

    #[test]
    fn test_active_card_resolves_product() {
        let engine = engine(2);
        assert_eq!(engine.active_card().unwrap().id, ProductId(2));
    }
}
