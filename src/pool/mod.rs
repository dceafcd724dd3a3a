//! Product Pool State Machine
//!
//! Four mutually exclusive membership states per product id:
//! `Available`, `Cart`, `Wishlisted`, `Rejected`. The available list
//! keeps catalog order and carries the active index — the "top" card
//! currently eligible for gestures. Untracked ids are outside the pool
//! and ignored by every operation.
//!
//! All transitions are idempotent: re-applying a transition whose
//! precondition no longer holds is a no-op, never an error. Each
//! transition reports whether it changed state.
//!
//! # Transition table
//!
//! | Transition | Precondition | Effect |
//! |---|---|---|
//! | `commit_to_cart` | Available or Wishlisted | → Cart (atomic move) |
//! | `commit_to_wishlist` | Available | → Wishlisted |
//! | `commit_to_rejected` | Available | → Rejected |
//! | `remove_from_cart` | Cart | dropped from the pool entirely |
//! | `remove_from_wishlist` | Wishlisted | → untracked |
//! | `clear` | — | empties Cart and Rejected, Wishlisted untouched |

use std::collections::HashSet;

use tracing::debug;

use crate::catalog::ProductId;

/// Membership state of a tracked id.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CardState {
    /// In the ordered available list, eligible for gestures
    Available,
    /// Committed to the cart
    Cart,
    /// Committed to the wishlist
    Wishlisted,
    /// Rejected
    Rejected,
}

/// Outcome of a committed swipe.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommitKind {
    /// Move the card to the cart
    Cart,
    /// Move the card to the wishlist
    Wishlist,
    /// Reject the card
    Rejected,
}

/// The pool of product ids partitioned into the four membership states.
#[derive(Debug, Clone, Default)]
pub struct ProductPool {
    /// Available ids in catalog order
    available: Vec<ProductId>,

    /// Index of the top card; `None` when the deck is exhausted
    active: Option<usize>,

    cart: HashSet<ProductId>,
    wishlist: HashSet<ProductId>,
    rejected: HashSet<ProductId>,
}

impl ProductPool {
    /// Create an empty pool.
    pub fn new() -> Self {
        Self::default()
    }

    /// Recompute `available` from catalog order minus the three
    /// committed sets, and reset the active index to the new tail.
    ///
    /// This is the only place cross-set consistency is recomputed from
    /// scratch; it runs on catalog (re)load and when the user returns
    /// from the cart view.
    pub fn reseed<I>(&mut self, catalog_ids: I)
    where
        I: IntoIterator<Item = ProductId>,
    {
        self.available = catalog_ids
            .into_iter()
            .filter(|id| {
                !self.cart.contains(id)
                    && !self.wishlist.contains(id)
                    && !self.rejected.contains(id)
            })
            .collect();
        self.active = self.available.len().checked_sub(1);
        debug!(
            available = self.available.len(),
            active = ?self.active,
            "pool reseeded"
        );
    }

    /// Index of the top card, valid iff `Some(i)` with `i < |available|`.
    pub fn active_index(&self) -> Option<usize> {
        self.active
    }

    /// Id of the top card, if any.
    pub fn active_id(&self) -> Option<ProductId> {
        self.active.and_then(|i| self.available.get(i).copied())
    }

    /// Available ids in catalog order.
    pub fn available(&self) -> &[ProductId] {
        &self.available
    }

    /// Ids currently in the cart.
    pub fn cart(&self) -> &HashSet<ProductId> {
        &self.cart
    }

    /// Ids currently wishlisted.
    pub fn wishlist(&self) -> &HashSet<ProductId> {
        &self.wishlist
    }

    /// Ids currently rejected.
    pub fn rejected(&self) -> &HashSet<ProductId> {
        &self.rejected
    }

    /// Membership state of an id; `None` for untracked ids.
    pub fn state_of(&self, id: ProductId) -> Option<CardState> {
        if self.cart.contains(&id) {
            Some(CardState::Cart)
        } else if self.wishlist.contains(&id) {
            Some(CardState::Wishlisted)
        } else if self.rejected.contains(&id) {
            Some(CardState::Rejected)
        } else if self.available.contains(&id) {
            Some(CardState::Available)
        } else {
            None
        }
    }

    /// Apply a commit outcome to an id.
    pub fn commit(&mut self, id: ProductId, kind: CommitKind) -> bool {
        match kind {
            CommitKind::Cart => self.commit_to_cart(id),
            CommitKind::Wishlist => self.commit_to_wishlist(id),
            CommitKind::Rejected => self.commit_to_rejected(id),
        }
    }

    /// Move an available or wishlisted id into the cart.
    ///
    /// Wishlist promotion removes from the wishlist first — the move is
    /// atomic, an id is never in both sets.
    pub fn commit_to_cart(&mut self, id: ProductId) -> bool {
        if self.cart.contains(&id) {
            return false;
        }
        if self.take_from_available(id) || self.wishlist.remove(&id) {
            self.cart.insert(id);
            debug!(%id, "committed to cart");
            true
        } else {
            false
        }
    }

    /// Move an available id onto the wishlist.
    pub fn commit_to_wishlist(&mut self, id: ProductId) -> bool {
        if self.wishlist.contains(&id) {
            return false;
        }
        if self.take_from_available(id) {
            self.wishlist.insert(id);
            debug!(%id, "committed to wishlist");
            true
        } else {
            false
        }
    }

    /// Reject an available id.
    pub fn commit_to_rejected(&mut self, id: ProductId) -> bool {
        if self.rejected.contains(&id) {
            return false;
        }
        if self.take_from_available(id) {
            self.rejected.insert(id);
            debug!(%id, "rejected");
            true
        } else {
            false
        }
    }

    /// Remove an id from the cart.
    ///
    /// The id does not return to `available` or any other set; it
    /// leaves the pool entirely until the next reseed.
    pub fn remove_from_cart(&mut self, id: ProductId) -> bool {
        let removed = self.cart.remove(&id);
        if removed {
            debug!(%id, "removed from cart");
        }
        removed
    }

    /// Remove an id from the wishlist.
    pub fn remove_from_wishlist(&mut self, id: ProductId) -> bool {
        let removed = self.wishlist.remove(&id);
        if removed {
            debug!(%id, "removed from wishlist");
        }
        removed
    }

    /// Empty the cart and the rejected set. The wishlist is untouched.
    pub fn clear(&mut self) {
        self.cart.clear();
        self.rejected.clear();
        debug!("cart and rejected cleared");
    }

    /// Remove an id from the available list, keeping the active index
    /// pointed at the same card. Removing at or below the active
    /// position shifts the index down by one; it becomes `None` when it
    /// would underflow. For the gesture path the removal position is
    /// always the active index itself, so this is the plain
    /// decrement-by-one of a commit.
    fn take_from_available(&mut self, id: ProductId) -> bool {
        let Some(pos) = self.available.iter().position(|&p| p == id) else {
            return false;
        };
        self.available.remove(pos);
        self.active = match self.active {
            Some(a) if pos <= a => a.checked_sub(1),
            other => other,
        };
        true
    }
}
