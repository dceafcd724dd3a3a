//! Cart Store
//!
//! Thin dispatch layer over [`ProductPool`] for the non-core UI: a
//! closed action enumeration mapped 1:1 onto pool transitions, plus the
//! cart-view flag that lives outside the pool proper.

use tracing::debug;

use crate::catalog::ProductId;
use crate::pool::ProductPool;

/// Actions the render layer can dispatch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CartAction {
    /// Put a product in the cart (also promotes from the wishlist)
    AddProduct(ProductId),
    /// Reject a product
    AddToRejected(ProductId),
    /// Take a product out of the cart
    RemoveProduct(ProductId),
    /// Empty the cart and the rejected set
    ClearCart,
    /// Put a product on the wishlist
    AddToWishlist(ProductId),
    /// Take a product off the wishlist
    RemoveFromWishlist(ProductId),
    /// Promote a wishlisted product into the cart
    MoveFromWishlistToCart(ProductId),
    /// Flip between the deck and the cart view
    ToggleCartView,
}

/// Pool owner plus view-mode flag; every mutation from outside the
/// gesture path goes through [`CartStore::dispatch`].
#[derive(Debug, Clone, Default)]
pub struct CartStore {
    pool: ProductPool,
    show_cart: bool,
}

impl CartStore {
    /// Create a store around an empty pool.
    pub fn new() -> Self {
        Self::default()
    }

    /// Read access to the pool.
    pub fn pool(&self) -> &ProductPool {
        &self.pool
    }

    /// Mutable access to the pool, for the sequencer's settle step and
    /// reseeding.
    pub fn pool_mut(&mut self) -> &mut ProductPool {
        &mut self.pool
    }

    /// Whether the cart view is showing.
    pub fn show_cart(&self) -> bool {
        self.show_cart
    }

    /// Apply one action. Pool preconditions degrade to no-ops exactly
    /// as the pool transitions do.
    pub fn dispatch(&mut self, action: CartAction) {
        debug!(?action, "dispatch");
        match action {
            CartAction::AddProduct(id) => {
                self.pool.commit_to_cart(id);
            }
            CartAction::AddToRejected(id) => {
                self.pool.commit_to_rejected(id);
            }
            CartAction::RemoveProduct(id) => {
                self.pool.remove_from_cart(id);
            }
            CartAction::ClearCart => self.pool.clear(),
            CartAction::AddToWishlist(id) => {
                self.pool.commit_to_wishlist(id);
            }
            CartAction::RemoveFromWishlist(id) => {
                self.pool.remove_from_wishlist(id);
            }
            CartAction::MoveFromWishlistToCart(id) => {
                self.pool.commit_to_cart(id);
            }
            CartAction::ToggleCartView => {
                self.show_cart = !self.show_cart;
            }
        }
    }

    /// `AddProduct` convenience.
    pub fn add_product(&mut self, id: ProductId) {
        self.dispatch(CartAction::AddProduct(id));
    }

    /// `AddToRejected` convenience.
    pub fn add_to_rejected(&mut self, id: ProductId) {
        self.dispatch(CartAction::AddToRejected(id));
    }

    /// `RemoveProduct` convenience.
    pub fn remove_product(&mut self, id: ProductId) {
        self.dispatch(CartAction::RemoveProduct(id));
    }

    /// `ClearCart` convenience.
    pub fn clear_cart(&mut self) {
        self.dispatch(CartAction::ClearCart);
    }

    /// `AddToWishlist` convenience.
    pub fn add_to_wishlist(&mut self, id: ProductId) {
        self.dispatch(CartAction::AddToWishlist(id));
    }

    /// `RemoveFromWishlist` convenience.
    pub fn remove_from_wishlist(&mut self, id: ProductId) {
        self.dispatch(CartAction::RemoveFromWishlist(id));
    }

    /// `MoveFromWishlistToCart` convenience.
    pub fn move_from_wishlist_to_cart(&mut self, id: ProductId) {
        self.dispatch(CartAction::MoveFromWishlistToCart(id));
    }

    /// `ToggleCartView` convenience.
    pub fn toggle_cart_view(&mut self) {
        self.dispatch(CartAction::ToggleCartView);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seeded_store(n: u64) -> CartStore {
        let mut store = CartStore::new();
        store.pool_mut().reseed((1..=n).map(ProductId));
        store
    }

    #[test]
    fn test_actions_map_to_pool_transitions() {
        let mut store = seeded_store(3);

        store.add_to_wishlist(ProductId(3));
        assert!(store.pool().wishlist().contains(&ProductId(3)));

        store.move_from_wishlist_to_cart(ProductId(3));
        assert!(store.pool().cart().contains(&ProductId(3)));
        assert!(store.pool().wishlist().is_empty());

        store.remove_product(ProductId(3));
        assert!(store.pool().cart().is_empty());
    }

    #[test]
    fn test_duplicate_add_is_a_no_op() {
        let mut store = seeded_store(2);
        store.add_product(ProductId(2));
        store.add_product(ProductId(2));
        assert_eq!(store.pool().cart().len(), 1);
    }

    #[test]
    fn test_toggle_cart_view_flips_flag() {
        let mut store = seeded_store(1);
        assert!(!store.show_cart());
        store.toggle_cart_view();
        assert!(store.show_cart());
        store.toggle_cart_view();
        assert!(!store.show_cart());
    }

    #[test]
    fn test_clear_cart_spares_wishlist() {
        let mut store = seeded_store(3);
        store.add_product(ProductId(3));
        store.add_to_wishlist(ProductId(2));
        store.add_to_rejected(ProductId(1));

        store.clear_cart();
        assert!(store.pool().cart().is_empty());
        assert!(store.pool().rejected().is_empty());
        assert!(store.pool().wishlist().contains(&ProductId(2)));
    }
}
