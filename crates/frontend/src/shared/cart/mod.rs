//! App-wide cart state.
//!
//! A context wrapping the persisted selection. Every mutation goes through
//! here so the full collection is re-persisted synchronously before the
//! triggering event handler returns.

pub mod storage;

use contracts::{Cart, CartEntry, CartError, TripUpdate};
use leptos::prelude::*;

/// Cart context type.
#[derive(Clone, Copy)]
pub struct CartContext {
    /// Current collection signal.
    pub cart: RwSignal<Cart>,
}

impl CartContext {
    /// Loads the persisted collection and immediately re-persists the
    /// normalized form, so the slot converges to the canonical schema no
    /// matter which version wrote it.
    fn load() -> Self {
        let cart = storage::load_cart();
        storage::save_cart(&cart);
        Self {
            cart: RwSignal::new(cart),
        }
    }

    /// Number of entries; reactive when read inside a tracking scope.
    pub fn count(&self) -> usize {
        self.cart.with(|c| c.len())
    }

    pub fn entries(&self) -> Vec<CartEntry> {
        self.cart.with(|c| c.entries().to_vec())
    }

    /// Adds an entry unless its id is already present. The duplicate case
    /// leaves the collection and the persisted slot untouched.
    pub fn add(&self, entry: CartEntry) -> Result<(), CartError> {
        let mut result = Ok(());
        self.cart.update(|cart| {
            result = cart.add(entry);
            if result.is_ok() {
                storage::save_cart(cart);
            }
        });
        result
    }

    pub fn remove(&self, id: &str) -> bool {
        let mut removed = false;
        self.cart.update(|cart| {
            removed = cart.remove(id);
            if removed {
                storage::save_cart(cart);
            }
        });
        removed
    }

    pub fn update_trip(&self, id: &str, update: TripUpdate) {
        self.cart.update(|cart| {
            if cart.update_trip(id, update) {
                storage::save_cart(cart);
            }
        });
    }

    pub fn update_guests(&self, id: &str, guests: u32) {
        self.cart.update(|cart| {
            if cart.update_guests(id, guests) {
                storage::save_cart(cart);
            }
        });
    }
}

/// Provides the cart context to children components.
#[component]
pub fn CartProvider(children: Children) -> impl IntoView {
    provide_context(CartContext::load());
    children()
}

/// Hook to use the cart context.
pub fn use_cart() -> CartContext {
    use_context::<CartContext>().expect("CartContext not found. Wrap your app with CartProvider.")
}
