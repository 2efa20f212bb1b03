//! localStorage persistence for the cart collection.

use contracts::Cart;
use web_sys::window;

/// Durable slot holding the JSON-serialized entry collection.
const CART_STORAGE_KEY: &str = "cart";

fn get_local_storage() -> Option<web_sys::Storage> {
    window()?.local_storage().ok()?
}

/// Reads and re-normalizes whatever the slot holds. Missing or corrupt
/// content yields an empty cart, never an error.
pub fn load_cart() -> Cart {
    match get_local_storage().and_then(|storage| storage.get_item(CART_STORAGE_KEY).ok().flatten())
    {
        Some(raw) => Cart::from_persisted(&raw),
        None => Cart::default(),
    }
}

/// Writes the whole collection in canonical form. Storage being
/// unavailable (private browsing, quota) is silently ignored;
/// persistence here is best effort.
pub fn save_cart(cart: &Cart) {
    if let Some(storage) = get_local_storage() {
        let _ = storage.set_item(CART_STORAGE_KEY, &cart.to_json());
    }
}
